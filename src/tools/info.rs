//! `get_info` tool body.
use rmcp::model::{CallToolResult, Content};

use crate::lib::service::{get_info, ServiceIdentity};

pub const GET_INFO_TOOL_ID: &str = "get_info";

/// Wrap the server banner as a single text content.
pub fn info_tool_result(identity: &ServiceIdentity) -> CallToolResult {
    CallToolResult::success(vec![Content::text(get_info(identity))])
}
