//! Tool protocol types
//!
//! Re-exported from the core crate so tool modules import from one place.

pub use retiree_resources_core::traits::DEFAULT_TOOL_TIMEOUT_SECS;
pub use retiree_resources_core::{
    ContentBlock, ErrorCode, InputSchema, PropertySchema, Tool, ToolError, ToolOutput, ToolSchema,
};
