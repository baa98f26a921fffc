//! Core traits for the retiree resources tools
//!
//! ```text
//! Tools:
//!   - Tool: MCP-style callable with a JSON input schema
//!   - ToolFactory: builds tools per specialist
//!
//! Data:
//!   - TopicSource: ordered key → text data behind a lookup
//! ```

mod tool;
mod tool_factory;
mod topic_source;

pub use tool::{
    ContentBlock, ErrorCode, InputSchema, PropertySchema, Tool, ToolError, ToolOutput, ToolSchema,
    DEFAULT_TOOL_TIMEOUT_SECS,
};
pub use tool_factory::{ToolFactory, ToolFactoryError, ToolMetadata};
pub use topic_source::TopicSource;
