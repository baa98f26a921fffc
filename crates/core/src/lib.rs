//! Core traits and types for the retiree resources tools
//!
//! This crate provides foundational types used across all other crates:
//! - Tool protocol types (schema, output, errors)
//! - Tool factory trait for per-specialist tool sets
//! - Topic source trait for keyed lookup data
//! - Specialist routing targets
//! - Error types

pub mod error;
pub mod specialist;
pub mod traits;

pub use error::{Error, Result};
pub use specialist::Specialist;
pub use traits::{
    ContentBlock, ErrorCode, InputSchema, PropertySchema, Tool, ToolError, ToolFactory,
    ToolFactoryError, ToolMetadata, ToolOutput, ToolSchema, TopicSource,
};
