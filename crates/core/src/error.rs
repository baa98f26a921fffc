//! Error types shared across crates

use thiserror::Error;

use crate::traits::{ToolError, ToolFactoryError};

#[derive(Error, Debug)]
pub enum Error {
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    #[error("Tool factory error: {0}")]
    Factory(#[from] ToolFactoryError),

    #[error("Unknown specialist: {0}")]
    UnknownSpecialist(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
