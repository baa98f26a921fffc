//! Retiree Resources Server
//!
//! Carries tool calls from an external orchestrator to the lookup tools over
//! HTTP, with health, readiness and Prometheus endpoints.

pub mod http;
pub mod metrics;
pub mod state;

pub use http::create_router;
pub use metrics::{init_metrics, metrics_handler, record_tool_call};
pub use state::AppState;

use axum::http::StatusCode;
use retiree_resources_core::{ErrorCode, ToolError};
use thiserror::Error;

/// Server errors
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Tool timed out: {0}")]
    Timeout(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ToolError> for ServerError {
    fn from(err: ToolError) -> Self {
        match err.code {
            ErrorCode::MethodNotFound => ServerError::ToolNotFound(err.message),
            ErrorCode::InvalidParams => ServerError::InvalidRequest(err.message),
            ErrorCode::Timeout => ServerError::Timeout(err.message),
            ErrorCode::InternalError => ServerError::Internal(err.message),
        }
    }
}

impl From<retiree_resources_config::ConfigError> for ServerError {
    fn from(err: retiree_resources_config::ConfigError) -> Self {
        ServerError::Config(err.to_string())
    }
}

impl From<&ServerError> for StatusCode {
    fn from(err: &ServerError) -> Self {
        match err {
            ServerError::ToolNotFound(_) => StatusCode::NOT_FOUND,
            ServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ServerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServerError> for StatusCode {
    fn from(err: ServerError) -> Self {
        StatusCode::from(&err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_error_status_mapping() {
        let cases = [
            (ToolError::not_found("x"), StatusCode::NOT_FOUND),
            (ToolError::invalid_params("x"), StatusCode::BAD_REQUEST),
            (ToolError::timeout("x", 1), StatusCode::GATEWAY_TIMEOUT),
            (ToolError::internal("x"), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (tool_err, status) in cases {
            assert_eq!(StatusCode::from(ServerError::from(tool_err)), status);
        }
    }
}
