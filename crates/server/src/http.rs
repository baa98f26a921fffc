//! HTTP Endpoints
//!
//! REST API for the retiree resources tools.

use std::time::{Duration, Instant};

use axum::{
    extract::{Json, Path, State},
    http::{HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use retiree_resources_core::{ContentBlock, Specialist, ToolOutput};
use retiree_resources_tools::{specialist_for_tool, tools_for_specialist, ToolExecutor};

use crate::metrics::{metrics_handler, record_tool_call};
use crate::state::AppState;
use crate::ServerError;

const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let config = state.config.read();
    let cors_layer = build_cors_layer(&config.server.cors_origins, config.server.cors_enabled);
    let request_timeout = Duration::from_secs(config.server.timeout_seconds);
    drop(config);

    Router::new()
        // Tool endpoints
        .route("/api/tools", get(list_tools))
        .route("/api/tools/:name", post(call_tool))
        .route("/api/specialists", get(list_specialists))
        // Health check
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        // Prometheus metrics
        .route("/metrics", get(metrics_handler))
        // Admin endpoints
        .route("/admin/reload-config", post(reload_config))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(CompressionLayer::new())
        .layer(cors_layer)
        .with_state(state)
}

/// Build CORS layer from configured origins
///
/// - If cors_enabled is false, returns permissive layer (for dev)
/// - If cors_origins is empty or all invalid, allows localhost:3000 only
fn build_cors_layer(origins: &[String], enabled: bool) -> CorsLayer {
    if !enabled {
        tracing::warn!("CORS is disabled - allowing all origins (NOT FOR PRODUCTION)");
        return CorsLayer::permissive();
    }

    let parsed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    if parsed_origins.is_empty() {
        tracing::info!("No usable CORS origins configured, defaulting to {}", DEFAULT_CORS_ORIGIN);
        return CorsLayer::new()
            .allow_origin(HeaderValue::from_static(DEFAULT_CORS_ORIGIN))
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any);
    }

    tracing::info!("CORS configured with {} origins", parsed_origins.len());
    CorsLayer::new()
        .allow_origin(parsed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

/// List tools with their owning specialist and input schema
async fn list_tools(State(state): State<AppState>) -> Json<Value> {
    let tools: Vec<Value> = state
        .tools()
        .list_tools()
        .into_iter()
        .map(|t| {
            json!({
                "name": t.name,
                "description": t.description,
                "specialist": specialist_for_tool(&t.name),
                "input_schema": t.input_schema,
            })
        })
        .collect();

    Json(json!({
        "count": tools.len(),
        "tools": tools,
    }))
}

/// Tool call request
#[derive(Debug, Deserialize)]
struct ToolCallRequest {
    #[serde(default = "empty_arguments")]
    arguments: Value,
}

fn empty_arguments() -> Value {
    json!({})
}

fn output_envelope(output: &ToolOutput) -> Value {
    let content: Vec<Value> = output
        .content
        .iter()
        .map(|block| match block {
            ContentBlock::Text { text } => json!({ "type": "text", "text": text }),
        })
        .collect();

    json!({
        "content": content,
        "is_error": output.is_error,
    })
}

/// Call tool
///
/// Lookup misses are successful calls. Protocol errors keep the same envelope
/// with `is_error: true` and a matching status code.
async fn call_tool(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(request): Json<ToolCallRequest>,
) -> (StatusCode, Json<Value>) {
    let started = Instant::now();
    let registry = state.tools();

    match registry.execute(&name, request.arguments).await {
        Ok(output) => {
            record_tool_call(&name, "ok", started.elapsed());
            tracing::debug!(tool = %name, "Tool call succeeded");
            (StatusCode::OK, Json(output_envelope(&output)))
        }
        Err(e) => {
            record_tool_call(&name, "error", started.elapsed());
            tracing::warn!(tool = %name, code = ?e.code, error = %e, "Tool call failed");
            let status = StatusCode::from(ServerError::from(e.clone()));
            (status, Json(output_envelope(&ToolOutput::error(e.message))))
        }
    }
}

/// List specialists and the tools each one owns
async fn list_specialists(State(state): State<AppState>) -> Json<Value> {
    let registry = state.tools();
    let specialists: Vec<Value> = Specialist::ALL
        .iter()
        .map(|specialist| {
            let tools: Vec<&str> = tools_for_specialist(*specialist)
                .into_iter()
                .filter(|name| registry.has(name))
                .collect();
            json!({
                "id": specialist,
                "name": specialist.display_name(),
                "description": specialist.description(),
                "tools": tools,
            })
        })
        .collect();

    Json(json!({ "specialists": specialists }))
}

async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let tool_count = state.tools().len();
    let healthy = tool_count > 0;

    let status_code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(json!({
            "status": if healthy { "healthy" } else { "degraded" },
            "version": env!("CARGO_PKG_VERSION"),
            "checks": {
                "tools": {
                    "status": if healthy { "ok" } else { "empty" },
                    "count": tool_count,
                }
            }
        })),
    )
}

/// Ready once every specialist has at least one tool registered
async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let registry = state.tools();
    let mut checks = serde_json::Map::new();
    let mut ready = true;

    for specialist in Specialist::ALL {
        let count = tools_for_specialist(specialist)
            .into_iter()
            .filter(|name| registry.has(name))
            .count();
        if count == 0 {
            ready = false;
        }
        checks.insert(
            specialist.as_str().to_string(),
            json!({
                "status": if count > 0 { "ok" } else { "no_tools" },
                "tools": count,
            }),
        );
    }

    let status_code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(json!({
            "status": if ready { "ready" } else { "not_ready" },
            "checks": checks,
        })),
    )
}

/// POST /admin/reload-config
///
/// Some settings (port, CORS, request timeout) are only applied at startup.
async fn reload_config(State(state): State<AppState>) -> impl IntoResponse {
    match state.reload_config() {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "success",
                "message": "Configuration reloaded successfully",
                "tool_count": state.tools().len(),
            })),
        ),
        Err(e) => {
            tracing::error!("Config reload failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "status": "error",
                    "message": e.to_string(),
                })),
            )
        }
    }
}
