//! Tool protocol types
//!
//! MCP-style tool interface used at the boundary between the orchestrating
//! model and the lookup tools. A tool publishes a JSON input schema and turns
//! a JSON argument object into a single piece of text.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Default timeout for tool execution (seconds)
pub const DEFAULT_TOOL_TIMEOUT_SECS: u64 = 30;

/// Tool schema as published to the orchestrator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSchema {
    pub name: String,
    pub description: String,
    pub input_schema: InputSchema,
}

impl ToolSchema {
    /// Names of the required input properties
    pub fn required(&self) -> &[String] {
        &self.input_schema.required
    }
}

/// JSON Schema for tool input (object schemas only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputSchema {
    #[serde(rename = "type")]
    pub schema_type: String,
    #[serde(default)]
    pub properties: Map<String, Value>,
    #[serde(default)]
    pub required: Vec<String>,
}

impl InputSchema {
    /// Empty object schema
    pub fn object() -> Self {
        Self {
            schema_type: "object".to_string(),
            properties: Map::new(),
            required: Vec::new(),
        }
    }

    /// Add a property, optionally marking it required
    pub fn property(mut self, name: &str, schema: PropertySchema, required: bool) -> Self {
        self.properties.insert(name.to_string(), schema.into_value());
        if required {
            self.required.push(name.to_string());
        }
        self
    }

    /// Check whether a property is declared
    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }
}

/// Schema of a single input property
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySchema {
    pub prop_type: String,
    pub description: String,
    pub enum_values: Option<Vec<String>>,
    pub default: Option<Value>,
}

impl PropertySchema {
    fn new(prop_type: &str, description: &str) -> Self {
        Self {
            prop_type: prop_type.to_string(),
            description: description.to_string(),
            enum_values: None,
            default: None,
        }
    }

    pub fn string(description: &str) -> Self {
        Self::new("string", description)
    }

    pub fn number(description: &str) -> Self {
        Self::new("number", description)
    }

    pub fn integer(description: &str) -> Self {
        Self::new("integer", description)
    }

    pub fn boolean(description: &str) -> Self {
        Self::new("boolean", description)
    }

    pub fn enum_type(description: &str, values: Vec<String>) -> Self {
        Self {
            enum_values: Some(values),
            ..Self::new("string", description)
        }
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    fn into_value(self) -> Value {
        let mut obj = json!({
            "type": self.prop_type,
            "description": self.description,
        });
        if let Some(values) = self.enum_values {
            obj["enum"] = json!(values);
        }
        if let Some(default) = self.default {
            obj["default"] = default;
        }
        obj
    }
}

/// Content block returned by a tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Text { text: String },
}

/// Tool execution output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolOutput {
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub is_error: bool,
}

impl ToolOutput {
    /// Successful text output
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock::Text { text: text.into() }],
            is_error: false,
        }
    }

    /// Text output flagged as an error
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock::Text { text: text.into() }],
            is_error: true,
        }
    }

    /// All text blocks joined with newlines
    pub fn as_text(&self) -> String {
        self.content
            .iter()
            .map(|block| match block {
                ContentBlock::Text { text } => text.as_str(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// JSON-RPC style error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    InvalidParams,
    MethodNotFound,
    InternalError,
    Timeout,
}

impl ErrorCode {
    /// Numeric JSON-RPC code
    pub fn code(&self) -> i32 {
        match self {
            Self::InvalidParams => -32602,
            Self::MethodNotFound => -32601,
            Self::InternalError => -32603,
            Self::Timeout => -32001,
        }
    }
}

/// Tool execution error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct ToolError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ToolError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidParams, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MethodNotFound, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    pub fn timeout(tool: &str, secs: u64) -> Self {
        Self::new(
            ErrorCode::Timeout,
            format!("Tool '{}' timed out after {}s", tool, secs),
        )
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}

/// Callable tool
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name used for dispatch
    fn name(&self) -> &str;

    /// Short human-readable description
    fn description(&self) -> &str;

    /// Input schema published to the orchestrator
    fn schema(&self) -> ToolSchema;

    /// Execute with a JSON argument object
    async fn execute(&self, input: Value) -> Result<ToolOutput, ToolError>;

    /// Check that the arguments are an object carrying every required property
    fn validate(&self, input: &Value) -> Result<(), ToolError> {
        let obj = input
            .as_object()
            .ok_or_else(|| ToolError::invalid_params("arguments must be a JSON object"))?;

        let schema = self.schema();
        let missing: Vec<&str> = schema
            .required()
            .iter()
            .filter(|name| obj.get(name.as_str()).map_or(true, Value::is_null))
            .map(String::as_str)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ToolError::invalid_params(format!(
                "missing required arguments: {}",
                missing.join(", ")
            ))
            .with_data(json!({ "missing": missing })))
        }
    }

    /// Per-tool execution timeout
    fn timeout_secs(&self) -> u64 {
        DEFAULT_TOOL_TIMEOUT_SECS
    }
}
