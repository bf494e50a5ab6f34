use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::schema::InputSchema;

/// Generic failure: undecodable line, bad arguments, or tool execution error.
pub const TOOL_EXECUTION_FAILED: i32 = -1;
/// Unknown tool name or unsupported method.
pub const METHOD_NOT_FOUND: i32 = -32601;

/// `id` used when the incoming line could not be decoded into a request.
pub const PARSE_ERROR_ID: &str = "error";

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub name: String,
    pub description: String,
    pub input_schema: InputSchema,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToolCall {
    pub name: String,
    #[serde(default)]
    pub arguments: Value,
}

fn default_request_id() -> Value {
    Value::String(String::new())
}

#[derive(Debug, Serialize, Deserialize)]
pub struct McpRequest {
    #[serde(default = "default_request_id")]
    pub id: Value,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct McpResponse {
    pub jsonrpc: String,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<McpError>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct McpError {
    pub code: i32,
    pub message: String,
}

impl McpResponse {
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(id: Value, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(McpError {
                code,
                message: message.into(),
            }),
        }
    }

    /// Response for input that never became a request, or whose handler failed.
    pub fn sentinel(message: impl Into<String>) -> Self {
        Self::failure(
            Value::String(PARSE_ERROR_ID.to_string()),
            TOOL_EXECUTION_FAILED,
            message,
        )
    }
}
