use crate::error::MeteoError;
use crate::server::MeteoServer;
use serde_json::{json, Value};

use super::dto::{McpRequest, McpResponse, ToolCall, METHOD_NOT_FOUND, TOOL_EXECUTION_FAILED};

/// Decodes one input line and answers it. Never fails: undecodable input
/// becomes an error envelope with the sentinel id.
pub async fn handle_line(server: &MeteoServer, line: &str) -> McpResponse {
    match serde_json::from_str::<McpRequest>(line) {
        Ok(request) => handle_request(server, request).await,
        Err(e) => {
            tracing::error!("Failed to parse request: {}", e);
            McpResponse::sentinel(e.to_string())
        }
    }
}

pub async fn handle_request(server: &MeteoServer, request: McpRequest) -> McpResponse {
    match request.method.as_str() {
        "initialize" => {
            let info = &server.config().mcp;
            McpResponse::success(
                request.id,
                json!({
                    "protocolVersion": info.protocol_version,
                    "capabilities": { "tools": {} },
                    "serverInfo": { "name": info.name, "version": info.version }
                }),
            )
        }
        "tools/list" => {
            let tools = server.get_tools();
            McpResponse::success(request.id, json!({ "tools": tools }))
        }
        "tools/call" => {
            let tool_call = match parse_tool_call(request.params) {
                Ok(call) => call,
                Err(message) => {
                    return McpResponse::failure(request.id, TOOL_EXECUTION_FAILED, message)
                }
            };
            let name = tool_call.name.clone();
            match server.handle_tool_call(tool_call).await {
                Ok(text) => McpResponse::success(
                    request.id,
                    json!({
                        "content": [
                            { "type": "text", "text": text }
                        ]
                    }),
                ),
                Err(MeteoError::ToolNotFound { name }) => McpResponse::failure(
                    request.id,
                    METHOD_NOT_FOUND,
                    format!("Tool not found: {}", name),
                ),
                Err(e) => {
                    tracing::error!("Error executing tool {}: {}", name, e);
                    McpResponse::failure(
                        request.id,
                        TOOL_EXECUTION_FAILED,
                        format!("Tool execution failed for {}: {}", name, e),
                    )
                }
            }
        }
        _ => McpResponse::failure(
            request.id,
            METHOD_NOT_FOUND,
            format!("Method not supported: {}", request.method),
        ),
    }
}

/// `params` may be absent (no arguments) but `params.name` must be a string.
fn parse_tool_call(params: Option<Value>) -> Result<ToolCall, String> {
    let params = match params {
        None | Some(Value::Null) => return Err("Missing tool name".to_string()),
        Some(Value::Object(map)) => map,
        Some(_) => return Err("Invalid tool call parameters".to_string()),
    };
    let name = match params.get("name") {
        Some(Value::String(name)) => name.clone(),
        Some(_) => return Err("Tool name must be a string".to_string()),
        None => return Err("Missing tool name".to_string()),
    };
    let arguments = params.get("arguments").cloned().unwrap_or(Value::Null);
    Ok(ToolCall { name, arguments })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MeteoConfig;
    use crate::testing::FakeOperations;
    use std::sync::Arc;

    fn server(ops: FakeOperations) -> MeteoServer {
        MeteoServer::new(MeteoConfig::default(), Arc::new(ops)).unwrap()
    }

    #[test]
    fn tool_call_params_require_name() {
        assert_eq!(parse_tool_call(None).unwrap_err(), "Missing tool name");
        assert_eq!(
            parse_tool_call(Some(json!({ "arguments": {} }))).unwrap_err(),
            "Missing tool name"
        );
        assert!(parse_tool_call(Some(json!({ "name": 5 }))).is_err());
        let call = parse_tool_call(Some(json!({ "name": "get_uv_index_data" }))).unwrap();
        assert!(call.arguments.is_null());
    }

    #[tokio::test]
    async fn undecodable_line_uses_sentinel_id() {
        let server = server(FakeOperations::default());
        let resp = handle_line(&server, "{not json").await;
        assert_eq!(resp.id, json!("error"));
        assert_eq!(resp.error.unwrap().code, TOOL_EXECUTION_FAILED);
        assert!(resp.result.is_none());
    }

    #[tokio::test]
    async fn failing_operation_names_tool() {
        let server = server(FakeOperations::failing());
        let resp = handle_line(
            &server,
            r#"{"id":"9","method":"tools/call","params":{"name":"get_climatological_bulletin"}}"#,
        )
        .await;
        assert_eq!(resp.id, json!("9"));
        let err = resp.error.unwrap();
        assert_eq!(err.code, -1);
        assert!(err.message.contains("get_climatological_bulletin"));
        assert!(err.message.contains("503"));
    }

    #[tokio::test]
    async fn unsupported_method() {
        let server = server(FakeOperations::default());
        let resp = handle_line(&server, r#"{"id":"3","method":"resources/list"}"#).await;
        let err = resp.error.unwrap();
        assert_eq!(err.code, METHOD_NOT_FOUND);
        assert_eq!(err.message, "Method not supported: resources/list");
    }
}
