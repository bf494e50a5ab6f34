use std::sync::Arc;

use crate::config::MeteoConfig;
use crate::error::{MeteoError, Result};
use crate::mcp::dto::{Tool, ToolCall};
use crate::mcp::registry::ToolRegistry;
use crate::tools::WeatherOperations;

/// Shared state of both front ends: configuration plus the immutable tool registry.
pub struct MeteoServer {
    config: MeteoConfig,
    registry: ToolRegistry,
}

impl MeteoServer {
    pub fn new(config: MeteoConfig, operations: Arc<dyn WeatherOperations>) -> Result<Self> {
        let registry = ToolRegistry::with_catalogue(operations)?;
        Ok(Self { config, registry })
    }

    pub fn config(&self) -> &MeteoConfig {
        &self.config
    }

    pub fn operations(&self) -> &dyn WeatherOperations {
        self.registry.operations().as_ref()
    }

    pub fn get_tools(&self) -> Vec<&Tool> {
        self.registry.descriptors()
    }

    /// Runs the named tool and returns its payload as pretty-printed JSON text.
    pub async fn handle_tool_call(&self, tool_call: ToolCall) -> Result<String> {
        tracing::info!("Handling tool call: {}", tool_call.name);

        let thunk = self
            .registry
            .lookup(&tool_call.name)
            .ok_or_else(|| MeteoError::ToolNotFound {
                name: tool_call.name.clone(),
            })?;
        let result = thunk.invoke(tool_call.arguments).await?;

        Ok(serde_json::to_string_pretty(&result)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeOperations;
    use serde_json::json;

    fn server() -> MeteoServer {
        MeteoServer::new(MeteoConfig::default(), Arc::new(FakeOperations::default())).unwrap()
    }

    #[test]
    fn lists_full_catalogue() {
        let server = server();
        let tools = server.get_tools();
        assert_eq!(tools.len(), 15);
        assert_eq!(tools[0].name, "get_weather_stations");
        assert_eq!(tools[14].name, "get_historical_pressure_daily");
    }

    #[tokio::test]
    async fn tool_result_is_pretty_json() {
        let server = server();
        let text = server
            .handle_tool_call(ToolCall {
                name: "get_uv_index_data".into(),
                arguments: json!({}),
            })
            .await
            .unwrap();
        assert_eq!(text, "{\n  \"operation\": \"uv_index_data\"\n}");
    }

    #[tokio::test]
    async fn unknown_tool_is_not_found() {
        let server = server();
        let err = server
            .handle_tool_call(ToolCall {
                name: "get_forecast".into(),
                arguments: json!({}),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, MeteoError::ToolNotFound { .. }));
    }
}
