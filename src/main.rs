use anyhow::{Context, Result};
use meteo_mcp::http;
use meteo_mcp::mcp::transport;
use meteo_mcp::{MeteoChileClient, MeteoConfig, MeteoServer, Transport};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env for local dev (if present)
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    let config = MeteoConfig::load().context("failed to load configuration")?;

    // Logs go to stderr; stdout carries the protocol
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("meteo_mcp={}", config.server.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if dotenv_loaded {
        tracing::info!("Loaded .env");
    }

    tracing::info!("Starting MeteoChile MCP Server");

    let transport_kind = config.transport()?;
    tracing::info!(
        "Configuration loaded: transport={}, port={}, upstream={}",
        transport_kind,
        config.server.port,
        config.meteochile.base_url
    );

    let client = Arc::new(MeteoChileClient::new(&config.meteochile));
    let server = Arc::new(
        MeteoServer::new(config.clone(), client).context("failed to build tool registry")?,
    );

    let tools = server.get_tools();
    tracing::info!("Available tools: {}", tools.len());
    for tool in tools {
        tracing::info!("  - {}: {}", tool.name, tool.description);
    }

    match transport_kind {
        Transport::Http => {
            tracing::info!(
                "MeteoChile MCP Server running with HTTP transport on port {}",
                config.server.port
            );
            http::run_http_server(server, config.server.port).await?;
        }
        Transport::Stdio => {
            tracing::info!("MeteoChile MCP Server running with stdio transport");
            transport::run_stdio(server).await?;
        }
        Transport::Both => {
            tracing::info!(
                "MeteoChile MCP Server running with stdio transport and HTTP on port {}",
                config.server.port
            );
            let http_server = Arc::clone(&server);
            let port = config.server.port;
            let http_task =
                tokio::spawn(async move { http::run_http_server(http_server, port).await });

            transport::run_stdio(server).await?;
            tracing::info!("stdio closed, HTTP transport keeps serving");
            http_task.await.context("HTTP server task failed")??;
        }
    }

    tracing::info!("MeteoChile MCP Server shutting down");
    Ok(())
}
