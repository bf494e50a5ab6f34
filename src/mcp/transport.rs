use std::sync::Arc;

use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use super::dto::McpResponse;
use super::handler;
use crate::error::Result;
use crate::server::MeteoServer;

/// Runs the line protocol over the process's stdin/stdout until stdin closes.
pub async fn run_stdio(server: Arc<MeteoServer>) -> Result<()> {
    let reader = BufReader::new(io::stdin());
    let writer = io::stdout();
    serve(server, reader, writer).await
}

/// One request at a time: read a line, answer it, flush, repeat. Returns
/// `Ok` on end of input; only a failed write ends the loop with an error.
pub async fn serve<R, W>(server: Arc<MeteoServer>, mut reader: R, mut writer: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                tracing::error!("Error reading from stdin: {}", e);
                break;
            }
        }

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        tracing::debug!("Received: {}", line);

        let response = dispatch(Arc::clone(&server), line.to_string()).await;
        let response_json = encode(&response);

        tracing::debug!("Sending: {}", response_json);

        writer.write_all(response_json.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }

    tracing::info!("Input closed, stopping stdio transport");
    Ok(())
}

// A panicking handler must not take the loop down with it.
async fn dispatch(server: Arc<MeteoServer>, line: String) -> McpResponse {
    let task = tokio::spawn(async move { handler::handle_line(&server, &line).await });
    match task.await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("Error processing MCP request: {}", e);
            McpResponse::sentinel(format!("Internal error: {}", e))
        }
    }
}

fn encode(response: &McpResponse) -> String {
    match serde_json::to_string(response) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!("Failed to serialize response: {}", e);
            let fallback = McpResponse::sentinel(format!("Failed to serialize response: {}", e));
            serde_json::to_string(&fallback).unwrap_or_else(|_| {
                r#"{"jsonrpc":"2.0","id":"error","error":{"code":-1,"message":"internal error"}}"#
                    .to_string()
            })
        }
    }
}
