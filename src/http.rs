use crate::mcp::dto::McpResponse;
use crate::mcp::handler;
use crate::rest::handler as rest;
use crate::tools::WeatherOperations;
use crate::MeteoServer;
use anyhow::Result;
use axum::{
    body::Bytes,
    routing::{get, post},
    Json, Router,
};
use std::net::SocketAddr;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    server: Arc<MeteoServer>,
}

impl AppState {
    pub fn new(server: Arc<MeteoServer>) -> Self {
        Self { server }
    }

    pub(crate) fn operations(&self) -> &dyn WeatherOperations {
        self.server.operations()
    }
}

// Raw body so undecodable input reaches the protocol handler and gets the
// sentinel envelope instead of an extractor rejection.
async fn handle_rpc(
    axum::extract::State(state): axum::extract::State<AppState>,
    body: Bytes,
) -> Json<McpResponse> {
    let line = String::from_utf8_lossy(&body);
    let res = handler::handle_line(&state.server, line.trim()).await;
    Json(res)
}

pub fn router(server: Arc<MeteoServer>) -> Router {
    let state = AppState::new(server);

    let weather = Router::new()
        .route("/stations", get(rest::weather_stations))
        .route("/stations/recent-data", get(rest::recent_data_all_stations))
        .route("/stations/daily-summary", get(rest::daily_summary_all_stations))
        .route("/stations/:station_code/metadata", get(rest::station_metadata))
        .route("/stations/:station_code/recent-data", get(rest::station_recent_data))
        .route(
            "/stations/:station_code/monthly-data/:year/:month",
            get(rest::station_monthly_data),
        )
        .route(
            "/stations/:station_code/daily-summary",
            get(rest::station_daily_summary),
        )
        .route("/uv-index", get(rest::uv_index_data))
        .route("/climatological-bulletin", get(rest::climatological_bulletin));

    let historical = Router::new()
        .route(
            "/temperature/monthly/:station_code",
            get(rest::historical_temperature_monthly),
        )
        .route(
            "/temperature/daily/:station_code/:year",
            get(rest::historical_temperature_daily),
        )
        .route(
            "/precipitation/monthly/:station_code",
            get(rest::historical_precipitation_monthly),
        )
        .route(
            "/precipitation/daily/:station_code/:year",
            get(rest::historical_precipitation_daily),
        )
        .route(
            "/pressure/monthly/:station_code",
            get(rest::historical_pressure_monthly),
        )
        .route(
            "/pressure/daily/:station_code/:year",
            get(rest::historical_pressure_daily),
        );

    Router::new()
        .route("/health", get(rest::health))
        .route("/rpc", post(handle_rpc))
        .nest("/api/weather", weather)
        .nest("/api/historical", historical)
        .with_state(state)
}

pub async fn run_http_server(server: Arc<MeteoServer>, port: u16) -> Result<()> {
    let app = router(server);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
