use axum::{
    extract::{Path, State},
    Json,
};

use crate::http::AppState;

use super::dto::HealthResponse;
use super::helpers::{month_param, respond, year_param, ApiResult};

pub(crate) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now(),
    })
}

pub(crate) async fn weather_stations(State(state): State<AppState>) -> ApiResult {
    let result = state.operations().weather_stations().await;
    respond(result, "weather stations")
}

pub(crate) async fn station_metadata(
    State(state): State<AppState>,
    Path(station_code): Path<String>,
) -> ApiResult {
    let result = state.operations().station_metadata(&station_code).await;
    respond(result, &format!("station metadata for {}", station_code))
}

pub(crate) async fn recent_data_all_stations(State(state): State<AppState>) -> ApiResult {
    let result = state.operations().recent_data_all_stations().await;
    respond(result, "recent data for all stations")
}

pub(crate) async fn station_recent_data(
    State(state): State<AppState>,
    Path(station_code): Path<String>,
) -> ApiResult {
    let result = state.operations().station_recent_data(&station_code).await;
    respond(result, &format!("recent data for station {}", station_code))
}

pub(crate) async fn station_monthly_data(
    State(state): State<AppState>,
    Path((station_code, year, month)): Path<(String, String, String)>,
) -> ApiResult {
    let year = year_param(&year)?;
    let month = month_param(&month)?;
    let result = state
        .operations()
        .station_monthly_data(&station_code, year, month)
        .await;
    respond(
        result,
        &format!(
            "monthly data for station {}, year {}, month {}",
            station_code, year, month
        ),
    )
}

pub(crate) async fn uv_index_data(State(state): State<AppState>) -> ApiResult {
    let result = state.operations().uv_index_data().await;
    respond(result, "UV index data")
}

pub(crate) async fn daily_summary_all_stations(State(state): State<AppState>) -> ApiResult {
    let result = state.operations().daily_summary_all_stations().await;
    respond(result, "daily summary for all stations")
}

pub(crate) async fn station_daily_summary(
    State(state): State<AppState>,
    Path(station_code): Path<String>,
) -> ApiResult {
    let result = state.operations().station_daily_summary(&station_code).await;
    respond(result, &format!("daily summary for station {}", station_code))
}

pub(crate) async fn climatological_bulletin(State(state): State<AppState>) -> ApiResult {
    let result = state.operations().climatological_bulletin().await;
    respond(result, "climatological bulletin")
}

pub(crate) async fn historical_temperature_monthly(
    State(state): State<AppState>,
    Path(station_code): Path<String>,
) -> ApiResult {
    let result = state
        .operations()
        .historical_temperature_monthly(&station_code)
        .await;
    respond(
        result,
        &format!("historical monthly temperature for station {}", station_code),
    )
}

pub(crate) async fn historical_temperature_daily(
    State(state): State<AppState>,
    Path((station_code, year)): Path<(String, String)>,
) -> ApiResult {
    let year = year_param(&year)?;
    let result = state
        .operations()
        .historical_temperature_daily(&station_code, year)
        .await;
    respond(
        result,
        &format!(
            "historical daily temperature for station {}, year {}",
            station_code, year
        ),
    )
}

pub(crate) async fn historical_precipitation_monthly(
    State(state): State<AppState>,
    Path(station_code): Path<String>,
) -> ApiResult {
    let result = state
        .operations()
        .historical_precipitation_monthly(&station_code)
        .await;
    respond(
        result,
        &format!("historical monthly precipitation for station {}", station_code),
    )
}

pub(crate) async fn historical_precipitation_daily(
    State(state): State<AppState>,
    Path((station_code, year)): Path<(String, String)>,
) -> ApiResult {
    let year = year_param(&year)?;
    let result = state
        .operations()
        .historical_precipitation_daily(&station_code, year)
        .await;
    respond(
        result,
        &format!(
            "historical daily precipitation for station {}, year {}",
            station_code, year
        ),
    )
}

pub(crate) async fn historical_pressure_monthly(
    State(state): State<AppState>,
    Path(station_code): Path<String>,
) -> ApiResult {
    let result = state
        .operations()
        .historical_pressure_monthly(&station_code)
        .await;
    respond(
        result,
        &format!("historical monthly pressure for station {}", station_code),
    )
}

pub(crate) async fn historical_pressure_daily(
    State(state): State<AppState>,
    Path((station_code, year)): Path<(String, String)>,
) -> ApiResult {
    let year = year_param(&year)?;
    let result = state
        .operations()
        .historical_pressure_daily(&station_code, year)
        .await;
    respond(
        result,
        &format!(
            "historical daily pressure for station {}, year {}",
            station_code, year
        ),
    )
}
