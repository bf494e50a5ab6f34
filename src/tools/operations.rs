use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// The weather-data operations exposed through both front ends.
///
/// Payloads are opaque upstream JSON. Any failure is reported as a single
/// `MeteoError`; callers do not distinguish upstream status codes.
#[async_trait]
pub trait WeatherOperations: Send + Sync {
    async fn weather_stations(&self) -> Result<Value>;

    async fn station_metadata(&self, station_code: &str) -> Result<Value>;

    async fn recent_data_all_stations(&self) -> Result<Value>;

    async fn station_recent_data(&self, station_code: &str) -> Result<Value>;

    async fn station_monthly_data(&self, station_code: &str, year: i32, month: u32)
        -> Result<Value>;

    async fn uv_index_data(&self) -> Result<Value>;

    async fn daily_summary_all_stations(&self) -> Result<Value>;

    async fn station_daily_summary(&self, station_code: &str) -> Result<Value>;

    async fn climatological_bulletin(&self) -> Result<Value>;

    async fn historical_temperature_monthly(&self, station_code: &str) -> Result<Value>;

    async fn historical_temperature_daily(&self, station_code: &str, year: i32) -> Result<Value>;

    async fn historical_precipitation_monthly(&self, station_code: &str) -> Result<Value>;

    async fn historical_precipitation_daily(&self, station_code: &str, year: i32)
        -> Result<Value>;

    async fn historical_pressure_monthly(&self, station_code: &str) -> Result<Value>;

    async fn historical_pressure_daily(&self, station_code: &str, year: i32) -> Result<Value>;
}
