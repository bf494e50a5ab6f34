use super::helpers::build_url;
use crate::config::MeteoChileConfig;
use crate::error::{MeteoError, Result};
use crate::tools::operations::WeatherOperations;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// HTTP client for the MeteoChile climatology services.
#[derive(Clone)]
pub struct MeteoChileClient {
    http: reqwest::Client,
    base_url: String,
}

impl MeteoChileClient {
    pub fn new(config: &MeteoChileConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.as_str())
            .build()
            .unwrap_or_else(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                reqwest::Client::new()
            });
        Self {
            http,
            base_url: config.base_url.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, segments: &[&str]) -> Result<Value> {
        let url = build_url(&self.base_url, segments);
        tracing::info!("Calling MeteoChile API: {}", url);

        let result = self.fetch(&url).await;
        if let Err(e) = &result {
            tracing::error!("Error calling MeteoChile API endpoint {}: {}", segments[0], e);
        }
        result
    }

    async fn fetch(&self, url: &str) -> Result<Value> {
        let body = self
            .http
            .get(url)
            .send()
            .await
            .map_err(MeteoError::NetworkError)?
            .error_for_status()
            .map_err(MeteoError::NetworkError)?
            .text()
            .await
            .map_err(MeteoError::NetworkError)?;

        let payload: Value = serde_json::from_str(&body)?;
        if payload.is_null() {
            return Ok(Value::Object(Default::default()));
        }
        Ok(payload)
    }
}

#[async_trait]
impl WeatherOperations for MeteoChileClient {
    async fn weather_stations(&self) -> Result<Value> {
        self.get(&["getCatastroEstaciones"]).await
    }

    async fn station_metadata(&self, station_code: &str) -> Result<Value> {
        self.get(&["getMetadatosEstacion", station_code]).await
    }

    async fn recent_data_all_stations(&self) -> Result<Value> {
        self.get(&["getDatosRecientesEstaciones"]).await
    }

    async fn station_recent_data(&self, station_code: &str) -> Result<Value> {
        self.get(&["getDatosRecientesEstacion", station_code]).await
    }

    async fn station_monthly_data(
        &self,
        station_code: &str,
        year: i32,
        month: u32,
    ) -> Result<Value> {
        let year = year.to_string();
        let month = month.to_string();
        self.get(&["getDatosMensualesEstacion", station_code, &year, &month])
            .await
    }

    async fn uv_index_data(&self) -> Result<Value> {
        self.get(&["getIndiceUV"]).await
    }

    async fn daily_summary_all_stations(&self) -> Result<Value> {
        self.get(&["getResumenDiarioEstaciones"]).await
    }

    async fn station_daily_summary(&self, station_code: &str) -> Result<Value> {
        self.get(&["getResumenDiarioEstacion", station_code]).await
    }

    async fn climatological_bulletin(&self) -> Result<Value> {
        self.get(&["getBoletinClimatologico"]).await
    }

    async fn historical_temperature_monthly(&self, station_code: &str) -> Result<Value> {
        self.get(&["getHistorialTemperaturaMensual", station_code])
            .await
    }

    async fn historical_temperature_daily(&self, station_code: &str, year: i32) -> Result<Value> {
        let year = year.to_string();
        self.get(&["getHistorialTemperaturaDiaria", station_code, &year])
            .await
    }

    async fn historical_precipitation_monthly(&self, station_code: &str) -> Result<Value> {
        self.get(&["getHistorialPrecipitacionMensual", station_code])
            .await
    }

    async fn historical_precipitation_daily(
        &self,
        station_code: &str,
        year: i32,
    ) -> Result<Value> {
        let year = year.to_string();
        self.get(&["getHistorialPrecipitacionDiaria", station_code, &year])
            .await
    }

    async fn historical_pressure_monthly(&self, station_code: &str) -> Result<Value> {
        self.get(&["getHistorialPresionMensual", station_code]).await
    }

    async fn historical_pressure_daily(&self, station_code: &str, year: i32) -> Result<Value> {
        let year = year.to_string();
        self.get(&["getHistorialPresionDiaria", station_code, &year])
            .await
    }
}
