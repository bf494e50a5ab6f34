#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use meteo_mcp::{MeteoConfig, MeteoError, MeteoServer, Result, WeatherOperations};
use serde_json::{json, Value};

/// Answers every operation with the same payload and records the calls.
pub struct StubOperations {
    payload: Value,
    fail: bool,
    calls: Mutex<Vec<String>>,
}

impl StubOperations {
    pub fn returning(payload: Value) -> Self {
        Self {
            payload,
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            payload: Value::Null,
            fail: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<Value> {
        self.calls.lock().unwrap().push(call);
        if self.fail {
            return Err(MeteoError::api_error("upstream unavailable"));
        }
        Ok(self.payload.clone())
    }
}

#[async_trait]
impl WeatherOperations for StubOperations {
    async fn weather_stations(&self) -> Result<Value> {
        self.record("weather_stations".into())
    }

    async fn station_metadata(&self, code: &str) -> Result<Value> {
        self.record(format!("station_metadata {}", code))
    }

    async fn recent_data_all_stations(&self) -> Result<Value> {
        self.record("recent_data_all_stations".into())
    }

    async fn station_recent_data(&self, code: &str) -> Result<Value> {
        self.record(format!("station_recent_data {}", code))
    }

    async fn station_monthly_data(&self, code: &str, year: i32, month: u32) -> Result<Value> {
        self.record(format!("station_monthly_data {} {} {}", code, year, month))
    }

    async fn uv_index_data(&self) -> Result<Value> {
        self.record("uv_index_data".into())
    }

    async fn daily_summary_all_stations(&self) -> Result<Value> {
        self.record("daily_summary_all_stations".into())
    }

    async fn station_daily_summary(&self, code: &str) -> Result<Value> {
        self.record(format!("station_daily_summary {}", code))
    }

    async fn climatological_bulletin(&self) -> Result<Value> {
        self.record("climatological_bulletin".into())
    }

    async fn historical_temperature_monthly(&self, code: &str) -> Result<Value> {
        self.record(format!("historical_temperature_monthly {}", code))
    }

    async fn historical_temperature_daily(&self, code: &str, year: i32) -> Result<Value> {
        self.record(format!("historical_temperature_daily {} {}", code, year))
    }

    async fn historical_precipitation_monthly(&self, code: &str) -> Result<Value> {
        self.record(format!("historical_precipitation_monthly {}", code))
    }

    async fn historical_precipitation_daily(&self, code: &str, year: i32) -> Result<Value> {
        self.record(format!("historical_precipitation_daily {} {}", code, year))
    }

    async fn historical_pressure_monthly(&self, code: &str) -> Result<Value> {
        self.record(format!("historical_pressure_monthly {}", code))
    }

    async fn historical_pressure_daily(&self, code: &str, year: i32) -> Result<Value> {
        self.record(format!("historical_pressure_daily {} {}", code, year))
    }
}

pub fn sample_payload() -> Value {
    json!({
        "datosEstacion": { "codigoNacional": "330020", "nombreEstacion": "Quinta Normal, Santiago" },
        "datos": [
            { "momento": "2024-01-01 00:00:00", "temperatura": "21.4" },
            { "momento": "2024-01-02 00:00:00", "temperatura": null }
        ]
    })
}

pub fn test_server(operations: Arc<StubOperations>) -> Arc<MeteoServer> {
    Arc::new(MeteoServer::new(MeteoConfig::default(), operations).expect("build server"))
}
