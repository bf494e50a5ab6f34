use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::{MeteoError, Result};
use crate::tools::WeatherOperations;

/// Records every call and answers with `{"operation": <name>}`, or fails when `failing`.
#[derive(Default)]
pub struct FakeOperations {
    calls: Mutex<Vec<String>>,
    failing: bool,
    panicking: bool,
}

impl FakeOperations {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Every operation panics after recording the call.
    pub fn panicking() -> Self {
        Self {
            panicking: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn answer(&self, operation: &str, call: String) -> Result<Value> {
        self.calls.lock().unwrap().push(call);
        if self.panicking {
            panic!("boom");
        }
        if self.failing {
            return Err(MeteoError::api_error("upstream returned 503"));
        }
        Ok(json!({ "operation": operation }))
    }
}

#[async_trait]
impl WeatherOperations for FakeOperations {
    async fn weather_stations(&self) -> Result<Value> {
        self.answer("weather_stations", "weather_stations".into())
    }

    async fn station_metadata(&self, code: &str) -> Result<Value> {
        self.answer("station_metadata", format!("station_metadata({})", code))
    }

    async fn recent_data_all_stations(&self) -> Result<Value> {
        self.answer("recent_data_all_stations", "recent_data_all_stations".into())
    }

    async fn station_recent_data(&self, code: &str) -> Result<Value> {
        self.answer("station_recent_data", format!("station_recent_data({})", code))
    }

    async fn station_monthly_data(&self, code: &str, year: i32, month: u32) -> Result<Value> {
        self.answer(
            "station_monthly_data",
            format!("station_monthly_data({}, {}, {})", code, year, month),
        )
    }

    async fn uv_index_data(&self) -> Result<Value> {
        self.answer("uv_index_data", "uv_index_data".into())
    }

    async fn daily_summary_all_stations(&self) -> Result<Value> {
        self.answer("daily_summary_all_stations", "daily_summary_all_stations".into())
    }

    async fn station_daily_summary(&self, code: &str) -> Result<Value> {
        self.answer("station_daily_summary", format!("station_daily_summary({})", code))
    }

    async fn climatological_bulletin(&self) -> Result<Value> {
        self.answer("climatological_bulletin", "climatological_bulletin".into())
    }

    async fn historical_temperature_monthly(&self, code: &str) -> Result<Value> {
        self.answer(
            "historical_temperature_monthly",
            format!("historical_temperature_monthly({})", code),
        )
    }

    async fn historical_temperature_daily(&self, code: &str, year: i32) -> Result<Value> {
        self.answer(
            "historical_temperature_daily",
            format!("historical_temperature_daily({}, {})", code, year),
        )
    }

    async fn historical_precipitation_monthly(&self, code: &str) -> Result<Value> {
        self.answer(
            "historical_precipitation_monthly",
            format!("historical_precipitation_monthly({})", code),
        )
    }

    async fn historical_precipitation_daily(&self, code: &str, year: i32) -> Result<Value> {
        self.answer(
            "historical_precipitation_daily",
            format!("historical_precipitation_daily({}, {})", code, year),
        )
    }

    async fn historical_pressure_monthly(&self, code: &str) -> Result<Value> {
        self.answer(
            "historical_pressure_monthly",
            format!("historical_pressure_monthly({})", code),
        )
    }

    async fn historical_pressure_daily(&self, code: &str, year: i32) -> Result<Value> {
        self.answer(
            "historical_pressure_daily",
            format!("historical_pressure_daily({}, {})", code, year),
        )
    }
}
