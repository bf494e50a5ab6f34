use std::collections::HashMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::dto::Tool;
use super::schema::{InputSchema, ParamKind};
use crate::error::{MeteoError, Result};
use crate::tools::{StationInput, StationMonthInput, StationYearInput, WeatherOperations};
use crate::validation::{current_year, validate_month, validate_station_code, validate_year};

const STATION_CODE_DESC: &str = "Weather station code";
const YEAR_DESC: &str = "Year (e.g. 2024)";
const MONTH_DESC: &str = "Month (1-12)";

/// Every tool the server exposes. The variant decides how arguments are
/// decoded and which operation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    WeatherStations,
    StationMetadata,
    RecentDataAllStations,
    StationRecentData,
    StationMonthlyData,
    UvIndexData,
    DailySummaryAllStations,
    StationDailySummary,
    ClimatologicalBulletin,
    HistoricalTemperatureMonthly,
    HistoricalTemperatureDaily,
    HistoricalPrecipitationMonthly,
    HistoricalPrecipitationDaily,
    HistoricalPressureMonthly,
    HistoricalPressureDaily,
}

impl ToolKind {
    /// Catalogue in advertisement order.
    pub const ALL: [ToolKind; 15] = [
        ToolKind::WeatherStations,
        ToolKind::StationMetadata,
        ToolKind::RecentDataAllStations,
        ToolKind::StationRecentData,
        ToolKind::StationMonthlyData,
        ToolKind::UvIndexData,
        ToolKind::DailySummaryAllStations,
        ToolKind::StationDailySummary,
        ToolKind::ClimatologicalBulletin,
        ToolKind::HistoricalTemperatureMonthly,
        ToolKind::HistoricalTemperatureDaily,
        ToolKind::HistoricalPrecipitationMonthly,
        ToolKind::HistoricalPrecipitationDaily,
        ToolKind::HistoricalPressureMonthly,
        ToolKind::HistoricalPressureDaily,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ToolKind::WeatherStations => "get_weather_stations",
            ToolKind::StationMetadata => "get_station_metadata",
            ToolKind::RecentDataAllStations => "get_recent_data_all_stations",
            ToolKind::StationRecentData => "get_station_recent_data",
            ToolKind::StationMonthlyData => "get_station_monthly_data",
            ToolKind::UvIndexData => "get_uv_index_data",
            ToolKind::DailySummaryAllStations => "get_daily_summary_all_stations",
            ToolKind::StationDailySummary => "get_station_daily_summary",
            ToolKind::ClimatologicalBulletin => "get_climatological_bulletin",
            ToolKind::HistoricalTemperatureMonthly => "get_historical_temperature_monthly",
            ToolKind::HistoricalTemperatureDaily => "get_historical_temperature_daily",
            ToolKind::HistoricalPrecipitationMonthly => "get_historical_precipitation_monthly",
            ToolKind::HistoricalPrecipitationDaily => "get_historical_precipitation_daily",
            ToolKind::HistoricalPressureMonthly => "get_historical_pressure_monthly",
            ToolKind::HistoricalPressureDaily => "get_historical_pressure_daily",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ToolKind::WeatherStations => "List the catalogue of available weather stations",
            ToolKind::StationMetadata => "Get the metadata of a specific weather station",
            ToolKind::RecentDataAllStations => {
                "Get per-minute data for the last 12 hours from all automatic stations"
            }
            ToolKind::StationRecentData => {
                "Get per-minute data for the last 12 hours from a specific station"
            }
            ToolKind::StationMonthlyData => {
                "Get 15-minute data from a station for a specific month"
            }
            ToolKind::UvIndexData => "Get ultraviolet radiation index data from the national network",
            ToolKind::DailySummaryAllStations => "Get the daily summary of all automatic stations",
            ToolKind::StationDailySummary => "Get the daily summary of a specific station",
            ToolKind::ClimatologicalBulletin => {
                "Get the daily climatological bulletin of the main stations"
            }
            ToolKind::HistoricalTemperatureMonthly => {
                "Get historical monthly and annual temperature data"
            }
            ToolKind::HistoricalTemperatureDaily => {
                "Get historical daily temperature data for a specific year"
            }
            ToolKind::HistoricalPrecipitationMonthly => {
                "Get historical monthly and annual precipitation data"
            }
            ToolKind::HistoricalPrecipitationDaily => {
                "Get historical daily precipitation data for a specific year"
            }
            ToolKind::HistoricalPressureMonthly => {
                "Get historical monthly and annual sea-level pressure data"
            }
            ToolKind::HistoricalPressureDaily => {
                "Get historical daily sea-level pressure data for a specific year"
            }
        }
    }

    pub fn input_schema(self) -> InputSchema {
        let station =
            || InputSchema::empty().required("station_code", ParamKind::String, STATION_CODE_DESC);
        match self {
            ToolKind::WeatherStations
            | ToolKind::RecentDataAllStations
            | ToolKind::UvIndexData
            | ToolKind::DailySummaryAllStations
            | ToolKind::ClimatologicalBulletin => InputSchema::empty(),
            ToolKind::StationMetadata
            | ToolKind::StationRecentData
            | ToolKind::StationDailySummary
            | ToolKind::HistoricalTemperatureMonthly
            | ToolKind::HistoricalPrecipitationMonthly
            | ToolKind::HistoricalPressureMonthly => station(),
            ToolKind::HistoricalTemperatureDaily
            | ToolKind::HistoricalPrecipitationDaily
            | ToolKind::HistoricalPressureDaily => {
                station().required("year", ParamKind::Integer, YEAR_DESC)
            }
            ToolKind::StationMonthlyData => station()
                .required("year", ParamKind::Integer, YEAR_DESC)
                .required("month", ParamKind::Integer, MONTH_DESC),
        }
    }

    pub fn descriptor(self) -> Tool {
        Tool {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: self.input_schema(),
        }
    }

    /// Decodes `arguments` for this tool and runs the matching operation.
    pub async fn invoke(self, operations: &dyn WeatherOperations, arguments: Value) -> Result<Value> {
        let arguments = normalize_arguments(arguments)?;
        match self {
            ToolKind::WeatherStations => operations.weather_stations().await,
            ToolKind::RecentDataAllStations => operations.recent_data_all_stations().await,
            ToolKind::UvIndexData => operations.uv_index_data().await,
            ToolKind::DailySummaryAllStations => operations.daily_summary_all_stations().await,
            ToolKind::ClimatologicalBulletin => operations.climatological_bulletin().await,
            ToolKind::StationMetadata => {
                let input: StationInput = decode(arguments)?;
                operations.station_metadata(station_code(&input.station_code)?).await
            }
            ToolKind::StationRecentData => {
                let input: StationInput = decode(arguments)?;
                operations.station_recent_data(station_code(&input.station_code)?).await
            }
            ToolKind::StationDailySummary => {
                let input: StationInput = decode(arguments)?;
                operations.station_daily_summary(station_code(&input.station_code)?).await
            }
            ToolKind::HistoricalTemperatureMonthly => {
                let input: StationInput = decode(arguments)?;
                operations
                    .historical_temperature_monthly(station_code(&input.station_code)?)
                    .await
            }
            ToolKind::HistoricalPrecipitationMonthly => {
                let input: StationInput = decode(arguments)?;
                operations
                    .historical_precipitation_monthly(station_code(&input.station_code)?)
                    .await
            }
            ToolKind::HistoricalPressureMonthly => {
                let input: StationInput = decode(arguments)?;
                operations
                    .historical_pressure_monthly(station_code(&input.station_code)?)
                    .await
            }
            ToolKind::HistoricalTemperatureDaily => {
                let input: StationYearInput = decode(arguments)?;
                let code = station_code(&input.station_code)?;
                operations
                    .historical_temperature_daily(code, year(input.year)?)
                    .await
            }
            ToolKind::HistoricalPrecipitationDaily => {
                let input: StationYearInput = decode(arguments)?;
                let code = station_code(&input.station_code)?;
                operations
                    .historical_precipitation_daily(code, year(input.year)?)
                    .await
            }
            ToolKind::HistoricalPressureDaily => {
                let input: StationYearInput = decode(arguments)?;
                let code = station_code(&input.station_code)?;
                operations
                    .historical_pressure_daily(code, year(input.year)?)
                    .await
            }
            ToolKind::StationMonthlyData => {
                let input: StationMonthInput = decode(arguments)?;
                let code = station_code(&input.station_code)?;
                let month = validate_month(input.month).map_err(as_invalid)?;
                operations
                    .station_monthly_data(code, year(input.year)?, month)
                    .await
            }
        }
    }
}

/// Absent or null arguments mean "no arguments"; anything but an object is rejected.
fn normalize_arguments(arguments: Value) -> Result<Value> {
    match arguments {
        Value::Null => Ok(Value::Object(Default::default())),
        Value::Object(_) => Ok(arguments),
        other => Err(MeteoError::invalid_arguments(format!(
            "arguments must be an object, got {}",
            json_type(&other)
        ))),
    }
}

fn decode<T: DeserializeOwned>(arguments: Value) -> Result<T> {
    serde_json::from_value(arguments).map_err(|e| MeteoError::invalid_arguments(e.to_string()))
}

fn station_code(raw: &str) -> Result<&str> {
    validate_station_code(raw).map_err(as_invalid)
}

fn year(raw: i32) -> Result<i32> {
    validate_year(raw, current_year()).map_err(as_invalid)
}

fn as_invalid(err: MeteoError) -> MeteoError {
    match err {
        MeteoError::ValidationError(msg) => MeteoError::InvalidArguments(msg),
        other => other,
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Bound callable for one registered tool.
#[derive(Clone, Copy)]
pub struct ToolThunk<'a> {
    kind: ToolKind,
    operations: &'a dyn WeatherOperations,
}

impl ToolThunk<'_> {
    pub fn kind(&self) -> ToolKind {
        self.kind
    }

    pub async fn invoke(&self, arguments: Value) -> Result<Value> {
        self.kind.invoke(self.operations, arguments).await
    }
}

struct RegisteredTool {
    descriptor: Tool,
    kind: ToolKind,
}

/// Name → tool table. Populated once at startup, read-only afterwards.
pub struct ToolRegistry {
    operations: Arc<dyn WeatherOperations>,
    tools: Vec<RegisteredTool>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    pub fn new(operations: Arc<dyn WeatherOperations>) -> Self {
        Self {
            operations,
            tools: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Registry holding the full weather catalogue.
    pub fn with_catalogue(operations: Arc<dyn WeatherOperations>) -> Result<Self> {
        let mut registry = Self::new(operations);
        for kind in ToolKind::ALL {
            registry.register(kind)?;
        }
        Ok(registry)
    }

    /// Adds `kind` under its own name; the advertised descriptor is derived
    /// from the same variant the thunk dispatches on.
    pub fn register(&mut self, kind: ToolKind) -> Result<()> {
        let descriptor = kind.descriptor();
        if self.index.contains_key(&descriptor.name) {
            return Err(MeteoError::DuplicateTool {
                name: descriptor.name,
            });
        }
        self.index.insert(descriptor.name.clone(), self.tools.len());
        self.tools.push(RegisteredTool { descriptor, kind });
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<ToolThunk<'_>> {
        self.index.get(name).map(|&i| ToolThunk {
            kind: self.tools[i].kind,
            operations: self.operations.as_ref(),
        })
    }

    pub fn descriptors(&self) -> Vec<&Tool> {
        self.tools.iter().map(|t| &t.descriptor).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn operations(&self) -> &Arc<dyn WeatherOperations> {
        &self.operations
    }
}
