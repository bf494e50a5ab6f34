use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct StationInput {
    pub station_code: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StationYearInput {
    pub station_code: String,
    pub year: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StationMonthInput {
    pub station_code: String,
    pub year: i32,
    pub month: u32,
}
