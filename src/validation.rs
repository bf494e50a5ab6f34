use crate::error::{MeteoError, Result};
use chrono::Datelike;

pub const MIN_YEAR: i32 = 1900;

pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

/// Accepts 1900 through next calendar year.
pub fn validate_year(year: i32, current_year: i32) -> Result<i32> {
    if year < MIN_YEAR || year > current_year + 1 {
        return Err(MeteoError::validation_error(format!(
            "year must be between {} and {}",
            MIN_YEAR,
            current_year + 1
        )));
    }
    Ok(year)
}

pub fn validate_month(month: u32) -> Result<u32> {
    if !(1..=12).contains(&month) {
        return Err(MeteoError::validation_error("month must be between 1 and 12"));
    }
    Ok(month)
}

pub fn validate_station_code(code: &str) -> Result<&str> {
    let code = code.trim();
    if code.is_empty() {
        return Err(MeteoError::validation_error("station_code is required"));
    }
    Ok(code)
}

/// Path segments arrive as text; a non-numeric year is a validation failure, not a 404.
pub fn parse_year(raw: &str, current_year: i32) -> Result<i32> {
    let year = raw
        .trim()
        .parse::<i32>()
        .map_err(|_| MeteoError::validation_error(format!("invalid year: {}", raw)))?;
    validate_year(year, current_year)
}

pub fn parse_month(raw: &str) -> Result<u32> {
    let month = raw
        .trim()
        .parse::<u32>()
        .map_err(|_| MeteoError::validation_error(format!("invalid month: {}", raw)))?;
    validate_month(month)
}
