pub mod meteochile;
pub mod operations;

pub use meteochile::{MeteoChileClient, StationInput, StationMonthInput, StationYearInput};
pub use operations::WeatherOperations;
