pub mod dto;
pub mod helpers;
pub mod implementation;

pub use dto::{StationInput, StationMonthInput, StationYearInput};
pub use implementation::MeteoChileClient;
