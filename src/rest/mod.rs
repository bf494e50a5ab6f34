pub mod dto;
pub(crate) mod handler;
pub(crate) mod helpers;

pub use dto::{ErrorResponse, HealthResponse};
