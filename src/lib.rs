pub mod config;
pub mod error;
pub mod http;
pub mod mcp;
pub mod rest;
pub mod server;
pub mod tools;
pub mod validation;

#[cfg(test)]
mod testing;

pub use config::{MeteoConfig, Transport};
pub use error::{MeteoError, Result};
pub use server::MeteoServer;
pub use tools::{MeteoChileClient, WeatherOperations};
