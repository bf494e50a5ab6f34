use crate::error::{MeteoError, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_PATH_ENV: &str = "METEO_MCP_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeteoConfig {
    pub server: ServerConfig,
    pub meteochile: MeteoChileConfig,
    #[serde(default)]
    pub mcp: McpInfoConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub log_level: String,
    pub transport: String, // "stdio", "http", "both"
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeteoChileConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Identity reported to MCP clients on `initialize`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpInfoConfig {
    pub name: String,
    pub version: String,
    pub protocol_version: String,
}

fn default_user_agent() -> String {
    "Meteo-MCP/0.1.0".to_string()
}

impl Default for McpInfoConfig {
    fn default() -> Self {
        Self {
            name: "meteochile-mcp-server".to_string(),
            version: "1.0.0".to_string(),
            protocol_version: "2024-11-05".to_string(),
        }
    }
}

impl Default for MeteoConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: 8080,
                log_level: "info".to_string(),
                transport: "stdio".to_string(),
            },
            meteochile: MeteoChileConfig {
                base_url: "https://climatologia.meteochile.gob.cl/application/servicios".to_string(),
                timeout_seconds: 30,
                user_agent: default_user_agent(),
            },
            mcp: McpInfoConfig::default(),
        }
    }
}

impl MeteoConfig {
    /// Defaults, or the TOML file named by `METEO_MCP_CONFIG`, with env overrides on top.
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(path.trim())?,
            _ => Self::default(),
        };
        config.apply_env()?;
        Ok(config)
    }

    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    pub fn apply_env(&mut self) -> Result<()> {
        if let Ok(port) = std::env::var("METEO_MCP_PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| MeteoError::config_error("Invalid METEO_MCP_PORT"))?;
        }

        if let Ok(log_level) = std::env::var("METEO_MCP_LOG_LEVEL") {
            self.server.log_level = log_level;
        }

        if let Ok(transport) = std::env::var("METEO_MCP_TRANSPORT") {
            self.server.transport = transport;
        }

        if let Ok(base_url) = std::env::var("METEOCHILE_BASE_URL") {
            if !base_url.trim().is_empty() {
                self.meteochile.base_url = base_url.trim().to_string();
            }
        }

        if let Ok(timeout) = std::env::var("METEOCHILE_TIMEOUT_SECONDS") {
            self.meteochile.timeout_seconds = timeout
                .parse()
                .map_err(|_| MeteoError::config_error("Invalid METEOCHILE_TIMEOUT_SECONDS"))?;
        }

        self.validate()
    }

    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| MeteoError::config_error(format!("Failed to read config file: {}", e)))?;

        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: MeteoConfig = toml::from_str(content)
            .map_err(|e| MeteoError::config_error(format!("Failed to parse config file: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn transport(&self) -> Result<Transport> {
        self.server.transport.parse()
    }

    fn validate(&self) -> Result<()> {
        if self.meteochile.base_url.trim().is_empty() {
            return Err(MeteoError::config_error("meteochile.base_url must not be empty"));
        }
        if self.meteochile.timeout_seconds == 0 {
            return Err(MeteoError::config_error(
                "meteochile.timeout_seconds must be greater than zero",
            ));
        }
        self.transport().map(|_| ())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Stdio,
    Http,
    Both,
}

impl std::str::FromStr for Transport {
    type Err = MeteoError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "stdio" => Ok(Transport::Stdio),
            "http" => Ok(Transport::Http),
            "both" => Ok(Transport::Both),
            other => Err(MeteoError::config_error(format!(
                "Unknown transport '{}', expected stdio, http or both",
                other
            ))),
        }
    }
}

impl std::fmt::Display for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Transport::Stdio => "stdio",
            Transport::Http => "http",
            Transport::Both => "both",
        };
        f.write_str(name)
    }
}
