use std::env;
use std::net::{IpAddr, SocketAddr};

use tracing_subscriber::EnvFilter;

// ─────────────────────────────────────────────────────────────────────────────
// Error
// ─────────────────────────────────────────────────────────────────────────────

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {var}: {value:?} is not a valid IP address")]
    InvalidHost { var: &'static str, value: String },

    #[error("Invalid {var}: {value:?} is not a valid port")]
    InvalidPort { var: &'static str, value: String },

    #[error("Invalid {var}: {value:?} is not a valid log filter ({reason})")]
    InvalidLogFilter {
        var: &'static str,
        value: String,
        reason: String,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// Server Config
// ─────────────────────────────────────────────────────────────────────────────

pub const HOST_VAR: &str = "FOODIE_HOST";
pub const PORT_VAR: &str = "FOODIE_PORT";
pub const LOG_VAR: &str = "RUST_LOG";

const DEFAULT_HOST: IpAddr = IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            log_filter: DEFAULT_LOG_FILTER.into(),
        }
    }
}

impl ServerConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source. Unset or blank
    /// variables fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(raw) = get(HOST_VAR) {
            config.host = raw.trim().parse().map_err(|_| ConfigError::InvalidHost {
                var: HOST_VAR,
                value: raw.clone(),
            })?;
        }

        if let Some(raw) = get(PORT_VAR) {
            config.port = raw.trim().parse().map_err(|_| ConfigError::InvalidPort {
                var: PORT_VAR,
                value: raw.clone(),
            })?;
        }

        if let Some(filter) = get(LOG_VAR) {
            EnvFilter::try_new(&filter).map_err(|e| ConfigError::InvalidLogFilter {
                var: LOG_VAR,
                value: filter.clone(),
                reason: e.to_string(),
            })?;
            config.log_filter = filter;
        }

        Ok(config)
    }

    /// Builds the tracing filter. The value was checked when the config was
    /// loaded.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::new(&self.log_filter)
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
