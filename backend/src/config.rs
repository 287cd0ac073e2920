//! Service settings loaded via OrthoConfig.
//!
//! Values come from `EXOPLANETS_*` environment variables, CLI flags and an
//! optional config file, in OrthoConfig's usual precedence.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Runtime configuration for the HTTP service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EXOPLANETS")]
pub struct ServiceSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection URL. Without one, records are kept in memory.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    #[ortho_config(default = 10)]
    pub db_max_connections: u32,
}

/// Invalid settings values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address {value:?}: {message}")]
    BindAddr { value: String, message: String },
    #[error("db_max_connections must be at least 1")]
    PoolSize,
}

impl ServiceSettings {
    /// Parsed listen address, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|err: std::net::AddrParseError| SettingsError::BindAddr {
            value: value.to_owned(),
            message: err.to_string(),
        })
    }

    /// Configured database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Pool size; defaults to 10 and must be positive.
    pub fn db_max_connections(&self) -> Result<u32, SettingsError> {
        match self.db_max_connections {
            0 => Err(SettingsError::PoolSize),
            size => Ok(size),
        }
    }
}
