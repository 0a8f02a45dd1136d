//! Runtime settings for the serving binary.
//!
//! Only the binary reads the environment. Resolution itself takes no configuration.

use std::net::SocketAddr;

use recgate_observability::LogFormat;
use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "RECGATE_BIND_ADDR";
pub const LOG_FORMAT_VAR: &str = "RECGATE_LOG_FORMAT";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable held a value that could not be parsed.
    #[error("invalid {var}={value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    fn invalid(var: &'static str, value: &str, reason: impl ToString) -> Self {
        Self::Invalid {
            var,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read settings through `lookup`; unset variables fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = match lookup(BIND_ADDR_VAR) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| ConfigError::invalid(BIND_ADDR_VAR, &raw, e))?,
            None => default_bind_addr(),
        };

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => raw
                .parse()
                .map_err(|e| ConfigError::invalid(LOG_FORMAT_VAR, &raw, e))?,
            None => LogFormat::default(),
        };

        Ok(Self {
            bind_addr,
            log_format,
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            log_format: LogFormat::default(),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8000))
}
