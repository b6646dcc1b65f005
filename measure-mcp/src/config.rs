//! Server configuration read from the environment

use std::env;
use thiserror::Error;

/// Log filter directive; falls back to `RUST_LOG`, then `info`
pub const LOG_ENV: &str = "MEASURE_LOG";
/// Decimal places used when presenting converted values
pub const DECIMALS_ENV: &str = "MEASURE_DECIMALS";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a non-negative integer, got '{value}'")]
    InvalidDecimals { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub log_filter: String,
    /// Round results to this many decimals; `None` returns them unrounded
    pub decimals: Option<u32>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            decimals: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let log_filter = lookup(LOG_ENV)
            .or_else(|| lookup("RUST_LOG"))
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let decimals = match lookup(DECIMALS_ENV) {
            None => None,
            Some(raw) => Some(raw.trim().parse::<u32>().map_err(|_| ConfigError::InvalidDecimals {
                var: DECIMALS_ENV,
                value: raw.clone(),
            })?),
        };

        Ok(Self { log_filter, decimals })
    }

    /// Presentation rounding; the conversion itself is never rounded
    pub fn present(&self, value: f64) -> f64 {
        match self.decimals {
            Some(d) if value.is_finite() => {
                let factor = 10f64.powi(d.min(15) as i32);
                let scaled = value * factor;
                if !scaled.is_finite() {
                    return value;
                }
                scaled.round() / factor
            }
            _ => value,
        }
    }
}
