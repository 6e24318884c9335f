//! Service configuration loaded from the environment

use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use shipper_domain::booking::BookingConfig;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 50051;
const DEFAULT_VESSEL_SERVICE_URL: &str = "http://localhost:50052";
const DEFAULT_LOOKUP_TIMEOUT_MS: u64 = 5_000;

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => bail!("Unknown log format '{}', expected 'text' or 'json'", other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub vessel_service_url: String,
    pub lookup_timeout: Duration,
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = lookup("CONSIGNMENT_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("CONSIGNMENT_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("Invalid CONSIGNMENT_PORT '{}'", raw))?,
            None => DEFAULT_PORT,
        };

        let vessel_service_url = lookup("VESSEL_SERVICE_URL")
            .unwrap_or_else(|| DEFAULT_VESSEL_SERVICE_URL.to_string());

        let lookup_timeout_ms = match lookup("VESSEL_LOOKUP_TIMEOUT_MS") {
            Some(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("Invalid VESSEL_LOOKUP_TIMEOUT_MS '{}'", raw))?,
            None => DEFAULT_LOOKUP_TIMEOUT_MS,
        };
        if lookup_timeout_ms == 0 {
            bail!("VESSEL_LOOKUP_TIMEOUT_MS must be greater than zero");
        }

        let log_format = match lookup("LOG_FORMAT") {
            Some(raw) => raw.parse()?,
            None => LogFormat::Text,
        };

        Ok(Config {
            host,
            port,
            vessel_service_url,
            lookup_timeout: Duration::from_millis(lookup_timeout_ms),
            log_format,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn booking_config(&self) -> BookingConfig {
        BookingConfig {
            lookup_timeout: self.lookup_timeout,
        }
    }
}
