//! Configuration management for the CoinMarketCap Pro client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Main configuration struct for the CoinMarketCap Pro client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// CoinMarketCap Pro API key, sent as `X-CMC_PRO_API_KEY`
  pub api_key: String,

  /// Base URL including the API version segment
  pub base_url: String,

  /// Total request timeout in seconds
  pub timeout_secs: u64,

  /// Connection establishment timeout in seconds
  pub connect_timeout_secs: u64,
}

impl Config {
  /// Load configuration from environment variables
  ///
  /// Reads a `.env` file first when one is present.
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let api_key = env::var(crate::API_KEY_ENV)
      .map_err(|_| Error::ApiKey(format!("{} not set", crate::API_KEY_ENV)))?;

    let timeout_secs = parse_var("CMC_TIMEOUT_SECS", crate::DEFAULT_TIMEOUT_SECS)?;
    let connect_timeout_secs =
      parse_var("CMC_CONNECT_TIMEOUT_SECS", crate::DEFAULT_TIMEOUT_SECS)?;

    let base_url = env::var("CMC_BASE_URL").unwrap_or_else(|_| crate::API_URL.to_string());

    Ok(Config { api_key, base_url, timeout_secs, connect_timeout_secs })
  }

  /// Create a config with default values
  pub fn default_with_key(api_key: impl Into<String>) -> Self {
    Config {
      api_key: api_key.into(),
      base_url: crate::API_URL.to_string(),
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
      connect_timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
    }
  }

  /// Point the client at a different host (mock servers, sandbox)
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }

  /// Override the total-request and connect timeouts
  pub fn with_timeouts(mut self, timeout_secs: u64, connect_timeout_secs: u64) -> Self {
    self.timeout_secs = timeout_secs;
    self.connect_timeout_secs = connect_timeout_secs;
    self
  }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T> {
  match env::var(name) {
    Ok(raw) => raw.trim().parse().map_err(|_| Error::Config(format!("Invalid {}", name))),
    Err(_) => Ok(default),
  }
}
