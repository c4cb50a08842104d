pub mod config;
pub mod endpoint;
pub mod error;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use config::Config;
pub use endpoint::{Endpoint, Identity, Reshape};
pub use error::{Error, Result, TimeoutKind};

/// Base URL for CoinMarketCap Pro API
pub const API_URL: &str = "https://pro-api.coinmarketcap.com/v1";

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "X-CMC_PRO_API_KEY";

/// Environment variable read by [`Config::from_env`]
pub const API_KEY_ENV: &str = "COIN_MARKET_PRO_API_KEY";

/// Connect and total-request timeout default, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
