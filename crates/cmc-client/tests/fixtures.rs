//! Provider-shaped payloads shared by the integration tests

#![allow(dead_code)]

use cmc_client::{CoinMarketProClient, Config};
use cmc_core::test_utils::envelope;
use serde_json::{json, Value};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-api-key";

/// Install a test subscriber once so request traces show up with `--nocapture`
pub fn init_tracing() {
  let _ = tracing_subscriber::fmt()
    .with_env_filter("cmc_client=debug")
    .with_test_writer()
    .try_init();
}

/// Start a mock server and a client pointed at it
pub async fn setup() -> (MockServer, CoinMarketProClient) {
  init_tracing();
  let server = MockServer::start().await;
  let client = client_for(&server, 10);
  (server, client)
}

/// Client against `server` with the given total timeout
pub fn client_for(server: &MockServer, timeout_secs: u64) -> CoinMarketProClient {
  client_at(&server.uri(), timeout_secs, 10)
}

/// Client against an arbitrary base URL with explicit total and connect timeouts
pub fn client_at(base_url: &str, timeout_secs: u64, connect_timeout_secs: u64) -> CoinMarketProClient {
  let config = Config::default_with_key(TEST_API_KEY)
    .with_base_url(base_url)
    .with_timeouts(timeout_secs, connect_timeout_secs);
  CoinMarketProClient::new(config).expect("client")
}

/// `/cryptocurrency/info` keyed by id
pub fn cryptocurrency_info() -> Value {
  envelope(json!({
    "1": {"id": 1, "name": "Bitcoin", "symbol": "BTC", "slug": "bitcoin", "category": "coin"},
    "1027": {"id": 1027, "name": "Ethereum", "symbol": "ETH", "slug": "ethereum", "category": "coin"}
  }))
}

/// `/cryptocurrency/map`
pub fn cryptocurrency_map() -> Value {
  envelope(json!([
    {"id": 1, "name": "Bitcoin", "symbol": "BTC", "slug": "bitcoin", "is_active": 1},
    {"id": 2, "name": "Litecoin", "symbol": "LTC", "slug": "litecoin", "is_active": 1}
  ]))
}

/// `/cryptocurrency/listings/*`
pub fn cryptocurrency_listings() -> Value {
  envelope(json!([
    {
      "id": 1,
      "name": "Bitcoin",
      "symbol": "BTC",
      "cmc_rank": 1,
      "quote": {"USD": {"price": 9283.92, "volume_24h": 7155680000.0, "market_cap": 158055024432.0}}
    }
  ]))
}

/// `/cryptocurrency/market-pairs/latest` for a single coin
pub fn cryptocurrency_market_pairs() -> Value {
  envelope(json!({
    "id": 1,
    "name": "Bitcoin",
    "symbol": "BTC",
    "num_market_pairs": 7526,
    "market_pairs": [
      {"exchange": {"id": 157, "name": "BitMEX"}, "market_pair": "BTC/USD"}
    ]
  }))
}

/// `/cryptocurrency/ohlcv/*` and `/cryptocurrency/quotes/*`
pub fn cryptocurrency_quotes() -> Value {
  envelope(json!({
    "1": {
      "id": 1,
      "name": "Bitcoin",
      "symbol": "BTC",
      "quote": {"USD": {"open": 6490.0, "high": 6600.0, "low": 6450.0, "close": 6560.0}}
    }
  }))
}

/// `/exchange/info` keyed by id
pub fn exchange_info() -> Value {
  envelope(json!({
    "270": {"id": 270, "name": "Binance", "slug": "binance"},
    "294": {"id": 294, "name": "OKEx", "slug": "okex"}
  }))
}

/// `/exchange/map` and `/exchange/listings/*`
pub fn exchange_listings() -> Value {
  envelope(json!([
    {"id": 270, "name": "Binance", "slug": "binance", "num_market_pairs": 385},
    {"id": 294, "name": "OKEx", "slug": "okex", "num_market_pairs": 500}
  ]))
}

/// `/exchange/market-pairs/latest` and `/exchange/quotes/historical`: one exchange object
pub fn exchange_single() -> Value {
  envelope(json!({
    "id": 270,
    "name": "Binance",
    "slug": "binance",
    "num_market_pairs": 473,
    "market_pairs": [{"market_pair": "BTC/USDT"}]
  }))
}

/// `/exchange/quotes/latest` keyed by slug
pub fn exchange_quotes() -> Value {
  envelope(json!({
    "binance": {"id": 270, "name": "Binance", "quote": {"USD": {"volume_24h": 768478308.529847}}}
  }))
}

/// `/global-metrics/quotes/latest`
pub fn global_metrics_quotes() -> Value {
  envelope(json!({
    "btc_dominance": 67.0057,
    "eth_dominance": 9.02205,
    "active_cryptocurrencies": 1723,
    "quote": {"USD": {"total_market_cap": 250385096532.124}}
  }))
}

/// `/global-metrics/quotes/historical`
pub fn global_metrics_quotes_historical() -> Value {
  envelope(json!({
    "quotes": [
      {"timestamp": "2018-07-31T00:02:00.000Z", "btc_dominance": 47.9949},
      {"timestamp": "2018-08-01T00:02:00.000Z", "btc_dominance": 48.0552}
    ]
  }))
}

/// `/tools/price-conversion`
pub fn price_conversion() -> Value {
  envelope(json!({
    "id": 1,
    "symbol": "BTC",
    "name": "Bitcoin",
    "amount": 50,
    "quote": {"GBP": {"price": 284656.08465608465}}
  }))
}
