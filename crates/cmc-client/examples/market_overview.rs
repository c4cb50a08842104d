//! Market Overview Example
//!
//! Prints a short snapshot of the market:
//! - global dominance and total market cap
//! - the top coins by rank
//! - a price conversion
//!
//! Requires `COIN_MARKET_PRO_API_KEY` in the environment or a `.env` file.
//! Set `RUST_LOG=cmc_client=debug` to see request traces.

use cmc_client::{ApiResult, CoinMarketProClient, Config, Params};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

  let config = Config::from_env().map_err(|e| {
    eprintln!("Failed to load configuration: {}", e);
    eprintln!("Make sure COIN_MARKET_PRO_API_KEY is set");
    e
  })?;
  let client = CoinMarketProClient::new(config)?;

  println!("🌐 Global metrics");
  let global = client.global_metrics().quotes(Params::new().with("convert", "USD")).await?;
  if check_result(&global) {
    if let Some(metrics) = global.body().get(0) {
      println!("  BTC dominance: {}", field(metrics, "btc_dominance"));
      println!("  ETH dominance: {}", field(metrics, "eth_dominance"));
      println!(
        "  Total market cap (USD): {}",
        metrics.pointer("/quote/USD/total_market_cap").unwrap_or(&Value::Null)
      );
    }
  }

  println!("\n📈 Top 10 by market cap");
  let listings = client.cryptocurrency().listings(Params::new().with("limit", 10).with("convert", "USD")).await?;
  if check_result(&listings) {
    for coin in listings.body().as_array().into_iter().flatten() {
      println!(
        "  #{:<3} {:<6} {:>16}",
        field(coin, "cmc_rank"),
        coin["symbol"].as_str().unwrap_or("?"),
        coin.pointer("/quote/USD/price").unwrap_or(&Value::Null)
      );
    }
    if let Some(credits) = listings.status().credit_count() {
      println!("  ({} credits used)", credits);
    }
  }

  println!("\n💱 1.5 BTC in EUR");
  let conversion = client
    .tools()
    .price_conversion(Params::new().with("amount", 1.5).with("id", 1).with("convert", "EUR"))
    .await?;
  if check_result(&conversion) {
    if let Some(quote) = conversion.body().get(0) {
      println!("  {}", quote.pointer("/quote/EUR/price").unwrap_or(&Value::Null));
    }
  }

  Ok(())
}

/// Print the provider's error for a failed result; true when the body is usable
fn check_result(result: &ApiResult) -> bool {
  if result.is_success() {
    return true;
  }
  println!(
    "  ❌ HTTP {}: {}",
    result.code(),
    result.status().error_message().unwrap_or("unknown error")
  );
  false
}

fn field<'a>(value: &'a Value, name: &str) -> &'a Value {
  value.get(name).unwrap_or(&Value::Null)
}
