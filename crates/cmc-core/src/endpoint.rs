//! Catalog of the CoinMarketCap Pro operations this client binds.
//!
//! Each [`Endpoint`] knows its provider path, which identifying parameters it needs,
//! and how the `data` payload is reshaped before it reaches the caller.

use serde_json::Value;
use std::fmt;

/// The supported CoinMarketCap Pro operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
  // Cryptocurrency
  CryptocurrencyInfo,
  CryptocurrencyMap,
  CryptocurrencyListings,
  CryptocurrencyListingsHistorical,
  CryptocurrencyMarketPairs,
  CryptocurrencyOhlcv,
  CryptocurrencyOhlcvHistorical,
  CryptocurrencyQuotes,
  CryptocurrencyQuotesHistorical,

  // Exchange
  ExchangeInfo,
  ExchangeMap,
  ExchangeListings,
  ExchangeListingsHistorical,
  ExchangeMarketPairs,
  ExchangeQuotes,
  ExchangeQuotesHistorical,

  // Global metrics
  GlobalMetricsQuotes,
  GlobalMetricsQuotesHistorical,

  // Tools
  PriceConversion,
}

impl Endpoint {
  /// Every operation, in catalog order
  pub const ALL: [Endpoint; 19] = [
    Endpoint::CryptocurrencyInfo,
    Endpoint::CryptocurrencyMap,
    Endpoint::CryptocurrencyListings,
    Endpoint::CryptocurrencyListingsHistorical,
    Endpoint::CryptocurrencyMarketPairs,
    Endpoint::CryptocurrencyOhlcv,
    Endpoint::CryptocurrencyOhlcvHistorical,
    Endpoint::CryptocurrencyQuotes,
    Endpoint::CryptocurrencyQuotesHistorical,
    Endpoint::ExchangeInfo,
    Endpoint::ExchangeMap,
    Endpoint::ExchangeListings,
    Endpoint::ExchangeListingsHistorical,
    Endpoint::ExchangeMarketPairs,
    Endpoint::ExchangeQuotes,
    Endpoint::ExchangeQuotesHistorical,
    Endpoint::GlobalMetricsQuotes,
    Endpoint::GlobalMetricsQuotesHistorical,
    Endpoint::PriceConversion,
  ];

  /// Path relative to the versioned base URL
  pub fn path(&self) -> &'static str {
    match self {
      Endpoint::CryptocurrencyInfo => "/cryptocurrency/info",
      Endpoint::CryptocurrencyMap => "/cryptocurrency/map",
      Endpoint::CryptocurrencyListings => "/cryptocurrency/listings/latest",
      Endpoint::CryptocurrencyListingsHistorical => "/cryptocurrency/listings/historical",
      Endpoint::CryptocurrencyMarketPairs => "/cryptocurrency/market-pairs/latest",
      Endpoint::CryptocurrencyOhlcv => "/cryptocurrency/ohlcv/latest",
      Endpoint::CryptocurrencyOhlcvHistorical => "/cryptocurrency/ohlcv/historical",
      Endpoint::CryptocurrencyQuotes => "/cryptocurrency/quotes/latest",
      Endpoint::CryptocurrencyQuotesHistorical => "/cryptocurrency/quotes/historical",

      Endpoint::ExchangeInfo => "/exchange/info",
      Endpoint::ExchangeMap => "/exchange/map",
      Endpoint::ExchangeListings => "/exchange/listings/latest",
      Endpoint::ExchangeListingsHistorical => "/exchange/listings/historical",
      Endpoint::ExchangeMarketPairs => "/exchange/market-pairs/latest",
      Endpoint::ExchangeQuotes => "/exchange/quotes/latest",
      Endpoint::ExchangeQuotesHistorical => "/exchange/quotes/historical",

      Endpoint::GlobalMetricsQuotes => "/global-metrics/quotes/latest",
      Endpoint::GlobalMetricsQuotesHistorical => "/global-metrics/quotes/historical",

      Endpoint::PriceConversion => "/tools/price-conversion",
    }
  }

  /// Identifying parameters the operation needs, if any
  pub fn identity(&self) -> Option<Identity> {
    match self {
      Endpoint::CryptocurrencyInfo
      | Endpoint::CryptocurrencyMarketPairs
      | Endpoint::CryptocurrencyOhlcv
      | Endpoint::CryptocurrencyOhlcvHistorical
      | Endpoint::CryptocurrencyQuotes
      | Endpoint::CryptocurrencyQuotesHistorical => Some(Identity::IdOrSymbol),

      Endpoint::ExchangeInfo
      | Endpoint::ExchangeMarketPairs
      | Endpoint::ExchangeQuotes
      | Endpoint::ExchangeQuotesHistorical
      | Endpoint::PriceConversion => Some(Identity::IdOrSlug),

      _ => None,
    }
  }

  /// Whether a non-blank `amount` must be present. Checked before identity.
  pub fn requires_amount(&self) -> bool {
    matches!(self, Endpoint::PriceConversion)
  }

  /// Shape applied to the `data` payload once the response is parsed
  pub fn reshape(&self) -> Reshape {
    match self {
      Endpoint::CryptocurrencyInfo | Endpoint::ExchangeInfo | Endpoint::ExchangeQuotes => {
        Reshape::MapToList
      }
      Endpoint::ExchangeMarketPairs
      | Endpoint::ExchangeQuotesHistorical
      | Endpoint::GlobalMetricsQuotes
      | Endpoint::PriceConversion => Reshape::SingleToList,
      Endpoint::GlobalMetricsQuotesHistorical => Reshape::ExtractField("quotes"),
      _ => Reshape::None,
    }
  }
}

impl fmt::Display for Endpoint {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.path())
  }
}

/// Which keys can identify the subject of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Identity {
  /// Cryptocurrencies: CoinMarketCap id or ticker symbol
  IdOrSymbol,
  /// Exchanges and conversions: CoinMarketCap id or slug
  IdOrSlug,
}

impl Identity {
  /// Accepted parameter names, any one of which satisfies the requirement
  pub fn keys(&self) -> &'static [&'static str] {
    match self {
      Identity::IdOrSymbol => &["id", "symbol"],
      Identity::IdOrSlug => &["id", "slug"],
    }
  }
}

/// Rewrites a provider `data` payload into the shape callers get back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reshape {
  /// Body returned as the provider sent it
  None,
  /// `{"1": {..}, "2": {..}}` becomes `[{..}, {..}]` in provider order
  MapToList,
  /// A lone object becomes a one-element list
  SingleToList,
  /// Only the named field of the payload is kept
  ExtractField(&'static str),
}

impl Reshape {
  /// Apply the policy. Payloads of an unexpected shape (e.g. `null` on a failed
  /// response) come back untouched.
  pub fn apply(&self, body: Value) -> Value {
    match (self, body) {
      (Reshape::MapToList, Value::Object(map)) => {
        Value::Array(map.into_iter().map(|(_, value)| value).collect())
      }
      (Reshape::SingleToList, Value::Object(map)) => Value::Array(vec![Value::Object(map)]),
      (Reshape::ExtractField(name), Value::Object(mut map)) => {
        map.remove(*name).unwrap_or(Value::Null)
      }
      (_, body) => body,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_map_to_list_keeps_provider_order() {
    let body: Value = serde_json::from_str(r#"{"2": {"name":"B"}, "1": {"name":"A"}}"#).unwrap();
    assert_eq!(Reshape::MapToList.apply(body), json!([{"name": "B"}, {"name": "A"}]));

    let body = json!({"1": {"name": "A"}, "2": {"name": "B"}});
    assert_eq!(Reshape::MapToList.apply(body), json!([{"name": "A"}, {"name": "B"}]));
  }

  #[test]
  fn test_single_to_list() {
    assert_eq!(Reshape::SingleToList.apply(json!({"name": "X"})), json!([{"name": "X"}]));
    assert_eq!(Reshape::SingleToList.apply(json!([1, 2])), json!([1, 2]));
  }

  #[test]
  fn test_extract_field() {
    let body = json!({"quotes": [{"total_market_cap": 1}], "id": 1});
    assert_eq!(Reshape::ExtractField("quotes").apply(body), json!([{"total_market_cap": 1}]));
    assert_eq!(Reshape::ExtractField("quotes").apply(json!({"other": 1})), Value::Null);
  }

  #[test]
  fn test_unexpected_shapes_pass_through() {
    for reshape in [
      Reshape::None,
      Reshape::MapToList,
      Reshape::SingleToList,
      Reshape::ExtractField("quotes"),
    ] {
      assert_eq!(reshape.apply(Value::Null), Value::Null);
      assert_eq!(reshape.apply(json!("text")), json!("text"));
    }
    assert_eq!(Reshape::None.apply(json!({"a": 1})), json!({"a": 1}));
  }

  #[test]
  fn test_catalog_paths() {
    assert_eq!(Endpoint::CryptocurrencyQuotes.path(), "/cryptocurrency/quotes/latest");
    assert_eq!(Endpoint::CryptocurrencyQuotesHistorical.to_string(), "/cryptocurrency/quotes/historical");
    assert_eq!(Endpoint::PriceConversion.path(), "/tools/price-conversion");
    for endpoint in Endpoint::ALL {
      assert!(endpoint.path().starts_with('/'));
      assert_eq!(endpoint.path().trim(), endpoint.path());
    }
  }

  #[test]
  fn test_catalog_rules() {
    assert_eq!(Endpoint::CryptocurrencyInfo.identity(), Some(Identity::IdOrSymbol));
    assert_eq!(Endpoint::CryptocurrencyMap.identity(), None);
    assert_eq!(Endpoint::ExchangeMarketPairs.identity(), Some(Identity::IdOrSlug));
    assert_eq!(Endpoint::GlobalMetricsQuotes.identity(), None);
    assert!(Endpoint::PriceConversion.requires_amount());
    assert!(!Endpoint::ExchangeInfo.requires_amount());
    assert_eq!(Endpoint::GlobalMetricsQuotesHistorical.reshape(), Reshape::ExtractField("quotes"));
    assert_eq!(Endpoint::CryptocurrencyListings.reshape(), Reshape::None);
    assert_eq!(Identity::IdOrSlug.keys(), &["id", "slug"]);
  }
}
