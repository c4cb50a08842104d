//! Query parameter normalization
//!
//! Callers hand in loosely-typed parameters (lists of ids, padded symbols, numbers).
//! Before a request goes out they are standardized into the provider's canonical form:
//! lists become comma-joined strings, strings are trimmed, everything else passes
//! through, and blank values are dropped so they never reach the query string.

use cmc_core::{Endpoint, Error, Result};
use std::collections::BTreeMap;
use std::fmt;
use url::form_urlencoded::byte_serialize;

/// A single query parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
  /// Free text, trimmed on normalization
  Text(String),
  /// Whole number
  Integer(i64),
  /// Decimal number, e.g. a conversion `amount`
  Float(f64),
  /// Flag
  Bool(bool),
  /// Several values, joined with commas on normalization
  List(Vec<ParamValue>),
}

impl ParamValue {
  /// Canonical form: lists comma-joined (order kept, no dedup), text trimmed,
  /// numbers and flags unchanged.
  pub fn standardize(self) -> ParamValue {
    match self {
      ParamValue::List(items) => ParamValue::Text(join(&items)),
      ParamValue::Text(text) => ParamValue::Text(text.trim().to_string()),
      other => other,
    }
  }

  /// Empty or whitespace-only text, or an empty list. Numbers and flags are never blank.
  pub fn is_blank(&self) -> bool {
    match self {
      ParamValue::Text(text) => text.trim().is_empty(),
      ParamValue::List(items) => items.iter().all(ParamValue::is_blank),
      _ => false,
    }
  }
}

fn join(items: &[ParamValue]) -> String {
  items.iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
}

impl fmt::Display for ParamValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ParamValue::Text(text) => f.write_str(text),
      ParamValue::Integer(n) => write!(f, "{}", n),
      ParamValue::Float(n) => write!(f, "{}", n),
      ParamValue::Bool(b) => write!(f, "{}", b),
      ParamValue::List(items) => f.write_str(&join(items)),
    }
  }
}

impl From<String> for ParamValue {
  fn from(value: String) -> Self {
    ParamValue::Text(value)
  }
}

impl From<&str> for ParamValue {
  fn from(value: &str) -> Self {
    ParamValue::Text(value.to_string())
  }
}

impl From<&String> for ParamValue {
  fn from(value: &String) -> Self {
    ParamValue::Text(value.clone())
  }
}

impl From<i32> for ParamValue {
  fn from(value: i32) -> Self {
    ParamValue::Integer(value.into())
  }
}

impl From<i64> for ParamValue {
  fn from(value: i64) -> Self {
    ParamValue::Integer(value)
  }
}

impl From<u32> for ParamValue {
  fn from(value: u32) -> Self {
    ParamValue::Integer(value.into())
  }
}

impl From<u64> for ParamValue {
  fn from(value: u64) -> Self {
    // Beyond i64 the decimal text is sent unchanged.
    i64::try_from(value).map_or_else(|_| ParamValue::Text(value.to_string()), ParamValue::Integer)
  }
}

impl From<usize> for ParamValue {
  fn from(value: usize) -> Self {
    ParamValue::from(value as u64)
  }
}

impl From<f64> for ParamValue {
  fn from(value: f64) -> Self {
    ParamValue::Float(value)
  }
}

impl From<bool> for ParamValue {
  fn from(value: bool) -> Self {
    ParamValue::Bool(value)
  }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
  fn from(values: Vec<T>) -> Self {
    ParamValue::List(values.into_iter().map(Into::into).collect())
  }
}

impl<T: Into<ParamValue>, const N: usize> From<[T; N]> for ParamValue {
  fn from(values: [T; N]) -> Self {
    ParamValue::List(values.into_iter().map(Into::into).collect())
  }
}

impl<T: Clone + Into<ParamValue>> From<&[T]> for ParamValue {
  fn from(values: &[T]) -> Self {
    ParamValue::List(values.iter().cloned().map(Into::into).collect())
  }
}

/// Parameters for a single call, keyed by provider parameter name.
///
/// Keys are kept sorted, which is also the order they appear in the query string.
///
/// ```
/// use cmc_client::Params;
///
/// let params = Params::new().with("id", [1, 2, 3]).with("convert", " USD ").normalize();
/// assert_eq!(params.to_query_string(), "convert=USD&id=1,2,3");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
  values: BTreeMap<String, ParamValue>,
}

impl Params {
  /// Empty parameter set
  pub fn new() -> Self {
    Self::default()
  }

  /// Builder-style insert
  pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
    self.insert(key, value);
    self
  }

  /// Insert or replace a value, returning the previous one
  pub fn insert(
    &mut self,
    key: impl Into<String>,
    value: impl Into<ParamValue>,
  ) -> Option<ParamValue> {
    self.values.insert(key.into(), value.into())
  }

  /// Value stored under `key`
  pub fn get(&self, key: &str) -> Option<&ParamValue> {
    self.values.get(key)
  }

  /// True when `key` is present with a non-blank value
  pub fn has_value(&self, key: &str) -> bool {
    self.values.get(key).is_some_and(|value| !value.is_blank())
  }

  /// Number of parameters
  pub fn len(&self) -> usize {
    self.values.len()
  }

  /// True when no parameters are set
  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }

  /// Iterate in key order
  pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
    self.values.iter().map(|(key, value)| (key.as_str(), value))
  }

  /// Standardize every value and drop the blank ones
  pub fn normalize(self) -> Params {
    let values = self
      .values
      .into_iter()
      .map(|(key, value)| (key, value.standardize()))
      .filter(|(_, value)| !value.is_blank())
      .collect();
    Params { values }
  }

  /// Fail unless `key` has a non-blank value
  pub fn require(&self, key: &str) -> Result<()> {
    if self.has_value(key) {
      Ok(())
    } else {
      Err(Error::InvalidArgument(format!("{} is required.", key)))
    }
  }

  /// Fail unless at least one of `keys` has a non-blank value.
  ///
  /// The message names every accepted key: `At least one "id" or "symbol" is required.`
  pub fn require_any(&self, keys: &[&str]) -> Result<()> {
    if keys.iter().any(|key| self.has_value(key)) {
      return Ok(());
    }
    let accepted = keys.iter().map(|key| format!("\"{}\"", key)).collect::<Vec<_>>().join(" or ");
    Err(Error::InvalidArgument(format!("At least one {} is required.", accepted)))
  }

  /// Preconditions of `endpoint`: `amount` first when required, then identity
  pub fn validate_for(&self, endpoint: Endpoint) -> Result<()> {
    if endpoint.requires_amount() {
      self.require("amount")?;
    }
    match endpoint.identity() {
      Some(identity) => self.require_any(identity.keys()),
      None => Ok(()),
    }
  }

  /// Form-encoded query string. Commas inside values stay literal, matching the
  /// provider's list convention.
  pub fn to_query_string(&self) -> String {
    self
      .values
      .iter()
      .map(|(key, value)| format!("{}={}", encode(key), encode_list(&value.to_string())))
      .collect::<Vec<_>>()
      .join("&")
  }
}

fn encode(raw: &str) -> String {
  byte_serialize(raw.as_bytes()).collect()
}

fn encode_list(raw: &str) -> String {
  raw.split(',').map(encode).collect::<Vec<_>>().join(",")
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    let mut params = Params::new();
    for (key, value) in iter {
      params.insert(key, value);
    }
    params
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_lists_are_comma_joined_in_order() {
    let params = Params::new().with("id", vec![1, 2, 3]).normalize();
    assert_eq!(params.get("id"), Some(&ParamValue::Text("1,2,3".to_string())));

    let mixed = ParamValue::List(vec!["hi".into(), 1.into()]);
    assert_eq!(mixed.standardize(), ParamValue::Text("hi,1".to_string()));

    let repeated = Params::new().with("symbol", ["ETH", "BTC", "ETH"]).normalize();
    assert_eq!(repeated.get("symbol"), Some(&ParamValue::Text("ETH,BTC,ETH".to_string())));
  }

  #[test]
  fn test_standardize_mixed_params() {
    let params = Params::new()
      .with("foo", [1, 2, 3])
      .with("bar", " 4,5,6 ")
      .with("baz", 13.0)
      .normalize();

    let expected = Params::new().with("foo", "1,2,3").with("bar", "4,5,6").with("baz", 13.0);
    assert_eq!(params, expected);
  }

  #[test]
  fn test_passthrough_values() {
    assert_eq!(ParamValue::Float(133.54).standardize(), ParamValue::Float(133.54));
    assert_eq!(ParamValue::Integer(7).standardize(), ParamValue::Integer(7));
    assert_eq!(ParamValue::Bool(false).standardize(), ParamValue::Bool(false));
    assert_eq!(
      ParamValue::from(" i haz crypto! ").standardize(),
      ParamValue::Text("i haz crypto!".to_string())
    );
  }

  #[test]
  fn test_blank_values_are_dropped() {
    let params = Params::new()
      .with("id", "   ")
      .with("symbol", Vec::<String>::new())
      .with("aux", false)
      .with("limit", 0)
      .normalize();

    assert_eq!(params.len(), 2);
    assert!(params.get("id").is_none());
    assert!(params.get("symbol").is_none());
    assert_eq!(params.get("aux"), Some(&ParamValue::Bool(false)));
  }

  #[test]
  fn test_unsigned_values() {
    let limit: usize = 5000;
    let params = Params::new().with("limit", limit).with("start", 1u64).with("id", vec![1usize, 2]);
    assert_eq!(params.get("limit"), Some(&ParamValue::Integer(5000)));
    assert_eq!(params.get("start"), Some(&ParamValue::Integer(1)));
    assert_eq!(params.normalize().to_query_string(), "id=1,2&limit=5000&start=1");

    assert_eq!(ParamValue::from(u64::MAX), ParamValue::Text("18446744073709551615".to_string()));
  }

  #[test]
  fn test_empty_params_normalize_to_empty() {
    assert!(Params::new().normalize().is_empty());
    assert_eq!(Params::new().to_query_string(), "");
  }

  #[test]
  fn test_require_any_messages() {
    let params = Params::new().with("foo", 1);
    let err = params.require_any(&["id", "symbol"]).unwrap_err();
    assert_eq!(err.to_string(), "At least one \"id\" or \"symbol\" is required.");

    let err = params.require_any(&["id", "slug"]).unwrap_err();
    assert_eq!(err.to_string(), "At least one \"id\" or \"slug\" is required.");

    assert!(Params::new().with("id", 1).require_any(&["id", "symbol"]).is_ok());
    assert!(Params::new().with("symbol", ["BTC"]).require_any(&["id", "symbol"]).is_ok());
    assert!(Params::new().with("id", " ").require_any(&["id", "symbol"]).is_err());
  }

  #[test]
  fn test_validation_is_repeatable() {
    let failing = Params::new().with("convert", "USD");
    let passing = Params::new().with("slug", "binance");
    for _ in 0..2 {
      assert!(failing.validate_for(Endpoint::ExchangeInfo).is_err());
      assert!(passing.validate_for(Endpoint::ExchangeInfo).is_ok());
    }
  }

  #[test]
  fn test_amount_checked_before_identity() {
    let err = Params::new().with("foo", 1).validate_for(Endpoint::PriceConversion).unwrap_err();
    assert_eq!(err.to_string(), "amount is required.");

    let err = Params::new().with("amount", 1).validate_for(Endpoint::PriceConversion).unwrap_err();
    assert_eq!(err.to_string(), "At least one \"id\" or \"slug\" is required.");

    let ok = Params::new().with("amount", 10.5).with("id", 1).validate_for(Endpoint::PriceConversion);
    assert!(ok.is_ok());
  }

  #[test]
  fn test_endpoints_without_identity_accept_anything() {
    assert!(Params::new().validate_for(Endpoint::CryptocurrencyMap).is_ok());
    assert!(Params::new().validate_for(Endpoint::GlobalMetricsQuotesHistorical).is_ok());
  }

  #[test]
  fn test_query_string_keeps_commas_literal() {
    let params = Params::new()
      .with("symbol", ["BTC", "ETH"])
      .with("time_start", "2018-09-19 00:00")
      .with("amount", 1.5)
      .normalize();
    assert_eq!(params.to_query_string(), "amount=1.5&symbol=BTC,ETH&time_start=2018-09-19+00%3A00");
  }

  #[test]
  fn test_collect_into_params() {
    let params: Params = vec![("limit", 10), ("start", 1)].into_iter().collect();
    assert_eq!(params.get("limit"), Some(&ParamValue::Integer(10)));
    assert_eq!(params.iter().map(|(k, _)| k).collect::<Vec<_>>(), vec!["limit", "start"]);
  }
}
