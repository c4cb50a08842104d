//! Result envelope for a single API call
//!
//! Every HTTP response, whatever its status code, becomes an [`ApiResult`]. The
//! outcome is derived from the status code alone: 200..=299 is a success, anything
//! else a failure. Failures are values, not errors, so callers branch on
//! [`ApiResult::is_failure`] instead of matching on `Err`.

use chrono::{DateTime, Utc};
use cmc_core::{Error, Reshape, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Success/failure discriminant merged into the provider status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
  /// HTTP status in 200..=299
  Success,
  /// Any other HTTP status
  Failed,
}

impl Outcome {
  /// Outcome implied by an HTTP status code
  pub fn from_code(code: u16) -> Self {
    if (200..=299).contains(&code) {
      Outcome::Success
    } else {
      Outcome::Failed
    }
  }
}

/// Provider `status` block with the client's `result` merged in
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseStatus {
  /// Success or failure, from the HTTP status code
  pub result: Outcome,
  /// Every field the provider reported (`timestamp`, `error_code`, `credit_count`, ...)
  #[serde(flatten)]
  pub fields: Map<String, Value>,
}

impl ResponseStatus {
  /// Raw provider field
  pub fn get(&self, key: &str) -> Option<&Value> {
    self.fields.get(key)
  }

  /// Provider error code, `0` on success
  pub fn error_code(&self) -> Option<i64> {
    self.get("error_code").and_then(Value::as_i64)
  }

  /// Provider error message, when one was given
  pub fn error_message(&self) -> Option<&str> {
    self.get("error_message").and_then(Value::as_str)
  }

  /// API credits charged for the call
  pub fn credit_count(&self) -> Option<i64> {
    self.get("credit_count").and_then(Value::as_i64)
  }

  /// Server-side processing time in milliseconds
  pub fn elapsed(&self) -> Option<i64> {
    self.get("elapsed").and_then(Value::as_i64)
  }

  /// Provider timestamp of the response
  pub fn timestamp(&self) -> Result<Option<DateTime<Utc>>> {
    let Some(raw) = self.get("timestamp").and_then(Value::as_str) else {
      return Ok(None);
    };
    Ok(Some(DateTime::parse_from_rfc3339(raw)?.with_timezone(&Utc)))
  }
}

/// Outcome of one API call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResult {
  status: ResponseStatus,
  code: u16,
  headers: BTreeMap<String, String>,
  body: Value,
  #[serde(skip)]
  raw: Value,
}

impl ApiResult {
  /// Envelope for a 2xx response
  pub fn success(code: u16, headers: BTreeMap<String, String>, body: &str) -> Result<Self> {
    Self::build(Outcome::Success, code, headers, body)
  }

  /// Envelope for a non-2xx response
  pub fn failed(code: u16, headers: BTreeMap<String, String>, body: &str) -> Result<Self> {
    Self::build(Outcome::Failed, code, headers, body)
  }

  /// Envelope with the outcome derived from `code`
  pub fn from_parts(code: u16, headers: BTreeMap<String, String>, body: &str) -> Result<Self> {
    Self::build(Outcome::from_code(code), code, headers, body)
  }

  fn build(
    outcome: Outcome,
    code: u16,
    headers: BTreeMap<String, String>,
    body: &str,
  ) -> Result<Self> {
    let raw: Value = serde_json::from_str(body)
      .map_err(|e| Error::ResponseParse { message: e.to_string(), body: body.to_string() })?;

    let mut fields = match raw.get("status") {
      Some(Value::Object(fields)) => fields.clone(),
      _ => Map::new(),
    };
    // `result` is ours; the HTTP outcome always wins.
    fields.remove("result");
    let data = raw.get("data").cloned().unwrap_or(Value::Null);

    Ok(Self { status: ResponseStatus { result: outcome, fields }, code, headers, body: data, raw })
  }

  /// Provider status merged with the outcome
  pub fn status(&self) -> &ResponseStatus {
    &self.status
  }

  /// HTTP status code
  pub fn code(&self) -> u16 {
    self.code
  }

  /// Response headers, names lower-cased
  pub fn headers(&self) -> &BTreeMap<String, String> {
    &self.headers
  }

  /// Single header by case-insensitive name
  pub fn header(&self, name: &str) -> Option<&str> {
    self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
  }

  /// The provider `data` payload after any reshaping; `Null` when absent
  pub fn body(&self) -> &Value {
    &self.body
  }

  /// The whole parsed response, before reshaping
  pub fn raw(&self) -> &Value {
    &self.raw
  }

  /// HTTP status was 2xx
  pub fn is_success(&self) -> bool {
    self.status.result == Outcome::Success
  }

  /// HTTP status was not 2xx
  pub fn is_failure(&self) -> bool {
    self.status.result == Outcome::Failed
  }

  /// Rewrite the body with `policy`. Status, code and headers are left alone.
  pub fn reshape(mut self, policy: Reshape) -> Self {
    self.body = policy.apply(std::mem::take(&mut self.body));
    self
  }

  /// `{status, code, headers, body}` as a JSON object
  pub fn to_map(&self) -> Value {
    serde_json::json!({
      "status": self.status,
      "code": self.code,
      "headers": self.headers,
      "body": self.body,
    })
  }

  /// Take ownership of the body
  pub fn into_body(self) -> Value {
    self.body
  }

  /// Decode the body into a caller-defined type
  pub fn body_as<T: DeserializeOwned>(&self) -> Result<T> {
    Ok(T::deserialize(&self.body)?)
  }
}
