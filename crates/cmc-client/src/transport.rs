//! HTTP transport layer for CoinMarketCap Pro API requests

use crate::params::Params;
use crate::response::ApiResult;
use cmc_core::{Config, Endpoint, Error, Result, TimeoutKind, API_KEY_HEADER};
use reqwest::header::{
  HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_ENCODING, CONTENT_TYPE, USER_AGENT,
};
use reqwest::{Client, Response};
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};
use url::Url;

/// User agent sent with every request
pub const CLIENT_USER_AGENT: &str = concat!("cmc-client/", env!("CARGO_PKG_VERSION"));

/// HTTP transport layer for making requests to the CoinMarketCap Pro API
pub struct Transport {
  client: Client,
  base_url: String,
  api_key: String,
  timeout: Duration,
  connect_timeout: Duration,
}

impl Transport {
  /// Create a new transport instance
  pub fn new(config: &Config) -> Result<Self> {
    let timeout = Duration::from_secs(config.timeout_secs);
    let connect_timeout = Duration::from_secs(config.connect_timeout_secs);

    let client = Client::builder()
      .timeout(timeout)
      .connect_timeout(connect_timeout)
      .gzip(true)
      .deflate(true)
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self {
      client,
      base_url: config.base_url.trim_end_matches('/').to_string(),
      api_key: config.api_key.clone(),
      timeout,
      connect_timeout,
    })
  }

  /// Validate, normalize and send a catalog operation, then reshape its body
  ///
  /// Parameter problems are reported before anything touches the network.
  #[instrument(skip_all, fields(endpoint = %endpoint))]
  pub async fn execute(&self, endpoint: Endpoint, params: Params) -> Result<ApiResult> {
    params.validate_for(endpoint)?;
    let result = self.get(endpoint.path(), params, HeaderMap::new()).await?;
    Ok(result.reshape(endpoint.reshape()))
  }

  /// Make a GET request to the CoinMarketCap Pro API
  ///
  /// # Arguments
  ///
  /// * `path` - Path relative to the base URL, e.g. `/cryptocurrency/map`
  /// * `params` - Query parameters; normalized and compacted before sending
  /// * `headers` - Extra headers, overriding the defaults on collision
  ///
  /// # Returns
  ///
  /// Any received response becomes an [`ApiResult`], successful or not. Timeouts,
  /// other transport failures and unparsable bodies are errors.
  #[instrument(skip_all, fields(path = %path))]
  pub async fn get(&self, path: &str, params: Params, headers: HeaderMap) -> Result<ApiResult> {
    let params = params.normalize();
    let url = self.build_url(path, &params)?;
    debug!("Making request to: {}", url);

    let mut request_headers = self.default_headers()?;
    request_headers.extend(headers);

    let response = self
      .client
      .get(url.clone())
      .headers(request_headers)
      .send()
      .await
      .map_err(|e| classify_error(e, &url))?;

    let result = Self::read_result(response).await?;

    if result.is_success() {
      debug!(status = result.code(), body = %result.body(), "GET request succeeded");
    } else {
      warn!(status = result.code(), body = %result.body(), "Request Error");
    }

    Ok(result)
  }

  /// Turn any received response into an envelope
  async fn read_result(response: Response) -> Result<ApiResult> {
    let code = response.status().as_u16();
    let url = response.url().clone();
    let headers = header_map(response.headers());

    let text = response.text().await.map_err(|e| classify_error(e, &url))?;
    debug!("Response body length: {} bytes", text.len());

    ApiResult::from_parts(code, headers, &text).inspect_err(|e| {
      error!("Failed to parse JSON response: {}", e);
      error!("Response text (first 500 chars): {}", &text[..floor_char_boundary(&text, 500)]);
    })
  }

  /// Headers sent with every request
  pub fn default_headers(&self) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));
    headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("deflate, gzip"));

    let mut api_key = HeaderValue::from_str(&self.api_key)
      .map_err(|_| Error::ApiKey("API key contains invalid header characters".to_string()))?;
    api_key.set_sensitive(true);
    let name = HeaderName::from_bytes(API_KEY_HEADER.as_bytes())
      .map_err(|e| Error::Config(format!("Invalid API key header name: {}", e)))?;
    headers.insert(name, api_key);

    Ok(headers)
  }

  /// Build the full URL for an API request
  pub fn build_url(&self, path: &str, params: &Params) -> Result<Url> {
    let mut url = Url::parse(&format!("{}{}", self.base_url, path))
      .map_err(|e| Error::Http(format!("Invalid base URL: {}", e)))?;

    let query = params.to_query_string();
    if !query.is_empty() {
      url.set_query(Some(&query));
    }

    Ok(url)
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Get total request timeout duration
  pub fn timeout(&self) -> Duration {
    self.timeout
  }

  /// Get connection establishment timeout duration
  pub fn connect_timeout(&self) -> Duration {
    self.connect_timeout
  }
}

impl fmt::Debug for Transport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Transport")
      .field("base_url", &self.base_url)
      .field("api_key", &"[redacted]")
      .field("timeout", &self.timeout)
      .field("connect_timeout", &self.connect_timeout)
      .finish()
  }
}

/// Map a reqwest failure that carried no usable response onto the client error type
fn classify_error(e: reqwest::Error, url: &Url) -> Error {
  match TimeoutKind::classify(e.is_connect(), e.is_timeout()) {
    Some(kind) => {
      error!(url = %url, "{}", kind);
      Error::Timeout(kind)
    }
    None => {
      warn!(url = %url, "Request failed: {}", e);
      Error::Http(format!("Request failed: {}", e))
    }
  }
}

fn header_map(headers: &HeaderMap) -> BTreeMap<String, String> {
  let mut map: BTreeMap<String, String> = BTreeMap::new();
  for (name, value) in headers {
    let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
    map
      .entry(name.as_str().to_string())
      .and_modify(|existing| {
        existing.push_str(", ");
        existing.push_str(&value);
      })
      .or_insert(value);
  }
  map
}

fn floor_char_boundary(text: &str, max: usize) -> usize {
  if max >= text.len() {
    return text.len();
  }
  (0..=max).rev().find(|&i| text.is_char_boundary(i)).unwrap_or(0)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn transport() -> Transport {
    let config = Config::default_with_key("CoinMarketCap-Api-Key")
      .with_base_url("https://mock.coinmarketcap.com/v1/");
    Transport::new(&config).unwrap()
  }

  #[test]
  fn test_build_url() {
    let params = Params::new().with("id", [1, 2]).with("convert", "USD").normalize();
    let url = transport().build_url("/cryptocurrency/info", &params).unwrap();

    assert_eq!(
      url.as_str(),
      "https://mock.coinmarketcap.com/v1/cryptocurrency/info?convert=USD&id=1,2"
    );
  }

  #[test]
  fn test_build_url_without_params() {
    let url = transport().build_url("/exchange/map", &Params::new()).unwrap();
    assert_eq!(url.as_str(), "https://mock.coinmarketcap.com/v1/exchange/map");
    assert!(url.query().is_none());
  }

  #[test]
  fn test_default_headers() {
    let headers = transport().default_headers().unwrap();

    assert_eq!(headers.len(), 5);
    assert_eq!(headers[CONTENT_TYPE], "application/json");
    assert_eq!(headers[ACCEPT], "application/json");
    assert_eq!(headers[USER_AGENT], CLIENT_USER_AGENT);
    assert_eq!(headers[ACCEPT_ENCODING], "deflate, gzip");
    assert_eq!(headers["x-cmc_pro_api_key"], "CoinMarketCap-Api-Key");
    assert!(CLIENT_USER_AGENT.starts_with("cmc-client/"));
  }

  #[test]
  fn test_default_timeouts() {
    let transport = transport();
    assert_eq!(transport.timeout(), Duration::from_secs(10));
    assert_eq!(transport.connect_timeout(), Duration::from_secs(10));
    assert_eq!(transport.base_url(), "https://mock.coinmarketcap.com/v1");
  }

  #[test]
  fn test_debug_redacts_api_key() {
    let rendered = format!("{:?}", transport());
    assert!(!rendered.contains("CoinMarketCap-Api-Key"));
  }

  #[test]
  fn test_header_map_joins_repeated_values() {
    let mut headers = HeaderMap::new();
    headers.append("set-cookie", HeaderValue::from_static("a=1"));
    headers.append("set-cookie", HeaderValue::from_static("b=2"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let map = header_map(&headers);
    assert_eq!(map["set-cookie"], "a=1, b=2");
    assert_eq!(map["content-type"], "application/json");
  }

  #[test]
  fn test_floor_char_boundary() {
    assert_eq!(floor_char_boundary("abc", 500), 3);
    assert_eq!(floor_char_boundary("€€", 4), 3);
  }
}
