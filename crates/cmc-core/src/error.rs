use std::fmt;
use thiserror::Error;

/// The main error type for cmc-* crates
///
/// Provider-side failures (a received response outside 2xx) are not errors; they come
/// back as a failed `ApiResult`.
#[derive(Error, Debug)]
pub enum Error {
  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// API key error
  #[error("Failed to retrieve API key: {0}")]
  ApiKey(String),

  /// Caller supplied parameters that fail a precondition. Raised before any request.
  #[error("{0}")]
  InvalidArgument(String),

  /// No response was received before a timeout elapsed
  #[error("{0}")]
  Timeout(TimeoutKind),

  /// The response body could not be parsed as JSON
  #[error("JSON parse error: {message}")]
  ResponseParse {
    /// Parser message
    message: String,
    /// The raw body that failed to parse
    body: String,
  },

  /// HTTP transport error with no response to report
  #[error("HTTP error: {0}")]
  Http(String),

  /// Serialization/Deserialization error
  #[error("Serialization error: {0}")]
  Serde(#[from] serde_json::Error),

  /// Date/Time parsing error
  #[error("Date parsing error: {0}")]
  ParseDate(#[from] chrono::ParseError),
}

impl Error {
  /// True for connect and total-request timeouts
  pub fn is_timeout(&self) -> bool {
    matches!(self, Error::Timeout(_))
  }

  /// True when the caller's parameters were rejected before the request
  pub fn is_invalid_argument(&self) -> bool {
    matches!(self, Error::InvalidArgument(_))
  }
}

/// Which of the two transport timeouts fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeoutKind {
  /// Connection could not be established in time
  Connect,
  /// The whole request did not complete in time
  Request,
}

impl TimeoutKind {
  /// Classify a transport failure from its connect/timeout flags.
  ///
  /// Returns `None` when the failure was not a timeout at all.
  pub fn classify(is_connect: bool, is_timeout: bool) -> Option<Self> {
    match (is_connect, is_timeout) {
      (true, true) => Some(TimeoutKind::Connect),
      (false, true) => Some(TimeoutKind::Request),
      _ => None,
    }
  }
}

impl fmt::Display for TimeoutKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      TimeoutKind::Connect => write!(f, "Gateway timeout"),
      TimeoutKind::Request => write!(f, "Request timeout"),
    }
  }
}

/// Result type alias for cmc-* crates
pub type Result<T> = std::result::Result<T, Error>;
