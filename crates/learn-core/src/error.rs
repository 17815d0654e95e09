use serde::Deserialize;
use thiserror::Error;

/// The main error type for learn-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// Missing application key/secret or access token
  #[error("Missing credentials: {0}")]
  Credentials(String),

  /// Serialization/Deserialization error
  #[error("Serialization error")]
  Serde(#[from] serde_json::Error),

  /// URL could not be built
  #[error("Invalid URL: {0}")]
  Url(#[from] url::ParseError),

  /// A `{placeholder}` in the path template was never given a value
  #[error("Missing path parameter `{name}` for {template}")]
  MissingPathParam { name: String, template: String },

  /// A path parameter was supplied that the template does not contain
  #[error("Unknown path parameter `{name}` for {template}")]
  UnknownPathParam { name: String, template: String },

  /// HTTP transport error
  #[error("HTTP error: {0}")]
  Http(String),

  /// Non-2xx response, passed through unmodified
  #[error("HTTP {status}: {message}")]
  Status { status: u16, message: String },

  /// Parse error for response bodies
  #[error("Parse error: {0}")]
  Parse(String),
}

impl Error {
  /// HTTP status code when the server answered with a non-2xx response.
  pub fn status(&self) -> Option<u16> {
    match self {
      Error::Status { status, .. } => Some(*status),
      _ => None,
    }
  }

  /// Caller lacks the entitlement for the operation.
  pub fn is_forbidden(&self) -> bool {
    self.status() == Some(403)
  }

  /// Resource does not exist.
  pub fn is_not_found(&self) -> bool {
    self.status() == Some(404)
  }

  /// Conflicting state, e.g. joining a group that is not open for sign-up.
  pub fn is_conflict(&self) -> bool {
    self.status() == Some(409)
  }

  /// Request was understood but rejected, e.g. an upload the server refused.
  pub fn is_unprocessable(&self) -> bool {
    self.status() == Some(422)
  }

  /// Resource is locked, e.g. by an SIS import still in progress.
  pub fn is_locked(&self) -> bool {
    self.status() == Some(423)
  }
}

/// Error body returned by the Learn REST API on non-2xx responses.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestException {
  pub status: Option<u16>,
  pub code: Option<String>,
  pub message: Option<String>,
  pub developer_message: Option<String>,
  pub extra_info: Option<String>,
}

impl RestException {
  /// Build the pass-through error for a failed response.
  ///
  /// Prefers the server's `message`; falls back to the raw body (truncated)
  /// when it is not a recognisable error document.
  pub fn into_error(status: u16, body: &str) -> Error {
    let message = serde_json::from_str::<RestException>(body)
      .ok()
      .and_then(|e| e.message.or(e.developer_message))
      .unwrap_or_else(|| body.chars().take(200).collect());
    Error::Status { status, message }
  }
}

/// Result type alias for learn-* crates
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_status_helpers() {
    let err = Error::Status { status: 423, message: "locked".to_string() };
    assert!(err.is_locked());
    assert!(!err.is_not_found());
    assert_eq!(err.status(), Some(423));

    let err = Error::Http("connection refused".to_string());
    assert_eq!(err.status(), None);
    assert!(!err.is_forbidden());
  }

  #[test]
  fn test_rest_exception_message() {
    let body = r#"{"status":404,"message":"Course not found","extraInfo":"abc"}"#;
    let err = RestException::into_error(404, body);
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "HTTP 404: Course not found");
  }

  #[test]
  fn test_rest_exception_falls_back_to_body() {
    let err = RestException::into_error(502, "Bad Gateway");
    match err {
      Error::Status { status, message } => {
        assert_eq!(status, 502);
        assert_eq!(message, "Bad Gateway");
      }
      other => panic!("Expected Status error, got {other:?}"),
    }
  }
}
