//! Configuration management for the Learn REST client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Main configuration struct for the Learn REST client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// Base URL of the Learn server, e.g. `https://learn.example.edu`
  pub base_url: String,

  /// REST application key (OAuth2 client id)
  pub app_key: Option<String>,

  /// REST application secret (OAuth2 client secret)
  pub app_secret: Option<String>,

  /// Pre-issued bearer token
  pub access_token: Option<String>,

  /// API rate limit (requests per minute)
  pub rate_limit: u32,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Maximum retries for requests that never reached the server
  pub max_retries: u32,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let base_url = env::var("LEARN_BASE_URL")
      .map_err(|_| Error::Config("LEARN_BASE_URL not set".to_string()))?;

    let rate_limit = env::var("LEARN_RATE_LIMIT")
      .unwrap_or_else(|_| crate::DEFAULT_RATE_LIMIT.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid LEARN_RATE_LIMIT".to_string()))?;

    let timeout_secs = env::var("LEARN_TIMEOUT_SECS")
      .unwrap_or_else(|_| crate::DEFAULT_TIMEOUT_SECS.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid LEARN_TIMEOUT_SECS".to_string()))?;

    let max_retries = env::var("LEARN_MAX_RETRIES")
      .unwrap_or_else(|_| crate::DEFAULT_MAX_RETRIES.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid LEARN_MAX_RETRIES".to_string()))?;

    Ok(Config {
      base_url,
      app_key: env::var("LEARN_APP_KEY").ok(),
      app_secret: env::var("LEARN_APP_SECRET").ok(),
      access_token: env::var("LEARN_ACCESS_TOKEN").ok(),
      rate_limit,
      timeout_secs,
      max_retries,
    })
  }

  /// Create a config with default values and no credentials
  pub fn new(base_url: impl Into<String>) -> Self {
    Config {
      base_url: base_url.into(),
      app_key: None,
      app_secret: None,
      access_token: None,
      rate_limit: crate::DEFAULT_RATE_LIMIT,
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
      max_retries: crate::DEFAULT_MAX_RETRIES,
    }
  }

  /// Set the application key and secret used for the token endpoint
  pub fn with_app_credentials(mut self, key: impl Into<String>, secret: impl Into<String>) -> Self {
    self.app_key = Some(key.into());
    self.app_secret = Some(secret.into());
    self
  }

  /// Set a pre-issued bearer token
  pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
    self.access_token = Some(token.into());
    self
  }
}
