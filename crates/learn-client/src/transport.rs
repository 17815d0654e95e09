//! HTTP transport layer for Learn REST requests

use learn_core::error::RestException;
use learn_core::{AuthScheme, Config, Error, RequestBody, RestCall, Result};
use reqwest::{multipart, Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, error, instrument, warn};
use url::Url;

/// HTTP transport layer that turns [`RestCall`]s into requests
pub struct Transport {
  client: Client,
  base_url: Url,
  app_key: Option<String>,
  app_secret: Option<String>,
  access_token: RwLock<Option<String>>,
  timeout: Duration,
  max_retries: u32,
}

impl Transport {
  /// Create a new transport instance
  pub fn new(config: &Config) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .user_agent(concat!("learn-client/", env!("CARGO_PKG_VERSION")))
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self {
      client,
      base_url: Url::parse(&config.base_url)?,
      app_key: config.app_key.clone(),
      app_secret: config.app_secret.clone(),
      access_token: RwLock::new(config.access_token.clone()),
      timeout: Duration::from_secs(config.timeout_secs),
      max_retries: config.max_retries,
    })
  }

  /// Create a mock transport for testing
  #[cfg(test)]
  pub fn new_mock() -> Self {
    Self {
      client: Client::new(),
      base_url: Url::parse("https://mock.learn.example.edu").expect("static URL"),
      app_key: Some("app-key".to_string()),
      app_secret: Some("app-secret".to_string()),
      access_token: RwLock::new(Some("test-token".to_string())),
      timeout: Duration::from_secs(30),
      max_retries: 3,
    }
  }

  /// Replace the bearer token used for subsequent calls
  pub async fn set_access_token(&self, token: Option<String>) {
    *self.access_token.write().await = token;
  }

  /// Current bearer token, if any
  pub async fn access_token(&self) -> Option<String> {
    self.access_token.read().await.clone()
  }

  /// Execute a request descriptor
  ///
  /// Requests that fail before reaching the server (connect errors) are
  /// retried with exponential backoff. Any HTTP response is final: non-2xx
  /// statuses come back as [`Error::Status`].
  #[instrument(skip(self, call), fields(method = %call.method(), template = call.template()))]
  pub async fn execute<T>(&self, call: &RestCall<T>) -> Result<T>
  where
    T: DeserializeOwned,
  {
    let url = call.url(&self.base_url)?;
    debug!("Making request to: {}", url);

    let mut attempt = 0;
    loop {
      if attempt > 0 {
        let delay = Duration::from_millis(2_u64.pow(attempt) * 250); // Exponential backoff
        warn!("Retrying request in {}ms (attempt {})", delay.as_millis(), attempt + 1);
        tokio::time::sleep(delay).await;
      }

      let request = self.build_request(call, &url).await?;
      match request.send().await {
        Ok(response) => return self.handle_response(response).await,
        Err(e) if e.is_connect() && attempt < self.max_retries => {
          warn!("Connection failed (attempt {}): {}", attempt + 1, e);
          attempt += 1;
        }
        Err(e) => return Err(Error::Http(format!("Request failed: {}", e))),
      }
    }
  }

  /// Assemble method, auth and body for one attempt
  async fn build_request<T>(&self, call: &RestCall<T>, url: &Url) -> Result<RequestBuilder> {
    let method = Method::from_bytes(call.method().as_str().as_bytes())
      .map_err(|e| Error::Http(format!("Invalid method: {}", e)))?;
    let mut request = self.client.request(method, url.clone());

    request = match call.auth() {
      AuthScheme::Bearer => match self.access_token().await {
        Some(token) => request.bearer_auth(token),
        None => {
          debug!("No access token set; sending unauthenticated request");
          request
        }
      },
      AuthScheme::ClientCredentials => {
        let (key, secret) = self.app_credentials()?;
        request.basic_auth(key, Some(secret))
      }
    };

    request = match call.body() {
      RequestBody::Empty => request,
      RequestBody::Json(value) => {
        #[cfg(feature = "debug-logging")]
        debug!("Request body: {}", value);
        request.json(value)
      }
      RequestBody::Form(pairs) => request.form(pairs),
      RequestBody::Upload(file) => {
        let part = multipart::Part::bytes(file.bytes.clone())
          .file_name(file.file_name.clone())
          .mime_str(&file.content_type)
          .map_err(|e| Error::Http(format!("Invalid content type {}: {}", file.content_type, e)))?;
        request.multipart(multipart::Form::new().part("file", part))
      }
    };

    Ok(request)
  }

  fn app_credentials(&self) -> Result<(&str, &str)> {
    match (&self.app_key, &self.app_secret) {
      (Some(key), Some(secret)) => Ok((key.as_str(), secret.as_str())),
      _ => Err(Error::Credentials("LEARN_APP_KEY and LEARN_APP_SECRET are required".to_string())),
    }
  }

  /// Map the response to `T` or pass the failure status through
  async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
    let status = response.status();
    let text = response
      .text()
      .await
      .map_err(|e| Error::Http(format!("Failed to read response body: {}", e)))?;

    if !status.is_success() {
      error!("Request failed with status: {}", status);
      return Err(RestException::into_error(status.as_u16(), &text));
    }

    debug!("Response status {} with {} bytes", status, text.len());
    #[cfg(feature = "debug-logging")]
    debug!("Response body: {}", text);

    parse_body(&text)
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &Url {
    &self.base_url
  }

  /// Get request timeout duration
  pub fn timeout(&self) -> Duration {
    self.timeout
  }
}

impl std::fmt::Debug for Transport {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Transport")
      .field("base_url", &self.base_url.as_str())
      .field("timeout", &self.timeout)
      .field("max_retries", &self.max_retries)
      .finish_non_exhaustive()
  }
}

/// Empty bodies (e.g. 204 on DELETE) parse as JSON `null`, so `()` and
/// `Option<_>` responses work.
fn parse_body<T: DeserializeOwned>(text: &str) -> Result<T> {
  let body = if text.trim().is_empty() { "null" } else { text };
  serde_json::from_str::<T>(body).map_err(|e| {
    error!("Failed to parse JSON response: {}", e);
    Error::Parse(format!(
      "Failed to parse response: {}. Response: {}",
      e,
      text.chars().take(200).collect::<String>()
    ))
  })
}
