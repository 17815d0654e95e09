/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-dot-]browne[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! The executing client

use crate::paging;
use crate::transport::Transport;
use futures::{Stream, StreamExt};
use governor::{
  Quota, RateLimiter,
  clock::DefaultClock,
  middleware::NoOpMiddleware,
  state::{InMemoryState, NotKeyed},
};
use learn_core::{Config, RestCall, Result};
use learn_models::Paged;
use serde::de::DeserializeOwned;
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::instrument;
use url::Url;

/// Rate limiter shared by every call made through one client
pub type SharedRateLimiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>>;

/// Main Learn REST API client
///
/// Executes the [`RestCall`] descriptors produced by the
/// [`endpoints`](crate::endpoints) modules. Handles authentication headers,
/// rate limiting, and transport concerns.
///
/// # Examples
///
/// ```ignore
/// use learn_client::{endpoints::system, LearnClient};
/// use learn_core::Config;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = LearnClient::new(Config::from_env()?)?;
///
///     let version = client.execute(&system::get_version()?).await?;
///     println!("Learn version: {:?}", version.learn);
///
///     Ok(())
/// }
/// ```
pub struct LearnClient {
  rate_limiter: SharedRateLimiter,
  transport: Arc<Transport>,
}

impl LearnClient {
  /// Create a new Learn API client
  ///
  /// # Arguments
  ///
  /// * `config` - Configuration containing the base URL, credentials and limits
  ///
  /// # Errors
  ///
  /// Returns an error if the base URL is invalid or the HTTP client cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    // Ensure rate_limit is non-zero, fallback to default if invalid
    let rate_limit_value = NonZeroU32::new(config.rate_limit)
      .or_else(|| NonZeroU32::new(learn_core::DEFAULT_RATE_LIMIT))
      .unwrap_or(NonZeroU32::MIN);
    let quota = Quota::per_minute(rate_limit_value);
    let rate_limiter = Arc::new(RateLimiter::direct(quota));

    let transport = Arc::new(Transport::new(&config)?);

    Ok(Self { transport, rate_limiter })
  }

  /// Create a new client with custom rate limiting
  ///
  /// # Errors
  ///
  /// Returns an error if the base URL is invalid or the HTTP client cannot be created.
  pub fn with_rate_limiter(config: Config, rate_limiter: SharedRateLimiter) -> Result<Self> {
    Ok(Self { transport: Arc::new(Transport::new(&config)?), rate_limiter })
  }

  /// Base URL every call is resolved against
  pub fn base_url(&self) -> &Url {
    self.transport.base_url()
  }

  /// Replace the bearer token, e.g. after exchanging a grant at the token endpoint
  pub async fn set_access_token(&self, token: impl Into<String>) {
    self.transport.set_access_token(Some(token.into())).await;
  }

  /// Drop the bearer token; subsequent calls go out unauthenticated
  pub async fn clear_access_token(&self) {
    self.transport.set_access_token(None).await;
  }

  /// Wait for rate limit to allow next request
  ///
  /// Most users won't need to call this directly as [`execute`](Self::execute) handles it.
  pub async fn wait_for_rate_limit(&self) -> Result<()> {
    self.rate_limiter.until_ready().await;
    Ok(())
  }

  /// Execute a prepared call and deserialize its response
  #[instrument(skip(self, call), fields(call = %call))]
  pub async fn execute<T: DeserializeOwned>(&self, call: &RestCall<T>) -> Result<T> {
    self.wait_for_rate_limit().await?;
    self.transport.execute(call).await
  }

  /// Stream every page of a collection, following `paging.nextPage`
  pub fn pages<'a, T>(&'a self, first: RestCall<Paged<T>>) -> impl Stream<Item = Result<Paged<T>>> + 'a
  where
    T: DeserializeOwned + 'a,
  {
    futures::stream::unfold(Some(first), move |next| async move {
      let call = next?;
      match self.execute(&call).await {
        Ok(page) => {
          let following = paging::next_page_call(&page);
          Some((Ok(page), following))
        }
        Err(e) => Some((Err(e), None)),
      }
    })
  }

  /// Collect the results of every page into one vector
  ///
  /// Stops at the first failing page.
  pub async fn collect_all<T: DeserializeOwned>(&self, first: RestCall<Paged<T>>) -> Result<Vec<T>> {
    let mut items = Vec::new();
    let pages = self.pages(first);
    futures::pin_mut!(pages);
    while let Some(page) = pages.next().await {
      items.extend(page?.results);
    }
    Ok(items)
  }
}

impl std::fmt::Debug for LearnClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("LearnClient")
      .field("transport", &self.transport)
      .field("rate_limiter", &"RateLimiter")
      .finish()
  }
}
