//! Deferred execution of request descriptors

use crate::client::LearnClient;
use learn_core::{RestCall, Result};
use serde::de::DeserializeOwned;

/// Lets a [`RestCall`] run itself: `call.execute(&client).await`.
///
/// The returned future is not declared `Send`; spawn the call through
/// [`LearnClient::execute`] when a `Send` bound is required.
#[allow(async_fn_in_trait)]
pub trait Executable<T> {
  /// Send the request and deserialize the response.
  async fn execute(&self, client: &LearnClient) -> Result<T>;
}

impl<T: DeserializeOwned> Executable<T> for RestCall<T> {
  async fn execute(&self, client: &LearnClient) -> Result<T> {
    client.execute(self).await
  }
}
