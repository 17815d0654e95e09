pub mod call;
pub mod query;
pub mod token;

use anyhow::Result;
use learn_client::LearnClient;
use learn_core::{RequestBody, RestCall};
use serde::{de::DeserializeOwned, Serialize};

/// Runs calls against the client, or only prints them with `--dry-run`.
pub struct Output<'a> {
  pub client: &'a LearnClient,
  pub dry_run: bool,
}

impl<'a> Output<'a> {
  pub fn new(client: &'a LearnClient, dry_run: bool) -> Self {
    Self { client, dry_run }
  }

  /// Execute `call` and print the response as pretty JSON.
  ///
  /// Returns `None` on a dry run.
  pub async fn run<T>(&self, call: RestCall<T>) -> Result<Option<T>>
  where
    T: DeserializeOwned + Serialize,
  {
    if self.dry_run {
      println!("{}", describe(self.client, &call)?);
      return Ok(None);
    }

    let response = self.client.execute(&call).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(Some(response))
  }
}

/// Method, absolute URL and body of a call, one per line.
pub fn describe<T>(client: &LearnClient, call: &RestCall<T>) -> Result<String> {
  let mut text = format!("{} {}", call.method(), call.url(client.base_url())?);
  match call.body() {
    RequestBody::Empty => {}
    RequestBody::Json(value) => {
      text.push('\n');
      text.push_str(&serde_json::to_string_pretty(value)?);
    }
    RequestBody::Form(pairs) => {
      let form: Vec<String> = pairs.iter().map(|(k, v)| format!("{k}={v}")).collect();
      text.push('\n');
      text.push_str(&form.join("&"));
    }
    RequestBody::Upload(file) => {
      text.push_str(&format!("\n<{} bytes from {}>", file.bytes.len(), file.file_name));
    }
  }
  Ok(text)
}
