//! # learn-client
//!
//! A typed client for the Learn public REST API.
//!
//! ## Features
//!
//! - **Request descriptors**: every endpoint is a plain function returning a
//!   [`RestCall`] that can be inspected, logged or executed later
//! - **Async/Await**: Built on tokio and reqwest
//! - **Rate Limiting**: Built-in client-side rate limiting
//! - **Type Safe**: Strongly typed bodies and responses using learn-models
//! - **Configurable**: Environment-based configuration via learn-core
//!
//! ## Usage
//!
//! ```rust,no_run
//! use learn_client::{endpoints::terms, Executable, LearnClient};
//! use learn_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = LearnClient::new(config)?;
//!
//!     let call = terms::get_terms(&terms::GetTermsOptions::new().limit(10))?;
//!     println!("{call}");
//!
//!     let page = call.execute(&client).await?;
//!     for term in page.results {
//!         println!("{}: {:?}", term.id, term.name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, learn_core::Error>`. Non-2xx responses are
//! surfaced unmodified as `Error::Status`.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod call;
pub mod client;
pub mod endpoints;
pub mod paging;
pub mod transport;

// Re-export the main client and common types
pub use call::Executable;
pub use client::LearnClient;
pub use learn_core::{Config, Error, FileUpload, RestCall, Result};
pub use learn_models::*;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_client_creation() {
    let config = Config::new("https://learn.example.edu").with_access_token("token");
    let client = LearnClient::new(config).expect("Failed to create client");
    assert_eq!(client.base_url().as_str(), "https://learn.example.edu/");
  }
}
