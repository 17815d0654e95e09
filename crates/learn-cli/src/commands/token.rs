use super::{describe, Output};
use anyhow::{Context, Result};
use learn_client::endpoints::oauth;
use learn_core::Config;
use learn_models::oauth::TokenGrant;
use tracing::{debug, info};

/// Request a client-credentials token and print it.
pub async fn execute(out: &Output<'_>) -> Result<()> {
  out.run(oauth::request_token(&TokenGrant::ClientCredentials)?).await?;
  Ok(())
}

/// Install a bearer token on the client when none was configured but an
/// application key and secret are available.
pub async fn ensure_access_token(out: &Output<'_>, config: &Config) -> Result<()> {
  if config.access_token.is_some() || config.app_key.is_none() || config.app_secret.is_none() {
    return Ok(());
  }

  let call = oauth::request_token(&TokenGrant::ClientCredentials)?;
  if out.dry_run {
    debug!("Dry run; would first request a token:\n{}", describe(out.client, &call)?);
    return Ok(());
  }

  let token = out.client.execute(&call).await.context("Client-credentials token request failed")?;
  info!("Obtained access token (expires in {}s)", token.expires_in.unwrap_or_default());
  out.client.set_access_token(token.access_token).await;
  Ok(())
}
