//! OAuth2 token exchange
//!
//! These are ordinary calls. Executing [`request_token`] does not install
//! the token; pass it to
//! [`LearnClient::set_access_token`](crate::LearnClient::set_access_token).

use learn_core::{AuthScheme, RestCall, Result};
use learn_models::oauth::{Token, TokenGrant};

learn_core::query_options! {
  /// Optional parameters of the authorization-code redirect
  pub struct AuthorizationCodeOptions {
    scope: String => "scope",
    state: String => "state",
    code_challenge: String => "code_challenge",
    code_challenge_method: String => "code_challenge_method",
  }
}

/// Exchange a grant for an access token. Authenticates with the application
/// key and secret, not a bearer token.
pub fn request_token(grant: &TokenGrant) -> Result<RestCall<Token>> {
  RestCall::post("/learn/api/public/v1/oauth2/token")
    .form_body(grant.form_pairs())
    .auth(AuthScheme::ClientCredentials)
    .build()
}

/// Three-legged login redirect. Meant to be rendered with
/// [`RestCall::url`] and opened in a browser rather than executed.
pub fn authorization_code(
  client_id: &str,
  redirect_uri: &str,
  options: &AuthorizationCodeOptions,
) -> Result<RestCall<()>> {
  RestCall::get("/learn/api/public/v1/oauth2/authorizationcode")
    .query("client_id", client_id)
    .query("redirect_uri", redirect_uri)
    .query("response_type", "code")
    .options(options)
    .build()
}
