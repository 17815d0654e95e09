//! OAuth2 token exchange shapes

use serde::{Deserialize, Serialize};

/// Response of `POST /v1/oauth2/token`. The token endpoint uses snake_case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
  pub access_token: String,
  pub token_type: Option<String>,
  /// Lifetime in seconds
  pub expires_in: Option<u64>,
  pub scope: Option<String>,
  pub refresh_token: Option<String>,
  /// Present for three-legged (authorization code) grants
  pub user_id: Option<String>,
}

/// Grant presented to the token endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenGrant {
  /// Two-legged: the application acts as itself
  ClientCredentials,
  /// Three-legged: exchange a code obtained from `/oauth2/authorizationcode`
  AuthorizationCode {
    code: String,
    redirect_uri: String,
    /// PKCE verifier, when the code was requested with a challenge
    code_verifier: Option<String>,
  },
  RefreshToken { refresh_token: String },
}

impl TokenGrant {
  pub fn grant_type(&self) -> &'static str {
    match self {
      TokenGrant::ClientCredentials => "client_credentials",
      TokenGrant::AuthorizationCode { .. } => "authorization_code",
      TokenGrant::RefreshToken { .. } => "refresh_token",
    }
  }

  /// Form-encoded body pairs
  pub fn form_pairs(&self) -> Vec<(String, String)> {
    let mut pairs = vec![("grant_type".to_string(), self.grant_type().to_string())];
    match self {
      TokenGrant::ClientCredentials => {}
      TokenGrant::AuthorizationCode { code, redirect_uri, code_verifier } => {
        pairs.push(("code".to_string(), code.clone()));
        pairs.push(("redirect_uri".to_string(), redirect_uri.clone()));
        if let Some(verifier) = code_verifier {
          pairs.push(("code_verifier".to_string(), verifier.clone()));
        }
      }
      TokenGrant::RefreshToken { refresh_token } => {
        pairs.push(("refresh_token".to_string(), refresh_token.clone()));
      }
    }
    pairs
  }
}
