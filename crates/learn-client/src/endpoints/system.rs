//! Server version and privacy policy. Both are readable without a token.

use learn_core::{RestCall, Result};
use learn_models::system::{PrivacyPolicy, VersionInfo};

/// Learn server version
pub fn get_version() -> Result<RestCall<VersionInfo>> {
  RestCall::get("/learn/api/public/v1/system/version").build()
}

/// Privacy policy URLs
pub fn get_privacy_policy() -> Result<RestCall<PrivacyPolicy>> {
  RestCall::get("/learn/api/public/v1/system/policies/privacy").build()
}
