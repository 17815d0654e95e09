//! Server information

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Version {
  pub major: u32,
  pub minor: u32,
  pub patch: u32,
  pub build: Option<String>,
}

impl std::fmt::Display for Version {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
    if let Some(build) = &self.build {
      write!(f, "-{build}")?;
    }
    Ok(())
  }
}

/// Response of `GET /v1/system/version`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionInfo {
  pub learn: Option<Version>,
}

/// Response of `GET /v1/system/policies/privacy`; both values are URLs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrivacyPolicy {
  pub blackboard: Option<String>,
  pub institution: Option<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_version_display() {
    let info: VersionInfo =
      serde_json::from_str(r#"{"learn":{"major":3900,"minor":112,"patch":0,"build":"rel.21+aa9c2c1"}}"#).unwrap();
    assert_eq!(info.learn.unwrap().to_string(), "3900.112.0-rel.21+aa9c2c1");
  }
}
