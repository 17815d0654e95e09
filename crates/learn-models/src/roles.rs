//! Course, system and institution roles (read-only)

use crate::common::AvailableFlag;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRole {
  pub id: Option<String>,
  /// Role key, e.g. `Instructor`
  pub role_id: String,
  pub name_for_courses: Option<String>,
  pub name_for_organizations: Option<String>,
  pub description: Option<String>,
  pub custom: Option<bool>,
  pub act_as_instructor: Option<bool>,
  pub availability: Option<AvailableFlag>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemRole {
  pub id: Option<String>,
  pub role_id: String,
  pub name: Option<String>,
  pub description: Option<String>,
  pub custom: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionRole {
  pub id: Option<String>,
  pub role_id: String,
  pub name: Option<String>,
  pub description: Option<String>,
  pub custom: Option<bool>,
}
