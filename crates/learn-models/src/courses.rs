//! Courses and organizations

use crate::common::Availability;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Course view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UltraStatus {
  Undecided,
  Classic,
  Ultra,
  UltraPreview,
}

impl std::fmt::Display for UltraStatus {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      UltraStatus::Undecided => write!(f, "Undecided"),
      UltraStatus::Classic => write!(f, "Classic"),
      UltraStatus::Ultra => write!(f, "Ultra"),
      UltraStatus::UltraPreview => write!(f, "UltraPreview"),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
  /// Primary id, e.g. `_1234587_1`
  pub id: String,
  pub uuid: Option<String>,
  pub external_id: Option<String>,
  pub data_source_id: Option<String>,
  /// Human-readable course id, e.g. `ABCD1234S_1234_12345`
  pub course_id: Option<String>,
  pub name: Option<String>,
  pub description: Option<String>,
  pub created: Option<DateTime<Utc>>,
  pub modified: Option<DateTime<Utc>>,
  /// `true` for organizations
  pub organization: Option<bool>,
  pub ultra_status: Option<UltraStatus>,
  pub allow_guests: Option<bool>,
  pub read_only: Option<bool>,
  pub term_id: Option<String>,
  pub availability: Option<Availability>,
  pub external_access_url: Option<String>,
}

/// Child course merged into a parent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseChild {
  pub id: Option<String>,
  pub parent_id: Option<String>,
  pub child_course_id: String,
  pub data_source_id: Option<String>,
  pub created: Option<DateTime<Utc>>,
}

request_body! {
  pub struct CreateCourseBody {
    external_id: String,
    data_source_id: String,
    course_id: String,
    name: String,
    description: String,
    organization: bool,
    ultra_status: UltraStatus,
    allow_guests: bool,
    read_only: bool,
    term_id: String,
    availability: Availability,
  }
}

request_body! {
  pub struct UpdateCourseBody {
    external_id: String,
    data_source_id: String,
    course_id: String,
    name: String,
    description: String,
    ultra_status: UltraStatus,
    allow_guests: bool,
    read_only: bool,
    term_id: String,
    availability: Availability,
  }
}
