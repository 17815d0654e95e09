//! Course memberships (enrollments)

use crate::common::AvailableFlag;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseMembership {
  pub id: Option<String>,
  pub user_id: String,
  pub course_id: String,
  pub child_course_id: Option<String>,
  pub data_source_id: Option<String>,
  pub created: Option<DateTime<Utc>>,
  pub modified: Option<DateTime<Utc>>,
  pub availability: Option<AvailableFlag>,
  /// Course role key, e.g. `Student`
  pub course_role_id: Option<String>,
  pub last_accessed: Option<DateTime<Utc>>,
}

request_body! {
  pub struct CreateMembershipBody {
    child_course_id: String,
    data_source_id: String,
    availability: AvailableFlag,
    course_role_id: String,
  }
}

request_body! {
  pub struct UpdateMembershipBody {
    data_source_id: String,
    availability: AvailableFlag,
    course_role_id: String,
  }
}
