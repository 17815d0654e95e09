//! Course groups, group sets and group memberships

use crate::common::AvailableFlag;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupEnrollmentType {
  /// Only instructors place students
  InstructorOnly,
  /// Students join through a sign-up sheet
  SelfEnrollment,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupSheet {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub show_members: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupEnrollment {
  #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
  pub kind: Option<GroupEnrollmentType>,
  /// Maximum members for self-enrollment
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub limit: Option<u32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub signup_sheet: Option<SignupSheet>,
}

impl GroupEnrollment {
  pub fn self_enrollment(limit: Option<u32>, signup_sheet: SignupSheet) -> Self {
    Self { kind: Some(GroupEnrollmentType::SelfEnrollment), limit, signup_sheet: Some(signup_sheet) }
  }

  pub fn instructor_only() -> Self {
    Self { kind: Some(GroupEnrollmentType::InstructorOnly), ..Self::default() }
  }
}

/// Group or group set; sets carry `is_group_set = true`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
  pub id: String,
  pub external_id: Option<String>,
  pub group_set_id: Option<String>,
  pub name: Option<String>,
  pub description: Option<String>,
  pub is_group_set: Option<bool>,
  pub availability: Option<AvailableFlag>,
  pub enrollment: Option<GroupEnrollment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMembership {
  pub user_id: String,
}

request_body! {
  pub struct CreateGroupBody {
    external_id: String,
    name: String,
    description: String,
    availability: AvailableFlag,
    enrollment: GroupEnrollment,
  }
}

request_body! {
  pub struct UpdateGroupBody {
    external_id: String,
    name: String,
    description: String,
    availability: AvailableFlag,
    enrollment: GroupEnrollment,
  }
}

request_body! {
  pub struct CreateGroupSetBody {
    external_id: String,
    name: String,
    description: String,
    availability: AvailableFlag,
    enrollment: GroupEnrollment,
  }
}
