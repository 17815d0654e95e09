//! Users

use crate::common::AvailableFlag;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserName {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub given: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub family: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub middle: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub other: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub suffix: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub home_phone: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub mobile_phone: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub business_phone: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub web_page: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
  pub id: String,
  pub uuid: Option<String>,
  pub external_id: Option<String>,
  pub data_source_id: Option<String>,
  pub user_name: Option<String>,
  pub student_id: Option<String>,
  pub education_level: Option<String>,
  pub gender: Option<String>,
  pub birth_date: Option<DateTime<Utc>>,
  #[serde(default)]
  pub institution_role_ids: Vec<String>,
  #[serde(default)]
  pub system_role_ids: Vec<String>,
  pub availability: Option<AvailableFlag>,
  pub name: Option<UserName>,
  pub contact: Option<Contact>,
  pub created: Option<DateTime<Utc>>,
  pub modified: Option<DateTime<Utc>>,
  pub last_login: Option<DateTime<Utc>>,
}

request_body! {
  pub struct CreateUserBody {
    external_id: String,
    data_source_id: String,
    user_name: String,
    student_id: String,
    /// Write-only; never returned
    password: String,
    education_level: String,
    gender: String,
    birth_date: DateTime<Utc>,
    institution_role_ids: Vec<String>,
    system_role_ids: Vec<String>,
    availability: AvailableFlag,
    name: UserName,
    contact: Contact,
  }
}

request_body! {
  pub struct UpdateUserBody {
    external_id: String,
    data_source_id: String,
    user_name: String,
    student_id: String,
    password: String,
    education_level: String,
    gender: String,
    birth_date: DateTime<Utc>,
    institution_role_ids: Vec<String>,
    system_role_ids: Vec<String>,
    availability: AvailableFlag,
    name: UserName,
    contact: Contact,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_create_user_body() {
    let body = CreateUserBody::new()
      .user_name("jsmith")
      .name(UserName { given: Some("Jo".to_string()), family: Some("Smith".to_string()), ..Default::default() })
      .system_role_ids(vec!["User".to_string()]);

    assert_eq!(
      serde_json::to_value(&body).unwrap(),
      json!({
        "userName": "jsmith",
        "systemRoleIds": ["User"],
        "name": {"given": "Jo", "family": "Smith"}
      })
    );
  }
}
