//! Course groups, group sets and group memberships (v2)

use super::{FieldsOptions, ListOptions};
use learn_core::{RestCall, Result};
use learn_models::groups::*;
use learn_models::Paged;

const GROUPS: &str = "/learn/api/public/v2/courses/{courseId}/groups";
const GROUP: &str = "/learn/api/public/v2/courses/{courseId}/groups/{groupId}";
const GROUP_SETS: &str = "/learn/api/public/v2/courses/{courseId}/groups/sets";
const GROUP_MEMBER: &str = "/learn/api/public/v2/courses/{courseId}/groups/{groupId}/users/{userId}";

/// List the groups of a course, group sets included
pub fn get_groups(course_id: &str, options: &ListOptions) -> Result<RestCall<Paged<Group>>> {
  RestCall::get(GROUPS).path_param("courseId", course_id).options(options).build()
}

/// Create a group
pub fn create_group(course_id: &str, body: &CreateGroupBody) -> Result<RestCall<Group>> {
  RestCall::post(GROUPS).path_param("courseId", course_id).json_body(body)?.build()
}

/// Get one group
pub fn get_group(course_id: &str, group_id: &str, options: &FieldsOptions) -> Result<RestCall<Group>> {
  RestCall::get(GROUP)
    .path_param("courseId", course_id)
    .path_param("groupId", group_id)
    .options(options)
    .build()
}

/// Update a group
pub fn update_group(course_id: &str, group_id: &str, body: &UpdateGroupBody) -> Result<RestCall<Group>> {
  RestCall::patch(GROUP)
    .path_param("courseId", course_id)
    .path_param("groupId", group_id)
    .json_body(body)?
    .build()
}

/// Delete a group
pub fn delete_group(course_id: &str, group_id: &str) -> Result<RestCall<()>> {
  RestCall::delete(GROUP)
    .path_param("courseId", course_id)
    .path_param("groupId", group_id)
    .build()
}

/// List the group sets of a course
pub fn get_group_sets(course_id: &str, options: &ListOptions) -> Result<RestCall<Paged<Group>>> {
  RestCall::get(GROUP_SETS).path_param("courseId", course_id).options(options).build()
}

/// Create a group set
pub fn create_group_set(course_id: &str, body: &CreateGroupSetBody) -> Result<RestCall<Group>> {
  RestCall::post(GROUP_SETS).path_param("courseId", course_id).json_body(body)?.build()
}

/// List the groups inside a group set
pub fn get_group_set_groups(course_id: &str, group_id: &str, options: &ListOptions) -> Result<RestCall<Paged<Group>>> {
  RestCall::get("/learn/api/public/v2/courses/{courseId}/groups/sets/{groupId}/groups")
    .path_param("courseId", course_id)
    .path_param("groupId", group_id)
    .options(options)
    .build()
}

/// List the members of a group
pub fn get_group_memberships(
  course_id: &str,
  group_id: &str,
  options: &ListOptions,
) -> Result<RestCall<Paged<GroupMembership>>> {
  RestCall::get("/learn/api/public/v2/courses/{courseId}/groups/{groupId}/users")
    .path_param("courseId", course_id)
    .path_param("groupId", group_id)
    .options(options)
    .build()
}

/// Get one group member
pub fn get_group_membership(
  course_id: &str,
  group_id: &str,
  user_id: &str,
  options: &FieldsOptions,
) -> Result<RestCall<GroupMembership>> {
  RestCall::get(GROUP_MEMBER)
    .path_param("courseId", course_id)
    .path_param("groupId", group_id)
    .path_param("userId", user_id)
    .options(options)
    .build()
}

/// Add a user to a group. Returns 409 when the group's enrollment state
/// does not allow the join.
pub fn create_group_membership(course_id: &str, group_id: &str, user_id: &str) -> Result<RestCall<GroupMembership>> {
  RestCall::put(GROUP_MEMBER)
    .path_param("courseId", course_id)
    .path_param("groupId", group_id)
    .path_param("userId", user_id)
    .build()
}

/// Remove a user from a group
pub fn delete_group_membership(course_id: &str, group_id: &str, user_id: &str) -> Result<RestCall<()>> {
  RestCall::delete(GROUP_MEMBER)
    .path_param("courseId", course_id)
    .path_param("groupId", group_id)
    .path_param("userId", user_id)
    .build()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::endpoints::test_support::{assert_call, json_body};
  use learn_core::{HttpMethod, RequestBody};
  use serde_json::json;

  #[test]
  fn test_group_crud() {
    let list = get_groups("_9_1", &ListOptions::new()).unwrap();
    assert_call(&list, HttpMethod::Get, "/learn/api/public/v2/courses/_9_1/groups", &[]);

    let body = CreateGroupBody::new().name("Team A").enrollment(GroupEnrollment::instructor_only());
    let create = create_group("_9_1", &body).unwrap();
    assert_call(&create, HttpMethod::Post, "/learn/api/public/v2/courses/_9_1/groups", &[]);
    assert_eq!(json_body(&create), &json!({"name": "Team A", "enrollment": {"type": "InstructorOnly"}}));

    let get = get_group("_9_1", "_6_1", &FieldsOptions::new()).unwrap();
    assert_call(&get, HttpMethod::Get, "/learn/api/public/v2/courses/_9_1/groups/_6_1", &[]);

    let update = update_group("_9_1", "_6_1", &UpdateGroupBody::new().description("Lab team")).unwrap();
    assert_call(&update, HttpMethod::Patch, "/learn/api/public/v2/courses/_9_1/groups/_6_1", &[]);

    let delete = delete_group("_9_1", "_6_1").unwrap();
    assert_call(&delete, HttpMethod::Delete, "/learn/api/public/v2/courses/_9_1/groups/_6_1", &[]);
  }

  #[test]
  fn test_group_sets() {
    let list = get_group_sets("_9_1", &ListOptions::new()).unwrap();
    assert_call(&list, HttpMethod::Get, "/learn/api/public/v2/courses/_9_1/groups/sets", &[]);

    let create = create_group_set("_9_1", &CreateGroupSetBody::new().name("Projects")).unwrap();
    assert_call(&create, HttpMethod::Post, "/learn/api/public/v2/courses/_9_1/groups/sets", &[]);

    let groups = get_group_set_groups("_9_1", "_2_1", &ListOptions::new().limit(5)).unwrap();
    assert_call(
      &groups,
      HttpMethod::Get,
      "/learn/api/public/v2/courses/_9_1/groups/sets/_2_1/groups",
      &[("limit", "5")],
    );
  }

  #[test]
  fn test_group_memberships() {
    let list = get_group_memberships("_9_1", "_6_1", &ListOptions::new()).unwrap();
    assert_call(&list, HttpMethod::Get, "/learn/api/public/v2/courses/_9_1/groups/_6_1/users", &[]);

    let get = get_group_membership("_9_1", "_6_1", "_40_1", &FieldsOptions::new()).unwrap();
    assert_call(&get, HttpMethod::Get, "/learn/api/public/v2/courses/_9_1/groups/_6_1/users/_40_1", &[]);

    let join = create_group_membership("_9_1", "_6_1", "_40_1").unwrap();
    assert_call(&join, HttpMethod::Put, "/learn/api/public/v2/courses/_9_1/groups/_6_1/users/_40_1", &[]);
    assert_eq!(join.body(), &RequestBody::Empty);

    let leave = delete_group_membership("_9_1", "_6_1", "_40_1").unwrap();
    assert_call(&leave, HttpMethod::Delete, "/learn/api/public/v2/courses/_9_1/groups/_6_1/users/_40_1", &[]);
  }
}
