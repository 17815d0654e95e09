//! Course memberships (enrollments)

use learn_core::{Fields, RestCall, Result};
use learn_models::memberships::*;
use learn_models::Paged;

const MEMBERSHIP: &str = "/learn/api/public/v1/courses/{courseId}/users/{userId}";

learn_core::query_options! {
  /// Filters for listing memberships; `expand` accepts `user` or `course`
  pub struct GetMembershipsOptions {
    offset: u32 => "offset",
    limit: u32 => "limit",
    role: String => "role",
    data_source_id: String => "dataSourceId",
    expand: String => "expand",
    fields: Fields => "fields",
  }
}

learn_core::query_options! {
  /// Options for reading a single membership
  pub struct GetMembershipOptions {
    expand: String => "expand",
    fields: Fields => "fields",
  }
}

/// List the members of a course
pub fn get_course_memberships(
  course_id: &str,
  options: &GetMembershipsOptions,
) -> Result<RestCall<Paged<CourseMembership>>> {
  RestCall::get("/learn/api/public/v1/courses/{courseId}/users")
    .path_param("courseId", course_id)
    .options(options)
    .build()
}

/// Get one user's membership in a course
pub fn get_course_membership(
  course_id: &str,
  user_id: &str,
  options: &GetMembershipOptions,
) -> Result<RestCall<CourseMembership>> {
  RestCall::get(MEMBERSHIP)
    .path_param("courseId", course_id)
    .path_param("userId", user_id)
    .options(options)
    .build()
}

/// Enroll a user in a course
pub fn create_course_membership(
  course_id: &str,
  user_id: &str,
  body: &CreateMembershipBody,
) -> Result<RestCall<CourseMembership>> {
  RestCall::put(MEMBERSHIP)
    .path_param("courseId", course_id)
    .path_param("userId", user_id)
    .json_body(body)?
    .build()
}

/// Update a user's membership in a course
pub fn update_course_membership(
  course_id: &str,
  user_id: &str,
  body: &UpdateMembershipBody,
) -> Result<RestCall<CourseMembership>> {
  RestCall::patch(MEMBERSHIP)
    .path_param("courseId", course_id)
    .path_param("userId", user_id)
    .json_body(body)?
    .build()
}

/// Remove a user from a course
pub fn delete_course_membership(course_id: &str, user_id: &str) -> Result<RestCall<()>> {
  RestCall::delete(MEMBERSHIP)
    .path_param("courseId", course_id)
    .path_param("userId", user_id)
    .build()
}

/// List the courses a user is enrolled in
pub fn get_user_memberships(
  user_id: &str,
  options: &GetMembershipsOptions,
) -> Result<RestCall<Paged<CourseMembership>>> {
  RestCall::get("/learn/api/public/v1/users/{userId}/courses")
    .path_param("userId", user_id)
    .options(options)
    .build()
}
