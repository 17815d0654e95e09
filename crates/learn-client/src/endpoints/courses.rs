//! Courses and organizations
//!
//! Course CRUD uses the v3 paths; the child-course listing has no v3 form.

use super::{FieldsOptions, ListOptions};
use learn_core::{Fields, RestCall, Result};
use learn_models::courses::*;
use learn_models::{Available, Paged};

learn_core::query_options! {
  /// Filters for listing courses
  pub struct GetCoursesOptions {
    offset: u32 => "offset",
    limit: u32 => "limit",
    course_id: String => "courseId",
    name: String => "name",
    external_id: String => "externalId",
    term_id: String => "termId",
    data_source_id: String => "dataSourceId",
    organization: bool => "organization",
    ultra_status: UltraStatus => "ultraStatus",
    available: Available => "availability.available",
    sort: String => "sort",
    fields: Fields => "fields",
  }
}

/// List courses
pub fn get_courses(options: &GetCoursesOptions) -> Result<RestCall<Paged<Course>>> {
  RestCall::get("/learn/api/public/v3/courses").options(options).build()
}

/// Create a course
pub fn create_course(body: &CreateCourseBody) -> Result<RestCall<Course>> {
  RestCall::post("/learn/api/public/v3/courses").json_body(body)?.build()
}

/// Get one course; `course_id` may be `courseId:...`, `externalId:...` or a primary id
pub fn get_course(course_id: &str, options: &FieldsOptions) -> Result<RestCall<Course>> {
  RestCall::get("/learn/api/public/v3/courses/{courseId}")
    .path_param("courseId", course_id)
    .options(options)
    .build()
}

/// Update a course
pub fn update_course(course_id: &str, body: &UpdateCourseBody) -> Result<RestCall<Course>> {
  RestCall::patch("/learn/api/public/v3/courses/{courseId}")
    .path_param("courseId", course_id)
    .json_body(body)?
    .build()
}

/// Delete a course. The server removes it asynchronously.
pub fn delete_course(course_id: &str) -> Result<RestCall<()>> {
  RestCall::delete("/learn/api/public/v3/courses/{courseId}")
    .path_param("courseId", course_id)
    .build()
}

/// List the child courses merged into a course
pub fn get_course_children(course_id: &str, options: &ListOptions) -> Result<RestCall<Paged<CourseChild>>> {
  RestCall::get("/learn/api/public/v1/courses/{courseId}/children")
    .path_param("courseId", course_id)
    .options(options)
    .build()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::endpoints::test_support::{assert_call, json_body};
  use learn_core::HttpMethod;
  use serde_json::json;

  #[test]
  fn test_get_courses() {
    let opts = GetCoursesOptions::new().term_id("_4_1").ultra_status(UltraStatus::Ultra).limit(25);
    let call = get_courses(&opts).unwrap();
    assert_call(
      &call,
      HttpMethod::Get,
      "/learn/api/public/v3/courses",
      &[("limit", "25"), ("termId", "_4_1"), ("ultraStatus", "Ultra")],
    );
  }

  #[test]
  fn test_course_crud() {
    let create = create_course(&CreateCourseBody::new().course_id("CS-101").name("Intro")).unwrap();
    assert_call(&create, HttpMethod::Post, "/learn/api/public/v3/courses", &[]);
    assert_eq!(json_body(&create), &json!({"courseId": "CS-101", "name": "Intro"}));

    let get = get_course("courseId:CS-101", &FieldsOptions::new().fields(["id", "name"])).unwrap();
    assert_call(&get, HttpMethod::Get, "/learn/api/public/v3/courses/courseId:CS-101", &[("fields", "id,name")]);

    let update = update_course("_9_1", &UpdateCourseBody::new().allow_guests(false)).unwrap();
    assert_call(&update, HttpMethod::Patch, "/learn/api/public/v3/courses/_9_1", &[]);
    assert_eq!(json_body(&update), &json!({"allowGuests": false}));

    let delete = delete_course("_9_1").unwrap();
    assert_call(&delete, HttpMethod::Delete, "/learn/api/public/v3/courses/_9_1", &[]);

    let children = get_course_children("_9_1", &ListOptions::new()).unwrap();
    assert_call(&children, HttpMethod::Get, "/learn/api/public/v1/courses/_9_1/children", &[]);
  }
}
