//! System and course announcements
//!
//! System announcements live under `/v1/announcements` and require the
//! `system.announcements.*` entitlements; course announcements live under
//! `/v1/courses/{courseId}/announcements`.

use super::FieldsOptions;
use learn_core::{Fields, RestCall, Result};
use learn_models::announcements::*;
use learn_models::Paged;

learn_core::query_options! {
  /// Filters for listing announcements
  pub struct GetAnnouncementsOptions {
    offset: u32 => "offset",
    limit: u32 => "limit",
    title: String => "title",
    sort: String => "sort",
    fields: Fields => "fields",
  }
}

/// List system announcements
pub fn get_announcements(options: &GetAnnouncementsOptions) -> Result<RestCall<Paged<Announcement>>> {
  RestCall::get("/learn/api/public/v1/announcements").options(options).build()
}

/// Create a system announcement
pub fn create_announcement(body: &CreateAnnouncementBody) -> Result<RestCall<Announcement>> {
  RestCall::post("/learn/api/public/v1/announcements").json_body(body)?.build()
}

/// Get one system announcement
pub fn get_announcement(announcement_id: &str, options: &FieldsOptions) -> Result<RestCall<Announcement>> {
  RestCall::get("/learn/api/public/v1/announcements/{announcementId}")
    .path_param("announcementId", announcement_id)
    .options(options)
    .build()
}

/// Update a system announcement
pub fn update_announcement(
  announcement_id: &str,
  body: &UpdateAnnouncementBody,
) -> Result<RestCall<Announcement>> {
  RestCall::patch("/learn/api/public/v1/announcements/{announcementId}")
    .path_param("announcementId", announcement_id)
    .json_body(body)?
    .build()
}

/// Delete a system announcement
pub fn delete_announcement(announcement_id: &str) -> Result<RestCall<()>> {
  RestCall::delete("/learn/api/public/v1/announcements/{announcementId}")
    .path_param("announcementId", announcement_id)
    .build()
}

/// List announcements of a course
pub fn get_course_announcements(
  course_id: &str,
  options: &GetAnnouncementsOptions,
) -> Result<RestCall<Paged<CourseAnnouncement>>> {
  RestCall::get("/learn/api/public/v1/courses/{courseId}/announcements")
    .path_param("courseId", course_id)
    .options(options)
    .build()
}

/// Create an announcement in a course
pub fn create_course_announcement(
  course_id: &str,
  body: &CreateCourseAnnouncementBody,
) -> Result<RestCall<CourseAnnouncement>> {
  RestCall::post("/learn/api/public/v1/courses/{courseId}/announcements")
    .path_param("courseId", course_id)
    .json_body(body)?
    .build()
}

/// Get one course announcement
pub fn get_course_announcement(
  course_id: &str,
  announcement_id: &str,
  options: &FieldsOptions,
) -> Result<RestCall<CourseAnnouncement>> {
  RestCall::get("/learn/api/public/v1/courses/{courseId}/announcements/{announcementId}")
    .path_param("courseId", course_id)
    .path_param("announcementId", announcement_id)
    .options(options)
    .build()
}

/// Update a course announcement
pub fn update_course_announcement(
  course_id: &str,
  announcement_id: &str,
  body: &UpdateCourseAnnouncementBody,
) -> Result<RestCall<CourseAnnouncement>> {
  RestCall::patch("/learn/api/public/v1/courses/{courseId}/announcements/{announcementId}")
    .path_param("courseId", course_id)
    .path_param("announcementId", announcement_id)
    .json_body(body)?
    .build()
}

/// Delete a course announcement
pub fn delete_course_announcement(course_id: &str, announcement_id: &str) -> Result<RestCall<()>> {
  RestCall::delete("/learn/api/public/v1/courses/{courseId}/announcements/{announcementId}")
    .path_param("courseId", course_id)
    .path_param("announcementId", announcement_id)
    .build()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::endpoints::test_support::{assert_call, json_body};
  use learn_core::{HttpMethod, RequestBody};
  use serde_json::json;

  #[test]
  fn test_get_announcements() {
    let opts = GetAnnouncementsOptions::new().limit(25).title("Exam");
    let call = get_announcements(&opts).unwrap();
    assert_call(
      &call,
      HttpMethod::Get,
      "/learn/api/public/v1/announcements",
      &[("limit", "25"), ("title", "Exam")],
    );
    assert_eq!(call.body(), &RequestBody::Empty);
  }

  #[test]
  fn test_create_announcement() {
    let body = CreateAnnouncementBody::new().title("Outage").body("<p>Sunday 2am</p>").show_at_login(true);
    let call = create_announcement(&body).unwrap();
    assert_call(&call, HttpMethod::Post, "/learn/api/public/v1/announcements", &[]);
    assert_eq!(
      json_body(&call),
      &json!({"title": "Outage", "body": "<p>Sunday 2am</p>", "showAtLogin": true})
    );
  }

  #[test]
  fn test_single_announcement_operations() {
    let get = get_announcement("_7_1", &FieldsOptions::new().fields("id,title")).unwrap();
    assert_call(&get, HttpMethod::Get, "/learn/api/public/v1/announcements/_7_1", &[("fields", "id,title")]);

    let update = update_announcement("_7_1", &UpdateAnnouncementBody::new().show_in_courses(false)).unwrap();
    assert_call(&update, HttpMethod::Patch, "/learn/api/public/v1/announcements/_7_1", &[]);
    assert_eq!(json_body(&update), &json!({"showInCourses": false}));

    let delete = delete_announcement("_7_1").unwrap();
    assert_call(&delete, HttpMethod::Delete, "/learn/api/public/v1/announcements/_7_1", &[]);
  }

  #[test]
  fn test_course_announcements() {
    let list = get_course_announcements("_12_1", &GetAnnouncementsOptions::new().sort("created(desc)")).unwrap();
    assert_call(
      &list,
      HttpMethod::Get,
      "/learn/api/public/v1/courses/_12_1/announcements",
      &[("sort", "created(desc)")],
    );

    let create =
      create_course_announcement("_12_1", &CreateCourseAnnouncementBody::new().title("Quiz").draft(true)).unwrap();
    assert_call(&create, HttpMethod::Post, "/learn/api/public/v1/courses/_12_1/announcements", &[]);
    assert_eq!(json_body(&create), &json!({"title": "Quiz", "draft": true}));

    let get = get_course_announcement("_12_1", "_4_1", &FieldsOptions::new()).unwrap();
    assert_call(&get, HttpMethod::Get, "/learn/api/public/v1/courses/_12_1/announcements/_4_1", &[]);

    let update =
      update_course_announcement("_12_1", "_4_1", &UpdateCourseAnnouncementBody::new().position(2)).unwrap();
    assert_call(&update, HttpMethod::Patch, "/learn/api/public/v1/courses/_12_1/announcements/_4_1", &[]);
    assert_eq!(json_body(&update), &json!({"position": 2}));

    let delete = delete_course_announcement("_12_1", "_4_1").unwrap();
    assert_call(&delete, HttpMethod::Delete, "/learn/api/public/v1/courses/_12_1/announcements/_4_1", &[]);
  }
}
