//! Course meetings and attendance records

use super::{FieldsOptions, ListOptions};
use learn_core::{RestCall, Result};
use learn_models::attendance::*;
use learn_models::Paged;

const MEETINGS: &str = "/learn/api/public/v1/courses/{courseId}/meetings";
const MEETING: &str = "/learn/api/public/v1/courses/{courseId}/meetings/{meetingId}";
const MEETING_RECORDS: &str = "/learn/api/public/v1/courses/{courseId}/meetings/{meetingId}/users";
const MEETING_RECORD: &str = "/learn/api/public/v1/courses/{courseId}/meetings/{meetingId}/users/{userId}";
const USER_RECORDS: &str = "/learn/api/public/v1/courses/{courseId}/meetings/users/{userId}";

/// List the meetings of a course
pub fn get_course_meetings(course_id: &str, options: &ListOptions) -> Result<RestCall<Paged<CourseMeeting>>> {
  RestCall::get(MEETINGS).path_param("courseId", course_id).options(options).build()
}

/// Create a meeting in a course
pub fn create_course_meeting(course_id: &str, body: &CreateCourseMeetingBody) -> Result<RestCall<CourseMeeting>> {
  RestCall::post(MEETINGS).path_param("courseId", course_id).json_body(body)?.build()
}

/// Delete every meeting of a course, with their attendance records
pub fn delete_course_meetings(course_id: &str) -> Result<RestCall<()>> {
  RestCall::delete(MEETINGS).path_param("courseId", course_id).build()
}

/// Get one meeting
pub fn get_course_meeting(
  course_id: &str,
  meeting_id: &str,
  options: &FieldsOptions,
) -> Result<RestCall<CourseMeeting>> {
  RestCall::get(MEETING)
    .path_param("courseId", course_id)
    .path_param("meetingId", meeting_id)
    .options(options)
    .build()
}

/// Update a meeting
pub fn update_course_meeting(
  course_id: &str,
  meeting_id: &str,
  body: &UpdateCourseMeetingBody,
) -> Result<RestCall<CourseMeeting>> {
  RestCall::patch(MEETING)
    .path_param("courseId", course_id)
    .path_param("meetingId", meeting_id)
    .json_body(body)?
    .build()
}

/// Delete a meeting
pub fn delete_course_meeting(course_id: &str, meeting_id: &str) -> Result<RestCall<()>> {
  RestCall::delete(MEETING)
    .path_param("courseId", course_id)
    .path_param("meetingId", meeting_id)
    .build()
}

/// List attendance records of a meeting
pub fn get_attendance_records(
  course_id: &str,
  meeting_id: &str,
  options: &ListOptions,
) -> Result<RestCall<Paged<AttendanceRecord>>> {
  RestCall::get(MEETING_RECORDS)
    .path_param("courseId", course_id)
    .path_param("meetingId", meeting_id)
    .options(options)
    .build()
}

/// Record a user's attendance at a meeting
pub fn create_attendance_record(
  course_id: &str,
  meeting_id: &str,
  body: &CreateAttendanceRecordBody,
) -> Result<RestCall<AttendanceRecord>> {
  RestCall::post(MEETING_RECORDS)
    .path_param("courseId", course_id)
    .path_param("meetingId", meeting_id)
    .json_body(body)?
    .build()
}

/// Delete every attendance record of a meeting
pub fn delete_attendance_records(course_id: &str, meeting_id: &str) -> Result<RestCall<()>> {
  RestCall::delete(MEETING_RECORDS)
    .path_param("courseId", course_id)
    .path_param("meetingId", meeting_id)
    .build()
}

/// Get one user's attendance record for a meeting
pub fn get_attendance_record(
  course_id: &str,
  meeting_id: &str,
  user_id: &str,
  options: &FieldsOptions,
) -> Result<RestCall<AttendanceRecord>> {
  RestCall::get(MEETING_RECORD)
    .path_param("courseId", course_id)
    .path_param("meetingId", meeting_id)
    .path_param("userId", user_id)
    .options(options)
    .build()
}

/// Update one user's attendance record for a meeting
pub fn update_attendance_record(
  course_id: &str,
  meeting_id: &str,
  user_id: &str,
  body: &UpdateAttendanceRecordBody,
) -> Result<RestCall<AttendanceRecord>> {
  RestCall::patch(MEETING_RECORD)
    .path_param("courseId", course_id)
    .path_param("meetingId", meeting_id)
    .path_param("userId", user_id)
    .json_body(body)?
    .build()
}

/// Delete one user's attendance record for a meeting
pub fn delete_attendance_record(course_id: &str, meeting_id: &str, user_id: &str) -> Result<RestCall<()>> {
  RestCall::delete(MEETING_RECORD)
    .path_param("courseId", course_id)
    .path_param("meetingId", meeting_id)
    .path_param("userId", user_id)
    .build()
}

/// List a user's attendance across every meeting of a course
pub fn get_user_attendance_records(
  course_id: &str,
  user_id: &str,
  options: &ListOptions,
) -> Result<RestCall<Paged<AttendanceRecord>>> {
  RestCall::get(USER_RECORDS)
    .path_param("courseId", course_id)
    .path_param("userId", user_id)
    .options(options)
    .build()
}

/// Delete a user's attendance across every meeting of a course
pub fn delete_user_attendance_records(course_id: &str, user_id: &str) -> Result<RestCall<()>> {
  RestCall::delete(USER_RECORDS)
    .path_param("courseId", course_id)
    .path_param("userId", user_id)
    .build()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::endpoints::test_support::{assert_call, json_body};
  use learn_core::HttpMethod;
  use serde_json::json;

  #[test]
  fn test_meeting_calls() {
    let list = get_course_meetings("_9_1", &ListOptions::new().limit(50)).unwrap();
    assert_call(&list, HttpMethod::Get, "/learn/api/public/v1/courses/_9_1/meetings", &[("limit", "50")]);

    let create = create_course_meeting("_9_1", &CreateCourseMeetingBody::new().title("Lab")).unwrap();
    assert_call(&create, HttpMethod::Post, "/learn/api/public/v1/courses/_9_1/meetings", &[]);
    assert_eq!(json_body(&create), &json!({"title": "Lab"}));

    let purge = delete_course_meetings("_9_1").unwrap();
    assert_call(&purge, HttpMethod::Delete, "/learn/api/public/v1/courses/_9_1/meetings", &[]);

    let get = get_course_meeting("_9_1", "_2_1", &FieldsOptions::new()).unwrap();
    assert_call(&get, HttpMethod::Get, "/learn/api/public/v1/courses/_9_1/meetings/_2_1", &[]);

    let update =
      update_course_meeting("_9_1", "_2_1", &UpdateCourseMeetingBody::new().external_link("https://zoom")).unwrap();
    assert_call(&update, HttpMethod::Patch, "/learn/api/public/v1/courses/_9_1/meetings/_2_1", &[]);
    assert_eq!(json_body(&update), &json!({"externalLink": "https://zoom"}));

    let delete = delete_course_meeting("_9_1", "_2_1").unwrap();
    assert_call(&delete, HttpMethod::Delete, "/learn/api/public/v1/courses/_9_1/meetings/_2_1", &[]);
  }

  #[test]
  fn test_record_calls() {
    let list = get_attendance_records("_9_1", "_2_1", &ListOptions::new()).unwrap();
    assert_call(&list, HttpMethod::Get, "/learn/api/public/v1/courses/_9_1/meetings/_2_1/users", &[]);

    let body = CreateAttendanceRecordBody::new().user_id("_40_1").status(AttendanceStatus::Present);
    let create = create_attendance_record("_9_1", "_2_1", &body).unwrap();
    assert_call(&create, HttpMethod::Post, "/learn/api/public/v1/courses/_9_1/meetings/_2_1/users", &[]);
    assert_eq!(json_body(&create), &json!({"userId": "_40_1", "status": "Present"}));

    let purge = delete_attendance_records("_9_1", "_2_1").unwrap();
    assert_call(&purge, HttpMethod::Delete, "/learn/api/public/v1/courses/_9_1/meetings/_2_1/users", &[]);

    let get = get_attendance_record("_9_1", "_2_1", "_40_1", &FieldsOptions::new().fields("status")).unwrap();
    assert_call(
      &get,
      HttpMethod::Get,
      "/learn/api/public/v1/courses/_9_1/meetings/_2_1/users/_40_1",
      &[("fields", "status")],
    );

    let update = update_attendance_record(
      "_9_1",
      "_2_1",
      "_40_1",
      &UpdateAttendanceRecordBody::new().status(AttendanceStatus::Absent),
    )
    .unwrap();
    assert_call(&update, HttpMethod::Patch, "/learn/api/public/v1/courses/_9_1/meetings/_2_1/users/_40_1", &[]);
    assert_eq!(json_body(&update), &json!({"status": "Absent"}));

    let delete = delete_attendance_record("_9_1", "_2_1", "_40_1").unwrap();
    assert_call(&delete, HttpMethod::Delete, "/learn/api/public/v1/courses/_9_1/meetings/_2_1/users/_40_1", &[]);
  }

  #[test]
  fn test_user_records_across_meetings() {
    let list = get_user_attendance_records("_9_1", "_40_1", &ListOptions::new().offset(10)).unwrap();
    assert_call(
      &list,
      HttpMethod::Get,
      "/learn/api/public/v1/courses/_9_1/meetings/users/_40_1",
      &[("offset", "10")],
    );

    let delete = delete_user_attendance_records("_9_1", "_40_1").unwrap();
    assert_call(&delete, HttpMethod::Delete, "/learn/api/public/v1/courses/_9_1/meetings/users/_40_1", &[]);
  }
}
