//! System and course announcements

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How long an announcement stays visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnnouncementDurationType {
  /// No end date
  Permanent,
  /// Visible between `start` and `end`
  Restricted,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnouncementDuration {
  #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
  pub kind: Option<AnnouncementDurationType>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub start: Option<DateTime<Utc>>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub end: Option<DateTime<Utc>>,
}

/// Visibility window of an announcement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnouncementAvailability {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub duration: Option<AnnouncementDuration>,
}

impl AnnouncementAvailability {
  pub fn permanent(start: Option<DateTime<Utc>>) -> Self {
    Self {
      duration: Some(AnnouncementDuration {
        kind: Some(AnnouncementDurationType::Permanent),
        start,
        end: None,
      }),
    }
  }

  pub fn restricted(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
    Self {
      duration: Some(AnnouncementDuration {
        kind: Some(AnnouncementDurationType::Restricted),
        start: Some(start),
        end: Some(end),
      }),
    }
  }
}

/// System announcement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
  pub id: String,
  pub title: Option<String>,
  /// HTML body
  pub body: Option<String>,
  pub availability: Option<AnnouncementAvailability>,
  pub show_at_login: Option<bool>,
  pub show_in_courses: Option<bool>,
  pub created: Option<DateTime<Utc>>,
  pub modified: Option<DateTime<Utc>>,
}

/// Announcement posted inside a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseAnnouncement {
  pub id: String,
  pub title: Option<String>,
  pub body: Option<String>,
  pub draft: Option<bool>,
  pub availability: Option<AnnouncementAvailability>,
  pub creator_user_id: Option<String>,
  pub position: Option<i32>,
  pub created: Option<DateTime<Utc>>,
  pub modified: Option<DateTime<Utc>>,
}

request_body! {
  /// Body of `POST /v1/announcements`
  pub struct CreateAnnouncementBody {
    title: String,
    body: String,
    availability: AnnouncementAvailability,
    show_at_login: bool,
    show_in_courses: bool,
  }
}

request_body! {
  /// Body of `PATCH /v1/announcements/{announcementId}`
  pub struct UpdateAnnouncementBody {
    title: String,
    body: String,
    availability: AnnouncementAvailability,
    show_at_login: bool,
    show_in_courses: bool,
  }
}

request_body! {
  /// Body of `POST /v1/courses/{courseId}/announcements`
  pub struct CreateCourseAnnouncementBody {
    title: String,
    body: String,
    /// Saved but not shown to students
    draft: bool,
    availability: AnnouncementAvailability,
  }
}

request_body! {
  /// Body of `PATCH /v1/courses/{courseId}/announcements/{announcementId}`
  pub struct UpdateCourseAnnouncementBody {
    title: String,
    body: String,
    draft: bool,
    availability: AnnouncementAvailability,
    /// Display order; 1 is the top
    position: i32,
  }
}
