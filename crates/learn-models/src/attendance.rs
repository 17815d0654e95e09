//! Course meetings and the attendance recorded against them

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A scheduled class session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseMeeting {
  pub id: String,
  pub course_id: Option<String>,
  pub title: Option<String>,
  pub description: Option<String>,
  pub start: Option<DateTime<Utc>>,
  pub end: Option<DateTime<Utc>>,
  pub external_link: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
  Present,
  Late,
  Absent,
  Excused,
}

/// One user's attendance at one meeting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
  pub id: Option<String>,
  pub meeting_id: Option<String>,
  pub user_id: String,
  pub status: Option<AttendanceStatus>,
}

request_body! {
  pub struct CreateCourseMeetingBody {
    course_id: String,
    title: String,
    description: String,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    external_link: String,
  }
}

request_body! {
  pub struct UpdateCourseMeetingBody {
    title: String,
    description: String,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    external_link: String,
  }
}

request_body! {
  pub struct CreateAttendanceRecordBody {
    user_id: String,
    status: AttendanceStatus,
  }
}

request_body! {
  pub struct UpdateAttendanceRecordBody {
    status: AttendanceStatus,
  }
}
