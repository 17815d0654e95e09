//! Gradebook grading periods

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a grading period is bounded by dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradingPeriodDateMode {
  UseDates,
  NoDates,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradingPeriod {
  pub id: String,
  pub title: Option<String>,
  pub description: Option<String>,
  pub date_mode: Option<GradingPeriodDateMode>,
  pub start: Option<DateTime<Utc>>,
  pub end: Option<DateTime<Utc>>,
}

request_body! {
  pub struct CreateGradingPeriodBody {
    title: String,
    description: String,
    date_mode: GradingPeriodDateMode,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
  }
}

request_body! {
  pub struct UpdateGradingPeriodBody {
    title: String,
    description: String,
    date_mode: GradingPeriodDateMode,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_period_body() {
    let body = CreateGradingPeriodBody::new().title("Quarter 1").date_mode(GradingPeriodDateMode::NoDates);
    assert_eq!(serde_json::to_value(&body).unwrap(), json!({"title": "Quarter 1", "dateMode": "NoDates"}));
  }
}
