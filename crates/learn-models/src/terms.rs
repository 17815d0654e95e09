//! Academic terms

use crate::common::Availability;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Term {
  pub id: String,
  pub external_id: Option<String>,
  pub data_source_id: Option<String>,
  pub name: Option<String>,
  pub description: Option<String>,
  pub availability: Option<Availability>,
}

request_body! {
  pub struct CreateTermBody {
    external_id: String,
    data_source_id: String,
    name: String,
    description: String,
    availability: Availability,
  }
}

request_body! {
  pub struct UpdateTermBody {
    external_id: String,
    data_source_id: String,
    name: String,
    description: String,
    availability: Availability,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::common::{Available, Duration, DurationType};
  use serde_json::json;

  #[test]
  fn test_term_body() {
    let body = CreateTermBody::new()
      .external_id("FA25")
      .name("Fall 2025")
      .availability(Availability::new(Available::Yes).with_duration(Duration::continuous()));

    assert_eq!(
      serde_json::to_value(&body).unwrap(),
      json!({
        "externalId": "FA25",
        "name": "Fall 2025",
        "availability": {"available": "Yes", "duration": {"type": "Continuous"}}
      })
    );
  }

  #[test]
  fn test_deserialize_term() {
    let term: Term = serde_json::from_value(json!({
      "id": "_3_1",
      "externalId": "SP25",
      "dataSourceId": "_2_1",
      "name": "Spring 2025",
      "availability": {"available": "No", "duration": {"type": "FixedNumDays", "daysOfUse": 120}}
    }))
    .unwrap();

    let duration = term.availability.unwrap().duration.unwrap();
    assert_eq!(duration.kind, Some(DurationType::FixedNumDays));
    assert_eq!(duration.days_of_use, Some(120));
  }
}
