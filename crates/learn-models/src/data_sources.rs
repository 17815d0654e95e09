//! Data source keys used to tag SIS-managed records

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
  pub id: String,
  pub external_id: Option<String>,
  pub description: Option<String>,
}

request_body! {
  pub struct CreateDataSourceBody {
    external_id: String,
    description: String,
  }
}

request_body! {
  pub struct UpdateDataSourceBody {
    external_id: String,
    description: String,
  }
}
