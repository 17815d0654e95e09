//! Endpoint factories, one module per resource family.
//!
//! Every function here is pure: it describes a request and returns it as a
//! [`RestCall`](learn_core::RestCall) without touching the network. Hand the
//! call to [`LearnClient::execute`](crate::LearnClient::execute) (or use
//! [`Executable`](crate::Executable)) to run it.

pub mod announcements;
pub mod attendance;
pub mod course_groups;
pub mod course_memberships;
pub mod courses;
pub mod data_sources;
pub mod grading_periods;
pub mod institutional_hierarchy;
pub mod oauth;
pub mod roles;
pub mod system;
pub mod terms;
pub mod uploads;
pub mod users;

use learn_core::Fields;

learn_core::query_options! {
  /// Paging and field projection accepted by most collection endpoints
  pub struct ListOptions {
    offset: u32 => "offset",
    limit: u32 => "limit",
    fields: Fields => "fields",
  }
}

learn_core::query_options! {
  /// Field projection for single-resource reads
  pub struct FieldsOptions {
    fields: Fields => "fields",
  }
}

#[cfg(test)]
pub(crate) mod test_support {
  use learn_core::{HttpMethod, RequestBody, RestCall};
  use serde_json::Value;

  /// Assert method, instantiated path and query of a call.
  pub fn assert_call<T>(call: &RestCall<T>, method: HttpMethod, path: &str, query: &[(&str, &str)]) {
    assert_eq!(call.method(), method, "method of {call}");
    assert_eq!(call.path(), path);
    let actual: Vec<(&str, &str)> = call.query().iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
    assert_eq!(actual, query, "query of {call}");
  }

  /// JSON body of a call, panicking if it has none.
  pub fn json_body<T>(call: &RestCall<T>) -> &Value {
    match call.body() {
      RequestBody::Json(value) => value,
      other => panic!("Expected JSON body, got {other:?}"),
    }
  }
}
