//! User accounts

use super::FieldsOptions;
use learn_core::{Fields, RestCall, Result};
use learn_models::users::*;
use learn_models::{Available, Paged};

learn_core::query_options! {
  /// Filters for listing users
  pub struct GetUsersOptions {
    offset: u32 => "offset",
    limit: u32 => "limit",
    user_name: String => "userName",
    external_id: String => "externalId",
    data_source_id: String => "dataSourceId",
    name_given: String => "name.given",
    name_family: String => "name.family",
    email: String => "contact.email",
    institution_role_ids: String => "institutionRoleIds",
    system_role_ids: String => "systemRoleIds",
    available: Available => "availability.available",
    sort: String => "sort",
    fields: Fields => "fields",
  }
}

/// List users
pub fn get_users(options: &GetUsersOptions) -> Result<RestCall<Paged<User>>> {
  RestCall::get("/learn/api/public/v1/users").options(options).build()
}

/// Create a user
pub fn create_user(body: &CreateUserBody) -> Result<RestCall<User>> {
  RestCall::post("/learn/api/public/v1/users").json_body(body)?.build()
}

/// Get one user; `user_id` may be `userName:...`, `externalId:...`, `uuid:...` or a primary id
pub fn get_user(user_id: &str, options: &FieldsOptions) -> Result<RestCall<User>> {
  RestCall::get("/learn/api/public/v1/users/{userId}")
    .path_param("userId", user_id)
    .options(options)
    .build()
}

/// Update a user
pub fn update_user(user_id: &str, body: &UpdateUserBody) -> Result<RestCall<User>> {
  RestCall::patch("/learn/api/public/v1/users/{userId}")
    .path_param("userId", user_id)
    .json_body(body)?
    .build()
}

/// Delete a user
pub fn delete_user(user_id: &str) -> Result<RestCall<()>> {
  RestCall::delete("/learn/api/public/v1/users/{userId}").path_param("userId", user_id).build()
}
