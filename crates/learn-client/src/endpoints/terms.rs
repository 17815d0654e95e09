//! Academic terms

use super::FieldsOptions;
use learn_core::{Fields, RestCall, Result};
use learn_models::terms::*;
use learn_models::{Available, Paged};

learn_core::query_options! {
  /// Filters for listing terms
  pub struct GetTermsOptions {
    offset: u32 => "offset",
    limit: u32 => "limit",
    external_id: String => "externalId",
    data_source_id: String => "dataSourceId",
    available: Available => "availability.available",
    sort: String => "sort",
    fields: Fields => "fields",
  }
}

/// List terms
pub fn get_terms(options: &GetTermsOptions) -> Result<RestCall<Paged<Term>>> {
  RestCall::get("/learn/api/public/v1/terms").options(options).build()
}

/// Create a term
pub fn create_term(body: &CreateTermBody) -> Result<RestCall<Term>> {
  RestCall::post("/learn/api/public/v1/terms").json_body(body)?.build()
}

/// Get one term; `term_id` may be a primary id or `externalId:...`
pub fn get_term(term_id: &str, options: &FieldsOptions) -> Result<RestCall<Term>> {
  RestCall::get("/learn/api/public/v1/terms/{termId}")
    .path_param("termId", term_id)
    .options(options)
    .build()
}

/// Update a term
pub fn update_term(term_id: &str, body: &UpdateTermBody) -> Result<RestCall<Term>> {
  RestCall::patch("/learn/api/public/v1/terms/{termId}")
    .path_param("termId", term_id)
    .json_body(body)?
    .build()
}

/// Delete a term
pub fn delete_term(term_id: &str) -> Result<RestCall<()>> {
  RestCall::delete("/learn/api/public/v1/terms/{termId}").path_param("termId", term_id).build()
}
