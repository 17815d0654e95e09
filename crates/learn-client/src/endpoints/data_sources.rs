//! Data source keys

use super::FieldsOptions;
use learn_core::{Fields, RestCall, Result};
use learn_models::data_sources::*;
use learn_models::Paged;

learn_core::query_options! {
  /// Filters for listing data sources
  pub struct GetDataSourcesOptions {
    offset: u32 => "offset",
    limit: u32 => "limit",
    external_id: String => "externalId",
    fields: Fields => "fields",
  }
}

/// List data sources
pub fn get_data_sources(options: &GetDataSourcesOptions) -> Result<RestCall<Paged<DataSource>>> {
  RestCall::get("/learn/api/public/v1/dataSources").options(options).build()
}

/// Create a data source
pub fn create_data_source(body: &CreateDataSourceBody) -> Result<RestCall<DataSource>> {
  RestCall::post("/learn/api/public/v1/dataSources").json_body(body)?.build()
}

/// Get one data source
pub fn get_data_source(data_source_id: &str, options: &FieldsOptions) -> Result<RestCall<DataSource>> {
  RestCall::get("/learn/api/public/v1/dataSources/{dataSourceId}")
    .path_param("dataSourceId", data_source_id)
    .options(options)
    .build()
}

/// Update a data source. Answers 423 while an SIS integration holds it.
pub fn update_data_source(data_source_id: &str, body: &UpdateDataSourceBody) -> Result<RestCall<DataSource>> {
  RestCall::patch("/learn/api/public/v1/dataSources/{dataSourceId}")
    .path_param("dataSourceId", data_source_id)
    .json_body(body)?
    .build()
}

/// Delete a data source. Answers 423 while an SIS integration holds it.
pub fn delete_data_source(data_source_id: &str) -> Result<RestCall<()>> {
  RestCall::delete("/learn/api/public/v1/dataSources/{dataSourceId}")
    .path_param("dataSourceId", data_source_id)
    .build()
}
