//! Course, system and institution roles. Read-only.

use super::FieldsOptions;
use learn_core::{Fields, RestCall, Result};
use learn_models::roles::*;
use learn_models::Paged;

learn_core::query_options! {
  /// Filters for listing roles
  pub struct GetRolesOptions {
    offset: u32 => "offset",
    limit: u32 => "limit",
    role_id: String => "roleId",
    fields: Fields => "fields",
  }
}

/// List course roles
pub fn get_course_roles(options: &GetRolesOptions) -> Result<RestCall<Paged<CourseRole>>> {
  RestCall::get("/learn/api/public/v1/courseRoles").options(options).build()
}

/// Get one course role by id or `roleId`
pub fn get_course_role(role_id: &str, options: &FieldsOptions) -> Result<RestCall<CourseRole>> {
  RestCall::get("/learn/api/public/v1/courseRoles/{roleId}")
    .path_param("roleId", role_id)
    .options(options)
    .build()
}

/// List system roles
pub fn get_system_roles(options: &GetRolesOptions) -> Result<RestCall<Paged<SystemRole>>> {
  RestCall::get("/learn/api/public/v1/systemRoles").options(options).build()
}

/// Get one system role
pub fn get_system_role(role_id: &str, options: &FieldsOptions) -> Result<RestCall<SystemRole>> {
  RestCall::get("/learn/api/public/v1/systemRoles/{roleId}")
    .path_param("roleId", role_id)
    .options(options)
    .build()
}

/// List institution roles
pub fn get_institution_roles(options: &GetRolesOptions) -> Result<RestCall<Paged<InstitutionRole>>> {
  RestCall::get("/learn/api/public/v1/institutionRoles").options(options).build()
}

/// Get one institution role
pub fn get_institution_role(role_id: &str, options: &FieldsOptions) -> Result<RestCall<InstitutionRole>> {
  RestCall::get("/learn/api/public/v1/institutionRoles/{roleId}")
    .path_param("roleId", role_id)
    .options(options)
    .build()
}
