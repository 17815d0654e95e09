//! Gradebook grading periods of a course

use super::{FieldsOptions, ListOptions};
use learn_core::{RestCall, Result};
use learn_models::grading_periods::*;
use learn_models::Paged;

const PERIODS: &str = "/learn/api/public/v1/courses/{courseId}/gradebook/periods";
const PERIOD: &str = "/learn/api/public/v1/courses/{courseId}/gradebook/periods/{periodId}";

/// List the grading periods of a course
pub fn get_grading_periods(course_id: &str, options: &ListOptions) -> Result<RestCall<Paged<GradingPeriod>>> {
  RestCall::get(PERIODS).path_param("courseId", course_id).options(options).build()
}

/// Create a grading period
pub fn create_grading_period(course_id: &str, body: &CreateGradingPeriodBody) -> Result<RestCall<GradingPeriod>> {
  RestCall::post(PERIODS).path_param("courseId", course_id).json_body(body)?.build()
}

/// Get one grading period
pub fn get_grading_period(
  course_id: &str,
  period_id: &str,
  options: &FieldsOptions,
) -> Result<RestCall<GradingPeriod>> {
  RestCall::get(PERIOD)
    .path_param("courseId", course_id)
    .path_param("periodId", period_id)
    .options(options)
    .build()
}

/// Update a grading period
pub fn update_grading_period(
  course_id: &str,
  period_id: &str,
  body: &UpdateGradingPeriodBody,
) -> Result<RestCall<GradingPeriod>> {
  RestCall::patch(PERIOD)
    .path_param("courseId", course_id)
    .path_param("periodId", period_id)
    .json_body(body)?
    .build()
}

/// Delete a grading period. Columns assigned to it fall back to no period.
pub fn delete_grading_period(course_id: &str, period_id: &str) -> Result<RestCall<()>> {
  RestCall::delete(PERIOD)
    .path_param("courseId", course_id)
    .path_param("periodId", period_id)
    .build()
}
