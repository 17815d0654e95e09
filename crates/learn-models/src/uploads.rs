//! Temporary file uploads

use serde::{Deserialize, Serialize};

/// Handle returned by `POST /v1/uploads`; referenced later by id when
/// attaching the file to another resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedFile {
  pub id: String,
}
