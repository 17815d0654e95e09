//! Temporary file uploads
//!
//! An upload returns an id that other endpoints accept in place of file
//! content. Rejected uploads (type or size) come back as 422.

use learn_core::{FileUpload, RestCall, Result};
use learn_models::uploads::UploadedFile;

/// Upload a file as multipart form data
pub fn upload_file(file: FileUpload) -> Result<RestCall<UploadedFile>> {
  RestCall::post("/learn/api/public/v1/uploads").upload(file).build()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::endpoints::test_support::assert_call;
  use learn_core::{HttpMethod, RequestBody};

  #[test]
  fn test_upload_file() {
    let file = FileUpload::new("syllabus.pdf", "application/pdf", b"%PDF-1.7".to_vec());
    let call = upload_file(file).unwrap();
    assert_call(&call, HttpMethod::Post, "/learn/api/public/v1/uploads", &[]);
    match call.body() {
      RequestBody::Upload(upload) => {
        assert_eq!(upload.file_name, "syllabus.pdf");
        assert_eq!(upload.content_type, "application/pdf");
        assert_eq!(upload.bytes.len(), 8);
      }
      other => panic!("Expected upload body, got {other:?}"),
    }
  }
}
