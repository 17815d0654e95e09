//! Integration tests for executing calls against a mocked Learn server.
//!
//! Each test starts a wiremock server, points a client at it and checks the
//! request that goes out as well as how the response is mapped.

use learn_client::endpoints::{
  announcements, course_groups, course_memberships, data_sources, oauth, system, terms, uploads, FieldsOptions,
};
use learn_client::{Config, Executable, FileUpload, LearnClient};
use learn_models::oauth::TokenGrant;
use learn_models::terms::CreateTermBody;
use serde_json::json;
use wiremock::matchers::{
  basic_auth, bearer_token, body_json, body_string, body_string_contains, header, method, path, query_param,
  query_param_is_missing,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> LearnClient {
  let config = Config::new(server.uri())
    .with_app_credentials("app-key", "app-secret")
    .with_access_token("test-token");
  LearnClient::new(config).expect("client")
}

fn rest_exception(status: u16, message: &str) -> ResponseTemplate {
  ResponseTemplate::new(status).set_body_json(json!({
    "status": status,
    "message": message,
    "extraInfo": "6e6b9c2f"
  }))
}

#[tokio::test]
async fn test_bearer_token_sent() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/learn/api/public/v1/system/version"))
    .and(bearer_token("test-token"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "learn": {"major": 3900, "minor": 112, "patch": 0, "build": "rel.34+4c1ab47"}
    })))
    .expect(1)
    .mount(&server)
    .await;

  let client = client_for(&server);
  let info = system::get_version().unwrap().execute(&client).await.expect("version");
  assert_eq!(info.learn.unwrap().to_string(), "3900.112.0-rel.34+4c1ab47");
}

#[tokio::test]
async fn test_token_request_uses_basic_auth_and_form() {
  let server = MockServer::start().await;

  Mock::given(method("POST"))
    .and(path("/learn/api/public/v1/oauth2/token"))
    .and(basic_auth("app-key", "app-secret"))
    .and(header("content-type", "application/x-www-form-urlencoded"))
    .and(body_string("grant_type=client_credentials"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "access_token": "fresh-token",
      "token_type": "bearer",
      "expires_in": 3599
    })))
    .expect(1)
    .mount(&server)
    .await;

  Mock::given(method("GET"))
    .and(path("/learn/api/public/v1/system/policies/privacy"))
    .and(bearer_token("fresh-token"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "blackboard": "https://www.blackboard.com/privacy",
      "institution": null
    })))
    .expect(1)
    .mount(&server)
    .await;

  let client = client_for(&server);
  let token = client.execute(&oauth::request_token(&TokenGrant::ClientCredentials).unwrap()).await.unwrap();
  assert_eq!(token.expires_in, Some(3599));

  client.set_access_token(token.access_token).await;
  let policy = client.execute(&system::get_privacy_policy().unwrap()).await.unwrap();
  assert!(policy.institution.is_none());
}

#[tokio::test]
async fn test_token_request_without_app_credentials() {
  let server = MockServer::start().await;
  let client = LearnClient::new(Config::new(server.uri())).unwrap();

  let result = client.execute(&oauth::request_token(&TokenGrant::ClientCredentials).unwrap()).await;
  assert!(matches!(result, Err(learn_client::Error::Credentials(_))));
}

#[tokio::test]
async fn test_json_body_and_query() {
  let server = MockServer::start().await;

  Mock::given(method("POST"))
    .and(path("/learn/api/public/v1/terms"))
    .and(body_json(json!({"externalId": "FA25", "name": "Fall 2025"})))
    .respond_with(ResponseTemplate::new(201).set_body_json(json!({
      "id": "_12_1",
      "externalId": "FA25",
      "name": "Fall 2025"
    })))
    .mount(&server)
    .await;

  Mock::given(method("GET"))
    .and(path("/learn/api/public/v1/terms/_12_1"))
    .and(query_param("fields", "id,name"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "_12_1", "name": "Fall 2025"})))
    .mount(&server)
    .await;

  let client = client_for(&server);
  let created = terms::create_term(&CreateTermBody::new().external_id("FA25").name("Fall 2025"))
    .unwrap()
    .execute(&client)
    .await
    .unwrap();
  assert_eq!(created.id, "_12_1");

  let fetched = client
    .execute(&terms::get_term(&created.id, &FieldsOptions::new().fields("id,name")).unwrap())
    .await
    .unwrap();
  assert_eq!(fetched.name.as_deref(), Some("Fall 2025"));
}

#[tokio::test]
async fn test_error_statuses_pass_through() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/learn/api/public/v1/announcements/_1_1"))
    .respond_with(rest_exception(403, "Not authorized"))
    .mount(&server)
    .await;
  Mock::given(method("GET"))
    .and(path("/learn/api/public/v1/announcements/_404_1"))
    .respond_with(rest_exception(404, "Announcement not found"))
    .mount(&server)
    .await;
  Mock::given(method("PUT"))
    .and(path("/learn/api/public/v2/courses/_9_1/groups/_6_1/users/_40_1"))
    .respond_with(rest_exception(409, "Group is not open for enrollment"))
    .mount(&server)
    .await;
  Mock::given(method("DELETE"))
    .and(path("/learn/api/public/v1/dataSources/_2_1"))
    .respond_with(rest_exception(423, "Data source is locked"))
    .mount(&server)
    .await;

  let client = client_for(&server);

  let forbidden = client
    .execute(&announcements::get_announcement("_1_1", &FieldsOptions::new()).unwrap())
    .await
    .unwrap_err();
  assert!(forbidden.is_forbidden());
  assert_eq!(forbidden.to_string(), "HTTP 403: Not authorized");

  let missing = client
    .execute(&announcements::get_announcement("_404_1", &FieldsOptions::new()).unwrap())
    .await
    .unwrap_err();
  assert!(missing.is_not_found());

  let conflict = client
    .execute(&course_groups::create_group_membership("_9_1", "_6_1", "_40_1").unwrap())
    .await
    .unwrap_err();
  assert!(conflict.is_conflict());

  let locked = client.execute(&data_sources::delete_data_source("_2_1").unwrap()).await.unwrap_err();
  assert!(locked.is_locked());
  assert_eq!(locked.status(), Some(423));
}

#[tokio::test]
async fn test_unprocessable_upload() {
  let server = MockServer::start().await;

  Mock::given(method("POST"))
    .and(path("/learn/api/public/v1/uploads"))
    .and(body_string_contains("filename=\"virus.exe\""))
    .respond_with(rest_exception(422, "File type not allowed"))
    .mount(&server)
    .await;

  let client = client_for(&server);
  let file = FileUpload::new("virus.exe", "application/octet-stream", vec![0x4d, 0x5a]);
  let err = client.execute(&uploads::upload_file(file).unwrap()).await.unwrap_err();
  assert!(err.is_unprocessable());
}

#[tokio::test]
async fn test_multipart_upload() {
  let server = MockServer::start().await;

  Mock::given(method("POST"))
    .and(path("/learn/api/public/v1/uploads"))
    .and(body_string_contains("name=\"file\""))
    .and(body_string_contains("week one notes"))
    .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "5E5A9E8E3C0F4E0E"})))
    .expect(1)
    .mount(&server)
    .await;

  let client = client_for(&server);
  let file = FileUpload::new("notes.txt", "text/plain", b"week one notes".to_vec());
  let uploaded = client.execute(&uploads::upload_file(file).unwrap()).await.unwrap();
  assert_eq!(uploaded.id, "5E5A9E8E3C0F4E0E");
}

#[tokio::test]
async fn test_empty_body_on_delete() {
  let server = MockServer::start().await;

  Mock::given(method("DELETE"))
    .and(path("/learn/api/public/v1/terms/_12_1"))
    .respond_with(ResponseTemplate::new(204))
    .expect(1)
    .mount(&server)
    .await;

  let client = client_for(&server);
  let result = terms::delete_term("_12_1").unwrap().execute(&client).await;
  assert!(result.is_ok(), "Delete failed: {:?}", result.err());
}

#[tokio::test]
async fn test_collect_all_follows_next_page() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/learn/api/public/v1/terms"))
    .and(query_param("limit", "2"))
    .and(query_param_is_missing("offset"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "results": [{"id": "_1_1"}, {"id": "_2_1"}],
      "paging": {"nextPage": "/learn/api/public/v1/terms?limit=2&offset=2"}
    })))
    .expect(1)
    .mount(&server)
    .await;

  Mock::given(method("GET"))
    .and(path("/learn/api/public/v1/terms"))
    .and(query_param("offset", "2"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "results": [{"id": "_3_1"}]
    })))
    .expect(1)
    .mount(&server)
    .await;

  let client = client_for(&server);
  let first = terms::get_terms(&terms::GetTermsOptions::new().limit(2)).unwrap();
  let all = client.collect_all(first).await.unwrap();
  let ids: Vec<&str> = all.iter().map(|t| t.id.as_str()).collect();
  assert_eq!(ids, vec!["_1_1", "_2_1", "_3_1"]);
}

#[tokio::test]
async fn test_collect_all_stops_on_error() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/learn/api/public/v1/announcements"))
    .respond_with(rest_exception(403, "Missing entitlement system.announcements.VIEW"))
    .mount(&server)
    .await;

  let client = client_for(&server);
  let first = announcements::get_announcements(&announcements::GetAnnouncementsOptions::new()).unwrap();
  let err = client.collect_all(first).await.unwrap_err();
  assert!(err.is_forbidden());
}

#[tokio::test]
async fn test_collect_all_follows_encoded_next_page() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/learn/api/public/v1/courses/courseId:ENG%20101/users"))
    .and(query_param_is_missing("offset"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "results": [{"userId": "_40_1", "courseId": "_9_1"}],
      "paging": {"nextPage": "/learn/api/public/v1/courses/courseId:ENG%20101/users?offset=1"}
    })))
    .expect(1)
    .mount(&server)
    .await;

  Mock::given(method("GET"))
    .and(path("/learn/api/public/v1/courses/courseId:ENG%20101/users"))
    .and(query_param("offset", "1"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "results": [{"userId": "_41_1", "courseId": "_9_1"}]
    })))
    .expect(1)
    .mount(&server)
    .await;

  let client = client_for(&server);
  let first =
    course_memberships::get_course_memberships("courseId:ENG 101", &course_memberships::GetMembershipsOptions::new())
      .unwrap();
  let members = client.collect_all(first).await.unwrap();
  let users: Vec<&str> = members.iter().map(|m| m.user_id.as_str()).collect();
  assert_eq!(users, vec!["_40_1", "_41_1"]);
}

#[tokio::test]
async fn test_server_errors_are_not_retried() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/learn/api/public/v1/system/version"))
    .respond_with(rest_exception(500, "Internal error"))
    .expect(1)
    .mount(&server)
    .await;

  let client = client_for(&server);
  let err = client.execute(&system::get_version().unwrap()).await.unwrap_err();
  assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_connect_failure_is_retried_then_reported() {
  let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
  let port = listener.local_addr().unwrap().port();
  drop(listener);

  let mut config = Config::new(format!("http://127.0.0.1:{port}")).with_access_token("test-token");
  config.max_retries = 1;
  let client = LearnClient::new(config).unwrap();

  let started = std::time::Instant::now();
  let result = client.execute(&system::get_version().unwrap()).await;
  assert!(matches!(result, Err(learn_client::Error::Http(_))), "got {result:?}");
  // one backoff of 2^1 * 250ms before the final attempt
  assert!(started.elapsed() >= std::time::Duration::from_millis(500));
}
