use crate::common::{mock_token, test_client, test_config};
use concur_client::prelude::*;
use mockito::{Matcher, Server};
use serde_json::{Value, json};

const REPORT_PATH: &str = "/api/v3.0/expense/reports/R1";

#[tokio::test]
async fn unauthorized_once_refreshes_and_retries() {
    let mut server = Server::new_async().await;
    let token = mock_token(&mut server, "fresh", 3600, 1).await;
    let rejected = server
        .mock("GET", REPORT_PATH)
        .match_header("authorization", "Bearer stale")
        .with_status(401)
        .expect(1)
        .create_async()
        .await;
    let accepted = server
        .mock("GET", REPORT_PATH)
        .match_header("authorization", "Bearer fresh")
        .with_status(200)
        .with_body(r#"{"ID":"R1","Name":"Berlin trip"}"#)
        .expect(1)
        .create_async()
        .await;

    let client = test_client(&server);
    client.store_token(AccessToken::new("stale", 3600)).await;

    let report = client.get_report("R1").await.unwrap();
    assert_eq!(report.name.as_deref(), Some("Berlin trip"));

    rejected.assert_async().await;
    accepted.assert_async().await;
    token.assert_async().await;
    assert_eq!(client.auth().token_request_count(), 1);
}

#[tokio::test]
async fn unauthorized_twice_is_an_authentication_error() {
    let mut server = Server::new_async().await;
    let token = mock_token(&mut server, "fresh", 3600, 1).await;
    let resource = server
        .mock("GET", REPORT_PATH)
        .with_status(401)
        .with_body("token revoked")
        .expect(2)
        .create_async()
        .await;

    let client = test_client(&server);
    client.store_token(AccessToken::new("stale", 3600)).await;

    let err = client.get_report("R1").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Authentication);
    assert!(err.to_string().contains("token revoked"));

    resource.assert_async().await;
    token.assert_async().await;
}

#[tokio::test]
async fn not_found_is_classified() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server, "abc", 3600, 1).await;
    let _resource = server
        .mock("GET", REPORT_PATH)
        .with_status(404)
        .with_body("no such report")
        .create_async()
        .await;

    let err = test_client(&server).get_report("R1").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(matches!(err, AppError::NotFound(msg) if msg.contains("no such report")));
}

#[tokio::test]
async fn bad_request_is_a_validation_error() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server, "abc", 3600, 1).await;
    let _resource = server
        .mock("POST", "/api/v3.0/expense/reports")
        .with_status(400)
        .with_body(r#"{"Message":"Name is required"}"#)
        .create_async()
        .await;

    let err = test_client(&server)
        .create_report(&NewReport::new("Q3 offsite"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[tokio::test]
async fn other_statuses_are_api_errors_with_status_and_body() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server, "abc", 3600, 1).await;
    let _resource = server
        .mock("GET", REPORT_PATH)
        .with_status(503)
        .with_body("maintenance")
        .create_async()
        .await;

    let err = test_client(&server).get_report("R1").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Api);
    match err {
        AppError::Api { status, body } => {
            assert_eq!(status.as_u16(), 503);
            assert_eq!(body, "maintenance");
        }
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn timeout_is_an_api_error() {
    // Accepts connections at the kernel level but never answers
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());

    let mut config = Config::with_credentials(Credentials::new("id", "secret", "user", "pass"), url);
    config.rest_api.timeout = 1;
    let client = Client::new(config).unwrap();
    client.store_token(AccessToken::new("abc", 3600)).await;

    let err = client.get_report("R1").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Api);
    assert!(matches!(err, AppError::Network(ref e) if e.is_timeout()), "{err:?}");

    drop(listener);
}

#[tokio::test]
async fn requests_carry_auth_and_json_headers() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server, "abc", 3600, 1).await;
    let resource = server
        .mock("PUT", REPORT_PATH)
        .match_header("authorization", "Bearer abc")
        .match_header("accept", "application/json")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"Name": "Renamed"})))
        .with_status(204)
        .expect(1)
        .create_async()
        .await;

    let client = test_client(&server);
    let update = ReportUpdate {
        name: Some("Renamed".to_string()),
        ..Default::default()
    };
    client.update_report("R1", &update).await.unwrap();

    resource.assert_async().await;
}

#[tokio::test]
async fn empty_body_decodes_as_null() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server, "abc", 3600, 1).await;
    let _resource = server
        .mock("DELETE", REPORT_PATH)
        .with_status(200)
        .create_async()
        .await;

    let value: Value = test_client(&server).delete("expense/reports/R1").await.unwrap();
    assert_eq!(value, Value::Null);
}

#[tokio::test]
async fn absolute_urls_bypass_the_versioned_root() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server, "abc", 3600, 1).await;
    let resource = server
        .mock("GET", "/expenseconfig/v4/expensetypes")
        .with_status(200)
        .with_body("[]")
        .expect(1)
        .create_async()
        .await;

    let client = test_client(&server);
    let url = client.host_url("expenseconfig/v4/expensetypes");
    let value: Value = client.get(&url).await.unwrap();

    assert_eq!(value, json!([]));
    resource.assert_async().await;
}

#[tokio::test]
async fn relative_paths_starting_with_http_stay_under_the_versioned_root() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server, "abc", 3600, 1).await;
    let resource = server
        .mock("GET", "/api/v3.0/httpbin/items")
        .with_status(200)
        .with_body(r#"{"ok":true}"#)
        .expect(1)
        .create_async()
        .await;

    let value: Value = test_client(&server).get("httpbin/items").await.unwrap();

    assert_eq!(value, json!({"ok": true}));
    resource.assert_async().await;
}

#[tokio::test]
async fn connect_acquires_token_eagerly() {
    let mut server = Server::new_async().await;
    let token = mock_token(&mut server, "abc", 3600, 1).await;

    let client = Client::connect(test_config(&server)).await.unwrap();
    assert!(client.auth().cached_token().await.is_some());
    token.assert_async().await;
}
