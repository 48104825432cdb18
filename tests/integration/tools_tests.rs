use crate::common::{mock_token, test_client, test_config};
use assert_json_diff::assert_json_include;
use concur_client::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;

fn tools(server: &Server) -> ExpenseTools {
    ExpenseTools::new(Arc::new(test_client(server)))
}

#[tokio::test]
async fn from_config_rejects_incomplete_credentials() {
    let server = Server::new_async().await;
    let mut config = test_config(&server);
    config.credentials.client_secret = String::new();

    let err = ExpenseTools::from_config(config).err().unwrap();
    assert!(err.to_string().contains("CONCUR_CLIENT_SECRET"));
}

#[tokio::test]
async fn list_reports_success_envelope() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server, "abc", 3600, 1).await;
    let _list = server
        .mock("GET", "/api/v3.0/expense/reports")
        .match_query(Matcher::UrlEncoded("limit".into(), "10".into()))
        .with_status(200)
        .with_body(r#"{"Items":[{"ID":"R1","Name":"Berlin"}],"TotalCount":4}"#)
        .create_async()
        .await;

    let result = tools(&server).list_reports(10, None, None).await;

    assert!(result.is_ok());
    assert_eq!(result.message, "Retrieved 1 of 4 reports");
    assert_eq!(result.error_kind, None);

    let value = serde_json::to_value(&result).unwrap();
    assert_json_include!(
        actual: value,
        expected: json!({
            "success": true,
            "payload": {
                "items": [{"id": "R1", "name": "Berlin"}],
                "count": 1,
                "total_count": 4,
                "limit": 10
            },
            "error_kind": null
        })
    );
}

#[tokio::test]
async fn not_found_becomes_a_failure_envelope() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server, "abc", 3600, 1).await;
    let _get = server
        .mock("GET", "/api/v3.0/expense/reports/NOPE")
        .with_status(404)
        .with_body("report not found")
        .create_async()
        .await;

    let result = tools(&server).get_report_details("NOPE").await;

    assert!(!result.is_ok());
    assert_eq!(result.error_kind, Some(ErrorKind::NotFound));
    assert!(result.message.starts_with("Failed to get report: "));
    assert!(result.message.contains("report not found"));

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["error_kind"], "NotFoundError");
    assert_eq!(value["payload"], serde_json::Value::Null);
    assert!(result.into_payload().is_none());
}

#[tokio::test]
async fn validation_failures_never_reach_the_server() {
    let server = Server::new_async().await;
    let tools = tools(&server);

    let result = tools.update_expense("E1", ExpenseUpdate::default()).await;

    assert!(!result.success);
    assert_eq!(result.error_kind, Some(ErrorKind::Validation));
    assert_eq!(tools.api().auth().token_request_count(), 0);
}

#[tokio::test]
async fn create_report_reports_the_new_name() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server, "abc", 3600, 1).await;
    let _create = server
        .mock("POST", "/api/v3.0/expense/reports")
        .with_status(200)
        .with_body(r#"{"ID":"R7","URI":"https://example.com/reports/R7"}"#)
        .create_async()
        .await;

    let result = tools(&server)
        .create_report(NewReport::new("Team dinner"))
        .await;

    assert!(result.is_ok());
    assert_eq!(result.message, "Successfully created report: Team dinner");
    assert_eq!(result.into_payload().unwrap().id, "R7");
}

#[tokio::test]
async fn token_failure_is_an_authentication_envelope() {
    let mut server = Server::new_async().await;
    let _token = server
        .mock("POST", crate::common::TOKEN_PATH)
        .with_status(400)
        .with_body(r#"{"error":"invalid_client"}"#)
        .create_async()
        .await;

    let result = tools(&server).test_connection().await;

    assert!(!result.success);
    assert_eq!(result.error_kind, Some(ErrorKind::Authentication));
    assert!(result.message.starts_with("Failed to connect to Concur API"));
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["error_kind"], "AuthenticationError");
}

#[tokio::test]
async fn list_expenses_and_delete_expense_envelopes() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server, "abc", 3600, 1).await;
    let _list = server
        .mock("GET", "/api/v3.0/expense/entries")
        .match_query(Matcher::UrlEncoded("reportID".into(), "R1".into()))
        .with_status(200)
        .with_body(r#"{"Items":[{"ID":"E1"},{"ID":"E2"}]}"#)
        .create_async()
        .await;
    let _delete = server
        .mock("DELETE", "/api/v3.0/expense/entries/E2")
        .with_status(204)
        .create_async()
        .await;

    let tools = tools(&server);
    let listed = tools.list_expenses("R1", 25, None).await;
    assert_eq!(listed.message, "Retrieved 2 of 2 expenses for report R1");

    let deleted = tools.delete_expense("E2").await;
    assert!(deleted.is_ok());
    assert_eq!(deleted.message, "Successfully deleted expense entry E2");
}
