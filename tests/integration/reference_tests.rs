use crate::common::{jwt, mock_token, test_client};
use concur_client::prelude::*;
use mockito::Server;
use serde_json::json;

#[tokio::test]
async fn expense_types_prefer_v4_configuration() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server, "abc", 3600, 1).await;
    let v4 = server
        .mock("GET", "/expenseconfig/v4/expensetypes")
        .with_status(200)
        .with_body(
            json!([
                {
                    "expenseCode": "MEALS",
                    "name": "Meals",
                    "expenseCategoryCode": "MEALS",
                    "spendCategoryCode": "BUSML",
                    "expenseTypeId": "01009",
                    "description": "Business meals",
                    "isDeleted": false
                },
                {
                    "expenseCode": "AIRFR",
                    "name": "Airfare",
                    "isDeleted": true,
                    "showOnMobile": false
                }
            ])
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;
    let v3 = server
        .mock("GET", "/api/v3.0/expense/expensetypes")
        .expect(0)
        .create_async()
        .await;

    let catalog = test_client(&server).get_expense_types().await.unwrap();

    assert_eq!(catalog.api_version, "v4");
    assert_eq!(catalog.count, 2);
    let meals = &catalog.items[0];
    assert_eq!(meals.code.as_deref(), Some("MEALS"));
    assert_eq!(meals.spend_category.as_deref(), Some("BUSML"));
    assert_eq!(meals.expense_type_id.as_deref(), Some("01009"));
    assert!(meals.show_on_mobile);
    let airfare = &catalog.items[1];
    assert!(airfare.is_deleted);
    assert!(!airfare.show_on_mobile);

    v4.assert_async().await;
    v3.assert_async().await;
}

#[tokio::test]
async fn expense_types_fall_back_to_v3() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server, "abc", 3600, 1).await;
    let v4 = server
        .mock("GET", "/expenseconfig/v4/expensetypes")
        .with_status(500)
        .expect(1)
        .create_async()
        .await;
    let v3 = server
        .mock("GET", "/api/v3.0/expense/expensetypes")
        .with_status(200)
        .with_body(
            json!({
                "Items": [
                    {"Code": "TAXI", "Name": "Taxi", "CategoryCode": "TRANS", "ID": "T1"}
                ]
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let catalog = test_client(&server).get_expense_types().await.unwrap();

    assert_eq!(catalog.api_version, "v3");
    assert_eq!(catalog.count, 1);
    assert_eq!(catalog.items[0].code.as_deref(), Some("TAXI"));
    assert_eq!(catalog.items[0].category.as_deref(), Some("TRANS"));
    assert_eq!(catalog.items[0].expense_type_id.as_deref(), Some("T1"));

    v4.assert_async().await;
    v3.assert_async().await;
}

#[tokio::test]
async fn expense_types_fail_when_both_generations_fail() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server, "abc", 3600, 1).await;
    let _v4 = server
        .mock("GET", "/expenseconfig/v4/expensetypes")
        .with_status(500)
        .create_async()
        .await;
    let _v3 = server
        .mock("GET", "/api/v3.0/expense/expensetypes")
        .with_status(404)
        .create_async()
        .await;

    let err = test_client(&server).get_expense_types().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn payment_types_prefer_v3() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server, "abc", 3600, 1).await;
    let v3 = server
        .mock("GET", "/api/v3.0/expense/paymenttypes")
        .with_status(200)
        .with_body(
            json!({
                "Items": [
                    {"ID": "CASH", "Code": "CASH", "Name": "Cash"},
                    {"ID": "CBCP", "Code": "CBCP", "Name": "Company Card"}
                ]
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let catalog = test_client(&server).get_payment_types().await.unwrap();

    assert_eq!(catalog.api_version, "v3");
    assert_eq!(catalog.count, 2);
    assert_eq!(catalog.items[1].id.as_deref(), Some("CBCP"));
    assert_eq!(catalog.items[1].name.as_deref(), Some("Company Card"));
    assert!(!catalog.items[1].is_default);
    v3.assert_async().await;
}

#[tokio::test]
async fn payment_types_fall_back_to_v4_for_token_user() {
    let mut server = Server::new_async().await;
    let token = jwt(json!({
        "concur.profile": "https://us.api.concursolutions.com/profile/identity/v4/Users/u-42",
    }));
    let _token = mock_token(&mut server, &token, 3600, 1).await;
    let _v3 = server
        .mock("GET", "/api/v3.0/expense/paymenttypes")
        .with_status(403)
        .create_async()
        .await;
    let v4 = server
        .mock("GET", "/expenseconfig/v4/users/u-42/paymenttypes")
        .with_status(200)
        .with_body(
            json!({
                "content": [
                    {"paymentTypeId": "PT1", "paymentTypeName": "Personal Card", "isDefault": true}
                ]
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let catalog = test_client(&server).get_payment_types().await.unwrap();

    assert_eq!(catalog.api_version, "v4");
    let personal = &catalog.items[0];
    assert_eq!(personal.id.as_deref(), Some("PT1"));
    assert_eq!(personal.name.as_deref(), Some("Personal Card"));
    assert!(personal.is_default);
    v4.assert_async().await;
}

#[tokio::test]
async fn payment_types_fallback_needs_a_user_claim() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server, "opaque-token", 3600, 1).await;
    let _v3 = server
        .mock("GET", "/api/v3.0/expense/paymenttypes")
        .with_status(500)
        .create_async()
        .await;

    let err = test_client(&server).get_payment_types().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Authentication);
}

#[tokio::test]
async fn test_connection_reports_a_token_prefix() {
    let mut server = Server::new_async().await;
    let token = "abcdefghijklmnopqrstuvwxyz0123456789";
    let _token = mock_token(&mut server, token, 3600, 1).await;

    let status = test_client(&server).test_connection().await.unwrap();

    assert_eq!(status.token_length, token.len());
    assert_eq!(status.token_prefix, "abcdefghijklmnopqrst...");
    assert!(status.expires_in_seconds > 3590);
}

#[tokio::test]
async fn test_connection_keeps_short_tokens_whole() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server, "short", 3600, 1).await;

    let status = test_client(&server).test_connection().await.unwrap();
    assert_eq!(status.token_prefix, "short");
    assert_eq!(status.token_length, 5);
}

#[tokio::test]
async fn get_user_id_falls_back_to_subject() {
    let mut server = Server::new_async().await;
    let token = jwt(json!({"sub": "subject-7"}));
    let _token = mock_token(&mut server, &token, 3600, 1).await;

    let user_id = test_client(&server).get_user_id().await.unwrap();
    assert_eq!(user_id, "subject-7");
}

#[tokio::test]
async fn null_v4_flags_do_not_force_the_fallback() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server, "abc", 3600, 1).await;
    let _v4 = server
        .mock("GET", "/expenseconfig/v4/expensetypes")
        .with_status(200)
        .with_body(r#"[{"expenseCode":"MEALS","name":"Meals","isDeleted":null,"showOnMobile":null}]"#)
        .create_async()
        .await;
    let v3 = server
        .mock("GET", "/api/v3.0/expense/expensetypes")
        .expect(0)
        .create_async()
        .await;

    let catalog = test_client(&server).get_expense_types().await.unwrap();

    assert_eq!(catalog.api_version, "v4");
    assert!(!catalog.items[0].is_deleted);
    assert!(catalog.items[0].show_on_mobile);
    v3.assert_async().await;
}

#[tokio::test]
async fn unrecognised_v4_body_falls_back_to_v3() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server, "abc", 3600, 1).await;
    let _v4 = server
        .mock("GET", "/expenseconfig/v4/expensetypes")
        .with_status(200)
        .with_body(r#"{"message":"no expense types configured"}"#)
        .create_async()
        .await;
    let v3 = server
        .mock("GET", "/api/v3.0/expense/expensetypes")
        .with_status(200)
        .with_body(r#"{"Items":[{"Code":"TAXI","Name":"Taxi"}]}"#)
        .expect(1)
        .create_async()
        .await;

    let catalog = test_client(&server).get_expense_types().await.unwrap();

    assert_eq!(catalog.api_version, "v3");
    assert_eq!(catalog.items[0].code.as_deref(), Some("TAXI"));
    v3.assert_async().await;
}
