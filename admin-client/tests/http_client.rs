//! HttpClient and CreateForm against a live admin server

use admin_client::{
    ClientConfig, ClientError, CreateForm, FormStatus, HttpClient, ResourceApi, SubmitOutcome,
};
use admin_server::{Config, DbService, Server, ServerState};
use serde_json::{Value, json};
use shared::ErrorCode;
use shared::catalog::{MENU_ITEMS, RESTAURANTS};

/// Serve a fresh in-memory server on an ephemeral port
async fn spawn_server() -> HttpClient {
    let db = DbService::in_memory().await.unwrap();
    let app = Server::app(ServerState::new(Config::default(), db));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    HttpClient::new(&ClientConfig::new(format!("http://{addr}")).with_timeout(5)).unwrap()
}

#[tokio::test]
async fn test_validation_error_is_decoded() {
    let client = spawn_server().await;

    let err = client
        .create(&MENU_ITEMS, &json!({"description": "Beef", "price": 9.5}))
        .await
        .unwrap_err();

    let ClientError::Validation(app_error) = &err else {
        panic!("expected validation error, got {err:?}");
    };
    assert_eq!(app_error.code, ErrorCode::ValidationFailed);
    assert_eq!(err.field_errors().unwrap()["name"], "name is a required field");
}

#[tokio::test]
async fn test_method_not_allowed_is_decoded() {
    let client = spawn_server().await;

    let err = client
        .post::<Value, _>("/health", &json!({}))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::MethodNotAllowed(_)), "{err:?}");
}

#[tokio::test]
async fn test_unknown_resource_is_decoded() {
    let client = spawn_server().await;

    let err = client.get::<Value>("/api/payments").await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(ref m) if m == "Unknown resource payments"));
}

#[tokio::test]
async fn test_form_shows_server_rejection() {
    let client = spawn_server().await;
    let mut form = CreateForm::new(&MENU_ITEMS);
    form.set_text("name", "Burger").unwrap();
    form.set_text("description", "Beef").unwrap();
    form.set_number_input("price", "9.5").unwrap();
    form.select_relation("restaurant_id", Some("missing".into())).unwrap();

    let outcome = form.submit(&client).await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(form.status(), FormStatus::Idle);
    assert!(form.submit_error().unwrap().contains("Referenced record does not exist"));
    assert!(client.list(&MENU_ITEMS).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_form_round_trip() {
    let client = spawn_server().await;
    client
        .create(&RESTAURANTS, &json!({"id": "r1", "name": "Bistro"}))
        .await
        .unwrap();

    let mut form = CreateForm::new(&MENU_ITEMS);
    form.load_relation_options(&client).await;
    let options = form.relation_options("restaurant_id").unwrap().options();
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].value, "r1");

    form.set_text("name", "Burger").unwrap();
    form.set_text("description", "Beef").unwrap();
    form.set_number_input("price", "9.5").unwrap();
    form.select_relation("restaurant_id", Some("r1".into())).unwrap();

    let outcome = form.submit(&client).await;
    assert_eq!(outcome, SubmitOutcome::Navigate("/menu-items".into()));

    let items = client.list(&MENU_ITEMS).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].get("restaurant_id"), Some(&json!("r1")));
}
