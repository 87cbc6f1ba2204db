//! `GET /messages` and `GET /messages/:id` tests.

use crate::api::helpers::{TestApp, app};
use axum::http::{Method, StatusCode};
use rstest::rstest;
use serde_json::Value;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn returns_every_message_in_the_store(app: TestApp) {
    app.seed("Hello 👋", "Liza").await;
    app.seed("Hi there", "Duane").await;

    let response = app.send(Method::GET, "/messages", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.content_type.as_deref(), Some("application/json"));
    let payload = response.json();
    let listed = payload.as_array().expect("response should be an array");
    let records = app.stored_count();
    assert_eq!(listed.len(), records);

    for message in listed {
        let id = message["id"].as_i64().expect("id should be an integer");
        let body = message["body"].as_str().expect("body should be a string");
        let stored = app.by_body(body).await;
        assert!(stored.iter().any(|record| record.id().value() == id));
        assert!(message["username"].is_string());
        assert!(message["created_at"].is_string());
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn lists_oldest_first(app: TestApp) {
    let first = app.seed("first", "Liza").await;
    let second = app.seed("second", "Liza").await;

    let response = app.send(Method::GET, "/messages", None).await;

    let ids: Vec<i64> = response
        .json()
        .as_array()
        .expect("response should be an array")
        .iter()
        .filter_map(|message| message["id"].as_i64())
        .collect();
    assert_eq!(ids, vec![first.id().value(), second.id().value()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_store_lists_nothing(app: TestApp) {
    let response = app.send(Method::GET, "/messages", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), Value::Array(Vec::new()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn fetches_single_message(app: TestApp) {
    let seeded = app.seed("Hello 👋", "Liza").await;

    let response = app
        .send(Method::GET, &format!("/messages/{}", seeded.id()), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["id"].as_i64(), Some(seeded.id().value()));
    assert_eq!(body["body"], "Hello 👋");
}

#[rstest]
#[case("/messages/999")]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_id_is_not_found(app: TestApp, #[case] uri: &str) {
    let response = app.send(Method::GET, uri, None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["error"], "message not found: 999");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn non_numeric_id_is_bad_request(app: TestApp) {
    let response = app.send(Method::GET, "/messages/abc", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
