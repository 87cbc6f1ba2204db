//! `DELETE /messages/:id` tests.

use crate::api::helpers::{TestApp, app};
use axum::http::{Method, StatusCode};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deletes_message_from_the_store(app: TestApp) {
    let hello = app.seed("Hello 👋", "Liza").await;

    let response = app
        .send(Method::DELETE, &format!("/messages/{}", hello.id()), None)
        .await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(response.bytes.is_empty());
    assert!(app.by_body("Hello 👋").await.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_twice_is_not_found(app: TestApp) {
    let hello = app.seed("Hello 👋", "Liza").await;
    let uri = format!("/messages/{}", hello.id());

    app.send(Method::DELETE, &uri, None).await;
    let response = app.send(Method::DELETE, &uri, None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_leaves_other_messages(app: TestApp) {
    let hello = app.seed("Hello 👋", "Liza").await;
    app.seed("Still here", "Duane").await;

    app.send(Method::DELETE, &format!("/messages/{}", hello.id()), None)
        .await;

    assert_eq!(app.stored_count(), 1);
    assert_eq!(app.by_body("Still here").await.len(), 1);
}
