//! When steps for message board BDD scenarios.

use super::world::{BoardWorld, json_request};
use axum::{body::Body, http::Request};
use rstest_bdd_macros::when;
use serde_json::json;

#[when(r#""{username}" posts the message "{body}""#)]
fn post_message(
    world: &mut BoardWorld,
    username: String,
    body: String,
) -> Result<(), eyre::Report> {
    let request = json_request(
        "POST",
        "/messages",
        &json!({ "body": body, "username": username }),
    )?;
    world.dispatch(request)
}

#[when(r#""{username}" posts a message without a body"#)]
fn post_without_body(world: &mut BoardWorld, username: String) -> Result<(), eyre::Report> {
    let request = json_request("POST", "/messages", &json!({ "username": username }))?;
    world.dispatch(request)
}

#[when(r#"the message body is changed to "{body}""#)]
fn change_body(world: &mut BoardWorld, body: String) -> Result<(), eyre::Report> {
    let uri = world.current_uri()?;
    let request = json_request("PATCH", &uri, &json!({ "body": body }))?;
    world.dispatch(request)
}

#[when("the message is deleted")]
fn delete_message(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let uri = world.current_uri()?;
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())?;
    world.dispatch(request)
}
