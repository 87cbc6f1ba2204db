//! Given steps for message board BDD scenarios.

use super::world::{BoardWorld, run_async};
use axum::{body::Body, http::Request};
use message_board::message::{domain::NewMessage, ports::MessageStore};
use mockable::DefaultClock;
use rstest_bdd_macros::given;

#[given(r#"a message "{body}" posted by "{username}""#)]
fn a_message_posted_by(
    world: &mut BoardWorld,
    body: String,
    username: String,
) -> Result<(), eyre::Report> {
    let draft = NewMessage::new(body, username, &DefaultClock);
    let created = run_async(world.store.create(draft))?;
    world.current = Some(created);
    Ok(())
}

#[given("the message has been deleted")]
fn message_has_been_deleted(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let uri = world.current_uri()?;
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())?;
    world.dispatch(request)?;
    let status = world.last_status()?;
    eyre::ensure!(status == 204, "setup delete returned {status}");
    Ok(())
}
