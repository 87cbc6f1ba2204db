//! Shared world state for message board BDD scenarios.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use message_board::{
    http::{AppState, router},
    message::{adapters::memory::InMemoryMessageStore, domain::Message, ports::MessageStore},
};
use rstest::fixture;
use serde_json::Value;
use tower::ServiceExt;

/// Response captured by the last `When` step.
pub struct CapturedResponse {
    /// Response status.
    pub status: StatusCode,
    /// Parsed JSON body; `Null` when the body is empty.
    pub body: Value,
}

/// Scenario world for message board behaviour tests.
pub struct BoardWorld {
    /// Store shared with the router.
    pub store: InMemoryMessageStore,
    /// Router under test.
    pub router: Router,
    /// Message created by the last `Given` step.
    pub current: Option<Message>,
    /// Response of the last HTTP call.
    pub last_response: Option<CapturedResponse>,
}

impl BoardWorld {
    /// Creates a world over an empty store.
    #[must_use]
    pub fn new() -> Self {
        let store = InMemoryMessageStore::new();
        let shared: Arc<dyn MessageStore> = Arc::new(store.clone());
        Self {
            store,
            router: router(AppState::new(shared)),
            current: None,
            last_response: None,
        }
    }

    /// Sends `request` through the router and records the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be read or is not JSON.
    pub fn dispatch(&mut self, request: Request<Body>) -> Result<(), eyre::Report> {
        let router = self.router.clone();
        let captured = run_async(async move {
            let response = router.oneshot(request).await?;
            let status = response.status();
            let bytes = hyper::body::to_bytes(response.into_body()).await?;
            let body = if bytes.is_empty() {
                Value::Null
            } else {
                serde_json::from_slice(&bytes)?
            };
            Ok::<_, eyre::Report>(CapturedResponse { status, body })
        })?;
        self.last_response = Some(captured);
        Ok(())
    }

    /// Returns the identifier of the current message.
    ///
    /// # Errors
    ///
    /// Returns an error if no `Given` step created a message.
    pub fn current_uri(&self) -> Result<String, eyre::Report> {
        let message = self
            .current
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no message in scenario world"))?;
        Ok(format!("/messages/{}", message.id()))
    }

    /// Returns the status code of the last response.
    ///
    /// # Errors
    ///
    /// Returns an error if no request has been sent yet.
    pub fn last_status(&self) -> Result<u16, eyre::Report> {
        Ok(self.captured()?.status.as_u16())
    }

    /// Returns the JSON body of the last response.
    ///
    /// # Errors
    ///
    /// Returns an error if no request has been sent yet.
    pub fn last_body(&self) -> Result<&Value, eyre::Report> {
        Ok(&self.captured()?.body)
    }

    fn captured(&self) -> Result<&CapturedResponse, eyre::Report> {
        self.last_response
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no response captured in scenario world"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Builds a JSON request.
///
/// # Errors
///
/// Returns an error if the request cannot be built.
pub fn json_request(
    method: &str,
    uri: &str,
    payload: &Value,
) -> Result<Request<Body>, eyre::Report> {
    Ok(Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))?)
}
