//! Route table and handlers for `/messages`.

use super::{ApiError, AppState};
use crate::message::{
    domain::{Message, MessageId},
    services::{CreateMessageRequest, UpdateMessageRequest},
};
use axum::{
    Json, Router,
    body::Body,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{Request, StatusCode},
    response::Response,
    routing::get,
};
use std::time::Duration;
use tower_http::trace::TraceLayer;
use tracing::{Span, debug, error, info};

/// Builds the application router over `state`.
#[must_use]
pub fn router(state: AppState) -> Router {
    let trace = TraceLayer::new_for_http()
        .on_request(|req: &Request<Body>, _: &Span| {
            debug!("{} {}", req.method(), req.uri().path());
        })
        .on_response(|res: &Response, latency: Duration, _: &Span| {
            let code = res.status().as_u16();

            if (500..600).contains(&code) {
                error!("Response: latency={}ms status={code}", latency.as_millis());
            } else {
                info!("Response: latency={}ms status={code}", latency.as_millis());
            }
        });

    Router::new()
        .route("/messages", get(list_messages).post(create_message))
        .route(
            "/messages/:id",
            get(get_message)
                .patch(update_message)
                .delete(delete_message),
        )
        .layer(trace)
        .with_state(state)
}

async fn list_messages(State(state): State<AppState>) -> Result<Json<Vec<Message>>, ApiError> {
    let messages = state.board().list_all().await?;
    Ok(Json(messages))
}

async fn create_message(
    State(state): State<AppState>,
    payload: Result<Json<CreateMessageRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    let Json(request) = payload?;
    let message = state.board().create(request).await?;
    Ok((StatusCode::CREATED, Json(message)))
}

async fn get_message(
    State(state): State<AppState>,
    id: Result<Path<MessageId>, PathRejection>,
) -> Result<Json<Message>, ApiError> {
    let Path(message_id) = id?;
    let message = state.board().get(message_id).await?;
    Ok(Json(message))
}

async fn update_message(
    State(state): State<AppState>,
    id: Result<Path<MessageId>, PathRejection>,
    payload: Result<Json<UpdateMessageRequest>, JsonRejection>,
) -> Result<Json<Message>, ApiError> {
    let Path(message_id) = id?;
    let Json(request) = payload?;
    let message = state.board().update(message_id, request).await?;
    Ok(Json(message))
}

async fn delete_message(
    State(state): State<AppState>,
    id: Result<Path<MessageId>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(message_id) = id?;
    state.board().delete(message_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
