//! Mapping of service errors onto HTTP responses.

use crate::message::{error::StoreError, services::MessageBoardError};
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Errors a handler can return.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The service rejected or failed the operation.
    #[error(transparent)]
    Board(#[from] MessageBoardError),
    /// The request body was not acceptable JSON.
    #[error("invalid request body")]
    Json(#[from] JsonRejection),
    /// The path parameter was not a valid message id.
    #[error("invalid message id")]
    Path(#[from] PathRejection),
}

impl ApiError {
    /// Returns the status code and client-facing message for this error.
    ///
    /// Storage failures are reported generically; the cause is only logged.
    #[must_use]
    pub fn response(&self) -> (StatusCode, String) {
        match self {
            Self::Board(MessageBoardError::Validation(err)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
            }
            Self::Board(MessageBoardError::Store(err @ StoreError::NotFound(_))) => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            Self::Board(MessageBoardError::Store(
                StoreError::Persistence(_) | StoreError::InvalidPersistedData(_),
            )) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_owned(),
            ),
            Self::Json(rejection) => (rejection.status(), rejection.body_text()),
            Self::Path(rejection) => (StatusCode::BAD_REQUEST, rejection.body_text()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.response();

        if status.is_server_error() {
            error!(error = %self, cause = ?self, "request failed");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}
