//! Error responses for the HTTP layer.
//!
//! Handlers return `Result<_, ApiError>`, and `?` on a [`TaskError`] picks the
//! status:
//!
//! | Error                              | Status |
//! |------------------------------------|--------|
//! | `TaskError::NotFound`              | 404    |
//! | `InvalidDate`, `InvalidMonth`      | 400    |
//! | `TaskError::Store`                 | 500    |
//!
//! Every error body is `{"error": "<message>"}`. Server errors are also
//! logged, because the client only sees the message text.

use crate::libs::error::TaskError;
use crate::libs::messages::Message;
use crate::msg_error;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Error response body: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// A [`TaskError`] mapped to an HTTP status.
#[derive(Debug)]
pub struct ApiError {
    /// Status code sent with the response.
    pub status: StatusCode,
    /// Text placed in the `error` field of the body.
    pub message: String,
}

impl From<TaskError> for ApiError {
    fn from(err: TaskError) -> Self {
        let status = match &err {
            TaskError::NotFound(_) => StatusCode::NOT_FOUND,
            e if e.is_bad_input() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            msg_error!(Message::RequestFailed(err.to_string()));
        }
        ApiError {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { error: self.message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::error::StoreError;

    #[test]
    fn maps_error_kinds_to_status() {
        assert_eq!(ApiError::from(TaskError::NotFound(1)).status, StatusCode::NOT_FOUND);
        assert_eq!(ApiError::from(TaskError::InvalidDate("x".into())).status, StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::from(TaskError::InvalidMonth { year: 2024, month: 13 }).status,
            StatusCode::BAD_REQUEST
        );

        let storage = TaskError::Store(StoreError::Database(rusqlite::Error::QueryReturnedNoRows));
        assert_eq!(ApiError::from(storage).status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn message_is_kept() {
        let err = ApiError::from(TaskError::NotFound(12));
        assert_eq!(err.message, "Task not found with ID: 12");
    }
}
