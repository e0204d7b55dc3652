use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::db::DbError;

/// Error kinds surfaced by the API. Each kind maps to exactly one HTTP
/// status at the response boundary; handlers never pick codes themselves.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Internal errors carry the underlying message in a separate
        // `error` field; everything else is a human-readable `message`.
        let body = match self {
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                Json(json!({
                    "success": false,
                    "message": "Internal server error",
                    "error": msg,
                }))
            }
            ApiError::Validation(msg) | ApiError::NotFound(msg) | ApiError::Conflict(msg) => {
                Json(json!({
                    "success": false,
                    "message": msg,
                }))
            }
        };

        (status, body).into_response()
    }
}

// Any store failure is reported uniformly as an internal error with the
// triggering message attached.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::ConnectionError(msg) => ApiError::Internal(msg),
            DbError::QueryError(msg) => ApiError::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(
            ApiError::Validation("missing field".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("no such row".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Conflict("dependent rows".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn db_errors_map_to_internal() {
        let err: ApiError = DbError::QueryError("connection reset".into()).into();
        assert!(matches!(err, ApiError::Internal(msg) if msg == "connection reset"));
    }

    #[test]
    fn responses_use_the_mapped_status() {
        let response = ApiError::NotFound("Client x not found".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ApiError::Conflict("dependent rows".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
