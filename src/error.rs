use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Request-level error taxonomy. Every failure is terminal for the request
/// and reported exactly once, as `{"isSuccess": false, "message": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed required input, caught before any I/O.
    #[error("{0}")]
    Validation(String),
    /// No usable credential: absent/unparseable token or failed login.
    #[error("{0}")]
    Unauthorized(String),
    /// A token was presented but fails signature or expiry checks.
    #[error("{0}")]
    Forbidden(String),
    /// Entity absent or owned by someone else; the two cases are
    /// intentionally indistinguishable to the caller.
    #[error("{0}")]
    NotFound(String),
    /// Conflicting create: duplicate user id, already-owned sticker.
    #[error("{0}")]
    Conflict(String),
    #[error("Server error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Server error: {0}")]
    Internal(#[from] anyhow::Error),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    #[serde(rename = "isSuccess")]
    pub is_success: bool,
    pub message: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        let body = ErrorBody {
            is_success: false,
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_the_taxonomy() {
        assert_eq!(
            ApiError::Validation("x".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Conflict("x".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Unauthorized("x".into()).into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Forbidden("x".into()).into_response().status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::NotFound("x".into()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("boom"))
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn error_body_uses_wire_field_names() {
        let body = ErrorBody {
            is_success: false,
            message: "nope".into(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains(r#""isSuccess":false"#));
        assert!(json.contains(r#""message":"nope""#));
    }
}
