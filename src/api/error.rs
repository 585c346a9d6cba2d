use crate::error::StoreError;
use crate::user_actor::AuthError;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Errors returned by the handlers, rendered as `{"message": ...}` with a matching status.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Authentication credentials were not provided or are invalid.")]
    AuthenticationRequired,

    #[error("Error! Cart already closed!")]
    CartClosed,

    /// A body refused before it was parsed, such as a wrong content type or an oversized body.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    /// The detail is logged, never sent.
    #[error("internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::CartClosed => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::AuthenticationRequired => StatusCode::UNAUTHORIZED,
            ApiError::Rejected { status, .. } => *status,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Logs internal errors. Called once, just before the error is rendered.
    pub(crate) fn report(&self) {
        if let ApiError::Internal(detail) = self {
            error!(detail, "Request failed");
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.report();
        let body = Json(json!({ "message": self.to_string() }));
        (self.status(), body).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(_) => ApiError::NotFound(e.to_string()),
            StoreError::Validation(message) => ApiError::Validation(message),
            StoreError::MissingReference(_) => ApiError::Validation(e.to_string()),
            StoreError::CartClosed(_) => ApiError::CartClosed,
            StoreError::Unavailable(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::NotFound(_) | AuthError::InvalidCredentials | AuthError::InvalidToken => {
                ApiError::AuthenticationRequired
            }
            AuthError::Validation(message) => ApiError::Validation(message),
            AuthError::Hashing(_) | AuthError::Unavailable(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                ApiError::Validation(rejection.body_text())
            }
            _ => ApiError::Rejected {
                status: rejection.status(),
                message: rejection.body_text(),
            },
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::NotFound(rejection.body_text())
    }
}
