//! Unified error handling for the API.
//!
//! Usecases return [`AppError`]; the single [`IntoResponse`] translator here
//! maps error kinds to HTTP status codes, so no handler classifies errors on
//! its own.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::RepositoryError;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Referenced entity is absent or logically deleted.
    #[error("{kind} {id} not found")]
    NotFound {
        /// Entity kind, e.g. "coffee shop".
        kind: &'static str,
        /// Identifier as given by the caller.
        id: String,
    },

    /// Authenticated but insufficiently privileged.
    #[error("access denied: {0}")]
    AccessDenied(String),

    /// Violates the active-uniqueness expectation.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Structurally inconsistent request (e.g. comment/idea mismatch).
    #[error("not valid: {0}")]
    NotValid(String),

    /// No actor identity at all.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Database operation failed.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Build a `NotFound` for an entity kind and its identifier.
    pub fn not_found(kind: &'static str, id: impl std::fmt::Display) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::AccessDenied(_) => StatusCode::FORBIDDEN,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotValid(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            // Repository errors that carry a usable classification keep it;
            // everything else is a server fault.
            Self::Repository(repo) => match repo {
                RepositoryError::NotFound => StatusCode::NOT_FOUND,
                RepositoryError::Conflict(_) => StatusCode::CONFLICT,
                RepositoryError::Database(_) | RepositoryError::DataCorruption(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error body returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Log server errors with Sentry
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "API request error"
            );
        }

        // Don't expose internal error details to clients
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            "internal server error".to_owned()
        } else {
            self.to_string()
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::not_found("category", "cat-123");
        assert_eq!(err.to_string(), "category cat-123 not found");

        let err = AppError::NotValid("comment does not belong to this idea".to_owned());
        assert_eq!(
            err.to_string(),
            "not valid: comment does not belong to this idea"
        );
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            get_status(AppError::not_found("user", "u1")),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::AccessDenied("nope".to_owned())),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            get_status(AppError::Conflict("dup".to_owned())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            get_status(AppError::NotValid("bad".to_owned())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Unauthorized("no token".to_owned())),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(AppError::Internal("boom".to_owned())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_repository_conflict_maps_to_409() {
        // The partial unique index on active worker relations surfaces the
        // AddWorker race as a repository conflict; it must reach clients as 409.
        let err = AppError::Repository(RepositoryError::Conflict(
            "worker is already active in this coffee shop".to_owned(),
        ));
        assert_eq!(get_status(err), StatusCode::CONFLICT);
    }

    #[test]
    fn test_repository_not_found_maps_to_404() {
        let err = AppError::Repository(RepositoryError::NotFound);
        assert_eq!(get_status(err), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let response = AppError::Internal("secret detail".to_owned()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
