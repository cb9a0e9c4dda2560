//! Integration tests for error-to-HTTP translation.
//!
//! Handlers never classify errors themselves; everything flows through the
//! single `IntoResponse` impl on `AppError`. These tests pin the mapping.

use axum::http::StatusCode;
use axum::response::IntoResponse;

use brewbox_api::db::RepositoryError;
use brewbox_api::error::AppError;

fn status_of(err: AppError) -> StatusCode {
    err.into_response().status()
}

#[test]
fn test_not_found_is_404() {
    assert_eq!(
        status_of(AppError::not_found("coffee shop", "abc")),
        StatusCode::NOT_FOUND
    );
}

#[test]
fn test_access_denied_is_403() {
    assert_eq!(
        status_of(AppError::AccessDenied(
            "user is not an admin for this coffee shop".to_owned()
        )),
        StatusCode::FORBIDDEN
    );
}

#[test]
fn test_conflict_is_409() {
    assert_eq!(
        status_of(AppError::Conflict("already active".to_owned())),
        StatusCode::CONFLICT
    );
}

#[test]
fn test_not_valid_is_400() {
    assert_eq!(
        status_of(AppError::NotValid(
            "comment does not belong to this idea".to_owned()
        )),
        StatusCode::BAD_REQUEST
    );
}

#[test]
fn test_unauthorized_is_401() {
    assert_eq!(
        status_of(AppError::Unauthorized("user not authorized".to_owned())),
        StatusCode::UNAUTHORIZED
    );
}

#[test]
fn test_internal_is_500() {
    assert_eq!(
        status_of(AppError::Internal("broken invariant".to_owned())),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn test_unique_violation_surfaces_as_409() {
    // The AddWorker race: the partial unique index rejects the second insert,
    // the repository classifies it as Conflict, and the client sees 409.
    let err = AppError::Repository(RepositoryError::Conflict(
        "worker is already active in this coffee shop".to_owned(),
    ));
    assert_eq!(status_of(err), StatusCode::CONFLICT);
}

#[test]
fn test_repository_not_found_surfaces_as_404() {
    let err = AppError::Repository(RepositoryError::NotFound);
    assert_eq!(status_of(err), StatusCode::NOT_FOUND);
}

#[test]
fn test_data_corruption_surfaces_as_500() {
    let err = AppError::Repository(RepositoryError::DataCorruption(
        "idea without coffee shop".to_owned(),
    ));
    assert_eq!(status_of(err), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_client_facing_errors_keep_their_message() {
    let response = AppError::AccessDenied("you can only view your own coffee shops".to_owned())
        .into_response();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");

    assert_eq!(
        body["message"],
        "access denied: you can only view your own coffee shops"
    );
}

#[tokio::test]
async fn test_internal_errors_hide_their_message() {
    let response = AppError::Internal("connection string leaked".to_owned()).into_response();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");

    assert_eq!(body["message"], "internal server error");
}
