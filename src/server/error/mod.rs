//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` so every failure is answered at the controller boundary.

pub mod config;
pub mod internal;
pub mod lifecycle;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        config::ConfigError, internal::InternalError, lifecycle::LifecycleError,
        validation::ValidationErrors,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Domain-specific errors like `LifecycleError`
/// and `ValidationErrors` handle their own response mapping, while generic variants
/// provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Request body failed field validation.
    ///
    /// Delegates to `ValidationErrors::into_response()` (400 with per-field reasons).
    #[error(transparent)]
    ValidationErr(#[from] ValidationErrors),

    /// Soft-delete lifecycle rule rejected the operation.
    ///
    /// Delegates to `LifecycleError::into_response()` (400 or 404).
    #[error(transparent)]
    LifecycleErr(#[from] LifecycleError),

    /// Unexpected internal failure such as password hashing.
    ///
    /// Results in 500 Internal Server Error with a generic message.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error; the store message is forwarded to
    /// the client and logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Listener or socket error while starting or running the server.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request
    #[error("{0}")]
    BadRequest(String),
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and response body.
/// Validation and lifecycle errors delegate to their own response handling.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and `ValidationErr`
/// - 400/404 - For `LifecycleErr`, delegated to `LifecycleError::into_response()`
/// - 500 Internal Server Error - For `DbErr` (message forwarded) and all other errors
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::ValidationErr(err) => {
                tracing::debug!("Rejected request body: {}", err);
                err.into_response()
            }
            Self::LifecycleErr(err) => err.into_response(),
            Self::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    message: "An error occurred".to_string(),
                    error: Value::String(msg),
                }),
            )
                .into_response(),
            Self::DbErr(err) => {
                tracing::error!("Database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        message: "An error occurred".to_string(),
                        error: Value::String(err.to_string()),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

/// Converts wrapped errors into 500 Internal Server Error responses.
///
/// Logs the full error message for debugging, but returns a generic error message to the
/// client to avoid exposing internal implementation details or sensitive information.
impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                message: "An error occurred".to_string(),
                error: Value::String("Internal server error".to_string()),
            }),
        )
            .into_response()
    }
}
