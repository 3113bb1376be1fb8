use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Rejected soft-delete lifecycle operations.
///
/// Each variant carries the resource label (e.g. `"Admin"`) so the message
/// names the kind of record involved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    /// Lookup by id found nothing.
    #[error("{resource} not found")]
    Missing { resource: &'static str },

    /// No record with the id exists, deleted or not.
    #[error("{resource} with id: {id} was not found!")]
    NotFound { resource: &'static str, id: i32 },

    /// Soft-delete requested on a record that is already deleted.
    #[error("{resource} with id: {id} has already been deleted!")]
    AlreadyDeleted { resource: &'static str, id: i32 },

    /// Recover requested on a record that is not deleted.
    #[error("{resource} with id: {id} has never been deleted!")]
    NeverDeleted { resource: &'static str, id: i32 },

    /// Purge found no deleted records.
    #[error("There are no deleted {collection} to clean")]
    NothingToPurge { collection: &'static str },
}

/// Converts lifecycle errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For `Missing`, `NotFound` and `NothingToPurge`
/// - 400 Bad Request - For `AlreadyDeleted` and `NeverDeleted`
impl IntoResponse for LifecycleError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Missing { .. } | Self::NotFound { .. } | Self::NothingToPurge { .. } => {
                StatusCode::NOT_FOUND
            }
            Self::AlreadyDeleted { .. } | Self::NeverDeleted { .. } => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                message: self.to_string(),
                error: Value::Bool(true),
            }),
        )
            .into_response()
    }
}
