use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{ser::SerializeStruct, Serialize, Serializer};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::validation::Pattern};

/// Reason a single field was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Required field absent or `null`.
    #[error("is required")]
    Missing,

    /// Value has the wrong JSON type.
    #[error("must be a {0}")]
    WrongType(&'static str),

    /// String length in characters outside the allowed bounds.
    #[error("must be between {min} and {max} characters long")]
    Length { min: usize, max: usize },

    /// Number outside the allowed inclusive range.
    #[error("must be between {min} and {max}")]
    Range { min: i64, max: i64 },

    /// String does not match the field's format.
    #[error("{}", .0.description())]
    Format(Pattern),

    /// The body itself is not a JSON object.
    #[error("must be a JSON object")]
    NotAnObject,

    /// The body passed the rule table but could not be decoded.
    #[error("{0}")]
    Malformed(String),
}

impl Violation {
    /// Stable machine-readable code for clients.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Missing => "missing_field",
            Self::WrongType(_) => "invalid_type",
            Self::Length { .. } => "invalid_length",
            Self::Range { .. } => "out_of_range",
            Self::Format(_) => "invalid_format",
            Self::NotAnObject => "invalid_body",
            Self::Malformed(_) => "invalid_value",
        }
    }
}

/// A rejected field and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub violation: Violation,
}

impl FieldError {
    pub fn new(field: impl Into<String>, violation: Violation) -> Self {
        Self {
            field: field.into(),
            violation,
        }
    }
}

/// Serialized as `{ "field", "code", "reason" }`.
impl Serialize for FieldError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FieldError", 3)?;
        state.serialize_field("field", &self.field)?;
        state.serialize_field("code", self.violation.code())?;
        state.serialize_field("reason", &self.violation.to_string())?;
        state.end()
    }
}

/// Every field violation found in one request body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Request body failed validation on {} field(s)", .0.len())]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }
}

/// Converts validation failures into a 400 Bad Request listing each field.
impl IntoResponse for ValidationErrors {
    fn into_response(self) -> Response {
        let error = serde_json::to_value(self.errors()).unwrap_or_default();

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                message: "There was an error validating the request body".to_string(),
                error,
            }),
        )
            .into_response()
    }
}
