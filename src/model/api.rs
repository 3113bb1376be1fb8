use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of every failed request.
///
/// `error` carries the detail: the field error list for validation failures,
/// `true` for lifecycle failures, or the underlying message otherwise.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDto {
    pub message: String,
    pub error: Value,
}

/// Body of every successful request that returns content.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub error: bool,
}

impl<T> ApiResponse<T> {
    /// Response carrying only data.
    pub fn data(data: T) -> Self {
        Self {
            message: None,
            data: Some(data),
            error: false,
        }
    }

    /// Response carrying a message and data.
    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            message: Some(message.into()),
            data: Some(data),
            error: false,
        }
    }
}

impl ApiResponse<()> {
    /// Response carrying only a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            data: None,
            error: false,
        }
    }
}
