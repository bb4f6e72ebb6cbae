use actix_web::http::StatusCode;
use serde_derive::{Deserialize, Serialize};

/// A response envelope shared by all API endpoints: the transport status code, a human-readable
/// message, and an optional typed payload.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Creates an envelope for the specified transport status code, with or without a payload.
    pub fn new(status_code: StatusCode, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            status_code: status_code.as_u16(),
            message: message.into(),
            data,
        }
    }
}
