//! Response envelope
//!
//! Every user endpoint answers with the same JSON shape:
//!
//! ```json
//! { "success": true, "data": { "id": 1, "username": "alice", ... } }
//! { "success": false, "error": "user not found" }
//! ```
//!
//! Validation failures add a `details` array of `{field, message}` objects.

use serde::{Deserialize, Serialize};

use crate::error::ValidationErrorDetail;

/// Standard API response envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,

    /// Payload on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Human-readable error message on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Per-field validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ValidationErrorDetail>>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            details: None,
        }
    }

    pub fn failure(message: impl Into<String>, details: Option<Vec<ValidationErrorDetail>>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            details,
        }
    }
}
