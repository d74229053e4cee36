//! Shared response envelope for API handlers.
//!
//! Public endpoints answer with a `{ "success": ..., "message": ... }`
//! envelope. Use [`ApiMessage`] instead of ad-hoc `serde_json::json!`
//! literals to get compile-time type safety and consistent serialization.

use serde::Serialize;

/// Standard `{ "success": bool, "message": String }` response envelope.
#[derive(Debug, Serialize)]
pub struct ApiMessage {
    pub success: bool,
    pub message: String,
}

impl ApiMessage {
    /// A successful outcome with a visitor-facing message.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
