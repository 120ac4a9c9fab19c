//! Backend proxy types — forwarded bodies, relayed replies, and errors.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by outbound backend calls.
///
/// Every variant collapses to the same client-visible 500 envelope; the
/// variants exist so server-side logs keep the failure cause.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The backend origin env var is not set.
    #[error("backend origin not configured: env var {var} not set")]
    MissingBackendUrl { var: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request to the backend failed to send (unreachable, timeout, TLS).
    #[error("backend request failed: {0}")]
    Request(String),

    /// The backend response body could not be read.
    #[error("backend body read failed: {0}")]
    BodyRead(String),

    /// The backend response body was not the JSON the route expected.
    #[error("backend response parse failed: {0}")]
    JsonParse(String),
}

// =============================================================================
// FORWARDED BODIES
// =============================================================================

/// One prior turn of the conversation, as sent by the chat widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
}

/// Chat request body, forwarded to the backend verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatForward {
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

// =============================================================================
// RELAYED REPLIES
// =============================================================================

/// A backend response for the JSON endpoints (chat, list, delete).
///
/// The backend speaks JSON on success and failure alike, so the body is
/// always parsed; a non-JSON body surfaces as [`BackendError::JsonParse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendReply {
    pub status: u16,
    pub body: Value,
}

impl BackendReply {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Upload reply body: JSON only when the backend's `Content-Type` says so,
/// raw text otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadBody {
    Json(Value),
    Text(String),
}

/// A backend response for the upload endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReply {
    pub status: u16,
    pub body: UploadBody,
}

impl UploadReply {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
