//! Outbound client for the external compliance backend.
//!
//! DESIGN
//! ======
//! Routes talk to the backend through the [`ComplianceBackend`] trait so
//! handler behavior can be tested against a scripted mock. The one production
//! implementation is [`HttpBackend`], a thin `reqwest` wrapper that forwards
//! each call to a fixed path under the configured origin and hands the raw
//! status + body back to the route for relaying. No retries, no streaming.

pub mod http;
pub mod types;

use axum::body::Bytes;

pub use http::HttpBackend;
pub use types::{BackendError, BackendReply, ChatForward, ChatTurn, UploadBody, UploadReply};

/// The four pass-through operations the proxy routes need.
#[async_trait::async_trait]
pub trait ComplianceBackend: Send + Sync {
    /// `POST {origin}/chat` with the forwarded JSON body.
    async fn chat(&self, body: &ChatForward) -> Result<BackendReply, BackendError>;

    /// `GET {origin}/files`.
    async fn list_files(&self) -> Result<BackendReply, BackendError>;

    /// `DELETE {origin}/files/{filename}`.
    async fn delete_file(&self, filename: &str) -> Result<BackendReply, BackendError>;

    /// `POST {origin}/upload`, forwarding the raw multipart body unmodified
    /// so the backend can parse the boundary from `content_type`.
    async fn upload(&self, content_type: Option<&str>, body: Bytes) -> Result<UploadReply, BackendError>;
}
