//! File proxy routes: list, delete, upload.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde_json::Value;

use crate::backend::{UploadBody, UploadReply};
use crate::routes::{internal_error, relay_json};
use crate::state::AppState;

pub(crate) const LIST_WRAP_ERROR: &str = "Failed to get files from backend";
pub(crate) const DELETE_WRAP_ERROR: &str = "Failed to delete file from backend";
pub(crate) const UPLOAD_WRAP_ERROR: &str = "Failed to upload file to backend";

/// `GET /api/files` — relay the backend's file inventory.
pub async fn list_files(State(state): State<AppState>) -> Response {
    match state.backend.list_files().await {
        Ok(reply) => relay_json(reply, LIST_WRAP_ERROR),
        Err(e) => {
            tracing::error!(error = %e, "file list proxy failed");
            internal_error()
        }
    }
}

/// `DELETE /api/files/{filename}` — relay a deletion to the backend.
pub async fn delete_file(State(state): State<AppState>, Path(filename): Path<String>) -> Response {
    match state.backend.delete_file(&filename).await {
        Ok(reply) => relay_json(reply, DELETE_WRAP_ERROR),
        Err(e) => {
            tracing::error!(error = %e, %filename, "file delete proxy failed");
            internal_error()
        }
    }
}

/// `POST /api/files/upload` — forward the raw multipart body unmodified.
///
/// No local multipart parsing, validation, or size limiting: the incoming
/// `Content-Type` (with its boundary) and body bytes pass straight through
/// so the backend can parse the form itself.
pub async fn upload_file(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    match state.backend.upload(content_type.as_deref(), body).await {
        Ok(reply) => relay_upload(reply),
        Err(e) => {
            tracing::error!(error = %e, "file upload proxy failed");
            internal_error()
        }
    }
}

/// Relay an upload reply. The backend may answer with JSON or plain text;
/// successful text replies are wrapped as `{"message": <text>}`, error
/// replies carry whatever came back under `details`.
fn relay_upload(reply: UploadReply) -> Response {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);

    if reply.is_success() {
        return match reply.body {
            UploadBody::Json(value) => (status, Json(value)).into_response(),
            UploadBody::Text(text) => {
                (status, Json(serde_json::json!({ "message": text }))).into_response()
            }
        };
    }

    let details = match reply.body {
        UploadBody::Json(value) => value,
        UploadBody::Text(text) => Value::String(text),
    };
    tracing::warn!(status = reply.status, "backend upload failed");
    let envelope = serde_json::json!({
        "error": UPLOAD_WRAP_ERROR,
        "status": reply.status,
        "details": details,
    });
    (status, Json(envelope)).into_response()
}

#[cfg(test)]
#[path = "files_test.rs"]
mod tests;
