//! Chat proxy route.

use axum::extract::State;
use axum::response::Response;
use axum::Json;

use crate::backend::ChatForward;
use crate::routes::{internal_error, relay_json};
use crate::state::AppState;

pub(crate) const CHAT_WRAP_ERROR: &str = "Failed to get response from backend";

/// `POST /api/chat` — forward `{message, history}` to the backend verbatim
/// and relay its reply.
pub async fn chat(State(state): State<AppState>, Json(body): Json<ChatForward>) -> Response {
    match state.backend.chat(&body).await {
        Ok(reply) => relay_json(reply, CHAT_WRAP_ERROR),
        Err(e) => {
            tracing::error!(error = %e, "chat proxy failed");
            internal_error()
        }
    }
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
