//! REST API helpers for communicating with the server's proxy routes.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so request failures degrade
//! to an error message in the chat transcript without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::state::chat::HistoryTurn;
#[cfg(feature = "hydrate")]
use serde::Deserialize;

/// Why a chat request failed. The two cases surface as different transcript
/// messages, matching how the widget reports them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatRequestError {
    /// The server answered with a non-success HTTP status.
    Status(u16),
    /// The request never completed, or the reply body was unreadable.
    Network(String),
}

impl std::fmt::Display for ChatRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Status(status) => write!(f, "chat request failed: {status}"),
            Self::Network(detail) => write!(f, "chat request failed: {detail}"),
        }
    }
}

/// Transcript text shown for a failed chat request.
#[must_use]
pub fn chat_error_text(err: &ChatRequestError) -> &'static str {
    match err {
        ChatRequestError::Status(_) => "Error: Could not get response.",
        ChatRequestError::Network(_) => "Error: Network issue or server problem.",
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn chat_endpoint() -> &'static str {
    "/api/chat"
}

#[cfg(any(test, feature = "hydrate"))]
fn upload_endpoint() -> &'static str {
    "/api/files/upload"
}

#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct ChatResponseBody {
    response: String,
}

/// Send a chat turn to `POST /api/chat` and return the assistant's reply text.
///
/// # Errors
///
/// Returns [`ChatRequestError::Status`] for a non-success HTTP status and
/// [`ChatRequestError::Network`] for transport or body failures.
pub async fn send_chat_message(message: &str, history: &[HistoryTurn]) -> Result<String, ChatRequestError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "message": message, "history": history });
        let resp = gloo_net::http::Request::post(chat_endpoint())
            .json(&payload)
            .map_err(|e| ChatRequestError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatRequestError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ChatRequestError::Status(resp.status()));
        }
        let body: ChatResponseBody = resp
            .json()
            .await
            .map_err(|e| ChatRequestError::Network(e.to_string()))?;
        Ok(body.response)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (message, history);
        Err(ChatRequestError::Network("not available on server".to_owned()))
    }
}

/// Post a multipart form to `POST /api/files/upload`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with
/// a non-success status.
#[cfg(feature = "hydrate")]
pub async fn upload_file(form: web_sys::FormData) -> Result<(), String> {
    let resp = gloo_net::http::Request::post(upload_endpoint())
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("upload failed: {}", resp.status()));
    }
    Ok(())
}
