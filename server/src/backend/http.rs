//! `reqwest` implementation of the backend client.

use std::time::Duration;

use axum::body::Bytes;
use reqwest::header::CONTENT_TYPE;

use super::types::{BackendError, BackendReply, ChatForward, UploadBody, UploadReply};
use super::ComplianceBackend;
use crate::config::BackendConfig;

pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Build the client with the configured request/connect timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client fails to build.
    pub fn from_config(config: &BackendConfig) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| BackendError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone() })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Read a JSON-endpoint response into a relayable status + body pair.
async fn read_json_reply(response: reqwest::Response) -> Result<BackendReply, BackendError> {
    let status = response.status().as_u16();
    let text = response
        .text()
        .await
        .map_err(|e| BackendError::BodyRead(e.to_string()))?;
    let body = serde_json::from_str(&text).map_err(|e| BackendError::JsonParse(e.to_string()))?;
    Ok(BackendReply { status, body })
}

#[async_trait::async_trait]
impl ComplianceBackend for HttpBackend {
    async fn chat(&self, body: &ChatForward) -> Result<BackendReply, BackendError> {
        let response = self
            .http
            .post(self.url("/chat"))
            .json(body)
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;
        read_json_reply(response).await
    }

    async fn list_files(&self) -> Result<BackendReply, BackendError> {
        let response = self
            .http
            .get(self.url("/files"))
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;
        read_json_reply(response).await
    }

    async fn delete_file(&self, filename: &str) -> Result<BackendReply, BackendError> {
        let response = self
            .http
            .delete(self.url(&format!("/files/{filename}")))
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;
        read_json_reply(response).await
    }

    async fn upload(&self, content_type: Option<&str>, body: Bytes) -> Result<UploadReply, BackendError> {
        // The multipart body passes through untouched; only the original
        // Content-Type header carries the boundary the backend needs.
        let mut request = self.http.post(self.url("/upload")).body(body);
        if let Some(ct) = content_type {
            request = request.header(CONTENT_TYPE, ct);
        }

        let response = request
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains("application/json"));
        let text = response
            .text()
            .await
            .map_err(|e| BackendError::BodyRead(e.to_string()))?;

        let body = if is_json {
            serde_json::from_str(&text)
                .map(UploadBody::Json)
                .map_err(|e| BackendError::JsonParse(e.to_string()))?
        } else {
            UploadBody::Text(text)
        };

        Ok(UploadReply { status, body })
    }
}
