use std::sync::Arc;

use axum::body::{Bytes, to_bytes};
use serde_json::json;

use super::*;
use crate::backend::UploadBody;
use crate::state::test_helpers::{MockBackend, test_app_state};

async fn response_json(response: Response) -> (u16, serde_json::Value) {
    let status = response.status().as_u16();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn multipart_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        CONTENT_TYPE,
        "multipart/form-data; boundary=----boundary42".parse().unwrap(),
    );
    headers
}

// =============================================================================
// GET /api/files
// =============================================================================

#[tokio::test]
async fn list_relays_success_body_unchanged() {
    let inventory = json!([{ "filename": "policy.pdf", "size": 1024 }]);
    let mock = Arc::new(MockBackend::replying(200, inventory.clone()));
    let state = test_app_state(mock);

    let response = list_files(axum::extract::State(state)).await;
    let (status, body) = response_json(response).await;

    assert_eq!(status, 200);
    assert_eq!(body, inventory);
}

#[tokio::test]
async fn list_wraps_backend_error() {
    let mock = Arc::new(MockBackend::replying(503, json!({ "msg": "index rebuilding" })));
    let state = test_app_state(mock);

    let response = list_files(axum::extract::State(state)).await;
    let (status, body) = response_json(response).await;

    assert_eq!(status, 503);
    assert_eq!(
        body,
        json!({
            "error": "Failed to get files from backend",
            "details": { "msg": "index rebuilding" },
        })
    );
}

#[tokio::test]
async fn list_collapses_transport_failure_to_500() {
    let state = test_app_state(Arc::new(MockBackend::unreachable()));

    let response = list_files(axum::extract::State(state)).await;
    let (status, body) = response_json(response).await;

    assert_eq!(status, 500);
    assert_eq!(body, json!({ "error": "Internal Server Error" }));
}

// =============================================================================
// DELETE /api/files/{filename}
// =============================================================================

#[tokio::test]
async fn delete_forwards_filename_and_relays_reply() {
    let mock = Arc::new(MockBackend::replying(200, json!({ "message": "File 'old.txt' deleted successfully" })));
    let state = test_app_state(Arc::clone(&mock));

    let response = delete_file(axum::extract::State(state), Path("old.txt".to_owned())).await;
    let (status, body) = response_json(response).await;

    assert_eq!(status, 200);
    assert_eq!(body["message"], "File 'old.txt' deleted successfully");
    assert_eq!(mock.seen_delete.lock().unwrap().as_deref(), Some("old.txt"));
}

#[tokio::test]
async fn delete_wraps_not_found() {
    let mock = Arc::new(MockBackend::replying(404, json!({ "error": "File not found" })));
    let state = test_app_state(mock);

    let response = delete_file(axum::extract::State(state), Path("ghost.txt".to_owned())).await;
    let (status, body) = response_json(response).await;

    assert_eq!(status, 404);
    assert_eq!(body["error"], "Failed to delete file from backend");
    assert_eq!(body["details"]["error"], "File not found");
}

// =============================================================================
// POST /api/files/upload
// =============================================================================

#[tokio::test]
async fn upload_forwards_raw_body_and_content_type() {
    let mock = Arc::new(MockBackend::replying_upload(
        200,
        UploadBody::Json(json!({ "message": "File uploaded successfully", "filename": "contract.pdf" })),
    ));
    let state = test_app_state(Arc::clone(&mock));

    let raw = Bytes::from_static(b"------boundary42\r\ncontent------boundary42--");
    let response = upload_file(axum::extract::State(state), multipart_headers(), raw.clone()).await;
    let (status, body) = response_json(response).await;

    assert_eq!(status, 200);
    assert_eq!(body["filename"], "contract.pdf");

    let (seen_ct, seen_body) = mock.seen_upload.lock().unwrap().clone().expect("backend saw the upload");
    assert_eq!(seen_ct.as_deref(), Some("multipart/form-data; boundary=----boundary42"));
    assert_eq!(seen_body, raw.to_vec());
}

#[tokio::test]
async fn upload_wraps_text_success_as_message() {
    let mock = Arc::new(MockBackend::replying_upload(200, UploadBody::Text("stored".to_owned())));
    let state = test_app_state(mock);

    let response = upload_file(axum::extract::State(state), multipart_headers(), Bytes::new()).await;
    let (status, body) = response_json(response).await;

    assert_eq!(status, 200);
    assert_eq!(body, json!({ "message": "stored" }));
}

#[tokio::test]
async fn upload_error_envelope_includes_status_and_details() {
    let mock = Arc::new(MockBackend::replying_upload(
        413,
        UploadBody::Json(json!({ "error": "File too large. Max size: 16MB." })),
    ));
    let state = test_app_state(mock);

    let response = upload_file(axum::extract::State(state), multipart_headers(), Bytes::new()).await;
    let (status, body) = response_json(response).await;

    assert_eq!(status, 413);
    assert_eq!(body["error"], "Failed to upload file to backend");
    assert_eq!(body["status"], 413);
    assert_eq!(body["details"]["error"], "File too large. Max size: 16MB.");
}

#[tokio::test]
async fn upload_error_with_text_body_keeps_text_details() {
    let mock = Arc::new(MockBackend::replying_upload(502, UploadBody::Text("bad gateway".to_owned())));
    let state = test_app_state(mock);

    let response = upload_file(axum::extract::State(state), multipart_headers(), Bytes::new()).await;
    let (status, body) = response_json(response).await;

    assert_eq!(status, 502);
    assert_eq!(body["details"], "bad gateway");
}

#[tokio::test]
async fn upload_transport_failure_collapses_to_500() {
    let state = test_app_state(Arc::new(MockBackend::unreachable()));

    let response = upload_file(axum::extract::State(state), HeaderMap::new(), Bytes::new()).await;
    let (status, body) = response_json(response).await;

    assert_eq!(status, 500);
    assert_eq!(body, json!({ "error": "Internal Server Error" }));
}

#[tokio::test]
async fn upload_without_content_type_forwards_none() {
    let mock = Arc::new(MockBackend::replying_upload(200, UploadBody::Text("ok".to_owned())));
    let state = test_app_state(Arc::clone(&mock));

    let _ = upload_file(axum::extract::State(state), HeaderMap::new(), Bytes::new()).await;

    let (seen_ct, _) = mock.seen_upload.lock().unwrap().clone().expect("backend saw the upload");
    assert!(seen_ct.is_none());
}
