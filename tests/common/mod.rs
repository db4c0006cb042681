// Common test utilities for driving the HTTP front end without a socket

use axum::body::Body;
use axum::http::{Request, StatusCode};
use cmdpad::editor::{self, Editor, SharedEditor};
use cmdpad::server::{self, StatusBody};
use serde_json::Value;
use tower::ServiceExt;

/// Sends `body` as JSON to `POST /command` and returns the status and
/// decoded response body.
#[allow(dead_code)]
pub async fn post_command(editor: &SharedEditor, body: Value) -> (StatusCode, StatusBody) {
    post_raw(editor, "application/json", body.to_string()).await
}

#[allow(dead_code)]
pub async fn post_raw(
    editor: &SharedEditor,
    content_type: &str,
    body: String,
) -> (StatusCode, StatusBody) {
    let request = Request::builder()
        .method("POST")
        .uri("/command")
        .header("content-type", content_type)
        .body(Body::from(body))
        .unwrap();

    let response = server::router(editor.clone())
        .oneshot(request)
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// Editor with `text` already written (one history entry).
#[allow(dead_code)]
pub fn editor_with_text(text: &str) -> SharedEditor {
    let shared = Editor::shared();
    editor::lock(&shared).write(text);
    shared
}

#[allow(dead_code)]
pub fn text_of(shared: &SharedEditor) -> String {
    editor::lock(shared).text()
}
