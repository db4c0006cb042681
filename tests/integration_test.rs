// tests/integration_test.rs - Prompt and HTTP front ends sharing one editor

mod common;

use axum::http::StatusCode;
use cmdpad::editor::{self, Editor};
use cmdpad::error::EditorError;
use cmdpad::prompt::Prompt;
use common::{post_command, text_of};
use serde_json::json;
use std::io::Cursor;

#[test]
fn test_hello_sequence() {
    let mut editor = Editor::new();
    editor.write("hello");
    assert_eq!(editor.text(), "hello");
    editor.delete(2);
    assert_eq!(editor.text(), "hel");
    editor.undo().unwrap();
    assert_eq!(editor.text(), "hello");
    editor.undo().unwrap();
    assert_eq!(editor.text(), "");
    assert_eq!(editor.undo(), Err(EditorError::EmptyHistory));
}

#[test]
fn test_two_deletes_undo_both() {
    let mut editor = Editor::new();
    editor.write("abcdef");
    editor.delete(2);
    editor.delete(3);
    assert_eq!(editor.text(), "a");
    assert_eq!(editor.buffer().last_removed(), "bcd");

    editor.undo().unwrap();
    assert_eq!(editor.text(), "abcd");
    editor.undo().unwrap();
    assert_eq!(editor.text(), "abcdef");
}

#[tokio::test]
async fn test_prompt_and_http_share_history() {
    let shared = Editor::shared();

    let mut output = Vec::new();
    Prompt::new(Cursor::new("write\nhello\n"), &mut output, shared.clone())
        .run()
        .unwrap();

    let (status, _) = post_command(&shared, json!({"action": "write", "text": " world"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(text_of(&shared), "hello world");

    // Undo from the prompt reverses the HTTP write
    Prompt::new(Cursor::new("undo\n"), &mut output, shared.clone())
        .run()
        .unwrap();
    assert_eq!(text_of(&shared), "hello");

    let (status, _) = post_command(&shared, json!({"action": "undo"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(text_of(&shared), "");
    assert_eq!(editor::lock(&shared).depth(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_requests_are_serialized() {
    let shared = Editor::shared();

    let tasks: Vec<_> = (0..20)
        .map(|_| {
            let shared = shared.clone();
            tokio::spawn(async move {
                post_command(&shared, json!({"action": "write", "text": "ab"})).await
            })
        })
        .collect();
    for task in tasks {
        let (status, _) = task.await.unwrap();
        assert_eq!(status, StatusCode::OK);
    }

    assert_eq!(text_of(&shared), "ab".repeat(20));
    assert_eq!(editor::lock(&shared).depth(), 20);
}
