// src/server.rs - HTTP front end: a single POST /command endpoint

use crate::action::{Action, ActionKind};
use crate::editor::{self, SharedEditor};
use crate::error::EditorError;
use anyhow::Context;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Body of `POST /command`.
///
/// Fields are kept as raw JSON values so that a wrongly typed `text` or
/// `length` is reported as a domain error instead of a body rejection.
#[derive(Debug, Deserialize)]
pub struct CommandRequest {
    pub action: Option<Value>,
    pub text: Option<Value>,
    pub length: Option<Value>,
}

impl CommandRequest {
    pub fn into_action(self) -> Result<Action, EditorError> {
        let name = self.action.as_ref().and_then(Value::as_str).unwrap_or("");
        match name.parse::<ActionKind>()? {
            ActionKind::Write => match self.text {
                Some(Value::String(text)) => Ok(Action::Write(text)),
                _ => Err(EditorError::MissingText),
            },
            ActionKind::Delete => self
                .length
                .as_ref()
                .and_then(Value::as_u64)
                .and_then(|n| usize::try_from(n).ok())
                .map(Action::Delete)
                .ok_or(EditorError::InvalidLength),
            ActionKind::Undo => Ok(Action::Undo),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusBody {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StatusBody {
    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
            message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: Some(message.into()),
        }
    }
}

impl IntoResponse for EditorError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(StatusBody::error(self.to_string()))).into_response()
    }
}

pub fn router(editor: SharedEditor) -> Router {
    Router::new()
        .route("/command", post(command))
        .with_state(editor)
}

async fn command(
    State(editor): State<SharedEditor>,
    payload: Result<Json<CommandRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            log::debug!("Rejected request body: {}", rejection);
            return (
                StatusCode::BAD_REQUEST,
                Json(StatusBody::error("Invalid request body")),
            )
                .into_response();
        }
    };
    log::debug!("POST /command {:?}", request);

    let outcome = request.into_action().and_then(|action| {
        let name = action.name();
        let mut editor = editor::lock(&editor);
        editor.perform(action).map(|()| (name, editor.text()))
    });
    match outcome {
        Ok((name, text)) => {
            log::info!("Text after {} (http): {}", name, text);
            (StatusCode::OK, Json(StatusBody::success())).into_response()
        }
        Err(err) => {
            log::debug!("Command failed: {:?}", err);
            err.into_response()
        }
    }
}

/// Binds `addr` and serves until the task is dropped or the listener fails.
pub async fn serve(addr: SocketAddr, editor: SharedEditor) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    serve_on(listener, editor).await
}

/// Serves on an already bound listener.
pub async fn serve_on(listener: TcpListener, editor: SharedEditor) -> anyhow::Result<()> {
    log::info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(editor))
        .await
        .context("HTTP server stopped")?;
    Ok(())
}
