use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Protocol-level failure while handling one session's inbound message.
///
/// None of these are fatal: they are reported back to the offending
/// connection and logged, and never affect other sessions or the room.
#[derive(Debug)]
pub enum ChatError {
    /// The payload was not a well-formed logical message.
    Decode(serde_json::Error),
    /// A chat/rename/members/joke action arrived before the join.
    NotJoined,
    /// A second join on a session that already has an identity.
    AlreadyJoined,
    /// A message arrived after the session closed.
    Closed,
    /// A recognized command with an unusable shape (e.g. `/name` alone).
    BadCommand(String),
}

impl ChatError {
    /// Stable machine-readable code for logs and tests.
    pub fn code(&self) -> &'static str {
        match self {
            ChatError::Decode(_) => "decode_error",
            ChatError::NotJoined => "not_joined",
            ChatError::AlreadyJoined => "already_joined",
            ChatError::Closed => "closed",
            ChatError::BadCommand(_) => "bad_command",
        }
    }
}

impl fmt::Display for ChatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatError::Decode(e) => write!(f, "invalid message: {e}"),
            ChatError::NotJoined => write!(f, "join the room before sending messages"),
            ChatError::AlreadyJoined => write!(f, "this session already joined"),
            ChatError::Closed => write!(f, "session is closed"),
            ChatError::BadCommand(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ChatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChatError::Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ChatError {
    fn from(e: serde_json::Error) -> Self {
        ChatError::Decode(e)
    }
}

/// Errors surfaced by the HTTP API.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
}

impl AppError {
    fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "not_found",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn message(&self) -> &str {
        match self {
            AppError::NotFound(msg) => msg,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": {
                "code": self.code(),
                "message": self.message()
            }
        });
        (self.status(), Json(body)).into_response()
    }
}
