use serde::{Deserialize, Serialize};

use crate::error::ChatError;

/// Display name used for server-generated point-to-point replies.
pub const SERVER_NAME: &str = "Server";

/// Chat-text commands. `/joke` and `/members` must match the whole text;
/// `/name` is recognized by its leading token.
pub const CMD_JOKE: &str = "/joke";
pub const CMD_MEMBERS: &str = "/members";
pub const CMD_RENAME: &str = "/name";

/// Inbound message from a client, tagged on `type`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ClientMessage {
    Join { name: String },
    Chat { text: String },
}

/// Outbound message to a client, tagged on `type`.
///
/// `Chat` carries the sender's display name; `Note` is a system
/// announcement (joins, renames, leaves) with no sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ServerMessage {
    Chat { name: String, text: String },
    Note { text: String },
}

impl ServerMessage {
    pub fn chat(name: impl Into<String>, text: impl Into<String>) -> Self {
        ServerMessage::Chat {
            name: name.into(),
            text: text.into(),
        }
    }

    pub fn note(text: impl Into<String>) -> Self {
        ServerMessage::Note { text: text.into() }
    }
}

/// A command carried inside chat text instead of ordinary chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Joke,
    Members,
    Rename(String),
}

impl Command {
    /// Extract a command from chat text. `Ok(None)` means ordinary chat.
    ///
    /// Chat text exactly equal to a command string is always a command,
    /// never chat. Text merely containing a command mid-sentence is chat.
    /// A rename is the leading token `/name` followed by the new name;
    /// `/name` alone is an error rather than a rename to nothing.
    pub fn parse(text: &str) -> Result<Option<Command>, ChatError> {
        if text == CMD_JOKE {
            return Ok(Some(Command::Joke));
        }
        if text == CMD_MEMBERS {
            return Ok(Some(Command::Members));
        }

        let mut tokens = text.split_whitespace();
        if tokens.next() != Some(CMD_RENAME) {
            return Ok(None);
        }
        match tokens.next() {
            Some(new_name) => Ok(Some(Command::Rename(new_name.to_string()))),
            None => Err(ChatError::BadCommand(format!(
                "usage: {CMD_RENAME} <new name>"
            ))),
        }
    }
}
