use std::sync::Arc;

use tokio::sync::mpsc;
use uuid::Uuid;

use super::message::{ClientMessage, Command, ServerMessage, SERVER_NAME};
use super::registry::RoomRegistry;
use super::room::{Member, Room};
use crate::error::ChatError;

/// Where a session is in its lifecycle. Only joined sessions may chat,
/// and a closed session stays closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Unnamed,
    Joined,
    Closed,
}

/// Server-side state for one client connection.
///
/// A session is bound to a single room for its whole lifetime. It owns the
/// connection's send capability (through its room-facing [`Member`] handle)
/// and maps decoded client actions onto room operations. The transport
/// drives it: [`handle_message`] for each inbound payload,
/// [`handle_close`] when the connection goes away.
///
/// [`handle_message`]: Session::handle_message
/// [`handle_close`]: Session::handle_close
pub struct Session {
    room: Arc<Room>,
    member: Arc<Member>,
    phase: Phase,
}

impl Session {
    /// Session for a freshly accepted connection, resolving `room_name`
    /// through the registry (creating the room on first reference).
    pub fn connect(
        registry: &RoomRegistry,
        room_name: &str,
        outbound: mpsc::UnboundedSender<ServerMessage>,
    ) -> Session {
        let room = registry.get_or_create(room_name);
        let member = Arc::new(Member::new(outbound));
        tracing::debug!(room = %room.name(), session = %member.id(), "session connected");
        Session {
            room,
            member,
            phase: Phase::Unnamed,
        }
    }

    pub fn id(&self) -> Uuid {
        self.member.id()
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn display_name(&self) -> Option<String> {
        self.member.display_name()
    }

    /// Best-effort delivery to this session's own client.
    pub fn send(&self, msg: ServerMessage) {
        self.member.send(msg);
    }

    /// Decode one raw payload and dispatch it.
    ///
    /// A join message always means join. For chat messages, text exactly
    /// equal to `/joke` or `/members`, or led by the `/name` token, is
    /// intercepted as a command and never delivered as chat; everything
    /// else is broadcast verbatim. An error describes the offending
    /// payload and leaves the room untouched.
    pub fn handle_message(&mut self, raw: &str) -> Result<(), ChatError> {
        let msg: ClientMessage = serde_json::from_str(raw)?;
        match msg {
            ClientMessage::Join { name } => self.handle_join(name),
            ClientMessage::Chat { text } => match Command::parse(&text)? {
                None => self.handle_chat(text),
                Some(Command::Joke) => self.handle_joke_request(),
                Some(Command::Members) => self.handle_members_request(),
                Some(Command::Rename(new_name)) => self.handle_name_change(new_name),
            },
        }
    }

    /// Take a display name, enter the room, and announce the join.
    fn handle_join(&mut self, name: String) -> Result<(), ChatError> {
        match self.phase {
            Phase::Unnamed => {}
            Phase::Joined => return Err(ChatError::AlreadyJoined),
            Phase::Closed => return Err(ChatError::Closed),
        }
        self.member.set_display_name(name.clone());
        self.phase = Phase::Joined;
        self.room.join(Arc::clone(&self.member));
        self.room.broadcast(ServerMessage::note(format!(
            "{name} joined \"{room}\".",
            room = self.room.name()
        )));
        Ok(())
    }

    /// Broadcast ordinary chat under the current display name.
    fn handle_chat(&self, text: String) -> Result<(), ChatError> {
        let name = self.joined_name()?;
        self.room.broadcast(ServerMessage::chat(name, text));
        Ok(())
    }

    /// Reply to the requester alone with the room's current member names.
    fn handle_members_request(&self) -> Result<(), ChatError> {
        self.joined_name()?;
        let names = self.room.member_names();
        self.send(ServerMessage::chat(
            SERVER_NAME,
            format!("In this room: {}", names.join(", ")),
        ));
        Ok(())
    }

    /// Ask the room for a canned joke, delivered to the requester alone.
    fn handle_joke_request(&self) -> Result<(), ChatError> {
        self.joined_name()?;
        self.room.send_joke(&self.member);
        Ok(())
    }

    /// Announce the rename, then apply it. The note carries the pre-rename
    /// name, so the broadcast must happen before the update.
    fn handle_name_change(&self, new_name: String) -> Result<(), ChatError> {
        let old_name = self.joined_name()?;
        self.room.broadcast(ServerMessage::note(format!(
            "{old_name} changed name to \"{new_name}\"."
        )));
        self.member.set_display_name(new_name);
        Ok(())
    }

    /// Leave the room and, if this session had joined, announce the
    /// departure to the remaining members. Safe to call repeatedly and
    /// safe on sessions that never joined; the left-note is emitted at
    /// most once.
    pub fn handle_close(&mut self) {
        let prev = std::mem::replace(&mut self.phase, Phase::Closed);
        if prev == Phase::Closed {
            return;
        }
        self.room.leave(&self.member);
        if prev == Phase::Joined {
            if let Some(name) = self.member.display_name() {
                self.room.broadcast(ServerMessage::note(format!(
                    "{name} left {room}.",
                    room = self.room.name()
                )));
            }
        }
        tracing::debug!(room = %self.room.name(), session = %self.member.id(), "session closed");
    }

    /// Current display name, or the protocol error for this phase.
    fn joined_name(&self) -> Result<String, ChatError> {
        match self.phase {
            Phase::Unnamed => Err(ChatError::NotJoined),
            Phase::Closed => Err(ChatError::Closed),
            Phase::Joined => self.member.display_name().ok_or(ChatError::NotJoined),
        }
    }
}
