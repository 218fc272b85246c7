use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use uuid::Uuid;

use super::jokes::JokeList;
use super::message::{ServerMessage, SERVER_NAME};

/// A room member as the room sees it: connection identity, current display
/// name, and the send capability used to deliver outbound messages.
#[derive(Debug)]
pub struct Member {
    id: Uuid,
    name: Mutex<Option<String>>,
    outbound: mpsc::UnboundedSender<ServerMessage>,
}

impl Member {
    pub fn new(outbound: mpsc::UnboundedSender<ServerMessage>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: Mutex::new(None),
            outbound,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The display name, unset until the session joins.
    pub fn display_name(&self) -> Option<String> {
        self.name.lock().clone()
    }

    pub fn set_display_name(&self, name: String) {
        *self.name.lock() = Some(name);
    }

    /// Best-effort delivery. A failed send means the connection is already
    /// gone; the message is dropped and the failure never propagates.
    pub fn send(&self, msg: ServerMessage) {
        if self.outbound.send(msg).is_err() {
            tracing::debug!(member = %self.id, "dropped message for disconnected member");
        }
    }
}

/// A named chat room: the set of joined members, in join order.
///
/// Rooms are created through [`RoomRegistry::get_or_create`] and live for
/// the rest of the process once created.
///
/// [`RoomRegistry::get_or_create`]: super::registry::RoomRegistry::get_or_create
pub struct Room {
    name: String,
    members: Mutex<Vec<Arc<Member>>>,
    jokes: Arc<JokeList>,
}

impl Room {
    pub(crate) fn new(name: &str, jokes: Arc<JokeList>) -> Self {
        Self {
            name: name.to_string(),
            members: Mutex::new(Vec::new()),
            jokes,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a member. Announcing the join is the caller's responsibility;
    /// the caller also guarantees at most one join per member.
    pub fn join(&self, member: Arc<Member>) {
        self.members.lock().push(member);
    }

    /// Remove a member if present. Removing an absent member is a no-op,
    /// tolerating double-close races from the transport.
    pub fn leave(&self, member: &Member) {
        self.members.lock().retain(|m| m.id != member.id);
    }

    /// Deliver `msg` to every current member, in join order. Each delivery
    /// is independent: a dead member's send is swallowed and the rest of
    /// the fan-out proceeds.
    pub fn broadcast(&self, msg: ServerMessage) {
        for member in self.members.lock().iter() {
            member.send(msg.clone());
        }
    }

    /// Display names of the current members, in join order.
    pub fn member_names(&self) -> Vec<String> {
        self.members
            .lock()
            .iter()
            .filter_map(|m| m.display_name())
            .collect()
    }

    pub fn member_count(&self) -> usize {
        self.members.lock().len()
    }

    /// Send one pseudo-randomly chosen joke to `member` alone, as a chat
    /// from the server. Never broadcast.
    pub fn send_joke(&self, member: &Member) {
        member.send(ServerMessage::chat(SERVER_NAME, self.jokes.pick()));
    }
}
