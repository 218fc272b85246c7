use std::sync::Arc;

use dashmap::DashMap;

use super::jokes::JokeList;
use super::room::Room;

/// Process-wide map of chat rooms, created lazily on first reference and
/// never removed. Owned by the server's state and handed by reference to
/// each session at construction.
pub struct RoomRegistry {
    rooms: DashMap<String, Arc<Room>>,
    jokes: Arc<JokeList>,
}

impl RoomRegistry {
    pub fn new(jokes: JokeList) -> Self {
        Self {
            rooms: DashMap::new(),
            jokes: Arc::new(jokes),
        }
    }

    /// The room for `name`, creating and registering an empty one on first
    /// reference. Concurrent calls with the same brand-new name all observe
    /// the same single instance.
    pub fn get_or_create(&self, name: &str) -> Arc<Room> {
        self.rooms
            .entry(name.to_string())
            .or_insert_with(|| {
                tracing::debug!(room = name, "room created");
                Arc::new(Room::new(name, Arc::clone(&self.jokes)))
            })
            .clone()
    }

    /// The room for `name`, if one has been created.
    pub fn get(&self, name: &str) -> Option<Arc<Room>> {
        self.rooms.get(name).map(|r| Arc::clone(r.value()))
    }

    /// Snapshot of all rooms, sorted by name.
    pub fn rooms(&self) -> Vec<Arc<Room>> {
        let mut rooms: Vec<Arc<Room>> =
            self.rooms.iter().map(|e| Arc::clone(e.value())).collect();
        rooms.sort_by(|a, b| a.name().cmp(b.name()));
        rooms
    }
}
