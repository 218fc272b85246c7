use std::path::PathBuf;
use std::sync::Arc;

use crate::chat::registry::RoomRegistry;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<RoomRegistry>,
    pub public_dir: PathBuf,
}
