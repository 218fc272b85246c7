use axum::extract::{Path, State};
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;

pub async fn list_rooms(State(state): State<AppState>) -> Json<serde_json::Value> {
    let rooms: Vec<serde_json::Value> = state
        .registry
        .rooms()
        .iter()
        .map(|room| {
            serde_json::json!({
                "name": room.name(),
                "members": room.member_count(),
            })
        })
        .collect();

    Json(serde_json::json!({ "data": rooms }))
}

pub async fn list_members(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let room = state
        .registry
        .get(&name)
        .ok_or_else(|| AppError::NotFound(format!("no such room: {name}")))?;

    Ok(Json(serde_json::json!({ "data": room.member_names() })))
}
