mod health;
mod rooms;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router: the chat socket, health and room
/// inspection endpoints, and the bundled web client served for
/// everything else.
pub fn router(state: AppState) -> Router {
    let client = ServeDir::new(&state.public_dir);

    Router::new()
        .route("/health", get(health::health))
        .route("/chat/{room}", get(crate::chat::ws_upgrade))
        .nest("/api/v1", api_routes())
        .fallback_service(client)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/version", get(health::version))
        .route("/rooms", get(rooms::list_rooms))
        .route("/rooms/{name}/members", get(rooms::list_members))
}
