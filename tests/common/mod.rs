#![allow(dead_code)]

use std::sync::Arc;

use banterserver::chat::jokes::JokeList;
use banterserver::chat::registry::RoomRegistry;
use banterserver::routes;
use banterserver::state::AppState;

/// Test server owning an isolated room registry. Each instance is
/// independent, so parallel tests never share rooms.
pub struct TestServer {
    pub state: AppState,
}

impl TestServer {
    pub fn new() -> Self {
        let state = AppState {
            registry: Arc::new(RoomRegistry::new(JokeList::builtin())),
            public_dir: std::env::temp_dir(),
        };
        Self { state }
    }

    /// Returns an Axum Router wired to this server's state for `oneshot()` calls.
    pub fn router(&self) -> axum::Router {
        routes::router(self.state.clone())
    }

    /// Binds a TCP listener on port 0, spawns the server, and returns the base URL.
    pub async fn spawn(&self) -> String {
        let app = self.router();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://127.0.0.1:{}", addr.port())
    }
}

/// Router over a fresh, empty registry for tests that never touch state.
pub fn test_app() -> axum::Router {
    TestServer::new().router()
}

/// Parse a response body into a `serde_json::Value`.
pub async fn parse_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
