pub mod jokes;
pub mod message;
pub mod registry;
pub mod room;
pub mod session;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Path, State};
use axum::response::Response;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;

use crate::state::AppState;
use message::ServerMessage;
use session::Session;

pub async fn ws_upgrade(
    ws: WebSocketUpgrade,
    Path(room_name): Path<String>,
    State(state): State<AppState>,
) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, room_name, state))
}

async fn handle_socket(socket: WebSocket, room_name: String, state: AppState) {
    let (mut ws_sink, mut ws_stream) = socket.split();

    // Channel for messages fanned out to this client
    let (tx, mut rx) = mpsc::unbounded_channel::<ServerMessage>();
    let mut session = Session::connect(&state.registry, &room_name, tx);

    loop {
        tokio::select! {
            // Outgoing messages from the room
            Some(msg) = rx.recv() => {
                match serde_json::to_string(&msg) {
                    Ok(payload) => {
                        if ws_sink.send(Message::Text(payload.into())).await.is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::error!(session = %session.id(), "failed to encode outbound message: {e}");
                    }
                }
            }
            // Incoming frames from the client
            msg = ws_stream.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        if let Err(e) = session.handle_message(&text) {
                            tracing::warn!(session = %session.id(), "rejected message: {e}");
                            session.send(ServerMessage::note(format!("error: {e}")));
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    _ => {}
                }
            }
        }
    }

    session.handle_close();
}
