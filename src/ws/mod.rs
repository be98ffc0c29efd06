pub mod handlers;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use futures::{
    sink::SinkExt,
    stream::{SplitSink, StreamExt},
};
use tokio::sync::broadcast::error::RecvError;

use crate::game::SessionHandle;
use crate::protocol::{ClientMessage, ServerMessage};
use crate::types::new_connection_id;

/// WebSocket upgrade handler
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(session): State<SessionHandle>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, session))
}

/// Pump one connection: client frames into the session, deliveries back out
async fn handle_socket(socket: WebSocket, session: SessionHandle) {
    let connection_id = new_connection_id();
    let (mut sender, mut receiver) = socket.split();

    let mut outbound_rx = session.subscribe();
    if let Err(e) = session.connect(connection_id.clone()).await {
        tracing::error!("Failed to register connection {}: {}", connection_id, e);
        return;
    }
    tracing::info!("WebSocket connected: {}", connection_id);

    loop {
        tokio::select! {
            delivery = outbound_rx.recv() => {
                match delivery {
                    Ok(outbound) => {
                        if let Some(msg) = outbound.message_for(&connection_id) {
                            if send_json(&mut sender, msg).await.is_err() {
                                break;
                            }
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(
                            "Connection {} fell behind, skipped {} messages",
                            connection_id,
                            skipped
                        );
                    }
                    Err(RecvError::Closed) => break,
                }
            }

            ws_msg = receiver.next() => {
                match ws_msg {
                    Some(Ok(Message::Text(text))) => {
                        tracing::debug!("Received message: {}", text.as_str());

                        match serde_json::from_str::<ClientMessage>(&text) {
                            Ok(client_msg) => {
                                if session.message(connection_id.clone(), client_msg).await.is_err() {
                                    break;
                                }
                            }
                            Err(e) => {
                                tracing::warn!("Dropping malformed message from {}: {}", connection_id, e);
                            }
                        }
                    }
                    Some(Ok(Message::Close(_))) => break,
                    Some(Ok(Message::Ping(data))) => {
                        if sender.send(Message::Pong(data)).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!("WebSocket error on {}: {}", connection_id, e);
                        break;
                    }
                    None => break,
                }
            }
        }
    }

    if let Err(e) = session.disconnect(connection_id.clone()).await {
        tracing::warn!("Could not unregister {}: {}", connection_id, e);
    }
    tracing::info!("WebSocket closed: {}", connection_id);
}

async fn send_json(
    sender: &mut SplitSink<WebSocket, Message>,
    msg: &ServerMessage,
) -> Result<(), axum::Error> {
    match serde_json::to_string(msg) {
        Ok(json) => sender.send(Message::Text(json.into())).await,
        Err(e) => {
            tracing::error!("Failed to serialize {:?}: {}", msg, e);
            Ok(())
        }
    }
}
