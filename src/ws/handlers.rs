//! Inbound message routing
//!
//! Decides what each client message means for the game and who hears about
//! it. Unauthorized actions are dropped without telling anyone.

use crate::broadcast::Outbound;
use crate::game::GameSession;
use crate::protocol::{ClientMessage, ServerMessage};

/// Handle one client message and return the deliveries it causes
pub fn handle_message(
    session: &mut GameSession,
    sender: &str,
    msg: ClientMessage,
) -> Vec<Outbound> {
    if !session.registry().contains(sender) {
        tracing::warn!("Message from unknown connection {}, dropping", sender);
        return Vec::new();
    }

    match msg {
        ClientMessage::SetUsername { username } => {
            tracing::info!("Connection {} is now called {:?}", sender, username);
            session.store_mut().set_display_name(sender, username);
            Vec::new()
        }

        ClientMessage::Draw(stroke) => {
            if session.config().strict_drawing && !session.store().is_drawer(sender) {
                tracing::debug!("Dropping stroke from non-drawer {}", sender);
                return Vec::new();
            }
            vec![Outbound::all_except(sender, ServerMessage::Draw(stroke))]
        }

        ClientMessage::Clear => {
            if !session.store().is_drawer(sender) {
                tracing::debug!("Ignoring clear from non-drawer {}", sender);
                return Vec::new();
            }
            vec![Outbound::all(ServerMessage::Clear)]
        }

        ClientMessage::ChatMessage { text } => {
            if session.store().is_correct_guess(sender, &text) {
                return session.on_correct_guess(sender);
            }
            let name = session.store().display_name(sender);
            vec![Outbound::all(ServerMessage::ChatMessage {
                text: format!("{}: {}", name, text),
            })]
        }
    }
}
