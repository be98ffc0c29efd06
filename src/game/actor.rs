//! Single-owner task around a [`GameSession`]
//!
//! Commands from every connection go through one ordered queue and the round
//! timer is awaited in the same loop, so an event and a tick can never
//! interleave. Deliveries go out on a broadcast channel without waiting for
//! any receiver; a connection that falls behind loses messages rather than
//! slowing the game down.

use super::GameSession;
use crate::broadcast::Outbound;
use crate::protocol::ClientMessage;
use crate::types::ConnectionId;
use crate::ws::handlers::handle_message;
use tokio::sync::{broadcast, mpsc};

const COMMAND_QUEUE: usize = 256;
const OUTBOUND_BUFFER: usize = 256;

/// Everything a connection can ask of the game
#[derive(Debug, Clone)]
pub enum SessionCommand {
    Connect {
        connection_id: ConnectionId,
    },
    Disconnect {
        connection_id: ConnectionId,
    },
    Message {
        connection_id: ConnectionId,
        msg: ClientMessage,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Game session is no longer running")]
    Closed,
}

/// Cloneable front door to a running game session
#[derive(Debug, Clone)]
pub struct SessionHandle {
    cmd_tx: mpsc::Sender<SessionCommand>,
    outbound_tx: broadcast::Sender<Outbound>,
}

impl SessionHandle {
    /// Receive deliveries from now on. Subscribe before connecting so the
    /// round announcements for the new connection are not missed.
    pub fn subscribe(&self) -> broadcast::Receiver<Outbound> {
        self.outbound_tx.subscribe()
    }

    pub async fn connect(&self, connection_id: ConnectionId) -> Result<(), SessionError> {
        self.send(SessionCommand::Connect { connection_id }).await
    }

    pub async fn disconnect(&self, connection_id: ConnectionId) -> Result<(), SessionError> {
        self.send(SessionCommand::Disconnect { connection_id }).await
    }

    pub async fn message(
        &self,
        connection_id: ConnectionId,
        msg: ClientMessage,
    ) -> Result<(), SessionError> {
        self.send(SessionCommand::Message { connection_id, msg })
            .await
    }

    pub async fn send(&self, cmd: SessionCommand) -> Result<(), SessionError> {
        self.cmd_tx.send(cmd).await.map_err(|_| SessionError::Closed)
    }
}

/// Move the session into its own task and return a handle to it.
/// The task ends once every handle is dropped.
pub fn spawn_session(session: GameSession) -> SessionHandle {
    let (cmd_tx, cmd_rx) = mpsc::channel(COMMAND_QUEUE);
    let (outbound_tx, _) = broadcast::channel(OUTBOUND_BUFFER);

    tokio::spawn(run_session(session, cmd_rx, outbound_tx.clone()));

    SessionHandle {
        cmd_tx,
        outbound_tx,
    }
}

async fn run_session(
    mut session: GameSession,
    mut cmd_rx: mpsc::Receiver<SessionCommand>,
    outbound_tx: broadcast::Sender<Outbound>,
) {
    tracing::info!("Game session started");

    loop {
        let outbound = tokio::select! {
            cmd = cmd_rx.recv() => match cmd {
                Some(cmd) => session.apply(cmd),
                None => break,
            },
            remaining = session.timer_mut().next_tick() => session.on_timer_tick(remaining),
        };

        for delivery in outbound {
            // No subscribers just means nobody is listening right now
            let _ = outbound_tx.send(delivery);
        }
    }

    tracing::info!("Game session stopped");
}

impl GameSession {
    /// Apply one queued command
    pub fn apply(&mut self, cmd: SessionCommand) -> Vec<Outbound> {
        match cmd {
            SessionCommand::Connect { connection_id } => self.on_connect(connection_id),
            SessionCommand::Disconnect { connection_id } => self.on_disconnect(&connection_id),
            SessionCommand::Message { connection_id, msg } => {
                handle_message(self, &connection_id, msg)
            }
        }
    }
}
