mod participant;
pub mod registry;
mod round;

pub use registry::ConnectionRegistry;

use crate::types::*;

/// Authoritative game state: the live round and everyone's name and score.
///
/// Owned by a single game session task, so every mutation is applied in
/// full before the next event is looked at.
#[derive(Debug, Default)]
pub struct GameStore {
    /// Kept in order of first connection for a stable scoreboard
    participants: Vec<Participant>,
    round: Option<Round>,
    rounds_played: u64,
}

impl GameStore {
    pub fn new() -> Self {
        Self::default()
    }
}
