use super::GameStore;
use crate::types::*;

impl GameStore {
    /// Begin a new round with this drawer. The word is set separately.
    pub fn set_drawer(&mut self, drawer: ConnectionId) {
        self.rounds_played += 1;
        self.round = Some(Round {
            number: self.rounds_played,
            drawer,
            secret_word: String::new(),
        });
    }

    /// Set the secret word of the live round. Ignored when no round is live.
    pub fn set_secret_word(&mut self, word: String) {
        if let Some(round) = self.round.as_mut() {
            round.secret_word = word;
        }
    }

    pub fn current_round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn current_drawer(&self) -> Option<&str> {
        self.round.as_ref().map(|r| r.drawer.as_str())
    }

    pub fn is_drawer(&self, connection_id: &str) -> bool {
        self.current_drawer() == Some(connection_id)
    }

    /// True when a guesser's chat text names the secret word
    pub fn is_correct_guess(&self, connection_id: &str, text: &str) -> bool {
        match &self.round {
            Some(round) => round.drawer != connection_id && round.matches(text),
            None => false,
        }
    }

    /// End the live round without starting another
    pub fn clear_round(&mut self) -> Option<Round> {
        self.round.take()
    }

    pub fn rounds_played(&self) -> u64 {
        self.rounds_played
    }
}
