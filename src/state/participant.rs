use super::GameStore;
use crate::types::*;

impl GameStore {
    /// Add a participant with score 0. Adding an existing id keeps its state.
    pub fn add_participant(&mut self, connection_id: ConnectionId) {
        if self.participant(&connection_id).is_none() {
            self.participants.push(Participant::new(connection_id));
        }
    }

    /// Drop a participant, discarding name and score
    pub fn remove_participant(&mut self, connection_id: &str) -> Option<Participant> {
        let index = self
            .participants
            .iter()
            .position(|p| p.connection_id == connection_id)?;
        Some(self.participants.remove(index))
    }

    pub fn participant(&self, connection_id: &str) -> Option<&Participant> {
        self.participants
            .iter()
            .find(|p| p.connection_id == connection_id)
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Store a display name. Empty and duplicate names are allowed.
    /// Returns false if the connection is unknown.
    pub fn set_display_name(&mut self, connection_id: &str, name: String) -> bool {
        match self
            .participants
            .iter_mut()
            .find(|p| p.connection_id == connection_id)
        {
            Some(p) => {
                p.display_name = Some(name);
                true
            }
            None => false,
        }
    }

    /// Name to show for a connection, with the placeholder when unset
    pub fn display_name(&self, connection_id: &str) -> &str {
        self.participant(connection_id)
            .map(Participant::name_or_placeholder)
            .unwrap_or(PLACEHOLDER_NAME)
    }

    pub fn score(&self, connection_id: &str) -> Option<u32> {
        self.participant(connection_id).map(|p| p.score)
    }

    /// Award one point. Returns the new score.
    pub fn increment_score(&mut self, connection_id: &str) -> Option<u32> {
        let participant = self
            .participants
            .iter_mut()
            .find(|p| p.connection_id == connection_id)?;
        participant.score += 1;
        Some(participant.score)
    }

    /// Scoreboard in join order
    pub fn scores_snapshot(&self) -> Vec<ScoreEntry> {
        self.participants
            .iter()
            .map(|p| ScoreEntry {
                username: p.name_or_placeholder().to_string(),
                score: p.score,
            })
            .collect()
    }
}
