use serde::{Deserialize, Serialize};

/// Opaque handle for one connected participant
pub type ConnectionId = String;

/// Shown in chat and on the scoreboard until a participant sets a name
pub const PLACEHOLDER_NAME: &str = "Unbekannt";

/// What every guesser sees instead of the secret word
pub const GUESSER_HINT: &str = "Rate das Wort!";

/// Default round length in seconds
pub const DEFAULT_ROUND_SECONDS: u32 = 100;

pub fn new_connection_id() -> ConnectionId {
    ulid::Ulid::new().to_string()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    pub connection_id: ConnectionId,
    pub display_name: Option<String>,
    pub score: u32,
}

impl Participant {
    pub fn new(connection_id: ConnectionId) -> Self {
        Self {
            connection_id,
            display_name: None,
            score: 0,
        }
    }

    pub fn name_or_placeholder(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => PLACEHOLDER_NAME,
        }
    }
}

/// The single live round. Absence of a round in the store means no round is active.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    pub number: u64,
    pub drawer: ConnectionId,
    pub secret_word: String,
}

impl Round {
    /// Guesses compare case-insensitively against the secret word
    pub fn matches(&self, guess: &str) -> bool {
        guess.to_lowercase() == self.secret_word.to_lowercase()
    }
}

/// Scoreboard row as clients receive it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreEntry {
    pub username: String,
    pub score: u32,
}

/// One line segment on the canvas (`lastX`, `lastY`, `x`, `y`, `color`, `thickness`).
/// Kept as raw JSON so it is relayed exactly as the drawer's client sent it.
pub type Stroke = serde_json::Map<String, serde_json::Value>;
