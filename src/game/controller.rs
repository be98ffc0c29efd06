//! Round lifecycle: NoRound <-> RoundActive(drawer, word, timer)

use super::GameSession;
use crate::broadcast::Outbound;
use crate::protocol::ServerMessage;
use crate::types::*;
use rand::Rng;

impl GameSession {
    /// A connection opened. Starts the first round if none is running.
    pub fn on_connect(&mut self, connection_id: ConnectionId) -> Vec<Outbound> {
        if !self.registry.connect(connection_id.clone()) {
            tracing::warn!("Connection {} registered twice, ignoring", connection_id);
            return Vec::new();
        }
        self.store.add_participant(connection_id.clone());
        tracing::info!(
            "Connection {} joined ({} connected)",
            connection_id,
            self.registry.len()
        );

        let mut out = vec![Outbound::only(
            connection_id.clone(),
            ServerMessage::Welcome {
                connection_id: connection_id.clone(),
            },
        )];

        match self.store.current_round() {
            Some(round) => {
                // Late joiner: bring them up to date on the running round
                out.push(Outbound::only(
                    connection_id.clone(),
                    ServerMessage::CurrentDrawer {
                        connection_id: round.drawer.clone(),
                    },
                ));
                out.push(Outbound::only(
                    connection_id.clone(),
                    ServerMessage::DisplayWord {
                        hint: GUESSER_HINT.to_string(),
                    },
                ));
                if let Some(seconds) = self.timer.remaining() {
                    out.push(Outbound::only(
                        connection_id,
                        ServerMessage::Timer { seconds },
                    ));
                }
            }
            None => self.start_round(&mut out),
        }

        out.push(self.scores_broadcast());
        out
    }

    /// A connection closed. Replaces the round if the drawer left.
    pub fn on_disconnect(&mut self, connection_id: &str) -> Vec<Outbound> {
        if !self.registry.disconnect(connection_id) {
            return Vec::new();
        }
        self.store.remove_participant(connection_id);
        tracing::info!(
            "Connection {} left ({} connected)",
            connection_id,
            self.registry.len()
        );

        let mut out = Vec::new();
        if self.registry.is_empty() {
            self.end_round();
            return out;
        }

        if self.store.is_drawer(connection_id) {
            tracing::info!("Drawer {} left, starting a new round", connection_id);
            self.start_round(&mut out);
        }
        out.push(self.scores_broadcast());
        out
    }

    /// One second passed on the round timer. At 0 the round ends unsolved
    /// and the next one starts in the same step.
    pub fn on_timer_tick(&mut self, remaining: u32) -> Vec<Outbound> {
        let Some(round) = self.store.current_round() else {
            return Vec::new();
        };
        let round_number = round.number;

        let mut out = vec![Outbound::all(ServerMessage::Timer { seconds: remaining })];
        if remaining == 0 {
            tracing::info!("Round {} ran out of time", round_number);
            self.start_round(&mut out);
        }
        out
    }

    /// A guesser named the secret word: one point, announcement, next round
    pub fn on_correct_guess(&mut self, guesser: &str) -> Vec<Outbound> {
        let Some(round) = self.store.current_round() else {
            return Vec::new();
        };
        if round.drawer == guesser {
            return Vec::new();
        }
        let word = round.secret_word.clone();

        let Some(score) = self.store.increment_score(guesser) else {
            return Vec::new();
        };
        let name = self.store.display_name(guesser).to_string();
        tracing::info!("{} guessed {} (score {})", name, word, score);

        let mut out = vec![
            Outbound::all(ServerMessage::ChatMessage {
                text: format!("{} hat richtig geraten! Es war: {}", name, word),
            }),
            self.scores_broadcast(),
        ];
        self.start_round(&mut out);
        out
    }

    /// Pick a drawer and a word, restart the timer and announce the round.
    /// With nobody connected this falls back to NoRound.
    fn start_round(&mut self, out: &mut Vec<Outbound>) {
        let Some(drawer) = self.pick_drawer() else {
            self.end_round();
            return;
        };
        let word = self.words.next_word(&mut self.rng).to_string();

        self.store.set_drawer(drawer.clone());
        self.store.set_secret_word(word.clone());
        let seconds = self.timer.start(self.config.round_seconds);

        tracing::info!(
            "Round {} started, drawer: {}",
            self.store.rounds_played(),
            drawer
        );
        tracing::debug!("Secret word: {}", word);

        out.push(Outbound::all(ServerMessage::CurrentDrawer {
            connection_id: drawer.clone(),
        }));
        out.push(Outbound::only(drawer.clone(), ServerMessage::Word { word }));
        out.push(Outbound::all_except(
            drawer,
            ServerMessage::DisplayWord {
                hint: GUESSER_HINT.to_string(),
            },
        ));
        out.push(Outbound::all(ServerMessage::Timer { seconds }));
    }

    /// Back to NoRound: no drawer, no word, no timer
    fn end_round(&mut self) {
        self.timer.stop();
        if let Some(round) = self.store.clear_round() {
            tracing::info!("Round {} ended, nobody left to play", round.number);
        }
    }

    /// Uniform pick over everyone connected. The outgoing drawer may be picked
    /// again unless `no_repeat_drawer` is set and someone else is available.
    fn pick_drawer(&mut self) -> Option<ConnectionId> {
        let previous = self.store.current_drawer();
        let ids = self.registry.ids();

        let pool: Vec<&ConnectionId> = if self.config.no_repeat_drawer && ids.len() > 1 {
            ids.iter()
                .filter(|id| Some(id.as_str()) != previous)
                .collect()
        } else {
            ids.iter().collect()
        };

        if pool.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..pool.len());
        Some(pool[index].clone())
    }

    fn scores_broadcast(&self) -> Outbound {
        Outbound::all(ServerMessage::Scores {
            scores: self.store.scores_snapshot(),
        })
    }
}
