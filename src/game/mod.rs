//! The game session: one drawing-and-guessing game and its round state machine
//!
//! [`GameSession`] is plain synchronous state. Every operation takes the
//! session by `&mut` and returns the deliveries it produced, which keeps the
//! rules testable without sockets or clocks. [`actor`] puts a session behind
//! an ordered command queue and drives its timer.

pub mod actor;
mod controller;

use crate::config::{ConfigError, GameConfig};
use crate::state::{ConnectionRegistry, GameStore};
use crate::timer::RoundTimer;
use crate::words::WordSource;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub use actor::{spawn_session, SessionCommand, SessionError, SessionHandle};

pub struct GameSession {
    config: GameConfig,
    words: WordSource,
    registry: ConnectionRegistry,
    store: GameStore,
    timer: RoundTimer,
    rng: StdRng,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Build a session with a caller-provided random source (seeded in tests)
    pub fn with_rng(config: GameConfig, rng: StdRng) -> Result<Self, ConfigError> {
        let words = WordSource::new(config.words.clone())?;
        Ok(Self {
            config,
            words,
            registry: ConnectionRegistry::new(),
            store: GameStore::new(),
            timer: RoundTimer::new(),
            rng,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn store(&self) -> &GameStore {
        &self.store
    }

    pub(crate) fn store_mut(&mut self) -> &mut GameStore {
        &mut self.store
    }

    pub fn registry(&self) -> &ConnectionRegistry {
        &self.registry
    }

    pub fn timer(&self) -> &RoundTimer {
        &self.timer
    }

    pub(crate) fn timer_mut(&mut self) -> &mut RoundTimer {
        &mut self.timer
    }

    pub fn is_round_active(&self) -> bool {
        self.store.current_round().is_some()
    }
}
