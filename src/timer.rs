//! Round countdown
//!
//! There is exactly one timer per game session. It does not spawn anything;
//! the session task awaits [`RoundTimer::next_tick`] next to its inbound
//! queue, so ticks are processed in the same serialized loop as client events.

use std::time::Duration;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Default)]
pub struct RoundTimer {
    remaining: u32,
    interval: Option<Interval>,
}

impl RoundTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting down from `seconds`, replacing any countdown in progress.
    /// Returns the initial value, which counts as the first tick.
    pub fn start(&mut self, seconds: u32) -> u32 {
        let mut interval = interval_at(Instant::now() + TICK, TICK);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        self.interval = Some(interval);
        self.remaining = seconds;
        seconds
    }

    /// Cancel the countdown. No further ticks are produced.
    pub fn stop(&mut self) {
        self.interval = None;
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    /// Seconds left in the current countdown, if one is running
    pub fn remaining(&self) -> Option<u32> {
        self.interval.as_ref().map(|_| self.remaining)
    }

    /// Wait for the next one-second tick and return the new remaining value.
    /// A returned 0 means the countdown expired and the timer stopped itself.
    /// Never resolves while the timer is stopped.
    pub async fn next_tick(&mut self) -> u32 {
        let Some(interval) = self.interval.as_mut() else {
            return std::future::pending().await;
        };

        interval.tick().await;
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.interval = None;
        }
        self.remaining
    }
}
