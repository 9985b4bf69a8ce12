//! Countdown session owning remaining time and the active tick stream

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::engine::CountdownEngine;

use super::TimerState;

/// One timer session with a single owner for all mutable countdown state.
///
/// The session holds the configured duration, the remaining time, and the
/// receiving end of the active tick stream. The remaining time is reset to
/// the configured duration whenever the countdown stops, either by reaching
/// zero or by an explicit [`reset`](Self::reset).
#[derive(Debug)]
pub struct TimerSession {
    state: TimerState,
    configured_ms: u64,
    remaining_ms: u64,
    engine: CountdownEngine,
    ticks: Option<mpsc::Receiver<u64>>,
}

impl TimerSession {
    pub fn new(configured_ms: u64) -> Self {
        Self::with_engine(CountdownEngine::new(), configured_ms)
    }

    /// Build a session around a pre-configured engine, e.g. one with a
    /// shorter tick period.
    pub fn with_engine(engine: CountdownEngine, configured_ms: u64) -> Self {
        Self {
            state: TimerState::Stopped,
            configured_ms,
            remaining_ms: configured_ms,
            engine,
            ticks: None,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn configured_ms(&self) -> u64 {
        self.configured_ms
    }

    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    /// The single action button: start when stopped, pause when running,
    /// resume from the remembered remaining time when paused.
    pub fn on_action(&mut self) {
        match self.state {
            TimerState::Stopped => self.start(self.configured_ms),
            TimerState::Started => self.pause(),
            TimerState::Paused => self.start(self.remaining_ms),
        }
    }

    fn start(&mut self, duration_ms: u64) {
        info!("starting countdown from {} ms", duration_ms);
        self.ticks = Some(self.engine.start(duration_ms));
        self.state = TimerState::Started;
    }

    fn pause(&mut self) {
        info!("pausing countdown with {} ms remaining", self.remaining_ms);
        self.engine.cancel();
        self.ticks = None;
        self.state = TimerState::Paused;
    }

    /// Await the next remaining-seconds value from the active countdown.
    ///
    /// Returns `None` when no countdown is running. A `0` tick is the
    /// terminal value: the session flips back to `Stopped` and the remaining
    /// time resets to the configured duration.
    pub async fn next_tick(&mut self) -> Option<u64> {
        let ticks = self.ticks.as_mut()?;
        match ticks.recv().await {
            Some(seconds) => {
                // Capped so a rounded-up first tick never exceeds the
                // configured duration.
                self.remaining_ms = seconds.saturating_mul(1_000).min(self.configured_ms);
                if seconds == 0 {
                    debug!("countdown reached zero, stopping session");
                    self.state = TimerState::Stopped;
                    self.remaining_ms = self.configured_ms;
                    self.ticks = None;
                }
                Some(seconds)
            }
            None => {
                self.ticks = None;
                None
            }
        }
    }

    /// Cancel any countdown and return to the idle state.
    pub fn reset(&mut self) {
        info!("resetting timer session");
        self.engine.cancel();
        self.ticks = None;
        self.state = TimerState::Stopped;
        self.remaining_ms = self.configured_ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn action_starts_a_stopped_session() {
        let mut session = TimerSession::new(5_000);
        assert_eq!(session.state(), TimerState::Stopped);

        session.on_action();
        assert_eq!(session.state(), TimerState::Started);
        assert_eq!(session.next_tick().await, Some(5));
    }

    #[tokio::test(start_paused = true)]
    async fn action_pauses_and_keeps_remaining_time() {
        let mut session = TimerSession::new(5_000);
        session.on_action();

        assert_eq!(session.next_tick().await, Some(5));
        assert_eq!(session.next_tick().await, Some(4));

        session.on_action();
        assert_eq!(session.state(), TimerState::Paused);
        assert_eq!(session.remaining_ms(), 4_000);
        assert_eq!(session.next_tick().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn action_resumes_from_remaining_time() {
        let mut session = TimerSession::new(5_000);
        session.on_action();
        assert_eq!(session.next_tick().await, Some(5));
        assert_eq!(session.next_tick().await, Some(4));

        session.on_action(); // pause at 4 s
        session.on_action(); // resume

        assert_eq!(session.state(), TimerState::Started);
        assert_eq!(session.next_tick().await, Some(4));
    }

    #[tokio::test(start_paused = true)]
    async fn completed_countdown_stops_and_resets_remaining() {
        let mut session = TimerSession::new(3_000);
        session.on_action();

        let mut seen = Vec::new();
        while let Some(seconds) = session.next_tick().await {
            seen.push(seconds);
        }

        assert_eq!(seen, vec![3, 2, 1, 0]);
        assert_eq!(session.state(), TimerState::Stopped);
        assert_eq!(session.remaining_ms(), 3_000);
    }

    #[tokio::test(start_paused = true)]
    async fn remaining_never_exceeds_configured_duration() {
        let mut session = TimerSession::new(1_500);
        session.on_action();

        assert_eq!(session.next_tick().await, Some(2));
        assert_eq!(session.remaining_ms(), 1_500);
    }

    #[tokio::test(start_paused = true)]
    async fn reset_returns_to_idle() {
        let mut session = TimerSession::new(10_000);
        session.on_action();
        assert_eq!(session.next_tick().await, Some(10));

        session.reset();
        assert_eq!(session.state(), TimerState::Stopped);
        assert_eq!(session.remaining_ms(), 10_000);
        assert_eq!(session.next_tick().await, None);
    }
}
