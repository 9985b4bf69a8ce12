//! Countdown lifecycle states

/// Lifecycle of a countdown session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// Idle; remaining time equals the configured duration.
    Stopped,
    /// Ticks are being produced.
    Started,
    /// Cancelled mid-run; remaining time is remembered for resume.
    Paused,
}

impl TimerState {
    pub fn is_running(&self) -> bool {
        matches!(self, TimerState::Started)
    }
}

impl Default for TimerState {
    fn default() -> Self {
        TimerState::Stopped
    }
}
