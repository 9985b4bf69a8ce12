//! Timer state machine and session ownership
//!
//! This module contains the countdown lifecycle states and the session
//! object that owns the remaining time and the active tick stream.

pub mod session;
pub mod timer_state;

// Re-export main types
pub use session::TimerSession;
pub use timer_state::TimerState;
