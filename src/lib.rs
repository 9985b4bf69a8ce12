//! Tickdown - a countdown timer session for the terminal
//!
//! The engine produces a cancellable once-per-second tick stream, the
//! session tracks stopped/started/paused state around it, and the screen
//! wires in the persisted duration store and a leave-screen callback.

pub mod config;
pub mod engine;
pub mod format;
pub mod input;
pub mod screen;
pub mod state;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use engine::CountdownEngine;
pub use input::DigitBuffer;
pub use screen::{Navigator, TimerScreen};
pub use state::{TimerSession, TimerState};
pub use store::{DurationStore, JsonFileStore, MemoryStore};
pub use utils::shutdown_signal;
