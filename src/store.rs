//! Persistent configured-duration store

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// External collaborator holding the user's last-entered duration.
///
/// A zero duration means "nothing configured"; the timer screen leaves
/// immediately when it reads one.
pub trait DurationStore {
    fn configured_ms(&self) -> Result<u64, String>;

    fn set_configured_ms(&mut self, ms: u64) -> Result<(), String>;

    /// Reset the stored duration to zero.
    fn clear(&mut self) -> Result<(), String> {
        self.set_configured_ms(0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredDuration {
    configured_ms: u64,
    updated_at: DateTime<Utc>,
}

/// JSON-file-backed store. A missing file reads as a zero duration.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DurationStore for JsonFileStore {
    fn configured_ms(&self) -> Result<u64, String> {
        if !self.path.exists() {
            return Ok(0);
        }
        let raw = fs::read_to_string(&self.path)
            .map_err(|e| format!("failed to read {}: {}", self.path.display(), e))?;
        let stored: StoredDuration = serde_json::from_str(&raw)
            .map_err(|e| format!("failed to parse {}: {}", self.path.display(), e))?;
        Ok(stored.configured_ms)
    }

    fn set_configured_ms(&mut self, ms: u64) -> Result<(), String> {
        let stored = StoredDuration {
            configured_ms: ms,
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string_pretty(&stored)
            .map_err(|e| format!("failed to serialize stored duration: {}", e))?;
        fs::write(&self.path, json)
            .map_err(|e| format!("failed to write {}: {}", self.path.display(), e))?;
        debug!("stored configured duration: {} ms", ms);
        Ok(())
    }
}

/// In-memory store for tests and ephemeral runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    configured_ms: u64,
}

impl MemoryStore {
    pub fn new(configured_ms: u64) -> Self {
        Self { configured_ms }
    }
}

impl DurationStore for MemoryStore {
    fn configured_ms(&self) -> Result<u64, String> {
        Ok(self.configured_ms)
    }

    fn set_configured_ms(&mut self, ms: u64) -> Result<(), String> {
        self.configured_ms = ms;
        Ok(())
    }
}
