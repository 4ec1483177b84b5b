//! Score keeping and the high-score persistence seam.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("high score storage unavailable: {0}")]
    Unavailable(String),
    #[error("stored high score is malformed: {0}")]
    Malformed(String),
}

/// Durable home for the best score across sessions.
pub trait HighScoreStore: Send {
    fn load(&self) -> Result<u32, PersistenceError>;
    fn store(&mut self, value: u32) -> Result<(), PersistenceError>;
}

/// In-process store. Clones share the same value, so a test can hand one clone
/// to an engine and inspect or reuse the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScore {
    value: Arc<AtomicU32>,
}

impl MemoryHighScore {
    pub fn with_value(value: u32) -> Self {
        Self {
            value: Arc::new(AtomicU32::new(value)),
        }
    }

    pub fn value(&self) -> u32 {
        self.value.load(Ordering::Relaxed)
    }
}

impl HighScoreStore for MemoryHighScore {
    fn load(&self) -> Result<u32, PersistenceError> {
        Ok(self.value())
    }

    fn store(&mut self, value: u32) -> Result<(), PersistenceError> {
        self.value.store(value, Ordering::Relaxed);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub score: u32,
    pub high_score: u32,
}

impl ScoreBoard {
    /// Add points. Returns true when this raised the high score.
    pub fn award(&mut self, points: u32) -> bool {
        self.score = self.score.saturating_add(points);
        if self.score > self.high_score {
            self.high_score = self.score;
            return true;
        }
        false
    }

    /// Zero the running score; the high score never decreases.
    pub fn reset(&mut self) {
        self.score = 0;
    }
}
