//! File-backed high-score storage.
//!
//! The file is a flat JSON object; the score lives under `HIGH_SCORE_KEY` and
//! any other keys are preserved on write.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::debug;

use skyblast_core::constants::HIGH_SCORE_KEY;
use skyblast_sim::score::{HighScoreStore, PersistenceError};

#[derive(Debug, Clone)]
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole object. A missing file is an empty object.
    fn read_object(&self) -> Result<Map<String, Value>, PersistenceError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(err) => return Err(PersistenceError::Unavailable(err.to_string())),
        };
        if text.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str(&text) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(PersistenceError::Malformed(format!(
                "{} is not a JSON object",
                self.path.display()
            ))),
            Err(err) => Err(PersistenceError::Malformed(err.to_string())),
        }
    }
}

/// Accepts a plain number or a numeric string.
fn parse_score(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load(&self) -> Result<u32, PersistenceError> {
        let object = self.read_object()?;
        match object.get(HIGH_SCORE_KEY) {
            None => Ok(0),
            Some(value) => parse_score(value).ok_or_else(|| {
                PersistenceError::Malformed(format!("{HIGH_SCORE_KEY} is not a score: {value}"))
            }),
        }
    }

    fn store(&mut self, value: u32) -> Result<(), PersistenceError> {
        // An unreadable file is overwritten rather than blocking the save.
        let mut object = self.read_object().unwrap_or_default();
        object.insert(HIGH_SCORE_KEY.to_string(), Value::from(value));

        let text = serde_json::to_string_pretty(&Value::Object(object))
            .map_err(|err| PersistenceError::Malformed(err.to_string()))?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| PersistenceError::Unavailable(err.to_string()))?;
        }
        fs::write(&self.path, text).map_err(|err| PersistenceError::Unavailable(err.to_string()))?;
        debug!(path = %self.path.display(), high_score = value, "high score saved");
        Ok(())
    }
}
