//! Host configuration, read from an optional TOML file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use skyblast_sim::SimConfig;

use crate::error::AppError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub sim: SimConfig,
    pub game_loop: GameLoopConfig,
    pub persistence: PersistenceConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameLoopConfig {
    /// Target frames per second.
    pub frame_rate: u32,
    /// Stop after this many frames. `None` runs until shut down.
    pub frames: Option<u64>,
    /// Sleep between frames to hold `frame_rate`. Unpaced runs go flat out.
    pub paced: bool,
}

impl Default for GameLoopConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60,
            frames: Some(1800),
            paced: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistenceConfig {
    /// JSON file holding the high score.
    pub path: PathBuf,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("skyblast-scores.json"),
        }
    }
}

impl AppConfig {
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let data = fs::read_to_string(path).map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&data).map_err(|source| AppError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl GameLoopConfig {
    /// Nominal step for one frame, in seconds.
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.frame_rate.max(1) as f32
    }
}
