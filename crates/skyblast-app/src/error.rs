use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("could not start game loop: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("game loop thread panicked")]
    LoopPanicked,
    #[error("game loop is already running")]
    AlreadyRunning,
    #[error("shared state lock poisoned")]
    StatePoisoned,
}
