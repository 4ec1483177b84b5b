//! SKYBLAST host application.
//!
//! Wires the simulation to a game-loop thread, file-backed high-score storage,
//! logging back-ends and a scripted pilot for headless runs.

pub mod autopilot;
pub mod backends;
pub mod config;
pub mod error;
pub mod game_loop;
pub mod persistence;
pub mod state;

pub use skyblast_core as core;
