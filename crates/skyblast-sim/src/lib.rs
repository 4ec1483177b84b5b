//! Simulation engine for SKYBLAST.
//!
//! Owns the hecs ECS world, runs the frame tick in a fixed system order,
//! and produces `FrameSnapshot`s for presentation. Completely headless.

pub mod combat;
pub mod context;
pub mod engine;
pub mod player;
pub mod presentation;
pub mod score;
pub mod spatial;
pub mod store;
pub mod systems;
pub mod world_setup;

pub use skyblast_core as core;
pub use context::SimContext;
pub use engine::{SimConfig, SimulationEngine};
