//! Per-frame systems operating on the simulation context.
//!
//! Systems are free functions over `&mut SimContext`. They hold no state of
//! their own; everything they touch lives in the context or in components.

pub mod camera;
pub mod effects;
pub mod enemy_ai;
pub mod enemy_shots;
pub mod projectiles;
pub mod snapshot;
pub mod traffic;
