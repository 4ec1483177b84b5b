//! Enemy AI for SKYBLAST.
//!
//! Implements the enemy patrol behaviour: orbit advance, aggro drift toward the
//! player, eased steering, facing, and the fire decision.

pub mod fsm;
pub mod profiles;

pub use skyblast_core as core;

#[cfg(test)]
mod tests;
