//! Procedural content for SKYBLAST.
//!
//! Seeded generators for the city grid, the enemy wave and the cosmetic
//! street traffic. Generators only produce plans; spawning them into the
//! simulation world is the engine's job.

pub mod city;
pub mod traffic;
pub mod wave;

pub use city::{generate_city, BuildingLot, CityLayout, CityPlan};
pub use traffic::{car_pose, generate_traffic};
pub use wave::{generate_wave, EnemySeed};

#[cfg(test)]
mod tests;
