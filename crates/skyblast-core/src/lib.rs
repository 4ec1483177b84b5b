//! Core types and definitions for the SKYBLAST simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, input, frame snapshots, events, weapons and constants.
//! It has no dependency on any renderer, audio engine or runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
pub mod weapons;
