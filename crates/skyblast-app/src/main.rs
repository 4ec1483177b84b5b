//! SKYBLAST headless runner.
//!
//! Usage:
//!   skyblast --frames 3600 --seed 7
//!   RUST_LOG=skyblast_sim=debug skyblast --config skyblast.toml

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use skyblast_app::config::AppConfig;
use skyblast_app::game_loop::LoopOptions;
use skyblast_app::state::AppState;

#[derive(Parser)]
#[command(name = "skyblast")]
#[command(about = "Fly a scripted strafing run over a procedurally generated city")]
struct Args {
    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// RNG seed for the city and the enemy wave
    #[arg(long)]
    seed: Option<u64>,
    /// Stop after this many frames
    #[arg(long)]
    frames: Option<u64>,
    /// JSON file holding the high score
    #[arg(long)]
    high_score: Option<PathBuf>,
    /// Leave the controls alone; the player stays idle
    #[arg(long)]
    no_autopilot: bool,
    /// Run frames back-to-back instead of at the configured frame rate
    #[arg(long)]
    unpaced: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => AppConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AppConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.sim.seed = seed;
    }
    if let Some(frames) = args.frames {
        config.game_loop.frames = Some(frames);
    }
    if let Some(path) = args.high_score {
        config.persistence.path = path;
    }
    if args.unpaced {
        config.game_loop.paced = false;
    }
    info!(
        seed = config.sim.seed,
        frames = ?config.game_loop.frames,
        high_score_file = %config.persistence.path.display(),
        "starting"
    );

    let state = AppState::new();
    let handle = state
        .start(LoopOptions::from_config(config, !args.no_autopilot))
        .context("starting game loop")?;
    let summary = handle
        .join()
        .map_err(|_| skyblast_app::error::AppError::LoopPanicked)?;
    state.stop();

    println!("=== RUN COMPLETE ===");
    println!("  Frames:              {}", summary.frames);
    println!("  Score:               {}", summary.score);
    println!("  High score:          {}", summary.high_score);
    println!(
        "  Buildings destroyed: {} ({} standing)",
        summary.buildings_destroyed, summary.buildings_left
    );
    println!(
        "  Enemies destroyed:   {} ({} airborne)",
        summary.enemies_destroyed, summary.enemies_left
    );
    println!("  Deaths:              {}", summary.deaths);
    if summary.backend_failures > 0 {
        println!("  Back-end failures:   {}", summary.backend_failures);
    }
    if let Some(snapshot) = state.snapshot() {
        println!("  Final health:        {}", snapshot.hud.health);
    }
    Ok(())
}
