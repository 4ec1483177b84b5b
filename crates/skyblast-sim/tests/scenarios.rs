//! End-to-end scenarios driven through the public engine API.

use glam::Vec3;

use skyblast_sim::core::commands::{InputEvent, InputState, PlayerCommand};
use skyblast_sim::core::constants::*;
use skyblast_sim::core::enums::WeaponKind;
use skyblast_sim::core::events::{AudioEvent, GameEvent};
use skyblast_sim::core::state::FrameSnapshot;
use skyblast_sim::score::MemoryHighScore;
use skyblast_sim::world_setup;
use skyblast_sim::{SimConfig, SimulationEngine};
use skyblast_procgen::{CityLayout, EnemySeed};

const DT: f32 = 1.0 / 60.0;

fn open_sky() -> SimConfig {
    SimConfig {
        city: CityLayout {
            rows: 0,
            cols: 0,
            spacing: CITY_SPACING,
        },
        enemy_wave_size: 0,
        traffic_cars: 0,
        ..SimConfig::default()
    }
}

fn run(engine: &mut SimulationEngine, input: &InputState, frames: usize) -> Vec<FrameSnapshot> {
    (0..frames).map(|_| engine.tick(DT, input)).collect()
}

#[test]
fn reset_clears_transients_and_regenerates_world() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let idle = InputState::new();
    let first = engine.tick(DT, &idle);
    let buildings = first.buildings.len();
    assert!(buildings > 0);
    assert_eq!(first.enemies.len(), ENEMY_WAVE_SIZE);

    let mut firing = InputState::new();
    firing.apply(InputEvent::MouseDown);
    firing.apply(InputEvent::Look { yaw: 0.0, pitch: -0.4 });
    engine.queue_command(PlayerCommand::LockPointer);
    engine.queue_command(PlayerCommand::SelectWeapon {
        weapon: WeaponKind::Rocket,
    });
    let busy = run(&mut engine, &firing, 90);
    assert!(busy.iter().any(|s| !s.projectiles.is_empty()));

    engine.queue_command(PlayerCommand::UnlockPointer);
    engine.queue_command(PlayerCommand::ResetGame);
    let after = engine.tick(DT, &idle);

    assert!(after.game_events.contains(&GameEvent::GameReset));
    assert!(after.projectiles.is_empty());
    assert!(after.enemy_shots.is_empty());
    assert!(after.debris.is_empty());
    assert!(after.particles.is_empty());
    assert!(after.shockwaves.is_empty());
    assert!(after.beams.is_empty());
    assert_eq!(after.buildings.len(), buildings);
    assert_eq!(after.enemies.len(), ENEMY_WAVE_SIZE);
    assert_eq!(after.hud.score, 0);
    assert_eq!(after.hud.health, 100);
}

#[test]
fn high_score_survives_a_reload() {
    let store = MemoryHighScore::default();
    {
        let mut engine =
            SimulationEngine::with_high_score_store(open_sky(), Box::new(store.clone()));
        engine.context_mut().award(500);
        engine.tick(DT, &InputState::new());
    }
    assert_eq!(store.value(), 500);

    let mut engine = SimulationEngine::with_high_score_store(open_sky(), Box::new(store.clone()));
    let snap = engine.tick(DT, &InputState::new());
    assert_eq!(snap.hud.score, 0);
    assert_eq!(snap.hud.high_score, 500);
}

#[test]
fn high_score_never_decreases() {
    let store = MemoryHighScore::with_value(100);
    let mut engine = SimulationEngine::with_high_score_store(open_sky(), Box::new(store.clone()));

    engine.context_mut().award(60);
    engine.tick(DT, &InputState::new());
    assert_eq!(store.value(), 100);

    engine.reset();
    engine.context_mut().award(150);
    let snap = engine.tick(DT, &InputState::new());
    assert_eq!(store.value(), 150);
    assert_eq!(snap.hud.high_score, 150);

    engine.reset();
    let snap = engine.tick(DT, &InputState::new());
    assert_eq!(snap.hud.score, 0);
    assert_eq!(snap.hud.high_score, 150);
    assert_eq!(store.value(), 150);
}

#[test]
fn laser_burns_down_an_enemy_in_front_of_the_player() {
    let mut engine = SimulationEngine::new(open_sky());
    let start = engine.player().position;
    let target = start + Vec3::new(0.0, 0.0, -50.0);
    world_setup::spawn_enemy(
        engine.context_mut(),
        &EnemySeed {
            angle: 0.0,
            radius: 0.0,
            altitude: target.y,
            angular_velocity: 0.0,
            patrol_center: target,
            shot_cooldown: 1.0,
        },
    );

    let mut input = InputState::new();
    input.apply(InputEvent::MouseDown);
    engine.queue_command(PlayerCommand::LockPointer);
    engine.queue_command(PlayerCommand::SelectWeapon {
        weapon: WeaponKind::Laser,
    });

    let frames = run(&mut engine, &input, 40);
    let kills: Vec<_> = frames
        .iter()
        .flat_map(|s| &s.game_events)
        .filter(|e| matches!(e, GameEvent::EnemyDestroyed { .. }))
        .collect();
    assert_eq!(kills.len(), 1);

    let hits = frames
        .iter()
        .flat_map(|s| &s.game_events)
        .filter(|e| matches!(e, GameEvent::EnemyHit { .. }))
        .count();
    // 70 health at 18 per beam: three chip hits, then the kill.
    assert_eq!(hits, 3);
    let last = frames.last().unwrap();
    assert!(last.enemies.is_empty());
    assert!(last.hud.score >= ENEMY_KILL_SCORE + 3 * ENEMY_HIT_SCORE);
    assert!(frames
        .iter()
        .flat_map(|s| &s.audio_events)
        .any(|a| *a == AudioEvent::Laser));
}

#[test]
fn idle_player_is_never_shot_at() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let frames = run(&mut engine, &InputState::new(), 600);
    assert!(frames
        .iter()
        .flat_map(|s| &s.audio_events)
        .all(|a| *a != AudioEvent::EnemyShot));
    assert_eq!(frames.last().unwrap().hud.health, 100);
}

#[test]
fn engaged_player_draws_fire() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.queue_command(PlayerCommand::LockPointer);
    let frames = run(&mut engine, &InputState::new(), 600);
    assert!(frames
        .iter()
        .flat_map(|s| &s.audio_events)
        .any(|a| *a == AudioEvent::EnemyShot));
}
