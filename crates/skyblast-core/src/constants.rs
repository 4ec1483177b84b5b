//! Simulation constants and tuning parameters.
//!
//! World units are arbitrary "meters"; y is up, the ground plane is y = 0.

/// Upper bound on a single frame's delta time (seconds).
/// Prevents simulation blow-ups after a stall or tab resume.
pub const MAX_FRAME_DT: f32 = 0.033;

/// Window over which the frames-per-second readout is averaged (seconds).
pub const FPS_WINDOW_SECS: f32 = 0.5;

// --- Player ---

/// Player spawn position.
pub const PLAYER_START: [f32; 3] = [0.0, 22.0, 90.0];

pub const PLAYER_MAX_HEALTH: f32 = 100.0;

/// Invulnerability window after taking damage (seconds).
pub const PLAYER_INVULN_SECS: f32 = 0.35;

/// Cruise thrust (units/s²).
pub const PLAYER_THRUST: f32 = 240.0;

/// Thrust while boost is held.
pub const PLAYER_BOOST_THRUST: f32 = 330.0;

/// Fraction of velocity retained after one second of flight (`base^dt` damping).
pub const PLAYER_DAMPING_BASE: f32 = 0.14;

/// The player can never fly lower than this.
pub const PLAYER_MIN_ALTITUDE: f32 = 4.0;

/// Height of the aim point above the player rig origin.
pub const PLAYER_EYE_HEIGHT: f32 = 1.6;

/// Radius of the player hit sphere around the aim point.
pub const PLAYER_HIT_RADIUS: f32 = 2.1;

/// Distance ahead of the view origin at which projectiles spawn.
pub const MUZZLE_OFFSET: f32 = 2.0;

/// Speed below which the engine hum stays idle.
pub const ENGINE_IDLE_SPEED: f32 = 5.0;

/// Speed span mapped onto engine intensity 0..1.
pub const ENGINE_SPEED_SPAN: f32 = 260.0;

// --- Weapons ---

/// Hitscan beam end point distance when nothing is struck.
pub const LASER_MISS_RANGE: f32 = 520.0;

/// Laser beam visual life (seconds).
pub const BEAM_LIFE_SECS: f32 = 0.06;

/// Projectiles at or below this height have hit the ground.
pub const PROJECTILE_GROUND_Y: f32 = 0.6;

/// Projectile-to-enemy contact distance.
pub const ENEMY_CONTACT_RADIUS: f32 = 2.4;

/// Damage factor applied when a splash projectile burns out in flight.
pub const DUD_DAMAGE_FACTOR: f32 = 0.65;

/// Radius factor applied when a splash projectile burns out in flight.
pub const DUD_RADIUS_FACTOR: f32 = 0.75;

/// Reference lifetime used to fade projectile tracers.
pub const TRACER_FADE_SECS: f32 = 2.0;

// --- Buildings ---

pub const BUILDING_HEALTH_BASE: f32 = 60.0;
pub const BUILDING_HEALTH_PER_HEIGHT: f32 = 1.15;
pub const BUILDING_SCORE_BASE: f32 = 20.0;
pub const BUILDING_SCORE_PER_HEIGHT: f32 = 0.9;

// --- City layout ---

pub const CITY_ROWS: u32 = 18;
pub const CITY_COLS: u32 = 18;
pub const CITY_SPACING: f32 = 18.0;

/// Number of cosmetic traffic cars.
pub const TRAFFIC_CAR_COUNT: usize = 42;

// --- Enemies ---

/// Fixed wave size at level start / reset.
pub const ENEMY_WAVE_SIZE: usize = 8;

pub const ENEMY_MAX_HEALTH: f32 = 70.0;

/// Hitscan sphere radius for enemy ships.
pub const ENEMY_RAY_RADIUS: f32 = 3.35;

pub const ENEMY_KILL_SCORE: u32 = 250;
pub const ENEMY_HIT_SCORE: u32 = 5;

/// Enemy shot muzzle offset along the aim direction.
pub const ENEMY_SHOT_MUZZLE: f32 = 3.0;
pub const ENEMY_SHOT_SPEED: f32 = 120.0;
pub const ENEMY_SHOT_LIFE_SECS: f32 = 2.8;
pub const ENEMY_SHOT_DAMAGE: f32 = 10.0;
pub const ENEMY_SHOT_TRACER_OPACITY: f32 = 0.55;

/// Enemy shot cooldown window: `MIN + rand * SPAN` seconds.
pub const ENEMY_SHOT_COOLDOWN_MIN: f64 = 0.65;
pub const ENEMY_SHOT_COOLDOWN_SPAN: f64 = 0.6;

// --- Effects ---

pub const DEBRIS_GRAVITY: f32 = 26.0;
pub const DEBRIS_FLOOR_Y: f32 = 0.4;
/// Whole-velocity retention on a ground bounce.
pub const DEBRIS_BOUNCE_DAMPING: f32 = 0.45;
/// Vertical restitution on a ground bounce (applied after the damping).
pub const DEBRIS_BOUNCE_RESTITUTION: f32 = 0.25;
pub const DEBRIS_FADE_SECS: f32 = 3.2;

pub const PARTICLE_GRAVITY: f32 = 16.0;
/// Fraction of particle velocity retained after one second (`base^dt` drag).
pub const PARTICLE_DRAG_BASE: f32 = 0.35;
pub const PARTICLE_FADE_SECS: f32 = 1.1;

pub const SHOCKWAVE_LIFE_SECS: f32 = 0.55;
pub const SHOCKWAVE_MAX_SCALE: f32 = 26.0;
pub const SHOCKWAVE_OPACITY: f32 = 0.55;

// --- Screen feedback ---

/// Screen flash decay per second.
pub const FLASH_DECAY_RATE: f32 = 1.8;

/// Damage tint decay per second.
pub const DAMAGE_TINT_DECAY_RATE: f32 = 2.6;

/// Shake duration the offset magnitude is normalised against.
pub const SHAKE_REFERENCE_SECS: f32 = 0.28;

// --- Persistence ---

/// Key under which the high score is persisted.
pub const HIGH_SCORE_KEY: &str = "3blast_highScore";
