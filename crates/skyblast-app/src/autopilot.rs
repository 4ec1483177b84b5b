//! Scripted pilots that stand in for a human at the controls.

use glam::Vec3;

use skyblast_core::commands::InputEvent;
use skyblast_core::enums::{KeyCode, WeaponKind};
use skyblast_core::state::FrameSnapshot;

pub trait Pilot: Send {
    fn id(&self) -> &'static str;
    /// Input for the coming frame, given the last published snapshot.
    fn next_input(&mut self, frame: u64, last: Option<&FrameSnapshot>) -> Vec<InputEvent>;
}

/// Get closer than this before easing off the throttle.
const CRUISE_RANGE: f32 = 120.0;
const SEARCH_PITCH: f32 = -0.3;
const SEARCH_TURN_RATE: f32 = 0.01;

/// Locks on, then hunts: lasers the nearest enemy, rockets the nearest
/// building when the sky is clear.
#[derive(Debug, Default)]
pub struct HunterPilot {
    engaged: bool,
    weapon: Option<WeaponKind>,
    pending_release: Option<KeyCode>,
    throttle: bool,
    search_yaw: f32,
}

/// Yaw and pitch that make the view direction point along `dir`.
pub fn look_at(dir: Vec3) -> Option<(f32, f32)> {
    let dir = dir.try_normalize()?;
    Some(((-dir.x).atan2(-dir.z), dir.y.clamp(-1.0, 1.0).asin()))
}

fn nearest(eye: Vec3, points: impl Iterator<Item = Vec3>) -> Option<Vec3> {
    points.min_by(|a, b| a.distance_squared(eye).total_cmp(&b.distance_squared(eye)))
}

fn weapon_key(weapon: WeaponKind) -> KeyCode {
    match weapon {
        WeaponKind::Cannon => KeyCode::Digit1,
        WeaponKind::Rocket => KeyCode::Digit2,
        WeaponKind::Laser => KeyCode::Digit3,
    }
}

impl HunterPilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nearest target and the weapon to use on it.
    fn pick_target(snapshot: &FrameSnapshot) -> Option<(Vec3, WeaponKind)> {
        let eye = snapshot.player.camera;
        if let Some(enemy) = nearest(eye, snapshot.enemies.iter().map(|e| e.position)) {
            return Some((enemy, WeaponKind::Laser));
        }
        nearest(eye, snapshot.buildings.iter().map(|b| b.center)).map(|b| (b, WeaponKind::Rocket))
    }

    fn select(&mut self, weapon: WeaponKind, events: &mut Vec<InputEvent>) {
        if self.weapon == Some(weapon) || self.pending_release.is_some() {
            return;
        }
        let code = weapon_key(weapon);
        events.push(InputEvent::KeyDown { code });
        self.pending_release = Some(code);
        self.weapon = Some(weapon);
    }

    fn set_throttle(&mut self, on: bool, events: &mut Vec<InputEvent>) {
        if self.throttle == on {
            return;
        }
        let code = KeyCode::KeyW;
        events.push(if on {
            InputEvent::KeyDown { code }
        } else {
            InputEvent::KeyUp { code }
        });
        self.throttle = on;
    }
}

impl Pilot for HunterPilot {
    fn id(&self) -> &'static str {
        "hunter"
    }

    fn next_input(&mut self, _frame: u64, last: Option<&FrameSnapshot>) -> Vec<InputEvent> {
        let mut events = Vec::new();
        if let Some(code) = self.pending_release.take() {
            events.push(InputEvent::KeyUp { code });
        }
        if !self.engaged {
            events.push(InputEvent::PointerLock { locked: true });
            events.push(InputEvent::MouseDown);
            self.engaged = true;
        }

        let target = last.and_then(|snap| {
            Self::pick_target(snap).map(|(point, weapon)| (point - snap.player.camera, weapon))
        });
        match target.and_then(|(offset, weapon)| look_at(offset).map(|a| (a, offset, weapon))) {
            Some(((yaw, pitch), offset, weapon)) => {
                self.select(weapon, &mut events);
                self.set_throttle(offset.length() > CRUISE_RANGE, &mut events);
                events.push(InputEvent::Look { yaw, pitch });
            }
            None => {
                // Nothing left standing: circle slowly.
                self.search_yaw += SEARCH_TURN_RATE;
                self.set_throttle(false, &mut events);
                events.push(InputEvent::Look {
                    yaw: self.search_yaw,
                    pitch: SEARCH_PITCH,
                });
            }
        }
        events
    }
}
