//! Player input and commands.
//!
//! Raw input events are recorded into an [`InputState`] as they arrive and the
//! simulation samples that state once per frame. Discrete actions (weapon select,
//! reset, pointer lock) become [`PlayerCommand`]s queued for the next tick boundary.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Discrete player actions processed at the start of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    SelectWeapon { weapon: WeaponKind },
    ResetGame,
    /// Pointer lock acquired: gameplay becomes active.
    LockPointer,
    /// Pointer lock released: gameplay becomes inert.
    UnlockPointer,
}

/// Raw input as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputEvent {
    KeyDown { code: KeyCode },
    KeyUp { code: KeyCode },
    MouseDown,
    MouseUp,
    /// Absolute view orientation (radians).
    Look { yaw: f32, pitch: f32 },
    PointerLock { locked: bool },
}

/// Signed movement axes, each in -1..=1.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoveAxes {
    pub forward: f32,
    pub strafe: f32,
    pub up: f32,
}

/// Pressed-state map plus view orientation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputState {
    pressed: HashSet<KeyCode>,
    pub fire_held: bool,
    pub yaw: f32,
    pub pitch: f32,
}

impl KeyCode {
    /// The discrete command bound to this key, if any.
    pub fn command(self) -> Option<PlayerCommand> {
        match self {
            KeyCode::Digit1 => Some(PlayerCommand::SelectWeapon {
                weapon: WeaponKind::Cannon,
            }),
            KeyCode::Digit2 => Some(PlayerCommand::SelectWeapon {
                weapon: WeaponKind::Rocket,
            }),
            KeyCode::Digit3 => Some(PlayerCommand::SelectWeapon {
                weapon: WeaponKind::Laser,
            }),
            KeyCode::KeyR => Some(PlayerCommand::ResetGame),
            _ => None,
        }
    }
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one input event. Returns the command it triggers, if any.
    pub fn apply(&mut self, event: InputEvent) -> Option<PlayerCommand> {
        match event {
            InputEvent::KeyDown { code } => {
                self.pressed.insert(code);
                code.command()
            }
            InputEvent::KeyUp { code } => {
                self.pressed.remove(&code);
                None
            }
            InputEvent::MouseDown => {
                self.fire_held = true;
                None
            }
            InputEvent::MouseUp => {
                self.fire_held = false;
                None
            }
            InputEvent::Look { yaw, pitch } => {
                self.yaw = yaw;
                self.pitch = pitch.clamp(-std::f32::consts::FRAC_PI_2, std::f32::consts::FRAC_PI_2);
                None
            }
            InputEvent::PointerLock { locked } => Some(if locked {
                PlayerCommand::LockPointer
            } else {
                PlayerCommand::UnlockPointer
            }),
        }
    }

    pub fn is_down(&self, code: KeyCode) -> bool {
        self.pressed.contains(&code)
    }

    fn axis(&self, positive: KeyCode, negative: KeyCode) -> f32 {
        let p = if self.is_down(positive) { 1.0 } else { 0.0 };
        let n = if self.is_down(negative) { 1.0 } else { 0.0 };
        p - n
    }

    pub fn move_axes(&self) -> MoveAxes {
        let climb = if self.is_down(KeyCode::Space) { 1.0 } else { 0.0 };
        let descend = if self.is_down(KeyCode::ShiftLeft) || self.is_down(KeyCode::ShiftRight) {
            1.0
        } else {
            0.0
        };
        MoveAxes {
            forward: self.axis(KeyCode::KeyW, KeyCode::KeyS),
            strafe: self.axis(KeyCode::KeyD, KeyCode::KeyA),
            up: climb - descend,
        }
    }

    pub fn boost(&self) -> bool {
        self.is_down(KeyCode::ControlLeft) || self.is_down(KeyCode::ControlRight)
    }
}
