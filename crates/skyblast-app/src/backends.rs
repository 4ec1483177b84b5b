//! Logging back-ends for headless runs.
//!
//! Neither draws or plays anything. Audio cues are traced, and the render side
//! mirrors the object set a real renderer would hold so lifecycle mistakes
//! surface as errors.

use std::collections::HashMap;

use tracing::trace;

use skyblast_core::enums::VisualKind;
use skyblast_core::events::{AudioEvent, EntityId};
use skyblast_core::state::FrameSnapshot;
use skyblast_sim::presentation::{AudioBackend, BackendError, RenderBackend};

/// Engine hum changes smaller than this are not logged.
const INTENSITY_LOG_STEP: f32 = 0.05;

#[derive(Debug, Default)]
pub struct TracingAudio {
    cues: usize,
    intensity: f32,
}

impl TracingAudio {
    pub fn cues_played(&self) -> usize {
        self.cues
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }
}

impl AudioBackend for TracingAudio {
    fn play(&mut self, cue: &AudioEvent) -> Result<(), BackendError> {
        self.cues += 1;
        trace!(?cue, "audio cue");
        Ok(())
    }

    fn set_engine_intensity(&mut self, intensity: f32) -> Result<(), BackendError> {
        if !(0.0..=1.0).contains(&intensity) {
            return Err(BackendError::Audio(format!(
                "engine intensity {intensity} out of range"
            )));
        }
        if (intensity - self.intensity).abs() >= INTENSITY_LOG_STEP {
            trace!(intensity, "engine hum");
            self.intensity = intensity;
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct TracingRender {
    live: HashMap<EntityId, VisualKind>,
    frames: u64,
}

impl TracingRender {
    pub fn live_objects(&self) -> usize {
        self.live.len()
    }

    pub fn count_of(&self, kind: VisualKind) -> usize {
        self.live.values().filter(|k| **k == kind).count()
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames
    }
}

impl RenderBackend for TracingRender {
    fn add_object(&mut self, id: EntityId, kind: VisualKind) -> Result<(), BackendError> {
        if self.live.insert(id, kind).is_some() {
            return Err(BackendError::Render(format!("object {} added twice", id.0)));
        }
        trace!(id = id.0, ?kind, "render object added");
        Ok(())
    }

    fn remove_object(&mut self, id: EntityId) -> Result<(), BackendError> {
        match self.live.remove(&id) {
            Some(kind) => {
                trace!(id = id.0, ?kind, "render object removed");
                Ok(())
            }
            None => Err(BackendError::Render(format!("unknown object {}", id.0))),
        }
    }

    fn present(&mut self, snapshot: &FrameSnapshot) -> Result<(), BackendError> {
        self.frames += 1;
        trace!(
            frame = snapshot.time.frame,
            objects = self.live.len(),
            score = snapshot.hud.score,
            health = snapshot.hud.health,
            "frame presented"
        );
        Ok(())
    }
}
