//! Presentation seam: render and audio back-ends fed from frame snapshots.
//!
//! The simulation never calls a back-end. A `Presenter` drains each snapshot's
//! events after the step; with no back-ends attached every call is a no-op, and
//! back-end failures are logged and dropped so they cannot affect the game.

use thiserror::Error;
use tracing::warn;

use skyblast_core::enums::VisualKind;
use skyblast_core::events::{AudioEvent, EntityId, RenderEvent};
use skyblast_core::state::FrameSnapshot;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("audio back-end failed: {0}")]
    Audio(String),
    #[error("render back-end failed: {0}")]
    Render(String),
}

pub trait AudioBackend: Send {
    fn play(&mut self, cue: &AudioEvent) -> Result<(), BackendError>;
    fn set_engine_intensity(&mut self, intensity: f32) -> Result<(), BackendError>;
}

pub trait RenderBackend: Send {
    fn add_object(&mut self, id: EntityId, kind: VisualKind) -> Result<(), BackendError>;
    fn remove_object(&mut self, id: EntityId) -> Result<(), BackendError>;
    /// Draw the frame.
    fn present(&mut self, snapshot: &FrameSnapshot) -> Result<(), BackendError>;
}

/// Counts of what was handed to the back-ends for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PresentStats {
    pub cues: usize,
    pub render_ops: usize,
    pub failures: usize,
}

#[derive(Default)]
pub struct Presenter {
    audio: Option<Box<dyn AudioBackend>>,
    render: Option<Box<dyn RenderBackend>>,
}

impl Presenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_audio(mut self, audio: Box<dyn AudioBackend>) -> Self {
        self.audio = Some(audio);
        self
    }

    pub fn with_render(mut self, render: Box<dyn RenderBackend>) -> Self {
        self.render = Some(render);
        self
    }

    pub fn has_backends(&self) -> bool {
        self.audio.is_some() || self.render.is_some()
    }

    pub fn present(&mut self, snapshot: &FrameSnapshot) -> PresentStats {
        let mut stats = PresentStats::default();

        if let Some(render) = self.render.as_mut() {
            for event in &snapshot.render_events {
                let result = match *event {
                    RenderEvent::Added { id, kind } => render.add_object(id, kind),
                    RenderEvent::Removed { id } => render.remove_object(id),
                };
                stats.render_ops += 1;
                note(result, &mut stats);
            }
            note(render.present(snapshot), &mut stats);
        }

        if let Some(audio) = self.audio.as_mut() {
            for cue in &snapshot.audio_events {
                stats.cues += 1;
                note(audio.play(cue), &mut stats);
            }
            note(audio.set_engine_intensity(snapshot.engine_intensity), &mut stats);
        }

        stats
    }
}

fn note(result: Result<(), BackendError>, stats: &mut PresentStats) {
    if let Err(err) = result {
        stats.failures += 1;
        warn!(%err, "presentation back-end error ignored");
    }
}
