use crate::{
    animation::jitter::{JitterSource, SeededJitter, SystemJitter},
    foundation::{
        core::{Fps, FrameIndex, PROJECT_FPS},
        error::{CaptionError, CaptionResult},
    },
};

/// How templates are driven.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnimationMode {
    /// One evaluation per frame for the whole caption block, timed by the overlay.
    #[default]
    Block,
    /// One evaluation per word, timed by that word's own frames.
    WordRelative,
}

/// Randomness fed to jittering templates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum JitterMode {
    #[default]
    System,
    /// Reproducible per-frame streams derived from `seed`.
    Seeded { seed: u64 },
}

impl JitterMode {
    /// Fresh source for one frame. Seeded streams depend only on `(seed, frame)`.
    pub fn source_for_frame(self, frame: FrameIndex) -> Box<dyn JitterSource> {
        match self {
            Self::System => Box::new(SystemJitter::default()),
            Self::Seeded { seed } => Box::new(SeededJitter::for_frame(seed, frame.0)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderSettings {
    pub fps: Fps,
    /// Frames at the end of the overlay that play the exit animation.
    pub exit_window_frames: u64,
    /// Time for a highlighted word to reach its target scale.
    pub highlight_ramp_ms: f64,
    pub animation_mode: AnimationMode,
    pub jitter: JitterMode,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            fps: PROJECT_FPS,
            exit_window_frames: 30,
            highlight_ramp_ms: 300.0,
            animation_mode: AnimationMode::Block,
            jitter: JitterMode::System,
        }
    }
}

impl RenderSettings {
    pub fn validate(&self) -> CaptionResult<()> {
        Fps::new(self.fps.num, self.fps.den)?;
        if !(self.highlight_ramp_ms.is_finite() && self.highlight_ramp_ms > 0.0) {
            return Err(CaptionError::validation(
                "highlightRampMs must be finite and > 0",
            ));
        }
        Ok(())
    }

    pub fn from_json_str(s: &str) -> CaptionResult<Self> {
        let settings: Self = serde_json::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn with_mode(mut self, mode: AnimationMode) -> Self {
        self.animation_mode = mode;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.jitter = JitterMode::Seeded { seed };
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/settings.rs"]
mod tests;
