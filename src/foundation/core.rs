use crate::foundation::error::{CaptionError, CaptionResult};

/// Timeline frame rate shared with the upstream timing producers.
///
/// Every millisecond/frame conversion in the crate goes through this value (or an
/// [`Fps`] explicitly supplied via render settings), so a project-wide rate change
/// happens in one place.
pub const PROJECT_FPS: Fps = Fps { num: 30, den: 1 };

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    pub start: FrameIndex,
    pub end: FrameIndex, // exclusive
}

impl FrameRange {
    pub fn new(start: FrameIndex, end: FrameIndex) -> CaptionResult<Self> {
        if start.0 > end.0 {
            return Err(CaptionError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Default for Fps {
    fn default() -> Self {
        PROJECT_FPS
    }
}

impl Fps {
    pub fn new(num: u32, den: u32) -> CaptionResult<Self> {
        if den == 0 {
            return Err(CaptionError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(CaptionError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Playback time of `frame` in milliseconds (`frame / fps * 1000`).
    pub fn frame_to_ms(self, frame: u64) -> f64 {
        (frame as f64) / self.as_f64() * 1000.0
    }

    /// Frame containing the instant `ms` (`floor(ms / 1000 * fps)`).
    ///
    /// Signed so that malformed negative timestamps stay representable.
    pub fn ms_to_frame_floor(self, ms: f64) -> i64 {
        (ms / 1000.0 * self.as_f64()).floor() as i64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
