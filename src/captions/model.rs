use crate::{
    captions::styles::CaptionStyles,
    foundation::error::{CaptionError, CaptionResult},
};

/// One transcribed word with its spoken interval in milliseconds.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub word: String,
    pub start_ms: f64,
    pub end_ms: f64,
}

impl Word {
    pub fn new(word: impl Into<String>, start_ms: f64, end_ms: f64) -> Self {
        Self {
            word: word.into(),
            start_ms,
            end_ms,
        }
    }

    /// Inclusive on both ends.
    pub fn is_spoken_at(&self, ms: f64) -> bool {
        self.start_ms <= ms && ms <= self.end_ms
    }
}

/// A block of words shown together.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Caption {
    pub start_ms: f64,
    pub end_ms: f64,
    #[serde(default)]
    pub words: Vec<Word>,
}

impl Caption {
    /// Inclusive on both ends.
    pub fn is_active_at(&self, ms: f64) -> bool {
        self.start_ms <= ms && ms <= self.end_ms
    }
}

/// Timeline item carrying every caption for a clip plus its style configuration.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionOverlay {
    #[serde(default)]
    pub captions: Vec<Caption>,
    pub duration_in_frames: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<CaptionStyles>,
}

impl CaptionOverlay {
    pub fn from_json_str(s: &str) -> CaptionResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_json_slice(bytes: &[u8]) -> CaptionResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn to_json_string_pretty(&self) -> CaptionResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CaptionError::serde(e.to_string()))
    }

    /// Styles the renderer should use: the overlay's own record, or the shared defaults
    /// when none was saved.
    pub fn effective_styles(&self) -> &CaptionStyles {
        self.styles.as_ref().unwrap_or_else(|| CaptionStyles::defaults_ref())
    }

    /// First caption (in list order) whose range contains `ms`.
    pub fn caption_at(&self, ms: f64) -> Option<(usize, &Caption)> {
        self.captions
            .iter()
            .enumerate()
            .find(|(_, c)| c.is_active_at(ms))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/captions/model.rs"]
mod tests;
