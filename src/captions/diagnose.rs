//! Consistency report for caption overlays.
//!
//! Nothing here is fatal: the renderer copes with every condition reported, but the
//! result on screen is usually not what the author meant.

use std::fmt;

use crate::{
    animation::catalog::{Phase, get_template},
    captions::model::CaptionOverlay,
    render::settings::RenderSettings,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Diagnostic {
    InvertedCaption {
        caption: usize,
        start_ms: f64,
        end_ms: f64,
    },
    /// Only `first` is ever shown while both are active.
    OverlappingCaptions { first: usize, second: usize },
    InvertedWord { caption: usize, word: usize },
    WordOutsideCaption { caption: usize, word: usize },
    WordsOutOfOrder { caption: usize, word: usize },
    UnknownAnimationKey { phase: Phase, key: String },
    OverlayShorterThanExitWindow {
        duration_in_frames: u64,
        exit_window_frames: u64,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvertedCaption {
                caption,
                start_ms,
                end_ms,
            } => write!(
                f,
                "caption {caption}: ends before it starts ({start_ms}ms > {end_ms}ms)"
            ),
            Self::OverlappingCaptions { first, second } => write!(
                f,
                "captions {first} and {second} overlap; caption {second} is hidden while both are active"
            ),
            Self::InvertedWord { caption, word } => {
                write!(f, "caption {caption}, word {word}: ends before it starts")
            }
            Self::WordOutsideCaption { caption, word } => write!(
                f,
                "caption {caption}, word {word}: spoken outside the caption's range"
            ),
            Self::WordsOutOfOrder { caption, word } => write!(
                f,
                "caption {caption}, word {word}: starts before the previous word"
            ),
            Self::UnknownAnimationKey { phase, key } => {
                write!(f, "{phase} animation '{key}' is not in the catalog")
            }
            Self::OverlayShorterThanExitWindow {
                duration_in_frames,
                exit_window_frames,
            } => write!(
                f,
                "overlay lasts {duration_in_frames} frames, no longer than the {exit_window_frames}-frame exit window; it never plays its enter animation"
            ),
        }
    }
}

pub fn diagnose(overlay: &CaptionOverlay, settings: &RenderSettings) -> Vec<Diagnostic> {
    let mut out = Vec::new();

    for (i, caption) in overlay.captions.iter().enumerate() {
        if caption.start_ms > caption.end_ms {
            out.push(Diagnostic::InvertedCaption {
                caption: i,
                start_ms: caption.start_ms,
                end_ms: caption.end_ms,
            });
        }

        let mut prev_start = f64::NEG_INFINITY;
        for (w, word) in caption.words.iter().enumerate() {
            if word.start_ms > word.end_ms {
                out.push(Diagnostic::InvertedWord { caption: i, word: w });
            }
            if word.start_ms < caption.start_ms || word.end_ms > caption.end_ms {
                out.push(Diagnostic::WordOutsideCaption { caption: i, word: w });
            }
            if word.start_ms < prev_start {
                out.push(Diagnostic::WordsOutOfOrder { caption: i, word: w });
            }
            prev_start = word.start_ms;
        }
    }

    // Touching ranges are fine; the first caption simply owns the shared instant.
    let captions = &overlay.captions;
    for (i, a) in captions.iter().enumerate() {
        if a.start_ms > a.end_ms {
            continue;
        }
        for (j, b) in captions.iter().enumerate().skip(i + 1) {
            if b.start_ms <= b.end_ms && a.start_ms < b.end_ms && b.start_ms < a.end_ms {
                out.push(Diagnostic::OverlappingCaptions {
                    first: i,
                    second: j,
                });
            }
        }
    }

    if let Some(animation) = overlay.effective_styles().animation.as_ref() {
        for phase in [Phase::Enter, Phase::Exit] {
            match animation.key(phase) {
                Some(key) if get_template(key).is_none() => {
                    out.push(Diagnostic::UnknownAnimationKey {
                        phase,
                        key: key.to_owned(),
                    });
                }
                _ => {}
            }
        }
    }

    if overlay.duration_in_frames <= settings.exit_window_frames {
        out.push(Diagnostic::OverlayShorterThanExitWindow {
            duration_in_frames: overlay.duration_in_frames,
            exit_window_frames: settings.exit_window_frames,
        });
    }

    out
}

#[cfg(test)]
#[path = "../../tests/unit/captions/diagnose.rs"]
mod tests;
