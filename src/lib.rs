//! captionfx turns word-timed captions into per-frame render plans for a video editor.
//!
//! # Pipeline overview
//!
//! 1. **Load**: a [`CaptionOverlay`] (captions, word timings in milliseconds, saved
//!    [`CaptionStyles`]) arrives as camelCase JSON from the editor.
//! 2. **Evaluate**: [`CaptionRenderer::render_frame`] picks the active caption, works out
//!    which word is being spoken and whether the overlay is entering or exiting.
//! 3. **Animate**: the selected [`AnimationTemplate`] produces a [`StyleDelta`] for the
//!    caption block (or for each word in word-relative mode).
//! 4. **Merge**: base, highlight and animation layers collapse into one [`VisualStyle`]
//!    per word plus one for the container, ready for a presentation layer.
//!
//! Evaluation is pure for a given overlay, frame and [`RenderSettings`], except for the
//! jitter drawn by the `glitch` template, which comes from an explicit [`JitterSource`].
//! Seed it through [`JitterMode::Seeded`] for reproducible output.
#![forbid(unsafe_code)]

mod animation;
mod captions;
mod foundation;
mod render;

pub use animation::catalog::{
    AnimationTemplate, MotionFn, MotionWindow, Phase, StyleDelta, all_templates, get_template,
    template_keys,
};
pub use animation::css::{ClipPath, Filter, Length, TransformList, TransformOp};
pub use animation::ease::Ease;
pub use animation::interpolate::{Extrapolate, InterpolateOptions, interpolate};
pub use animation::jitter::{FixedJitter, JitterSource, SeededJitter, SystemJitter};
pub use captions::diagnose::{Diagnostic, diagnose};
pub use captions::editor::{
    AnimationPicker, Entitlements, FONT_PRESETS, FONT_SIZE_REM_RANGE, FONT_WEIGHTS, FontPreset,
    LETTER_SPACING_PX_RANGE, set_font_family, set_font_size_rem, set_highlight_font_weight,
    set_letter_spacing_px, set_text_align,
};
pub use captions::model::{Caption, CaptionOverlay, Word};
pub use captions::styles::{AnimationSelection, CaptionStyles, CssValue, HighlightStyle, TextAlign};
pub use foundation::core::{FrameIndex, FrameRange, Fps, PROJECT_FPS};
pub use foundation::error::{CaptionError, CaptionResult};
pub use render::engine::{
    CaptionFrame, CaptionRenderer, DEFAULT_HIGHLIGHT_SCALE, INACTIVE_WORD_OPACITY, Justify,
    VisualStyle, WordRender, highlight_at, phase_at, word_window,
};
pub use render::pipeline::{RenderStats, RenderThreading, render_frames, render_frames_with_stats};
pub use render::settings::{AnimationMode, JitterMode, RenderSettings};
