//! Per-frame caption evaluation: which caption is up, which word is spoken, and the
//! merged style of the block and each word.

use crate::{
    animation::{
        catalog::{AnimationTemplate, Phase, StyleDelta, get_template},
        css::{ClipPath, Filter, TransformList, TransformOp},
        interpolate::{InterpolateOptions, interpolate},
        jitter::JitterSource,
    },
    captions::{
        model::{Caption, CaptionOverlay, Word},
        styles::{CaptionStyles, CssValue, HighlightStyle, TextAlign},
    },
    foundation::{
        core::{Fps, FrameIndex},
        error::CaptionResult,
    },
    render::settings::{AnimationMode, RenderSettings},
};

/// Opacity of words that are not being spoken.
pub const INACTIVE_WORD_OPACITY: f64 = 0.85;
/// Scale applied to a highlighted word when no target scale is configured.
pub const DEFAULT_HIGHLIGHT_SCALE: f64 = 1.08;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Justify {
    Start,
    Center,
    End,
}

impl Justify {
    pub fn from_text_align(align: Option<TextAlign>) -> Self {
        match align {
            Some(TextAlign::Left) => Self::Start,
            Some(TextAlign::Right) => Self::End,
            Some(TextAlign::Center | TextAlign::Justify | TextAlign::Other) | None => Self::Center,
        }
    }
}

/// Resolved style record for the caption block or one word. Unset fields are omitted.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<CssValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<CssValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<CssValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<CssValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<CssValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<CssValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_spacing: Option<CssValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_shadow: Option<CssValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<CssValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<CssValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<CssValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<CssValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<TransformList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Filter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip_path: Option<ClipPath>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform_origin: Option<&'static str>,
}

impl VisualStyle {
    /// Lay `top` over `self`; fields `top` leaves unset fall through.
    pub fn layered(self, top: VisualStyle) -> VisualStyle {
        VisualStyle {
            font_family: top.font_family.or(self.font_family),
            font_size: top.font_size.or(self.font_size),
            font_weight: top.font_weight.or(self.font_weight),
            line_height: top.line_height.or(self.line_height),
            color: top.color.or(self.color),
            letter_spacing: top.letter_spacing.or(self.letter_spacing),
            word_spacing: top.word_spacing.or(self.word_spacing),
            text_shadow: top.text_shadow.or(self.text_shadow),
            background_color: top.background_color.or(self.background_color),
            padding: top.padding.or(self.padding),
            border_radius: top.border_radius.or(self.border_radius),
            margin: top.margin.or(self.margin),
            opacity: top.opacity.or(self.opacity),
            transform: top.transform.or(self.transform),
            filter: top.filter.or(self.filter),
            clip_path: top.clip_path.or(self.clip_path),
            transform_origin: top.transform_origin.or(self.transform_origin),
        }
    }

    pub fn with_delta(self, delta: StyleDelta) -> VisualStyle {
        self.layered(VisualStyle {
            opacity: delta.opacity,
            transform: delta.transform,
            filter: delta.filter,
            clip_path: delta.clip_path,
            transform_origin: delta.transform_origin,
            ..VisualStyle::default()
        })
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordRender {
    pub text: String,
    pub index: usize,
    pub highlighted: bool,
    /// Highlight ramp progress in `[0, 1]`; `0` when not highlighted.
    pub progress: f64,
    pub style: VisualStyle,
}

/// Render plan for one frame of a caption overlay.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionFrame {
    pub frame: FrameIndex,
    pub frame_ms: f64,
    pub caption_index: usize,
    pub caption_start_ms: f64,
    pub caption_end_ms: f64,
    pub phase: Phase,
    pub justify: Justify,
    pub container: VisualStyle,
    pub words: Vec<WordRender>,
}

/// Enter until the last `exit_window_frames` frames of the overlay, exit after.
///
/// Overlays shorter than the window are in exit phase from frame 0.
pub fn phase_at(frame: FrameIndex, duration_in_frames: u64, exit_window_frames: u64) -> Phase {
    if frame.0.saturating_add(exit_window_frames) >= duration_in_frames {
        Phase::Exit
    } else {
        Phase::Enter
    }
}

/// Highlight state of `word` at `frame_ms`: `(highlighted, progress)`.
pub fn highlight_at(word: &Word, frame_ms: f64, ramp_ms: f64) -> (bool, f64) {
    if !word.is_spoken_at(frame_ms) {
        return (false, 0.0);
    }
    let progress = ((frame_ms - word.start_ms) / ramp_ms).clamp(0.0, 1.0);
    (true, progress)
}

/// Word-local `(frame, duration)` in frames, for word-relative animation.
pub fn word_window(word: &Word, frame: FrameIndex, fps: Fps) -> (f64, f64) {
    let start = fps.ms_to_frame_floor(word.start_ms);
    let end = fps.ms_to_frame_floor(word.end_ms);
    let local = frame.0 as f64 - start as f64;
    let duration = (end - start).max(1) as f64;
    (local, duration)
}

/// Stateless frame evaluator for caption overlays.
pub struct CaptionRenderer;

impl CaptionRenderer {
    /// Render one frame, drawing jitter as configured by `settings`.
    #[tracing::instrument(skip(overlay, settings))]
    pub fn render_frame(
        overlay: &CaptionOverlay,
        frame: FrameIndex,
        settings: &RenderSettings,
    ) -> CaptionResult<Option<CaptionFrame>> {
        let mut jitter = settings.jitter.source_for_frame(frame);
        Self::render_frame_with_jitter(overlay, frame, settings, jitter.as_mut())
    }

    /// Render one frame with an explicit randomness source.
    ///
    /// `Ok(None)` means no caption is on screen at this frame.
    pub fn render_frame_with_jitter(
        overlay: &CaptionOverlay,
        frame: FrameIndex,
        settings: &RenderSettings,
        jitter: &mut dyn JitterSource,
    ) -> CaptionResult<Option<CaptionFrame>> {
        settings.validate()?;
        let frame_ms = settings.fps.frame_to_ms(frame.0);
        let Some((caption_index, caption)) = overlay.caption_at(frame_ms) else {
            return Ok(None);
        };

        let styles = overlay.effective_styles();
        let phase = phase_at(frame, overlay.duration_in_frames, settings.exit_window_frames);
        let highlight = styles
            .highlight_style
            .as_ref()
            .or_else(|| CaptionStyles::defaults_ref().highlight_style.as_ref());
        let template = resolve_template(styles, phase);

        let mut container = container_base(styles);
        if let (AnimationMode::Block, Some(t)) = (settings.animation_mode, template) {
            let delta = t.eval(
                phase,
                frame.0 as f64,
                overlay.duration_in_frames as f64,
                jitter,
            )?;
            container = container.with_delta(delta);
        }

        let words = render_words(
            caption, frame, frame_ms, settings, styles, highlight, phase, template, jitter,
        )?;

        Ok(Some(CaptionFrame {
            frame,
            frame_ms,
            caption_index,
            caption_start_ms: caption.start_ms,
            caption_end_ms: caption.end_ms,
            phase,
            justify: Justify::from_text_align(styles.text_align),
            container,
            words,
        }))
    }
}

fn resolve_template(
    styles: &CaptionStyles,
    phase: Phase,
) -> Option<&'static AnimationTemplate> {
    let key = styles.animation_key(phase)?;
    let template = get_template(key);
    if template.is_none() {
        tracing::debug!(key, %phase, "unknown animation key, rendering without animation");
    }
    template
}

#[allow(clippy::too_many_arguments)]
fn render_words(
    caption: &Caption,
    frame: FrameIndex,
    frame_ms: f64,
    settings: &RenderSettings,
    styles: &CaptionStyles,
    highlight: Option<&HighlightStyle>,
    phase: Phase,
    template: Option<&'static AnimationTemplate>,
    jitter: &mut dyn JitterSource,
) -> CaptionResult<Vec<WordRender>> {
    let mut out = Vec::with_capacity(caption.words.len());
    for (index, word) in caption.words.iter().enumerate() {
        let (highlighted, progress) = highlight_at(word, frame_ms, settings.highlight_ramp_ms);

        let mut style = word_base(styles, highlight);
        if highlighted {
            style = style.layered(highlight_layer(highlight, progress)?);
        }
        if let (AnimationMode::WordRelative, Some(t)) = (settings.animation_mode, template) {
            let (local, duration) = word_window(word, frame, settings.fps);
            style = style.with_delta(t.eval(phase, local, duration, jitter)?);
        }

        out.push(WordRender {
            text: word.word.clone(),
            index,
            highlighted,
            progress,
            style,
        });
    }
    Ok(out)
}

/// `value || fallback`, with CSS falsiness.
fn or_css(value: Option<&CssValue>, fallback: impl Into<CssValue>) -> CssValue {
    value
        .filter(|v| !v.is_falsy())
        .cloned()
        .unwrap_or_else(|| fallback.into())
}

fn truthy(value: Option<&CssValue>) -> Option<CssValue> {
    value.filter(|v| !v.is_falsy()).cloned()
}

fn container_base(styles: &CaptionStyles) -> VisualStyle {
    VisualStyle {
        font_family: styles.font_family.clone(),
        font_size: styles.font_size.clone(),
        font_weight: styles.font_weight.clone(),
        line_height: styles.line_height.clone(),
        color: styles.color.clone(),
        letter_spacing: Some(or_css(styles.letter_spacing.as_ref(), "0em")),
        word_spacing: styles.word_spacing.clone(),
        text_shadow: styles.text_shadow.clone(),
        background_color: styles.background_color.clone(),
        padding: styles.padding.clone(),
        border_radius: styles.border_radius.clone(),
        ..VisualStyle::default()
    }
}

fn word_base(styles: &CaptionStyles, highlight: Option<&HighlightStyle>) -> VisualStyle {
    VisualStyle {
        font_family: styles.font_family.clone(),
        font_size: styles.font_size.clone(),
        font_weight: Some(or_css(styles.font_weight.as_ref(), 400u32)),
        color: styles.color.clone(),
        letter_spacing: Some(or_css(styles.letter_spacing.as_ref(), "0em")),
        word_spacing: styles.word_spacing.clone(),
        text_shadow: styles.text_shadow.clone(),
        background_color: Some("transparent".into()),
        padding: Some(or_css(highlight.and_then(|h| h.padding.as_ref()), "4px 8px")),
        border_radius: Some(or_css(
            highlight.and_then(|h| h.border_radius.as_ref()),
            "4px",
        )),
        margin: Some("0 2px".into()),
        opacity: Some(INACTIVE_WORD_OPACITY),
        ..VisualStyle::default()
    }
}

/// Emphasis for the spoken word.
fn highlight_layer(highlight: Option<&HighlightStyle>, progress: f64) -> CaptionResult<VisualStyle> {
    let scale = match highlight.and_then(|h| h.scale) {
        Some(target) if target != 0.0 && !target.is_nan() => interpolate(
            progress,
            &[0.0, 1.0],
            &[1.0, target],
            InterpolateOptions::default(),
        )?,
        _ => DEFAULT_HIGHLIGHT_SCALE,
    };
    Ok(VisualStyle {
        opacity: Some(1.0),
        font_weight: Some(or_css(highlight.and_then(|h| h.font_weight.as_ref()), 600u32)),
        transform: Some(TransformOp::Scale(scale).into()),
        color: truthy(highlight.and_then(|h| h.color.as_ref())),
        background_color: truthy(highlight.and_then(|h| h.background_color.as_ref())),
        text_shadow: truthy(highlight.and_then(|h| h.text_shadow.as_ref())),
        ..VisualStyle::default()
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/engine.rs"]
mod tests;
