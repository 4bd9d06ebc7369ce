//! The fixed catalog of caption enter/exit animations.
//!
//! Keys are persisted inside saved caption styles, so they must never be renamed or
//! removed. Enter curves are authored over the first ~15 frames and exit curves over the
//! last ~15 frames of the evaluated duration; every curve clamps on both sides, so
//! calling either function outside its window yields the boundary state.

use std::{collections::HashMap, sync::LazyLock};

use smallvec::SmallVec;

use crate::{
    animation::{
        css::{ClipPath, Filter, Length, TransformList, TransformOp},
        interpolate::{InterpolateOptions, interpolate},
        jitter::JitterSource,
    },
    foundation::error::CaptionResult,
};

/// Partial style patch produced by an animation function.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDelta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<TransformList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Filter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip_path: Option<ClipPath>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform_origin: Option<&'static str>,
}

impl StyleDelta {
    pub fn opacity(value: f64) -> Self {
        Self {
            opacity: Some(value),
            ..Self::default()
        }
    }

    pub fn with_transform(mut self, transform: impl Into<TransformList>) -> Self {
        self.transform = Some(transform.into());
        self
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_clip_path(mut self, clip_path: ClipPath) -> Self {
        self.clip_path = Some(clip_path);
        self
    }

    pub fn with_origin(mut self, origin: &'static str) -> Self {
        self.transform_origin = Some(origin);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.transform.is_none()
            && self.opacity.is_none()
            && self.filter.is_none()
            && self.clip_path.is_none()
            && self.transform_origin.is_none()
    }
}

/// Frame position handed to a template: the frame being drawn and the total length of
/// the thing being animated (overlay or word), both in frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionWindow {
    pub frame: f64,
    pub duration: f64,
}

impl MotionWindow {
    pub fn new(frame: f64, duration: f64) -> Self {
        Self { frame, duration }
    }

    /// Curve keyed on frames counted from the start.
    fn enter(self, frames: &[f64], values: &[f64]) -> CaptionResult<f64> {
        interpolate(self.frame, frames, values, InterpolateOptions::CLAMP)
    }

    /// Curve keyed on frames counted back from the end (`[15.0, 0.0]` = last 15 frames).
    fn exit(self, before_end: &[f64], values: &[f64]) -> CaptionResult<f64> {
        let frames: SmallVec<[f64; 6]> = before_end.iter().map(|b| self.duration - b).collect();
        interpolate(self.frame, &frames, values, InterpolateOptions::CLAMP)
    }

    fn fade_in(self, until: f64) -> CaptionResult<f64> {
        self.enter(&[0.0, until], &[0.0, 1.0])
    }

    fn fade_out(self, span: f64) -> CaptionResult<f64> {
        self.exit(&[span, 0.0], &[1.0, 0.0])
    }
}

/// Which half of a template applies to a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Enter,
    Exit,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Enter => "enter",
            Self::Exit => "exit",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type MotionFn = fn(MotionWindow, &mut dyn JitterSource) -> CaptionResult<StyleDelta>;

/// One catalog entry: display metadata plus its enter and exit curves.
#[derive(Clone, Copy)]
pub struct AnimationTemplate {
    pub key: &'static str,
    pub name: &'static str,
    pub preview: &'static str,
    pub is_pro: bool,
    enter: MotionFn,
    exit: MotionFn,
}

impl std::fmt::Debug for AnimationTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationTemplate")
            .field("key", &self.key)
            .field("name", &self.name)
            .field("is_pro", &self.is_pro)
            .finish_non_exhaustive()
    }
}

impl AnimationTemplate {
    pub fn enter(
        &self,
        frame: f64,
        duration: f64,
        jitter: &mut dyn JitterSource,
    ) -> CaptionResult<StyleDelta> {
        (self.enter)(MotionWindow::new(frame, duration), jitter)
    }

    pub fn exit(
        &self,
        frame: f64,
        duration: f64,
        jitter: &mut dyn JitterSource,
    ) -> CaptionResult<StyleDelta> {
        (self.exit)(MotionWindow::new(frame, duration), jitter)
    }

    pub fn eval(
        &self,
        phase: Phase,
        frame: f64,
        duration: f64,
        jitter: &mut dyn JitterSource,
    ) -> CaptionResult<StyleDelta> {
        match phase {
            Phase::Enter => self.enter(frame, duration, jitter),
            Phase::Exit => self.exit(frame, duration, jitter),
        }
    }
}

/// Look up a template by its persisted key. Unknown keys yield `None`.
pub fn get_template(key: &str) -> Option<&'static AnimationTemplate> {
    INDEX.get(key).copied()
}

/// Every template, in catalog order.
pub fn all_templates() -> &'static [AnimationTemplate] {
    &CATALOG
}

pub fn template_keys() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|t| t.key)
}

static INDEX: LazyLock<HashMap<&'static str, &'static AnimationTemplate>> =
    LazyLock::new(|| CATALOG.iter().map(|t| (t.key, t)).collect());

macro_rules! template {
    ($key:literal, $name:literal, $preview:literal, pro: $pro:literal, $enter:ident, $exit:ident) => {
        AnimationTemplate {
            key: $key,
            name: $name,
            preview: $preview,
            is_pro: $pro,
            enter: $enter,
            exit: $exit,
        }
    };
}

static CATALOG: [AnimationTemplate; 39] = [
    template!("fade", "Fade", "Simple fade in/out", pro: false, fade_enter, fade_exit),
    template!("slideRight", "Slide", "Slide in from left", pro: true, slide_right_enter, slide_right_exit),
    template!("scale", "Scale", "Scale in/out", pro: false, scale_enter, scale_exit),
    template!("bounce", "Bounce", "Elastic bounce entrance", pro: true, bounce_enter, bounce_exit),
    template!("flipX", "Flip", "3D flip around X axis", pro: true, flip_x_enter, flip_x_exit),
    template!("zoomBlur", "Zoom", "Zoom with blur effect", pro: true, zoom_blur_enter, zoom_blur_exit),
    template!("slideUp", "Slide", "Modern slide from bottom", pro: false, slide_up_enter, slide_up_exit),
    template!("snapRotate", "Snap", "Quick rotate with snap", pro: true, snap_rotate_enter, snap_rotate_exit),
    template!("glitch", "Glitch", "Digital glitch effect", pro: true, glitch_enter, glitch_exit),
    template!("swipeReveal", "Swipe", "Reveals content with a swipe", pro: true, swipe_reveal_enter, swipe_reveal_exit),
    template!("floatIn", "Float", "Smooth floating entrance", pro: false, float_in_enter, float_in_exit),
    template!("slideLeft", "Slide Left", "Slide in from right", pro: false, slide_left_enter, slide_left_exit),
    template!("slideDown", "Slide Down", "Slide in from top", pro: false, slide_down_enter, slide_down_exit),
    template!("rotateIn", "Rotate In", "Rotate entrance", pro: true, rotate_in_enter, rotate_in_exit),
    template!("spinScale", "Spin Scale", "Spinning with scale", pro: true, spin_scale_enter, spin_scale_exit),
    template!("flipY", "Flip Y", "3D flip around Y axis", pro: true, flip_y_enter, flip_y_exit),
    template!("elasticScale", "Elastic Scale", "Elastic scaling effect", pro: true, elastic_scale_enter, elastic_scale_exit),
    template!("rubberBand", "Rubber Band", "Rubber band stretch", pro: true, rubber_band_enter, rubber_band_exit),
    template!("blurIn", "Blur In", "Blur to focus transition", pro: false, blur_in_enter, blur_in_exit),
    template!("typewriter", "Typewriter", "Typewriter reveal effect", pro: true, typewriter_enter, typewriter_exit),
    template!("zoomIn", "Zoom In", "Simple zoom in", pro: false, zoom_in_enter, zoom_in_exit),
    template!("zoomOut", "Zoom Out", "Zoom out entrance", pro: false, zoom_out_enter, zoom_out_exit),
    template!("shake", "Shake", "Horizontal shake", pro: true, shake_enter, shake_exit),
    template!("pulse", "Pulse", "Pulsing scale effect", pro: false, pulse_enter, pulse_exit),
    template!("slideDiagonal", "Slide Diagonal", "Diagonal slide entrance", pro: true, slide_diagonal_enter, slide_diagonal_exit),
    template!("skewIn", "Skew In", "Skew transformation", pro: true, skew_in_enter, skew_in_exit),
    template!("wipeRight", "Wipe Right", "Right wipe reveal", pro: false, wipe_right_enter, wipe_right_exit),
    template!("wipeUp", "Wipe Up", "Upward wipe reveal", pro: false, wipe_up_enter, wipe_up_exit),
    template!("morphScale", "Morph Scale", "Morphing scale effect", pro: true, morph_scale_enter, morph_scale_exit),
    template!("spiral", "Spiral", "Spiral entrance", pro: true, spiral_enter, spiral_exit),
    template!("accordion", "Accordion", "Accordion expand/collapse", pro: false, accordion_enter, accordion_exit),
    template!("wobble", "Wobble", "Wobbling entrance", pro: true, wobble_enter, wobble_exit),
    template!("jello", "Jello", "Jello wobble effect", pro: true, jello_enter, jello_exit),
    template!("heartbeat", "Heartbeat", "Heartbeat pulse", pro: false, heartbeat_enter, heartbeat_exit),
    template!("hinge", "Hinge", "Hinge door effect", pro: true, hinge_enter, hinge_exit),
    template!("rollIn", "Roll In", "Rolling entrance", pro: true, roll_in_enter, roll_in_exit),
    template!("zoomRotate", "Zoom Rotate", "Zoom with rotation", pro: true, zoom_rotate_enter, zoom_rotate_exit),
    template!("bounceInDown", "Bounce Down", "Bounce from top", pro: true, bounce_in_down_enter, bounce_in_down_exit),
    template!("lightSpeed", "Light Speed", "Light speed entrance", pro: true, light_speed_enter, light_speed_exit),
];

use TransformOp::{
    Perspective, Rotate, RotateX, RotateY, Scale, ScaleX, ScaleY, SkewX, SkewY, Translate,
    TranslateX, TranslateY,
};

fn px(v: f64) -> Length {
    Length::Px(v)
}

fn pct(v: f64) -> Length {
    Length::Percent(v)
}

const ENTER: [f64; 2] = [0.0, 15.0];
const EXIT: [f64; 2] = [15.0, 0.0];

type Jitter<'a> = &'a mut dyn JitterSource;
type Delta = CaptionResult<StyleDelta>;

fn fade_enter(w: MotionWindow, _: Jitter<'_>) -> Delta {
    Ok(StyleDelta::opacity(w.fade_in(15.0)?))
}

fn fade_exit(w: MotionWindow, _: Jitter<'_>) -> Delta {
    Ok(StyleDelta::opacity(w.fade_out(15.0)?))
}

fn slide_right_enter(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let x = w.enter(&ENTER, &[-100.0, 0.0])?;
    Ok(StyleDelta::opacity(w.fade_in(15.0)?).with_transform(TranslateX(pct(x))))
}

fn slide_right_exit(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let x = w.exit(&EXIT, &[0.0, 100.0])?;
    Ok(StyleDelta::opacity(w.fade_out(15.0)?).with_transform(TranslateX(pct(x))))
}

fn scale_enter(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let s = w.enter(&ENTER, &[0.0, 1.0])?;
    Ok(StyleDelta::opacity(w.fade_in(15.0)?).with_transform(Scale(s)))
}

fn scale_exit(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let s = w.exit(&EXIT, &[1.0, 0.0])?;
    Ok(StyleDelta::opacity(w.fade_out(15.0)?).with_transform(Scale(s)))
}

fn bounce_enter(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let y = w.enter(&[0.0, 10.0, 13.0, 15.0], &[100.0, -10.0, 5.0, 0.0])?;
    Ok(StyleDelta::opacity(w.fade_in(10.0)?).with_transform(TranslateY(px(y))))
}

fn bounce_exit(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let y = w.exit(&[15.0, 13.0, 10.0, 0.0], &[0.0, 5.0, -10.0, 100.0])?;
    Ok(StyleDelta::opacity(w.fade_out(10.0)?).with_transform(TranslateY(px(y))))
}

fn flip_x_enter(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let deg = w.enter(&ENTER, &[90.0, 0.0])?;
    let opacity = w.enter(&[0.0, 5.0, 15.0], &[0.0, 0.7, 1.0])?;
    Ok(StyleDelta::opacity(opacity)
        .with_transform(TransformList::single(Perspective(400.0)).then(RotateX(deg))))
}

fn flip_x_exit(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let deg = w.exit(&EXIT, &[0.0, -90.0])?;
    let opacity = w.exit(&[15.0, 5.0, 0.0], &[1.0, 0.7, 0.0])?;
    Ok(StyleDelta::opacity(opacity)
        .with_transform(TransformList::single(Perspective(400.0)).then(RotateX(deg))))
}

fn zoom_blur_enter(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let s = w.enter(&ENTER, &[1.5, 1.0])?;
    let blur = w.enter(&ENTER, &[10.0, 0.0])?;
    Ok(StyleDelta::opacity(w.fade_in(15.0)?)
        .with_transform(Scale(s))
        .with_filter(Filter::Blur(blur)))
}

fn zoom_blur_exit(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let s = w.exit(&EXIT, &[1.0, 1.5])?;
    let blur = w.exit(&EXIT, &[0.0, 10.0])?;
    Ok(StyleDelta::opacity(w.fade_out(15.0)?)
        .with_transform(Scale(s))
        .with_filter(Filter::Blur(blur)))
}

fn slide_up_enter(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let y = w.enter(&ENTER, &[30.0, 0.0])?;
    Ok(StyleDelta::opacity(w.fade_in(15.0)?).with_transform(TranslateY(px(y))))
}

fn slide_up_exit(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let y = w.exit(&EXIT, &[0.0, -30.0])?;
    Ok(StyleDelta::opacity(w.fade_out(15.0)?).with_transform(TranslateY(px(y))))
}

fn snap_rotate_enter(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let deg = w.enter(&[0.0, 8.0, 12.0, 15.0], &[-10.0, 5.0, -2.0, 0.0])?;
    let s = w.enter(&ENTER, &[0.8, 1.0])?;
    Ok(StyleDelta::opacity(w.fade_in(10.0)?)
        .with_transform(TransformList::single(Rotate(deg)).then(Scale(s))))
}

fn snap_rotate_exit(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let deg = w.exit(&[15.0, 12.0, 8.0, 0.0], &[0.0, -2.0, 5.0, -10.0])?;
    let s = w.exit(&EXIT, &[1.0, 0.8])?;
    Ok(StyleDelta::opacity(w.fade_out(10.0)?)
        .with_transform(TransformList::single(Rotate(deg)).then(Scale(s))))
}

/// Jitter offsets fire on every 3rd (x) and 4th (y) frame and shrink as `settle` goes
/// from 1 to 0.
fn glitch_offsets(step: f64, settle: f64, jitter: Jitter<'_>) -> (f64, f64) {
    let x = if step % 3.0 == 0.0 {
        (jitter.next_unit() * 10.0 - 5.0) * settle
    } else {
        0.0
    };
    let y = if step % 4.0 == 0.0 {
        (jitter.next_unit() * 8.0 - 4.0) * settle
    } else {
        0.0
    };
    (x, y)
}

fn glitch_enter(w: MotionWindow, jitter: Jitter<'_>) -> Delta {
    let progress = w.enter(&ENTER, &[0.0, 1.0])?;
    let (x, y) = glitch_offsets(w.frame, 1.0 - progress, jitter);
    let s = w.enter(&[0.0, 3.0, 6.0, 10.0, 15.0], &[0.9, 1.05, 0.95, 1.02, 1.0])?;
    let opacity = w.enter(&[0.0, 3.0, 5.0, 15.0], &[0.0, 0.7, 0.8, 1.0])?;
    Ok(StyleDelta::opacity(opacity)
        .with_transform(TransformList::single(Translate(px(x), px(y))).then(Scale(s))))
}

fn glitch_exit(w: MotionWindow, jitter: Jitter<'_>) -> Delta {
    let progress = w.exit(&EXIT, &[0.0, 1.0])?;
    let (x, y) = glitch_offsets(w.duration - w.frame, progress, jitter);
    let s = w.exit(&[15.0, 10.0, 6.0, 3.0, 0.0], &[1.0, 1.02, 0.95, 1.05, 0.9])?;
    let opacity = w.exit(&[15.0, 5.0, 3.0, 0.0], &[1.0, 0.8, 0.7, 0.0])?;
    Ok(StyleDelta::opacity(opacity)
        .with_transform(TransformList::single(Translate(px(x), px(y))).then(Scale(s))))
}

fn swipe_reveal_enter(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let right = w.enter(&ENTER, &[100.0, 0.0])?;
    Ok(StyleDelta::opacity(1.0)
        .with_transform(TranslateX(px(0.0)))
        .with_clip_path(ClipPath::Inset {
            top: 0.0,
            right,
            bottom: 0.0,
            left: 0.0,
        }))
}

fn swipe_reveal_exit(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let left = w.exit(&EXIT, &[0.0, 100.0])?;
    Ok(StyleDelta::opacity(1.0)
        .with_transform(TranslateX(px(0.0)))
        .with_clip_path(ClipPath::Inset {
            top: 0.0,
            right: 0.0,
            bottom: 0.0,
            left,
        }))
}

fn float_in_enter(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let x = w.enter(&ENTER, &[10.0, 0.0])?;
    let y = w.enter(&ENTER, &[-20.0, 0.0])?;
    Ok(StyleDelta::opacity(w.fade_in(15.0)?).with_transform(Translate(px(x), px(y))))
}

fn float_in_exit(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let x = w.exit(&EXIT, &[0.0, -10.0])?;
    let y = w.exit(&EXIT, &[0.0, -20.0])?;
    Ok(StyleDelta::opacity(w.fade_out(15.0)?).with_transform(Translate(px(x), px(y))))
}

fn slide_left_enter(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let x = w.enter(&ENTER, &[100.0, 0.0])?;
    Ok(StyleDelta::opacity(w.fade_in(15.0)?).with_transform(TranslateX(pct(x))))
}

fn slide_left_exit(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let x = w.exit(&EXIT, &[0.0, -100.0])?;
    Ok(StyleDelta::opacity(w.fade_out(15.0)?).with_transform(TranslateX(pct(x))))
}

fn slide_down_enter(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let y = w.enter(&ENTER, &[-100.0, 0.0])?;
    Ok(StyleDelta::opacity(w.fade_in(15.0)?).with_transform(TranslateY(pct(y))))
}

fn slide_down_exit(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let y = w.exit(&EXIT, &[0.0, 100.0])?;
    Ok(StyleDelta::opacity(w.fade_out(15.0)?).with_transform(TranslateY(pct(y))))
}

fn rotate_in_enter(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let deg = w.enter(&ENTER, &[180.0, 0.0])?;
    Ok(StyleDelta::opacity(w.fade_in(15.0)?).with_transform(Rotate(deg)))
}

fn rotate_in_exit(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let deg = w.exit(&EXIT, &[0.0, -180.0])?;
    Ok(StyleDelta::opacity(w.fade_out(15.0)?).with_transform(Rotate(deg)))
}

fn spin_scale_enter(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let deg = w.enter(&ENTER, &[0.0, 360.0])?;
    let s = w.enter(&ENTER, &[0.0, 1.0])?;
    Ok(StyleDelta::opacity(w.fade_in(15.0)?)
        .with_transform(TransformList::single(Rotate(deg)).then(Scale(s))))
}

fn spin_scale_exit(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let deg = w.exit(&EXIT, &[0.0, 360.0])?;
    let s = w.exit(&EXIT, &[1.0, 0.0])?;
    Ok(StyleDelta::opacity(w.fade_out(15.0)?)
        .with_transform(TransformList::single(Rotate(deg)).then(Scale(s))))
}

fn flip_y_enter(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let deg = w.enter(&ENTER, &[90.0, 0.0])?;
    let opacity = w.enter(&[0.0, 5.0, 15.0], &[0.0, 0.7, 1.0])?;
    Ok(StyleDelta::opacity(opacity)
        .with_transform(TransformList::single(Perspective(400.0)).then(RotateY(deg))))
}

fn flip_y_exit(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let deg = w.exit(&EXIT, &[0.0, -90.0])?;
    let opacity = w.exit(&[15.0, 5.0, 0.0], &[1.0, 0.7, 0.0])?;
    Ok(StyleDelta::opacity(opacity)
        .with_transform(TransformList::single(Perspective(400.0)).then(RotateY(deg))))
}

fn elastic_scale_enter(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let s = w.enter(&[0.0, 8.0, 12.0, 15.0], &[0.0, 1.2, 0.9, 1.0])?;
    Ok(StyleDelta::opacity(w.fade_in(8.0)?).with_transform(Scale(s)))
}

fn elastic_scale_exit(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let s = w.exit(&[15.0, 12.0, 8.0, 0.0], &[1.0, 0.9, 1.2, 0.0])?;
    Ok(StyleDelta::opacity(w.fade_out(8.0)?).with_transform(Scale(s)))
}

fn rubber_band_enter(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let keys = [0.0, 5.0, 8.0, 12.0, 15.0];
    let sx = w.enter(&keys, &[1.0, 1.25, 0.75, 1.15, 1.0])?;
    let sy = w.enter(&keys, &[1.0, 0.75, 1.25, 0.85, 1.0])?;
    Ok(StyleDelta::opacity(w.fade_in(5.0)?)
        .with_transform(TransformList::single(ScaleX(sx)).then(ScaleY(sy))))
}

fn rubber_band_exit(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let keys = [15.0, 12.0, 8.0, 5.0, 0.0];
    let sx = w.exit(&keys, &[1.0, 0.85, 1.25, 0.75, 1.25])?;
    let sy = w.exit(&keys, &[1.0, 1.15, 0.75, 1.25, 0.75])?;
    Ok(StyleDelta::opacity(w.fade_out(5.0)?)
        .with_transform(TransformList::single(ScaleX(sx)).then(ScaleY(sy))))
}

fn blur_in_enter(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let blur = w.enter(&ENTER, &[20.0, 0.0])?;
    Ok(StyleDelta::opacity(w.fade_in(15.0)?).with_filter(Filter::Blur(blur)))
}

fn blur_in_exit(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let blur = w.exit(&EXIT, &[0.0, 20.0])?;
    Ok(StyleDelta::opacity(w.fade_out(15.0)?).with_filter(Filter::Blur(blur)))
}

fn typewriter_enter(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let right = w.enter(&[0.0, 20.0], &[100.0, 0.0])?;
    Ok(StyleDelta::opacity(1.0).with_clip_path(ClipPath::Inset {
        top: 0.0,
        right,
        bottom: 0.0,
        left: 0.0,
    }))
}

fn typewriter_exit(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let left = w.exit(&[20.0, 0.0], &[0.0, 100.0])?;
    Ok(StyleDelta::opacity(1.0).with_clip_path(ClipPath::Inset {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left,
    }))
}

fn zoom_in_enter(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let s = w.enter(&ENTER, &[0.5, 1.0])?;
    Ok(StyleDelta::opacity(w.fade_in(15.0)?).with_transform(Scale(s)))
}

fn zoom_in_exit(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let s = w.exit(&EXIT, &[1.0, 0.5])?;
    Ok(StyleDelta::opacity(w.fade_out(15.0)?).with_transform(Scale(s)))
}

fn zoom_out_enter(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let s = w.enter(&ENTER, &[2.0, 1.0])?;
    Ok(StyleDelta::opacity(w.fade_in(15.0)?).with_transform(Scale(s)))
}

fn zoom_out_exit(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let s = w.exit(&EXIT, &[1.0, 2.0])?;
    Ok(StyleDelta::opacity(w.fade_out(15.0)?).with_transform(Scale(s)))
}

/// Four-frame left/right oscillation used by `shake`.
fn shake_wave(step: f64) -> CaptionResult<f64> {
    interpolate(
        step % 4.0,
        &[0.0, 1.0, 2.0, 3.0],
        &[0.0, -5.0, 5.0, 0.0],
        InterpolateOptions::CLAMP,
    )
}

fn shake_enter(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let x = if w.frame < 15.0 {
        shake_wave(w.frame)? * (1.0 - w.enter(&ENTER, &[0.0, 1.0])?)
    } else {
        0.0
    };
    Ok(StyleDelta::opacity(w.fade_in(5.0)?).with_transform(TranslateX(px(x))))
}

fn shake_exit(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let x = if w.frame > w.duration - 15.0 {
        shake_wave(w.duration - w.frame)? * w.exit(&EXIT, &[0.0, 1.0])?
    } else {
        0.0
    };
    Ok(StyleDelta::opacity(w.fade_out(5.0)?).with_transform(TranslateX(px(x))))
}

fn pulse_enter(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let s = w.enter(&[0.0, 8.0, 15.0], &[0.8, 1.1, 1.0])?;
    Ok(StyleDelta::opacity(w.fade_in(15.0)?).with_transform(Scale(s)))
}

fn pulse_exit(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let s = w.exit(&[15.0, 8.0, 0.0], &[1.0, 1.1, 0.8])?;
    Ok(StyleDelta::opacity(w.fade_out(15.0)?).with_transform(Scale(s)))
}

fn slide_diagonal_enter(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let d = w.enter(&ENTER, &[-50.0, 0.0])?;
    Ok(StyleDelta::opacity(w.fade_in(15.0)?).with_transform(Translate(px(d), px(d))))
}

fn slide_diagonal_exit(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let d = w.exit(&EXIT, &[0.0, 50.0])?;
    Ok(StyleDelta::opacity(w.fade_out(15.0)?).with_transform(Translate(px(d), px(d))))
}

fn skew_in_enter(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let skew = w.enter(&ENTER, &[20.0, 0.0])?;
    let x = w.enter(&ENTER, &[-30.0, 0.0])?;
    Ok(StyleDelta::opacity(w.fade_in(15.0)?)
        .with_transform(TransformList::single(SkewX(skew)).then(TranslateX(px(x)))))
}

fn skew_in_exit(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let skew = w.exit(&EXIT, &[0.0, -20.0])?;
    let x = w.exit(&EXIT, &[0.0, 30.0])?;
    Ok(StyleDelta::opacity(w.fade_out(15.0)?)
        .with_transform(TransformList::single(SkewX(skew)).then(TranslateX(px(x)))))
}

fn wipe_right_enter(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let edge = w.enter(&ENTER, &[0.0, 100.0])?;
    Ok(StyleDelta::opacity(1.0).with_clip_path(ClipPath::Polygon(vec![
        (0.0, 0.0),
        (edge, 0.0),
        (edge, 100.0),
        (0.0, 100.0),
    ])))
}

fn wipe_right_exit(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let edge = w.exit(&EXIT, &[0.0, 100.0])?;
    Ok(StyleDelta::opacity(1.0).with_clip_path(ClipPath::Polygon(vec![
        (edge, 0.0),
        (100.0, 0.0),
        (100.0, 100.0),
        (edge, 100.0),
    ])))
}

fn wipe_up_enter(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let edge = w.enter(&ENTER, &[100.0, 0.0])?;
    Ok(StyleDelta::opacity(1.0).with_clip_path(ClipPath::Polygon(vec![
        (0.0, 100.0),
        (100.0, 100.0),
        (100.0, edge),
        (0.0, edge),
    ])))
}

fn wipe_up_exit(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let edge = w.exit(&EXIT, &[0.0, 100.0])?;
    Ok(StyleDelta::opacity(1.0).with_clip_path(ClipPath::Polygon(vec![
        (0.0, edge),
        (100.0, edge),
        (100.0, 100.0),
        (0.0, 100.0),
    ])))
}

fn morph_scale_enter(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let keys = [0.0, 5.0, 10.0, 15.0];
    let sx = w.enter(&keys, &[0.0, 2.0, 0.5, 1.0])?;
    let sy = w.enter(&keys, &[0.0, 0.5, 2.0, 1.0])?;
    Ok(StyleDelta::opacity(w.fade_in(5.0)?)
        .with_transform(TransformList::single(ScaleX(sx)).then(ScaleY(sy))))
}

fn morph_scale_exit(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let keys = [15.0, 10.0, 5.0, 0.0];
    let sx = w.exit(&keys, &[1.0, 0.5, 2.0, 0.0])?;
    let sy = w.exit(&keys, &[1.0, 2.0, 0.5, 0.0])?;
    Ok(StyleDelta::opacity(w.fade_out(5.0)?)
        .with_transform(TransformList::single(ScaleX(sx)).then(ScaleY(sy))))
}

fn spiral_enter(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let deg = w.enter(&ENTER, &[0.0, 720.0])?;
    let s = w.enter(&ENTER, &[0.0, 1.0])?;
    Ok(StyleDelta::opacity(w.fade_in(8.0)?)
        .with_transform(TransformList::single(Rotate(deg)).then(Scale(s))))
}

fn spiral_exit(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let deg = w.exit(&EXIT, &[0.0, 720.0])?;
    let s = w.exit(&EXIT, &[1.0, 0.0])?;
    Ok(StyleDelta::opacity(w.fade_out(8.0)?)
        .with_transform(TransformList::single(Rotate(deg)).then(Scale(s))))
}

fn accordion_enter(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let sy = w.enter(&ENTER, &[0.0, 1.0])?;
    Ok(StyleDelta::opacity(w.fade_in(8.0)?).with_transform(ScaleY(sy)))
}

fn accordion_exit(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let sy = w.exit(&EXIT, &[1.0, 0.0])?;
    Ok(StyleDelta::opacity(w.fade_out(8.0)?).with_transform(ScaleY(sy)))
}

const WOBBLE_IN: [f64; 6] = [0.0, 3.0, 6.0, 9.0, 12.0, 15.0];
const WOBBLE_OUT: [f64; 6] = [15.0, 12.0, 9.0, 6.0, 3.0, 0.0];

fn wobble_enter(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let x = w.enter(&WOBBLE_IN, &[0.0, -25.0, 20.0, -15.0, 10.0, 0.0])?;
    let deg = w.enter(&WOBBLE_IN, &[0.0, -5.0, 3.0, -3.0, 1.0, 0.0])?;
    Ok(StyleDelta::opacity(w.fade_in(3.0)?)
        .with_transform(TransformList::single(TranslateX(px(x))).then(Rotate(deg))))
}

fn wobble_exit(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let x = w.exit(&WOBBLE_OUT, &[0.0, 10.0, -15.0, 20.0, -25.0, 0.0])?;
    let deg = w.exit(&WOBBLE_OUT, &[0.0, 1.0, -3.0, 3.0, -5.0, 0.0])?;
    Ok(StyleDelta::opacity(w.fade_out(3.0)?)
        .with_transform(TransformList::single(TranslateX(px(x))).then(Rotate(deg))))
}

fn jello_enter(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let skew = w.enter(&WOBBLE_IN, &[0.0, -12.5, 6.25, -3.125, 1.5625, 0.0])?;
    Ok(StyleDelta::opacity(w.fade_in(3.0)?)
        .with_transform(TransformList::single(SkewX(skew)).then(SkewY(skew))))
}

fn jello_exit(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let skew = w.exit(&WOBBLE_OUT, &[0.0, 1.5625, -3.125, 6.25, -12.5, 0.0])?;
    Ok(StyleDelta::opacity(w.fade_out(3.0)?)
        .with_transform(TransformList::single(SkewX(skew)).then(SkewY(skew))))
}

fn heartbeat_enter(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let s = w.enter(&[0.0, 4.0, 8.0, 12.0, 15.0], &[0.8, 1.3, 1.0, 1.3, 1.0])?;
    Ok(StyleDelta::opacity(w.fade_in(4.0)?).with_transform(Scale(s)))
}

fn heartbeat_exit(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let s = w.exit(&[15.0, 12.0, 8.0, 4.0, 0.0], &[1.0, 1.3, 1.0, 1.3, 0.8])?;
    Ok(StyleDelta::opacity(w.fade_out(4.0)?).with_transform(Scale(s)))
}

fn hinge_enter(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let deg = w.enter(&ENTER, &[-90.0, 0.0])?;
    Ok(StyleDelta::opacity(w.fade_in(8.0)?)
        .with_transform(TransformList::single(Perspective(400.0)).then(RotateY(deg)))
        .with_origin("left center"))
}

fn hinge_exit(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let deg = w.exit(&EXIT, &[0.0, 90.0])?;
    Ok(StyleDelta::opacity(w.fade_out(8.0)?)
        .with_transform(TransformList::single(Perspective(400.0)).then(RotateY(deg)))
        .with_origin("left center"))
}

fn roll_in_enter(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let x = w.enter(&ENTER, &[-100.0, 0.0])?;
    let deg = w.enter(&ENTER, &[-120.0, 0.0])?;
    Ok(StyleDelta::opacity(w.fade_in(15.0)?)
        .with_transform(TransformList::single(TranslateX(px(x))).then(Rotate(deg))))
}

fn roll_in_exit(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let x = w.exit(&EXIT, &[0.0, 100.0])?;
    let deg = w.exit(&EXIT, &[0.0, 120.0])?;
    Ok(StyleDelta::opacity(w.fade_out(15.0)?)
        .with_transform(TransformList::single(TranslateX(px(x))).then(Rotate(deg))))
}

fn zoom_rotate_enter(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let s = w.enter(&ENTER, &[0.0, 1.0])?;
    let deg = w.enter(&ENTER, &[180.0, 0.0])?;
    Ok(StyleDelta::opacity(w.fade_in(15.0)?)
        .with_transform(TransformList::single(Scale(s)).then(Rotate(deg))))
}

fn zoom_rotate_exit(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let s = w.exit(&EXIT, &[1.0, 0.0])?;
    let deg = w.exit(&EXIT, &[0.0, -180.0])?;
    Ok(StyleDelta::opacity(w.fade_out(15.0)?)
        .with_transform(TransformList::single(Scale(s)).then(Rotate(deg))))
}

fn bounce_in_down_enter(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let y = w.enter(&[0.0, 6.0, 10.0, 13.0, 15.0], &[-100.0, 25.0, -10.0, 5.0, 0.0])?;
    Ok(StyleDelta::opacity(w.fade_in(6.0)?).with_transform(TranslateY(px(y))))
}

fn bounce_in_down_exit(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let y = w.exit(&[15.0, 13.0, 10.0, 6.0, 0.0], &[0.0, 5.0, -10.0, 25.0, -100.0])?;
    Ok(StyleDelta::opacity(w.fade_out(6.0)?).with_transform(TranslateY(px(y))))
}

fn light_speed_enter(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let x = w.enter(&ENTER, &[100.0, 0.0])?;
    let skew = w.enter(&ENTER, &[-30.0, 0.0])?;
    Ok(StyleDelta::opacity(w.fade_in(15.0)?)
        .with_transform(TransformList::single(TranslateX(pct(x))).then(SkewX(skew))))
}

fn light_speed_exit(w: MotionWindow, _: Jitter<'_>) -> Delta {
    let x = w.exit(&EXIT, &[0.0, -100.0])?;
    let skew = w.exit(&EXIT, &[0.0, 30.0])?;
    Ok(StyleDelta::opacity(w.fade_out(15.0)?)
        .with_transform(TransformList::single(TranslateX(pct(x))).then(SkewX(skew))))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/catalog.rs"]
mod tests;
