//! Caption style configuration as saved by the editor's style panels.
//!
//! Every field is optional. Values that end up in CSS are carried as [`CssValue`] and
//! are never validated here; a malformed font size travels untouched to whatever
//! presents the frame.

use std::{fmt, sync::LazyLock};

use crate::animation::{catalog::Phase, css::css_number};

/// A CSS property value as the editor stores it: either a bare number or a string.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum CssValue {
    Number(f64),
    Text(String),
}

impl CssValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Text(_) => None,
        }
    }

    /// Leading numeric prefix, parsed the way a browser reads `"2rem"` as `2`.
    pub fn leading_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Text(s) => {
                let s = s.trim_start();
                let end = s
                    .char_indices()
                    .find(|&(i, c)| {
                        !(c.is_ascii_digit() || c == '.' || (i == 0 && (c == '-' || c == '+')))
                    })
                    .map_or(s.len(), |(i, _)| i);
                s[..end].parse().ok()
            }
        }
    }

    /// CSS treats `0`, `""` and missing the same way for `||` fallbacks.
    pub(crate) fn is_falsy(&self) -> bool {
        match self {
            Self::Number(v) => *v == 0.0 || v.is_nan(),
            Self::Text(s) => s.is_empty(),
        }
    }
}

impl fmt::Display for CssValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => f.write_str(&css_number(*v)),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CssValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for CssValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for CssValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<u32> for CssValue {
    fn from(v: u32) -> Self {
        Self::Number(f64::from(v))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justify,
    #[serde(other)]
    Other,
}

/// Overrides applied to the word currently being spoken.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HighlightStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<CssValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<CssValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<CssValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_shadow: Option<CssValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<CssValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<CssValue>,
    /// Target scale reached over the highlight ramp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
}

impl HighlightStyle {
    /// Field-wise patch: fields set in `patch` win.
    pub fn merged(&self, patch: &HighlightStyle) -> HighlightStyle {
        HighlightStyle {
            color: pick(&patch.color, &self.color),
            background_color: pick(&patch.background_color, &self.background_color),
            font_weight: pick(&patch.font_weight, &self.font_weight),
            text_shadow: pick(&patch.text_shadow, &self.text_shadow),
            padding: pick(&patch.padding, &self.padding),
            border_radius: pick(&patch.border_radius, &self.border_radius),
            scale: patch.scale.or(self.scale),
        }
    }
}

/// Selected catalog keys. Legacy `{type, duration, delay}` records load as empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnimationSelection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit: Option<String>,
}

impl AnimationSelection {
    pub fn key(&self, phase: Phase) -> Option<&str> {
        match phase {
            Phase::Enter => self.enter.as_deref(),
            Phase::Exit => self.exit.as_deref(),
        }
    }

    pub(crate) fn slot_mut(&mut self, phase: Phase) -> &mut Option<String> {
        match phase {
            Phase::Enter => &mut self.enter,
            Phase::Exit => &mut self.exit,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CaptionStyles {
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
    pub text_align: Option<TextAlign>,
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
    pub highlight_style: Option<HighlightStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<AnimationSelection>,
}

static DEFAULT_STYLES: LazyLock<CaptionStyles> = LazyLock::new(CaptionStyles::defaults);

impl CaptionStyles {
    /// Fallback record for overlays saved without styles, and for a missing highlight.
    ///
    /// The highlight carries no `scale`, so highlighted words get the fixed emphasis bump.
    pub fn defaults() -> Self {
        Self {
            font_family: Some("Inter, sans-serif".into()),
            font_size: Some("2rem".into()),
            line_height: Some(CssValue::Number(1.2)),
            text_align: Some(TextAlign::Center),
            color: Some("#ffffff".into()),
            text_shadow: Some("2px 2px 4px rgba(0,0,0,0.8)".into()),
            padding: Some("24px".into()),
            highlight_style: Some(HighlightStyle {
                background_color: Some("#3b82f6".into()),
                font_weight: Some(CssValue::Number(700.0)),
                text_shadow: Some("none".into()),
                ..HighlightStyle::default()
            }),
            ..Self::default()
        }
    }

    pub(crate) fn defaults_ref() -> &'static CaptionStyles {
        &DEFAULT_STYLES
    }

    /// Field-wise patch: fields set in `patch` win, nested records are replaced whole.
    pub fn merged(&self, patch: &CaptionStyles) -> CaptionStyles {
        CaptionStyles {
            font_family: pick(&patch.font_family, &self.font_family),
            font_size: pick(&patch.font_size, &self.font_size),
            font_weight: pick(&patch.font_weight, &self.font_weight),
            line_height: pick(&patch.line_height, &self.line_height),
            color: pick(&patch.color, &self.color),
            text_align: patch.text_align.or(self.text_align),
            letter_spacing: pick(&patch.letter_spacing, &self.letter_spacing),
            word_spacing: pick(&patch.word_spacing, &self.word_spacing),
            text_shadow: pick(&patch.text_shadow, &self.text_shadow),
            background_color: pick(&patch.background_color, &self.background_color),
            padding: pick(&patch.padding, &self.padding),
            border_radius: pick(&patch.border_radius, &self.border_radius),
            highlight_style: pick(&patch.highlight_style, &self.highlight_style),
            animation: pick(&patch.animation, &self.animation),
        }
    }

    /// Patch only the highlight sub-record, keeping its other fields.
    pub fn update_highlight(&self, patch: &HighlightStyle) -> CaptionStyles {
        let highlight = self
            .highlight_style
            .as_ref()
            .map_or_else(|| patch.clone(), |h| h.merged(patch));
        CaptionStyles {
            highlight_style: Some(highlight),
            ..self.clone()
        }
    }

    pub fn animation_key(&self, phase: Phase) -> Option<&str> {
        self.animation.as_ref().and_then(|a| a.key(phase))
    }
}

fn pick<T: Clone>(patch: &Option<T>, base: &Option<T>) -> Option<T> {
    patch.as_ref().or(base.as_ref()).cloned()
}

#[cfg(test)]
#[path = "../../tests/unit/captions/styles.rs"]
mod tests;
