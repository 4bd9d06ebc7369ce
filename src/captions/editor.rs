//! Editing operations behind the caption style and animation panels.

use crate::{
    animation::catalog::{Phase, get_template},
    captions::styles::{AnimationSelection, CaptionStyles, CssValue, HighlightStyle, TextAlign},
    foundation::error::{CaptionError, CaptionResult},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontPreset {
    pub value: &'static str,
    pub label: &'static str,
}

pub const FONT_PRESETS: [FontPreset; 8] = [
    FontPreset {
        value: "Inter, sans-serif",
        label: "Inter (Sans-serif)",
    },
    FontPreset {
        value: "Montserrat, sans-serif",
        label: "Montserrat",
    },
    FontPreset {
        value: "Space Grotesk, sans-serif",
        label: "Space Grotesk",
    },
    FontPreset {
        value: "Playfair Display, serif",
        label: "Playfair Display (Serif)",
    },
    FontPreset {
        value: "Caveat, cursive",
        label: "Caveat (Handwriting)",
    },
    FontPreset {
        value: "Courier Prime, monospace",
        label: "Courier Prime (Mono)",
    },
    FontPreset {
        value: "Orbitron, sans-serif",
        label: "Orbitron (Futuristic)",
    },
    FontPreset {
        value: "Comic Neue, cursive",
        label: "Comic Neue",
    },
];

/// Highlight weights offered by the typography panel.
pub const FONT_WEIGHTS: [(u16, &str); 6] = [
    (300, "Light"),
    (400, "Normal"),
    (500, "Medium"),
    (600, "Semi Bold"),
    (700, "Bold"),
    (800, "Extra Bold"),
];

pub const FONT_SIZE_REM_RANGE: (f64, f64) = (0.5, 6.0);
pub const LETTER_SPACING_PX_RANGE: (f64, f64) = (-2.0, 10.0);

pub fn set_font_family(styles: &mut CaptionStyles, family: &str) -> CaptionResult<()> {
    let preset = FONT_PRESETS
        .iter()
        .find(|p| p.value == family)
        .ok_or_else(|| CaptionError::validation(format!("unknown font family '{family}'")))?;
    styles.font_family = Some(preset.value.into());
    Ok(())
}

/// Writes `"{v}rem"`, with `v` clamped to the slider range.
pub fn set_font_size_rem(styles: &mut CaptionStyles, rem: f64) -> CaptionResult<()> {
    let v = clamp_finite("font size", rem, FONT_SIZE_REM_RANGE)?;
    styles.font_size = Some(CssValue::Text(format!("{}rem", CssValue::Number(v))));
    Ok(())
}

/// Writes `"{v}px"`, with `v` clamped to the slider range.
pub fn set_letter_spacing_px(styles: &mut CaptionStyles, px: f64) -> CaptionResult<()> {
    let v = clamp_finite("letter spacing", px, LETTER_SPACING_PX_RANGE)?;
    styles.letter_spacing = Some(CssValue::Text(format!("{}px", CssValue::Number(v))));
    Ok(())
}

pub fn set_highlight_font_weight(styles: &mut CaptionStyles, weight: u16) -> CaptionResult<()> {
    if !FONT_WEIGHTS.iter().any(|(w, _)| *w == weight) {
        return Err(CaptionError::validation(format!(
            "highlight font weight must be one of 300..800 in steps of 100, got {weight}"
        )));
    }
    *styles = styles.update_highlight(&HighlightStyle {
        font_weight: Some(CssValue::Number(f64::from(weight))),
        ..HighlightStyle::default()
    });
    Ok(())
}

/// Only the four alignments the panel offers are accepted.
pub fn set_text_align(styles: &mut CaptionStyles, align: TextAlign) -> CaptionResult<()> {
    if align == TextAlign::Other {
        return Err(CaptionError::validation("unsupported text alignment"));
    }
    styles.text_align = Some(align);
    Ok(())
}

fn clamp_finite(what: &str, v: f64, (lo, hi): (f64, f64)) -> CaptionResult<f64> {
    if !v.is_finite() {
        return Err(CaptionError::validation(format!("{what} must be finite")));
    }
    Ok(v.clamp(lo, hi))
}

/// What the current user may pick from the catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Entitlements {
    pub pro: bool,
}

/// Enter/exit selection with catalog and entitlement checks.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnimationPicker {
    pub entitlements: Entitlements,
}

impl AnimationPicker {
    pub fn new(entitlements: Entitlements) -> Self {
        Self { entitlements }
    }

    pub fn can_use(&self, key: &str) -> bool {
        get_template(key).is_some_and(|t| !t.is_pro || self.entitlements.pro)
    }

    /// Stores `key` for `phase`, leaving the other phase untouched. Nothing changes on
    /// error.
    pub fn select(&self, styles: &mut CaptionStyles, phase: Phase, key: &str) -> CaptionResult<()> {
        let template = get_template(key)
            .ok_or_else(|| CaptionError::validation(format!("unknown animation '{key}'")))?;
        if template.is_pro && !self.entitlements.pro {
            return Err(CaptionError::validation(format!(
                "animation '{key}' requires a pro plan"
            )));
        }
        *styles
            .animation
            .get_or_insert_with(AnimationSelection::default)
            .slot_mut(phase) = Some(template.key.to_owned());
        Ok(())
    }

    pub fn clear(&self, styles: &mut CaptionStyles, phase: Phase) {
        if let Some(selection) = styles.animation.as_mut() {
            *selection.slot_mut(phase) = None;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/captions/editor.rs"]
mod tests;
