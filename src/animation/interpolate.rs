use crate::{
    animation::ease::Ease,
    foundation::error::{CaptionError, CaptionResult},
};

/// What happens to inputs outside the first/last breakpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Extrapolate {
    /// Continue the linear trend of the outermost segment.
    #[default]
    Extend,
    /// Hold the outermost output value.
    Clamp,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InterpolateOptions {
    pub extrapolate_left: Extrapolate,
    pub extrapolate_right: Extrapolate,
    pub easing: Ease,
}

impl InterpolateOptions {
    /// Clamp on both sides; what every catalog curve uses.
    pub const CLAMP: Self = Self {
        extrapolate_left: Extrapolate::Clamp,
        extrapolate_right: Extrapolate::Clamp,
        easing: Ease::Linear,
    };

    pub fn clamp_left() -> Self {
        Self {
            extrapolate_left: Extrapolate::Clamp,
            ..Self::default()
        }
    }

    pub fn clamp_right() -> Self {
        Self {
            extrapolate_right: Extrapolate::Clamp,
            ..Self::default()
        }
    }

    pub fn with_easing(mut self, easing: Ease) -> Self {
        self.easing = easing;
        self
    }
}

/// Piecewise-linear mapping of `input` through `input_range -> output_range`.
///
/// `input_range` must hold at least two finite, strictly increasing breakpoints and
/// match `output_range` in length. Inside a segment the local progress is shaped by
/// `options.easing`; outside the breakpoints `extrapolate_left`/`extrapolate_right`
/// decide between holding the edge value and extending the edge segment.
pub fn interpolate(
    input: f64,
    input_range: &[f64],
    output_range: &[f64],
    options: InterpolateOptions,
) -> CaptionResult<f64> {
    validate_ranges(input_range, output_range)?;

    let last = input_range.len() - 1;
    if input < input_range[0] && options.extrapolate_left == Extrapolate::Clamp {
        return Ok(output_range[0]);
    }
    if input > input_range[last] && options.extrapolate_right == Extrapolate::Clamp {
        return Ok(output_range[last]);
    }

    // Segment whose right edge is the first breakpoint >= input; inputs past either
    // end reuse the outermost segment so extension follows its slope.
    let seg = input_range[1..last].partition_point(|&edge| edge < input);
    let (x0, x1) = (input_range[seg], input_range[seg + 1]);
    let (y0, y1) = (output_range[seg], output_range[seg + 1]);

    let t = (input - x0) / (x1 - x0);
    let shaped = if (0.0..=1.0).contains(&t) {
        options.easing.apply(t)
    } else {
        t
    };
    Ok(y0 + (y1 - y0) * shaped)
}

fn validate_ranges(input_range: &[f64], output_range: &[f64]) -> CaptionResult<()> {
    if input_range.len() != output_range.len() {
        return Err(CaptionError::invalid_range(format!(
            "inputRange ({}) and outputRange ({}) must have the same length",
            input_range.len(),
            output_range.len()
        )));
    }
    if input_range.len() < 2 {
        return Err(CaptionError::invalid_range(
            "inputRange must have at least 2 breakpoints",
        ));
    }
    if input_range
        .iter()
        .chain(output_range)
        .any(|v| !v.is_finite())
    {
        return Err(CaptionError::invalid_range("breakpoints must be finite"));
    }
    if !input_range.windows(2).all(|w| w[0] < w[1]) {
        return Err(CaptionError::invalid_range(format!(
            "inputRange must be strictly increasing, got {input_range:?}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
