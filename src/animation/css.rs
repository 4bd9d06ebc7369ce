//! Typed CSS values produced by animation templates.
//!
//! Templates build these instead of raw strings so the same delta can be handed to a
//! CSS presentation layer (via `Display`/serde, which emit CSS text) or flattened to a
//! 2D affine for a native renderer.

use std::fmt;

use kurbo::{Affine, Point, Size, Vec2};
use smallvec::SmallVec;

/// Formats a number the way CSS text expects it: no trailing `.0`, no `-0`.
pub(crate) fn css_number(v: f64) -> String {
    let v = if v == 0.0 { 0.0 } else { v };
    format!("{v}")
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    Px(f64),
    Percent(f64),
}

impl Length {
    /// Resolve against the reference extent used for percentages.
    pub fn resolve(self, reference: f64) -> f64 {
        match self {
            Self::Px(v) => v,
            Self::Percent(p) => reference * p / 100.0,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Px(v) => write!(f, "{}px", css_number(v)),
            Self::Percent(v) => write!(f, "{}%", css_number(v)),
        }
    }
}

/// One CSS transform function. Angles are in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformOp {
    Translate(Length, Length),
    TranslateX(Length),
    TranslateY(Length),
    Scale(f64),
    ScaleX(f64),
    ScaleY(f64),
    Rotate(f64),
    RotateX(f64),
    RotateY(f64),
    SkewX(f64),
    SkewY(f64),
    Perspective(f64),
}

impl TransformOp {
    /// 2D approximation of this op for a box of `size`.
    ///
    /// 3D rotations are projected orthographically (a foreshortening scale on the
    /// perpendicular axis) and `perspective` is dropped.
    pub fn to_affine(self, size: Size) -> Affine {
        match self {
            Self::Translate(x, y) => {
                Affine::translate(Vec2::new(x.resolve(size.width), y.resolve(size.height)))
            }
            Self::TranslateX(x) => Affine::translate(Vec2::new(x.resolve(size.width), 0.0)),
            Self::TranslateY(y) => Affine::translate(Vec2::new(0.0, y.resolve(size.height))),
            Self::Scale(s) => Affine::scale(s),
            Self::ScaleX(s) => Affine::scale_non_uniform(s, 1.0),
            Self::ScaleY(s) => Affine::scale_non_uniform(1.0, s),
            Self::Rotate(deg) => Affine::rotate(deg.to_radians()),
            Self::RotateX(deg) => Affine::scale_non_uniform(1.0, deg.to_radians().cos()),
            Self::RotateY(deg) => Affine::scale_non_uniform(deg.to_radians().cos(), 1.0),
            Self::SkewX(deg) => Affine::new([1.0, 0.0, deg.to_radians().tan(), 1.0, 0.0, 0.0]),
            Self::SkewY(deg) => Affine::new([1.0, deg.to_radians().tan(), 0.0, 1.0, 0.0, 0.0]),
            Self::Perspective(_) => Affine::IDENTITY,
        }
    }
}

impl fmt::Display for TransformOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Translate(x, y) => write!(f, "translate({x}, {y})"),
            Self::TranslateX(x) => write!(f, "translateX({x})"),
            Self::TranslateY(y) => write!(f, "translateY({y})"),
            Self::Scale(s) => write!(f, "scale({})", css_number(s)),
            Self::ScaleX(s) => write!(f, "scaleX({})", css_number(s)),
            Self::ScaleY(s) => write!(f, "scaleY({})", css_number(s)),
            Self::Rotate(a) => write!(f, "rotate({}deg)", css_number(a)),
            Self::RotateX(a) => write!(f, "rotateX({}deg)", css_number(a)),
            Self::RotateY(a) => write!(f, "rotateY({}deg)", css_number(a)),
            Self::SkewX(a) => write!(f, "skewX({}deg)", css_number(a)),
            Self::SkewY(a) => write!(f, "skewY({}deg)", css_number(a)),
            Self::Perspective(d) => write!(f, "perspective({}px)", css_number(d)),
        }
    }
}

/// Ordered transform functions, applied left to right as in CSS.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransformList(pub SmallVec<[TransformOp; 2]>);

impl TransformList {
    pub fn single(op: TransformOp) -> Self {
        let mut ops = SmallVec::new();
        ops.push(op);
        Self(ops)
    }

    pub fn then(mut self, op: TransformOp) -> Self {
        self.0.push(op);
        self
    }

    pub fn ops(&self) -> &[TransformOp] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Flatten to one affine around `origin` (in box-local coordinates).
    pub fn to_affine(&self, size: Size, origin: Point) -> Affine {
        let body = self
            .0
            .iter()
            .fold(Affine::IDENTITY, |acc, op| acc * op.to_affine(size));
        Affine::translate(origin.to_vec2()) * body * Affine::translate(-origin.to_vec2())
    }
}

impl From<TransformOp> for TransformList {
    fn from(op: TransformOp) -> Self {
        Self::single(op)
    }
}

impl fmt::Display for TransformList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, op) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{op}")?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Filter {
    Blur(f64),
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Blur(px) => write!(f, "blur({}px)", css_number(px)),
        }
    }
}

/// Clip region; inset edges and polygon vertices are percentages of the box.
#[derive(Clone, Debug, PartialEq)]
pub enum ClipPath {
    Inset {
        top: f64,
        right: f64,
        bottom: f64,
        left: f64,
    },
    Polygon(Vec<(f64, f64)>),
}

impl fmt::Display for ClipPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inset {
                top,
                right,
                bottom,
                left,
            } => write!(
                f,
                "inset({} {} {} {})",
                inset_edge(*top),
                inset_edge(*right),
                inset_edge(*bottom),
                inset_edge(*left)
            ),
            Self::Polygon(points) => {
                f.write_str("polygon(")?;
                for (i, (x, y)) in points.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}% {}%", css_number(*x), css_number(*y))?;
                }
                f.write_str(")")
            }
        }
    }
}

fn inset_edge(v: f64) -> String {
    if v == 0.0 {
        "0".to_string()
    } else {
        format!("{}%", css_number(v))
    }
}

macro_rules! serialize_as_css {
    ($($ty:ty),*) => {
        $(
            impl serde::Serialize for $ty {
                fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.collect_str(self)
                }
            }
        )*
    };
}

serialize_as_css!(TransformList, Filter, ClipPath);

#[cfg(test)]
#[path = "../../tests/unit/animation/css.rs"]
mod tests;
