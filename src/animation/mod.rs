pub(crate) mod catalog;
pub(crate) mod css;
pub(crate) mod ease;
pub(crate) mod interpolate;
pub(crate) mod jitter;
