pub(crate) mod diagnose;
pub(crate) mod editor;
pub(crate) mod model;
pub(crate) mod styles;
