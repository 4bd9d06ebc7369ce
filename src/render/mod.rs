pub(crate) mod engine;
pub(crate) mod pipeline;
pub(crate) mod settings;
