//! Per-frame query engine: picks the interpolator for a track and maps the result to frame space.

pub(crate) mod engine;
