//! Keyframe data model, sparse/dense tracks and the normalization boundary for persisted data.

pub(crate) mod model;
pub(crate) mod normalize;
