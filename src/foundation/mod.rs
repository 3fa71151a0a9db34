//! Shared primitives: time ranges, frame rates, media/layout sizes, errors and scalar helpers.

pub(crate) mod core;
pub(crate) mod error;
pub(crate) mod math;
