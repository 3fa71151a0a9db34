//! Interpolation strategies over sorted keyframe slices.

pub(crate) mod linear;
pub(crate) mod resample;
pub(crate) mod spline;
