//! Easing curves and the interpolation trait shared by every keyframe kind.

pub(crate) mod ease;
pub(crate) mod lerp;
