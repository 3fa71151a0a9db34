/// Lower bound for zoom scale after interpolation.
pub const MIN_SCALE: f64 = 1.0;
/// Upper bound for zoom scale after interpolation.
pub const MAX_SCALE: f64 = 10.0;

/// Return `v` when finite, otherwise `fallback`.
#[inline]
pub(crate) fn finite_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() { v } else { fallback }
}

/// Clamp a zoom scale into `[MIN_SCALE, MAX_SCALE]`; non-finite values become `MIN_SCALE`.
#[inline]
pub fn clamp_scale(scale: f64) -> f64 {
    if !scale.is_finite() {
        return MIN_SCALE;
    }
    scale.clamp(MIN_SCALE, MAX_SCALE)
}

/// Normalized position of `t` inside `[t0, t1]`, clamped to `[0, 1]`.
///
/// Zero-length or non-finite spans yield `0` so callers snap to the segment start.
#[inline]
pub(crate) fn segment_fraction(t: f64, t0: f64, t1: f64) -> f64 {
    let denom = t1 - t0;
    if denom == 0.0 || !denom.is_finite() {
        return 0.0;
    }
    finite_or((t - t0) / denom, 0.0).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
