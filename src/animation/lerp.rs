use crate::foundation::core::{Point, Vec2};

/// Interpolation contract for sampled values.
///
/// Implementations must return finite values for finite endpoints and `t` in `[0, 1]`.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

/// Weighted blend of two scalars; finite whenever `a`, `b` are finite and `t` is in `[0, 1]`.
fn mix(a: f64, b: f64, t: f64) -> f64 {
    let v = a * (1.0 - t) + b * t;
    if v.is_finite() { v } else { a + (b - a) * t }
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        mix(*a, *b, t)
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(mix(a.x, b.x, t), mix(a.y, b.y, t))
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Point::new(mix(a.x, b.x, t), mix(a.y, b.y, t))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/lerp.rs"]
mod tests;
