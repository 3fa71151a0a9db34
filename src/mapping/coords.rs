use crate::foundation::core::{Affine, FrameLayout, NaturalSize, Point, Vec2};

/// Placement returned when the media or layout size is not known yet.
///
/// Far outside any plausible frame so content drawn there is never visible.
pub const OFF_CANVAS: Point = Point::new(-100_000.0, -100_000.0);

/// "Cover" scale mapping natural pixels into frame pixels, cropping overflow.
///
/// Returns `None` until both sizes are known and positive.
pub fn fit_scale(natural: NaturalSize, layout: FrameLayout) -> Option<f64> {
    if !natural.is_ready() || !layout.is_ready() {
        return None;
    }
    let s = (layout.width / natural.width).max(layout.height / natural.height);
    s.is_finite().then_some(s)
}

/// Map a natural-space point into frame space, or `None` when not ready.
pub fn try_natural_to_frame(
    point: Point,
    natural: NaturalSize,
    layout: FrameLayout,
) -> Option<Point> {
    let s = fit_scale(natural, layout)?;
    Some(Point::new(point.x * s, point.y * s))
}

/// Map a natural-space point into frame space.
///
/// Yields [`OFF_CANVAS`] when not ready; renderers should hide content at that position.
pub fn natural_to_frame(point: Point, natural: NaturalSize, layout: FrameLayout) -> Point {
    try_natural_to_frame(point, natural, layout).unwrap_or(OFF_CANVAS)
}

/// Inverse of [`try_natural_to_frame`].
pub fn frame_to_natural(point: Point, natural: NaturalSize, layout: FrameLayout) -> Option<Point> {
    let s = fit_scale(natural, layout)?;
    Some(Point::new(point.x / s, point.y / s))
}

/// Convert a frame-space drag delta into natural space (`delta / fit_scale`).
///
/// Not-ready sizes produce a zero delta so a drag before load is a no-op.
pub fn frame_delta_to_natural(delta: Vec2, natural: NaturalSize, layout: FrameLayout) -> Vec2 {
    match fit_scale(natural, layout) {
        Some(s) => delta / s,
        None => Vec2::ZERO,
    }
}

/// Return `true` for the not-ready sentinel.
pub fn is_off_canvas(point: Point) -> bool {
    point == OFF_CANVAS
}

/// Frame-space pan/zoom transform a renderer applies to the media layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FrameTransform {
    /// Translation in frame pixels.
    pub translate: Vec2,
    /// Uniform scale factor.
    pub scale: f64,
}

impl FrameTransform {
    /// No pan, no zoom.
    pub fn identity() -> Self {
        Self {
            translate: Vec2::ZERO,
            scale: 1.0,
        }
    }

    /// Scale first, then translate.
    pub fn to_affine(self) -> Affine {
        Affine::translate(self.translate) * Affine::scale(self.scale)
    }
}

impl Default for FrameTransform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mapping/coords.rs"]
mod tests;
