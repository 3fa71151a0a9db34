use crate::{
    foundation::core::Vec2,
    foundation::math::{clamp_scale, finite_or},
    keyframe::model::{Timed, ZoomKeyframe},
};

/// Uniform Catmull-Rom basis evaluated for one channel.
///
/// `v(t) = 0.5 * (2p1 + (p2 - p0)t + (2p0 - 5p1 + 4p2 - p3)t² + (3p1 - p0 - 3p2 + p3)t³)`
#[inline]
pub fn catmull_rom(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * (2.0 * p1
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}

/// Four-point neighbourhood around the active segment `p1 -> p2`.
#[derive(Debug)]
pub struct SplineSegment<'a, K> {
    /// Point before the segment (`p1` at the first segment).
    pub p0: &'a K,
    /// Segment start.
    pub p1: &'a K,
    /// Segment end.
    pub p2: &'a K,
    /// Point after the segment (`p2` at the last segment).
    pub p3: &'a K,
    /// Position inside the segment, `None` when the segment has zero or non-finite length.
    pub t: Option<f64>,
}

/// Locate the spline segment for `time` in a sorted slice.
///
/// `time` is first clamped to the key span so the curve never extrapolates. The active segment
/// ends at the first key whose time exceeds the query, kept within `[1, len - 1]`.
/// Needs at least two keys.
pub fn spline_segment<K: Timed>(keys: &[K], time: f64) -> Option<SplineSegment<'_, K>> {
    if keys.len() < 2 {
        return None;
    }
    let lo = keys[0].time();
    let hi = keys[keys.len() - 1].time();
    // max/min rather than clamp: NaN in either operand must not panic.
    let time = time.max(lo).min(hi);

    let i = keys
        .partition_point(|k| k.time() <= time)
        .clamp(1, keys.len() - 1);
    let p1 = &keys[i - 1];
    let p2 = &keys[i];
    let p0 = if i >= 2 { &keys[i - 2] } else { p1 };
    let p3 = keys.get(i + 1).unwrap_or(p2);

    let denom = p2.time() - p1.time();
    let t = (denom != 0.0 && denom.is_finite()).then(|| (time - p1.time()) / denom);
    Some(SplineSegment { p0, p1, p2, p3, t })
}

/// Instantaneous pan/zoom in natural space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ZoomTransform {
    /// Pan offset in natural pixels.
    pub offset: Vec2,
    /// Zoom factor in `[1, 10]`.
    pub scale: f64,
}

impl ZoomTransform {
    /// No pan, no zoom.
    pub fn identity() -> Self {
        Self {
            offset: Vec2::ZERO,
            scale: 1.0,
        }
    }

    /// Build a transform, replacing non-finite channels with `0/0/1` and clamping scale.
    pub fn sanitized(x: f64, y: f64, scale: f64) -> Self {
        Self {
            offset: Vec2::new(finite_or(x, 0.0), finite_or(y, 0.0)),
            scale: clamp_scale(scale),
        }
    }
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<&ZoomKeyframe> for ZoomTransform {
    fn from(k: &ZoomKeyframe) -> Self {
        Self::sanitized(k.x, k.y, k.scale)
    }
}

/// Evaluate the zoom trajectory at `time` with a Catmull-Rom spline per channel.
///
/// Returns `None` with fewer than two keys.
pub fn spline_zoom(keys: &[ZoomKeyframe], time: f64) -> Option<ZoomTransform> {
    let seg = spline_segment(keys, time)?;
    let Some(t) = seg.t else {
        return Some(ZoomTransform::from(seg.p1));
    };
    let (p0, p1, p2, p3) = (seg.p0, seg.p1, seg.p2, seg.p3);
    Some(ZoomTransform::sanitized(
        catmull_rom(p0.x, p1.x, p2.x, p3.x, t),
        catmull_rom(p0.y, p1.y, p2.y, p3.y, t),
        catmull_rom(p0.scale, p1.scale, p2.scale, p3.scale, t),
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/interp/spline.rs"]
mod tests;
