use serde_json::Value;

use crate::{
    foundation::core::{Point, TimeRange, Vec2},
    foundation::error::SmartzoomResult,
    foundation::math::{MIN_SCALE, clamp_scale},
    keyframe::model::{
        KEYFRAME_COUNT, MarkerType, Timed, TrackingKeyframe, ZoomKeyframe, sorted_by_time,
    },
};

/// Lenient persisted shape of a tracking keyframe.
///
/// Every field is optional and untyped so a single bad value never rejects a whole session.
#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTrackingKeyframe {
    /// Timestamp in seconds (`time` or legacy `timestamp`).
    #[serde(default, alias = "timestamp")]
    pub time: Option<Value>,
    /// Natural-space x.
    #[serde(default)]
    pub x: Option<Value>,
    /// Natural-space y.
    #[serde(default)]
    pub y: Option<Value>,
    /// Marker name.
    #[serde(default)]
    pub marker_type: Option<Value>,
}

/// Lenient persisted shape of a zoom keyframe.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct RawZoomKeyframe {
    /// Timestamp in seconds (`time` or legacy `timestamp`).
    #[serde(default, alias = "timestamp")]
    pub time: Option<Value>,
    /// Natural-space pan x.
    #[serde(default)]
    pub x: Option<Value>,
    /// Natural-space pan y.
    #[serde(default)]
    pub y: Option<Value>,
    /// Zoom factor.
    #[serde(default)]
    pub scale: Option<Value>,
}

/// Evenly spaced slot times across `trim`: start, midpoint, end.
pub fn default_times(trim: TimeRange) -> [f64; KEYFRAME_COUNT] {
    let last = (KEYFRAME_COUNT - 1) as f64;
    std::array::from_fn(|i| trim.lerp_time(i as f64 / last))
}

/// Three tracking keyframes at `anchor`, evenly spread over `trim`.
pub fn default_tracking_keys(trim: TimeRange, anchor: Point) -> Vec<TrackingKeyframe> {
    default_times(trim)
        .into_iter()
        .map(|t| TrackingKeyframe::new(t, anchor, MarkerType::Circle))
        .collect()
}

/// Three identity zoom keyframes evenly spread over `trim`.
pub fn default_zoom_keys(trim: TimeRange) -> Vec<ZoomKeyframe> {
    default_times(trim)
        .into_iter()
        .map(ZoomKeyframe::identity_at)
        .collect()
}

/// Coerce persisted tracking keyframes into exactly [`KEYFRAME_COUNT`] valid, sorted keys.
///
/// Missing or non-finite fields take documented defaults: the slot time for `time`, `anchor`
/// for position, `circle` for the marker. Times are clamped into `trim`.
pub fn normalize_tracking(
    raw: &[RawTrackingKeyframe],
    trim: TimeRange,
    anchor: Point,
) -> Vec<TrackingKeyframe> {
    normalize_slots(raw, trim, "tracking", |idx, r, slot| match r {
        None => TrackingKeyframe::new(slot, anchor, MarkerType::Circle),
        Some(r) => TrackingKeyframe {
            time: trim.clamp(field_f64(idx, "time", r.time.as_ref()).unwrap_or(slot)),
            x: field_f64(idx, "x", r.x.as_ref()).unwrap_or(anchor.x),
            y: field_f64(idx, "y", r.y.as_ref()).unwrap_or(anchor.y),
            marker_type: marker_field(idx, r.marker_type.as_ref()),
        },
    })
}

/// Coerce persisted zoom keyframes into exactly [`KEYFRAME_COUNT`] valid, sorted keys.
///
/// Non-finite offsets become `0`, scale defaults to `1` and is clamped to `[1, 10]`.
pub fn normalize_zoom(raw: &[RawZoomKeyframe], trim: TimeRange) -> Vec<ZoomKeyframe> {
    normalize_slots(raw, trim, "zoom", |idx, r, slot| match r {
        None => ZoomKeyframe::identity_at(slot),
        Some(r) => ZoomKeyframe::new(
            trim.clamp(field_f64(idx, "time", r.time.as_ref()).unwrap_or(slot)),
            Vec2::new(
                field_f64(idx, "x", r.x.as_ref()).unwrap_or(0.0),
                field_f64(idx, "y", r.y.as_ref()).unwrap_or(0.0),
            ),
            field_f64(idx, "scale", r.scale.as_ref()).map_or(MIN_SCALE, clamp_scale),
        ),
    })
}

/// Parse and normalize a JSON array of tracking keyframes.
pub fn parse_tracking_json(
    json: &str,
    trim: TimeRange,
    anchor: Point,
) -> SmartzoomResult<Vec<TrackingKeyframe>> {
    let raw: Vec<RawTrackingKeyframe> = serde_json::from_str(json)?;
    Ok(normalize_tracking(&raw, trim, anchor))
}

/// Parse and normalize a JSON array of zoom keyframes.
pub fn parse_zoom_json(json: &str, trim: TimeRange) -> SmartzoomResult<Vec<ZoomKeyframe>> {
    let raw: Vec<RawZoomKeyframe> = serde_json::from_str(json)?;
    Ok(normalize_zoom(&raw, trim))
}

/// Deep-copy `keys` with every time clamped into `trim`, sorted ascending.
pub fn finalize<K: Timed>(keys: &[K], trim: TimeRange) -> Vec<K> {
    let clamped = keys
        .iter()
        .map(|k| k.with_time(trim.clamp(k.time())))
        .collect();
    sorted_by_time(clamped)
}

fn normalize_slots<R, K: Timed>(
    raw: &[R],
    trim: TimeRange,
    what: &'static str,
    build: impl Fn(usize, Option<&R>, f64) -> K,
) -> Vec<K> {
    if raw.len() != KEYFRAME_COUNT {
        tracing::warn!(
            kind = what,
            got = raw.len(),
            expected = KEYFRAME_COUNT,
            "keyframe count corrected"
        );
    }
    let keys = default_times(trim)
        .into_iter()
        .enumerate()
        .map(|(idx, slot)| build(idx, raw.get(idx), slot))
        .collect();
    sorted_by_time(keys)
}

fn field_f64(idx: usize, field: &'static str, v: Option<&Value>) -> Option<f64> {
    let out = v.and_then(Value::as_f64).filter(|n| n.is_finite());
    if out.is_none() {
        tracing::debug!(index = idx, field, "invalid keyframe field replaced with default");
    }
    out
}

fn marker_field(idx: usize, v: Option<&Value>) -> MarkerType {
    match v.and_then(Value::as_str).and_then(MarkerType::parse) {
        Some(m) => m,
        None => {
            tracing::debug!(index = idx, field = "markerType", "unknown marker type, using circle");
            MarkerType::Circle
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/keyframe/normalize.rs"]
mod tests;
