use crate::{
    animation::lerp::Lerp,
    foundation::core::{Fps, Point, Vec2},
};

/// Number of keyframes an edit session holds for both tracking and zoom editors.
pub const KEYFRAME_COUNT: usize = 3;

/// Visual style of a tracking marker. Categorical, never blended.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum MarkerType {
    /// Plain circle outline.
    #[default]
    Circle,
    /// Emoji sticker.
    Emoji,
    /// Animated GIF sticker.
    Gif,
}

impl MarkerType {
    /// Parse a persisted marker name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "circle" => Some(Self::Circle),
            "emoji" => Some(Self::Emoji),
            "gif" => Some(Self::Gif),
            _ => None,
        }
    }
}

/// A value positioned on the timeline.
pub trait Timed: Clone {
    /// Timestamp in seconds.
    fn time(&self) -> f64;
    /// Copy of `self` moved to `time`.
    fn with_time(&self, time: f64) -> Self;
}

/// Marker-tracking keyframe in natural pixel space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingKeyframe {
    /// Timestamp in seconds.
    #[serde(alias = "timestamp")]
    pub time: f64,
    /// Horizontal position in natural pixels.
    pub x: f64,
    /// Vertical position in natural pixels.
    pub y: f64,
    /// Marker style shown from this keyframe until the next one.
    #[serde(default)]
    pub marker_type: MarkerType,
}

impl TrackingKeyframe {
    /// Build a keyframe at `position`.
    pub fn new(time: f64, position: Point, marker_type: MarkerType) -> Self {
        Self {
            time,
            x: position.x,
            y: position.y,
            marker_type,
        }
    }

    /// Position in natural pixels.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl Timed for TrackingKeyframe {
    fn time(&self) -> f64 {
        self.time
    }

    fn with_time(&self, time: f64) -> Self {
        Self { time, ..*self }
    }
}

impl Lerp for TrackingKeyframe {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        let p = <Point as Lerp>::lerp(&a.position(), &b.position(), t);
        Self {
            time: <f64 as Lerp>::lerp(&a.time, &b.time, t),
            x: p.x,
            y: p.y,
            marker_type: a.marker_type,
        }
    }
}

/// Smart-zoom keyframe: pan offset in natural pixels plus a scale factor (`>= 1`).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ZoomKeyframe {
    /// Timestamp in seconds.
    #[serde(alias = "timestamp")]
    pub time: f64,
    /// Horizontal pan offset in natural pixels.
    pub x: f64,
    /// Vertical pan offset in natural pixels.
    pub y: f64,
    /// Zoom factor, `1` is no zoom.
    pub scale: f64,
}

impl ZoomKeyframe {
    /// Build a keyframe from an offset and scale.
    pub fn new(time: f64, offset: Vec2, scale: f64) -> Self {
        Self {
            time,
            x: offset.x,
            y: offset.y,
            scale,
        }
    }

    /// Identity zoom (no pan, scale 1) at `time`.
    pub fn identity_at(time: f64) -> Self {
        Self::new(time, Vec2::ZERO, 1.0)
    }

    /// Pan offset in natural pixels.
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl Timed for ZoomKeyframe {
    fn time(&self) -> f64 {
        self.time
    }

    fn with_time(&self, time: f64) -> Self {
        Self { time, ..*self }
    }
}

impl Lerp for ZoomKeyframe {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        let o = <Vec2 as Lerp>::lerp(&a.offset(), &b.offset(), t);
        Self {
            time: <f64 as Lerp>::lerp(&a.time, &b.time, t),
            x: o.x,
            y: o.y,
            scale: <f64 as Lerp>::lerp(&a.scale, &b.scale, t),
        }
    }
}

/// Whether a track holds the user's control points or pre-baked fixed-rate samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TrackKind {
    /// User-edited control points (typically three).
    Sparse,
    /// Output of the resampler at a fixed rate.
    Dense {
        /// Sample rate the track was baked at.
        fps: Fps,
    },
}

/// Immutable, time-sorted keyframe sequence.
///
/// Tracks are never edited in place; sessions publish a new track per edit so readers always
/// see a complete snapshot.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Track<K> {
    kind: TrackKind,
    keys: Vec<K>,
}

impl<K: Timed> Track<K> {
    /// Build a sparse track. Keys are stably sorted by time.
    pub fn sparse(keys: Vec<K>) -> Self {
        Self {
            kind: TrackKind::Sparse,
            keys: sorted_by_time(keys),
        }
    }

    pub(crate) fn dense(keys: Vec<K>, fps: Fps) -> Self {
        Self {
            kind: TrackKind::Dense { fps },
            keys,
        }
    }

    /// Sparse or dense tag.
    pub fn kind(&self) -> TrackKind {
        self.kind
    }

    /// Return `true` for resampled tracks.
    pub fn is_dense(&self) -> bool {
        matches!(self.kind, TrackKind::Dense { .. })
    }

    /// Keys in ascending time order.
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Return `true` when the track has no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// First and last key times, if any keys exist.
    pub fn time_span(&self) -> Option<(f64, f64)> {
        Some((self.keys.first()?.time(), self.keys.last()?.time()))
    }
}

pub(crate) fn sorted_by_time<K: Timed>(mut keys: Vec<K>) -> Vec<K> {
    keys.sort_by(|a, b| a.time().total_cmp(&b.time()));
    keys
}

#[cfg(test)]
#[path = "../../tests/unit/keyframe/model.rs"]
mod tests;
