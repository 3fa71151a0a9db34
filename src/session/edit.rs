use std::sync::Arc;

use crate::{
    foundation::core::{FrameLayout, NaturalSize, Point, TimeRange},
    foundation::error::SmartzoomResult,
    keyframe::model::{Timed, Track, TrackingKeyframe, ZoomKeyframe},
    keyframe::normalize::{
        default_tracking_keys, default_zoom_keys, finalize, parse_tracking_json, parse_zoom_json,
    },
    mapping::gesture::{Gesture, apply_tracking_gesture, apply_zoom_gesture},
};

/// Session defaults.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionOpts {
    /// Natural-space position for new or repaired tracking keys.
    pub default_anchor: Point,
}

impl Default for SessionOpts {
    fn default() -> Self {
        Self {
            default_anchor: Point::ORIGIN,
        }
    }
}

/// Keyframe editing session over one clip's trim range.
///
/// Edits never mutate a published track: each update builds a new [`Track`] and swaps the
/// `Arc`, so a renderer holding an earlier snapshot keeps reading a consistent sequence.
#[derive(Clone, Debug)]
pub struct EditSession<K> {
    trim: TimeRange,
    track: Arc<Track<K>>,
}

/// Marker-tracking editor session.
pub type TrackingSession = EditSession<TrackingKeyframe>;
/// Smart-zoom editor session.
pub type ZoomSession = EditSession<ZoomKeyframe>;

impl<K: Timed + serde::Serialize> EditSession<K> {
    fn from_keys(trim: TimeRange, keys: Vec<K>) -> Self {
        Self {
            trim,
            track: Arc::new(Track::sparse(keys)),
        }
    }

    /// Trim range the keys are confined to.
    pub fn trim(&self) -> TimeRange {
        self.trim
    }

    /// Current immutable snapshot.
    pub fn snapshot(&self) -> Arc<Track<K>> {
        Arc::clone(&self.track)
    }

    /// Replace the key at `index` and publish a new snapshot.
    ///
    /// Out-of-range indices are ignored.
    pub fn update(&mut self, index: usize, key: K) {
        let mut keys = self.track.keys().to_vec();
        let Some(slot) = keys.get_mut(index) else {
            tracing::warn!(index, len = keys.len(), "keyframe update out of range ignored");
            return;
        };
        *slot = key;
        self.track = Arc::new(Track::sparse(keys));
    }

    /// Deep copy of the keys with times clamped into the trim range.
    pub fn finalize(&self) -> Vec<K> {
        finalize(self.track.keys(), self.trim)
    }

    /// Finalized keys as a JSON array.
    pub fn to_json(&self) -> SmartzoomResult<String> {
        Ok(serde_json::to_string_pretty(&self.finalize())?)
    }

    fn edit_with(&mut self, index: usize, f: impl FnOnce(&K) -> K) {
        if let Some(k) = self.track.keys().get(index) {
            let next = f(k);
            self.update(index, next);
        } else {
            tracing::warn!(index, "gesture on missing keyframe ignored");
        }
    }
}

impl TrackingSession {
    /// Start a session with three default keys at `opts.default_anchor`.
    pub fn new(trim: TimeRange, opts: SessionOpts) -> Self {
        Self::from_keys(trim, default_tracking_keys(trim, opts.default_anchor))
    }

    /// Restore a session from persisted JSON, repairing invalid fields.
    pub fn from_json(json: &str, trim: TimeRange, opts: SessionOpts) -> SmartzoomResult<Self> {
        let keys = parse_tracking_json(json, trim, opts.default_anchor)?;
        Ok(Self::from_keys(trim, keys))
    }

    /// Apply a drag to the marker at `index`.
    pub fn apply_gesture(
        &mut self,
        index: usize,
        gesture: Gesture,
        natural: NaturalSize,
        layout: FrameLayout,
    ) {
        self.edit_with(index, |k| apply_tracking_gesture(k, gesture, natural, layout));
    }
}

impl ZoomSession {
    /// Start a session with three identity keys.
    pub fn new(trim: TimeRange) -> Self {
        Self::from_keys(trim, default_zoom_keys(trim))
    }

    /// Restore a session from persisted JSON, repairing invalid fields.
    pub fn from_json(json: &str, trim: TimeRange) -> SmartzoomResult<Self> {
        let keys = parse_zoom_json(json, trim)?;
        Ok(Self::from_keys(trim, keys))
    }

    /// Apply a pan or pinch to the zoom key at `index`.
    pub fn apply_gesture(
        &mut self,
        index: usize,
        gesture: Gesture,
        natural: NaturalSize,
        layout: FrameLayout,
    ) {
        self.edit_with(index, |k| apply_zoom_gesture(k, gesture, natural, layout));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/edit.rs"]
mod tests;
