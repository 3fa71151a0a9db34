use crate::{
    animation::ease::Ease,
    foundation::core::{FrameLayout, NaturalSize, Point},
    interp::{
        linear::{sample_linear, sample_snap},
        spline::{ZoomTransform, spline_zoom},
    },
    keyframe::model::{MarkerType, Timed, Track, TrackingKeyframe, ZoomKeyframe},
    mapping::coords::{FrameTransform, fit_scale},
};

/// Query configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QueryOpts {
    /// Natural-space marker position used when a track has fewer than two keys.
    pub default_anchor: Point,
}

impl Default for QueryOpts {
    fn default() -> Self {
        Self {
            default_anchor: Point::ORIGIN,
        }
    }
}

/// How a tracking marker is resolved between keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerMode {
    /// Interpolate position; dense tracks ignore the ease because it is already baked in.
    Interpolate(Ease),
    /// Hold the nearest key at or before the query time.
    Snap,
    /// Show the raw value of the key being edited.
    Editing {
        /// Index of the active key (clamped to the track).
        active: usize,
    },
}

/// How a zoom track is resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomMode {
    /// Smooth Catmull-Rom playback.
    Preview,
    /// Show the raw value of the key being edited.
    Editing {
        /// Index of the active key (clamped to the track).
        active: usize,
    },
}

/// Marker state at a point in time, in natural space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct MarkerSample {
    /// Natural-space position.
    pub position: Point,
    /// Marker style, always copied from a key.
    pub marker_type: MarkerType,
}

impl From<&TrackingKeyframe> for MarkerSample {
    fn from(k: &TrackingKeyframe) -> Self {
        Self {
            position: k.position(),
            marker_type: k.marker_type,
        }
    }
}

/// Marker placed in frame space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PlacedMarker {
    /// Frame-space position.
    pub position: Point,
    /// Marker style.
    pub marker_type: MarkerType,
}

/// Sizes currently reported by the media player and layout collaborators.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Intrinsic media size, once loaded.
    pub natural: Option<NaturalSize>,
    /// Current output rectangle.
    pub layout: Option<FrameLayout>,
}

impl Viewport {
    /// Viewport with both sizes known.
    pub fn new(natural: NaturalSize, layout: FrameLayout) -> Self {
        Self {
            natural: Some(natural),
            layout: Some(layout),
        }
    }

    /// Cover scale, or `None` while either size is missing or invalid.
    pub fn fit_scale(&self) -> Option<f64> {
        fit_scale(self.natural?, self.layout?)
    }
}

/// Result of a frame-space query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement<T> {
    /// Sizes not known yet; draw nothing.
    Hidden,
    /// Ready to draw.
    Visible(T),
}

impl<T> Placement<T> {
    /// Return `true` for [`Placement::Visible`].
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible(_))
    }

    /// Convert into an `Option`.
    pub fn visible(self) -> Option<T> {
        match self {
            Self::Visible(v) => Some(v),
            Self::Hidden => None,
        }
    }
}

/// Stateless per-frame query entry point.
///
/// Every method is a pure function of its arguments: a render loop passes the current track
/// snapshot and playback time and receives a fresh value each frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct QueryEngine {
    opts: QueryOpts,
}

impl QueryEngine {
    /// Create an engine with the given options.
    pub fn new(opts: QueryOpts) -> Self {
        Self { opts }
    }

    /// Options in use.
    pub fn opts(&self) -> &QueryOpts {
        &self.opts
    }

    /// Marker position and style at `time`.
    pub fn marker_at(
        &self,
        track: &Track<TrackingKeyframe>,
        time: f64,
        mode: MarkerMode,
    ) -> MarkerSample {
        let keys = track.keys();
        let key = if keys.len() < 2 {
            None
        } else {
            match mode {
                MarkerMode::Interpolate(ease) => {
                    let ease = if track.is_dense() { Ease::Linear } else { ease };
                    sample_linear(keys, time, ease)
                }
                MarkerMode::Snap => sample_snap(keys, time),
                MarkerMode::Editing { active } => active_key(keys, active).copied(),
            }
        };
        key.map_or(
            MarkerSample {
                position: self.opts.default_anchor,
                marker_type: MarkerType::default(),
            },
            |k| MarkerSample::from(&k),
        )
    }

    /// Pan/zoom at `time` in natural space.
    pub fn zoom_at(&self, track: &Track<ZoomKeyframe>, time: f64, mode: ZoomMode) -> ZoomTransform {
        let keys = track.keys();
        if keys.len() < 2 {
            return ZoomTransform::identity();
        }
        let out = match mode {
            ZoomMode::Preview => spline_zoom(keys, time),
            ZoomMode::Editing { active } => active_key(keys, active).map(ZoomTransform::from),
        };
        out.unwrap_or_default()
    }

    /// Marker placed in frame space, hidden until the viewport is ready.
    pub fn place_marker(
        &self,
        track: &Track<TrackingKeyframe>,
        time: f64,
        mode: MarkerMode,
        viewport: Viewport,
    ) -> Placement<PlacedMarker> {
        let Some(s) = viewport.fit_scale() else {
            return Placement::Hidden;
        };
        let m = self.marker_at(track, time, mode);
        Placement::Visible(PlacedMarker {
            position: Point::new(m.position.x * s, m.position.y * s),
            marker_type: m.marker_type,
        })
    }

    /// Frame-space transform for the media layer, hidden until the viewport is ready.
    pub fn place_zoom(
        &self,
        track: &Track<ZoomKeyframe>,
        time: f64,
        mode: ZoomMode,
        viewport: Viewport,
    ) -> Placement<FrameTransform> {
        let Some(s) = viewport.fit_scale() else {
            return Placement::Hidden;
        };
        let z = self.zoom_at(track, time, mode);
        Placement::Visible(FrameTransform {
            translate: z.offset * s,
            scale: z.scale,
        })
    }
}

fn active_key<K: Timed>(keys: &[K], active: usize) -> Option<&K> {
    keys.get(active.min(keys.len().checked_sub(1)?))
}

#[cfg(test)]
#[path = "../../tests/unit/query/engine.rs"]
mod tests;
