//! smartzoom is the keyframe interpolation core behind marker tracking and smart-zoom preview.
//!
//! Users place a handful of keyframes (position, scale, marker style) on a trimmed clip; the
//! crate turns them into a continuous trajectory that a render loop samples once per frame.
//!
//! # Pipeline overview
//!
//! 1. **Normalize**: persisted JSON -> validated, sorted keyframes ([`parse_tracking_json`],
//!    [`parse_zoom_json`])
//! 2. **Resample** (optional): sparse keys -> fixed-rate dense samples ([`densify`])
//! 3. **Query**: `(track, time)` -> marker sample or zoom transform ([`QueryEngine`])
//! 4. **Map**: natural pixels -> frame pixels with a "cover" fit scale ([`natural_to_frame`])
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure queries**: sampling is a deterministic function of its arguments, with no hidden state.
//! - **No errors at playback time**: degenerate data resolves to a documented fallback
//!   (snap to a key, identity transform, clamped value) instead of failing.
//! - **Not-ready is a value**: unknown media or layout sizes yield [`OFF_CANVAS`] or
//!   [`Placement::Hidden`], never an error.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod export;
mod foundation;
mod interp;
mod keyframe;
mod mapping;
mod query;
mod session;

pub use animation::ease::Ease;
pub use animation::lerp::Lerp;
pub use export::process::{ClipSpec, MediaProcessor, export_clips};
pub use foundation::core::{Affine, FrameLayout, Fps, NaturalSize, Point, TimeRange, Vec2};
pub use foundation::error::{SmartzoomError, SmartzoomResult};
pub use foundation::math::{MAX_SCALE, MIN_SCALE, clamp_scale};
pub use interp::linear::{bracket, lerp_between, sample_linear, sample_snap};
pub use interp::resample::{MAX_SEGMENT_SAMPLES, densify, densify_track};
pub use interp::spline::{SplineSegment, ZoomTransform, catmull_rom, spline_segment, spline_zoom};
pub use keyframe::model::{
    KEYFRAME_COUNT, MarkerType, Timed, Track, TrackKind, TrackingKeyframe, ZoomKeyframe,
};
pub use keyframe::normalize::{
    RawTrackingKeyframe, RawZoomKeyframe, default_times, default_tracking_keys,
    default_zoom_keys, finalize, normalize_tracking, normalize_zoom, parse_tracking_json,
    parse_zoom_json,
};
pub use mapping::coords::{
    FrameTransform, OFF_CANVAS, fit_scale, frame_delta_to_natural, frame_to_natural,
    is_off_canvas, natural_to_frame, try_natural_to_frame,
};
pub use mapping::gesture::{Gesture, apply_tracking_gesture, apply_zoom_gesture};
pub use query::engine::{
    MarkerMode, MarkerSample, PlacedMarker, Placement, QueryEngine, QueryOpts, Viewport, ZoomMode,
};
pub use session::edit::{EditSession, SessionOpts, TrackingSession, ZoomSession};
