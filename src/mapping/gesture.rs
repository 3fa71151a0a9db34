use crate::{
    foundation::core::{FrameLayout, NaturalSize, Vec2},
    foundation::math::clamp_scale,
    keyframe::model::{TrackingKeyframe, ZoomKeyframe},
    mapping::coords::frame_delta_to_natural,
};

/// Discrete update emitted by the gesture collaborator, in frame space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gesture {
    /// Drag by a frame-pixel delta.
    Pan {
        /// Horizontal delta in frame pixels.
        dx: f64,
        /// Vertical delta in frame pixels.
        dy: f64,
    },
    /// Pinch by a multiplicative factor.
    Pinch {
        /// Relative scale change, `1` is no change.
        scale_delta: f64,
    },
}

impl Gesture {
    fn natural_delta(self, natural: NaturalSize, layout: FrameLayout) -> Vec2 {
        match self {
            Self::Pan { dx, dy } if dx.is_finite() && dy.is_finite() => {
                frame_delta_to_natural(Vec2::new(dx, dy), natural, layout)
            }
            _ => Vec2::ZERO,
        }
    }
}

/// Move a marker keyframe by a gesture. Pinches do not affect markers.
pub fn apply_tracking_gesture(
    key: &TrackingKeyframe,
    gesture: Gesture,
    natural: NaturalSize,
    layout: FrameLayout,
) -> TrackingKeyframe {
    let p = key.position() + gesture.natural_delta(natural, layout);
    TrackingKeyframe { x: p.x, y: p.y, ..*key }
}

/// Pan or pinch a zoom keyframe. Scale stays within `[1, 10]`.
pub fn apply_zoom_gesture(
    key: &ZoomKeyframe,
    gesture: Gesture,
    natural: NaturalSize,
    layout: FrameLayout,
) -> ZoomKeyframe {
    match gesture {
        Gesture::Pan { .. } => {
            let o = key.offset() + gesture.natural_delta(natural, layout);
            ZoomKeyframe { x: o.x, y: o.y, ..*key }
        }
        Gesture::Pinch { scale_delta } if scale_delta.is_finite() && scale_delta > 0.0 => {
            ZoomKeyframe {
                scale: clamp_scale(key.scale * scale_delta),
                ..*key
            }
        }
        Gesture::Pinch { .. } => *key,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mapping/gesture.rs"]
mod tests;
