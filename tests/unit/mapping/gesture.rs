use super::*;
use crate::foundation::core::Point;
use crate::keyframe::model::MarkerType;

fn sizes() -> (NaturalSize, FrameLayout) {
    (
        NaturalSize::new(1080.0, 1920.0),
        FrameLayout::new(360.0, 640.0),
    )
}

#[test]
fn pan_moves_marker_in_natural_space() {
    let (natural, layout) = sizes();
    let k = TrackingKeyframe::new(1.0, Point::new(100.0, 100.0), MarkerType::Gif);
    let moved = apply_tracking_gesture(&k, Gesture::Pan { dx: 10.0, dy: 5.0 }, natural, layout);
    assert!((moved.x - 130.0).abs() < 1e-9);
    assert!((moved.y - 115.0).abs() < 1e-9);
    assert_eq!(moved.time, 1.0);
    assert_eq!(moved.marker_type, MarkerType::Gif);
    assert_eq!(k.x, 100.0);
}

#[test]
fn pinch_is_ignored_by_markers() {
    let (natural, layout) = sizes();
    let k = TrackingKeyframe::new(0.0, Point::new(1.0, 2.0), MarkerType::Circle);
    let out = apply_tracking_gesture(&k, Gesture::Pinch { scale_delta: 3.0 }, natural, layout);
    assert_eq!(out, k);
}

#[test]
fn pinch_scales_zoom_and_clamps() {
    let (natural, layout) = sizes();
    let k = ZoomKeyframe::new(0.0, Vec2::ZERO, 2.0);
    let up = apply_zoom_gesture(&k, Gesture::Pinch { scale_delta: 1.5 }, natural, layout);
    assert_eq!(up.scale, 3.0);
    let huge = apply_zoom_gesture(&k, Gesture::Pinch { scale_delta: 100.0 }, natural, layout);
    assert_eq!(huge.scale, 10.0);
    let tiny = apply_zoom_gesture(&k, Gesture::Pinch { scale_delta: 0.1 }, natural, layout);
    assert_eq!(tiny.scale, 1.0);
    let bad = apply_zoom_gesture(&k, Gesture::Pinch { scale_delta: -2.0 }, natural, layout);
    assert_eq!(bad, k);
}

#[test]
fn pan_before_media_load_is_a_noop() {
    let k = ZoomKeyframe::new(0.0, Vec2::new(4.0, 4.0), 2.0);
    let out = apply_zoom_gesture(
        &k,
        Gesture::Pan { dx: 50.0, dy: 50.0 },
        NaturalSize::new(0.0, 0.0),
        FrameLayout::new(360.0, 640.0),
    );
    assert_eq!(out, k);
}
