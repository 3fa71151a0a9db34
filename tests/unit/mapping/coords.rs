use super::*;

fn portrait() -> (NaturalSize, FrameLayout) {
    (
        NaturalSize::new(1080.0, 1920.0),
        FrameLayout::new(360.0, 640.0),
    )
}

#[test]
fn center_maps_to_center() {
    let (natural, layout) = portrait();
    let p = natural_to_frame(Point::new(540.0, 960.0), natural, layout);
    assert!((p.x - 180.0).abs() < 1e-9);
    assert!((p.y - 320.0).abs() < 1e-9);
}

#[test]
fn fit_scale_uses_cover_semantics() {
    // Landscape media in a square frame: height dominates, width overflows.
    let s = fit_scale(NaturalSize::new(1920.0, 1080.0), FrameLayout::new(540.0, 540.0)).unwrap();
    assert!((s - 0.5).abs() < 1e-12);
}

#[test]
fn not_ready_returns_off_canvas_sentinel() {
    let layout = FrameLayout::new(360.0, 640.0);
    let p = natural_to_frame(Point::new(1.0, 1.0), NaturalSize::new(0.0, 0.0), layout);
    assert!(is_off_canvas(p));
    assert!(try_natural_to_frame(Point::ORIGIN, NaturalSize::new(1.0, 1.0), FrameLayout::new(f64::NAN, 1.0)).is_none());
    assert_eq!(
        frame_delta_to_natural(Vec2::new(5.0, 5.0), NaturalSize::new(0.0, 1.0), layout),
        Vec2::ZERO
    );
}

#[test]
fn frame_round_trip_and_delta_inverse() {
    let (natural, layout) = portrait();
    let p = Point::new(123.0, 456.0);
    let f = try_natural_to_frame(p, natural, layout).unwrap();
    let back = frame_to_natural(f, natural, layout).unwrap();
    assert!((back - p).hypot() < 1e-9);

    let d = frame_delta_to_natural(Vec2::new(10.0, -20.0), natural, layout);
    assert!((d.x - 30.0).abs() < 1e-9);
    assert!((d.y + 60.0).abs() < 1e-9);
}

#[test]
fn frame_transform_affine_scales_then_translates() {
    let t = FrameTransform {
        translate: Vec2::new(10.0, 20.0),
        scale: 2.0,
    };
    let p = t.to_affine() * Point::new(1.0, 1.0);
    assert_eq!(p, Point::new(12.0, 22.0));
    assert_eq!(FrameTransform::default().to_affine(), Affine::IDENTITY);
}
