use super::*;

#[test]
fn time_range_rejects_inverted_and_non_finite_bounds() {
    assert!(TimeRange::new(2.0, 1.0).is_err());
    assert!(TimeRange::new(f64::NAN, 1.0).is_err());
    assert!(TimeRange::new(0.0, f64::INFINITY).is_err());
    assert!(TimeRange::new(1.0, 1.0).is_ok());
}

#[test]
fn time_range_clamp_and_contains_boundaries() {
    let r = TimeRange::new(1.0, 3.0).unwrap();
    assert!(!r.contains(0.5));
    assert!(r.contains(1.0));
    assert!(r.contains(3.0));
    assert_eq!(r.clamp(-4.0), 1.0);
    assert_eq!(r.clamp(9.0), 3.0);
    assert_eq!(r.clamp(f64::NAN), 1.0);
    assert_eq!(r.lerp_time(0.5), 2.0);
}

#[test]
fn fps_validates_and_converts() {
    assert!(Fps::new(30, 0).is_err());
    assert!(Fps::new(0, 1).is_err());
    let fps = Fps::new(30000, 1001).unwrap();
    assert!((fps.as_f64() - 29.97).abs() < 1e-3);
    assert_eq!(Fps::default(), Fps::PREVIEW);
    assert!((Fps::PREVIEW.frame_duration_secs() - 1.0 / 30.0).abs() < 1e-12);
}

#[test]
fn sizes_are_ready_only_when_positive_and_finite() {
    assert!(NaturalSize::new(1080.0, 1920.0).is_ready());
    assert!(!NaturalSize::new(0.0, 1920.0).is_ready());
    assert!(!NaturalSize::new(f64::NAN, 1.0).is_ready());
    assert!(FrameLayout::new(360.0, 640.0).is_ready());
    assert!(!FrameLayout::new(360.0, -1.0).is_ready());
}
