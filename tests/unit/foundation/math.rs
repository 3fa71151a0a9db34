use super::*;

#[test]
fn clamp_scale_bounds_and_non_finite() {
    assert_eq!(clamp_scale(0.2), MIN_SCALE);
    assert_eq!(clamp_scale(-5.0), MIN_SCALE);
    assert_eq!(clamp_scale(42.0), MAX_SCALE);
    assert_eq!(clamp_scale(2.5), 2.5);
    assert_eq!(clamp_scale(f64::NAN), MIN_SCALE);
    assert_eq!(clamp_scale(f64::INFINITY), MIN_SCALE);
}

#[test]
fn segment_fraction_handles_degenerate_spans() {
    assert_eq!(segment_fraction(1.0, 0.0, 2.0), 0.5);
    assert_eq!(segment_fraction(5.0, 0.0, 2.0), 1.0);
    assert_eq!(segment_fraction(-1.0, 0.0, 2.0), 0.0);
    assert_eq!(segment_fraction(1.0, 1.0, 1.0), 0.0);
    assert_eq!(segment_fraction(f64::NAN, 0.0, 1.0), 0.0);
    assert_eq!(segment_fraction(0.5, 0.0, f64::INFINITY), 0.0);
}

#[test]
fn finite_or_replaces_nan_and_infinity() {
    assert_eq!(finite_or(3.0, 1.0), 3.0);
    assert_eq!(finite_or(f64::NAN, 1.0), 1.0);
    assert_eq!(finite_or(f64::NEG_INFINITY, 1.0), 1.0);
}
