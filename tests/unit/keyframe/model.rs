use super::*;

#[test]
fn sparse_track_sorts_by_time_stably() {
    let track = Track::sparse(vec![
        ZoomKeyframe::new(2.0, Vec2::new(1.0, 1.0), 2.0),
        ZoomKeyframe::new(0.0, Vec2::ZERO, 1.0),
        ZoomKeyframe::new(1.0, Vec2::new(5.0, 5.0), 3.0),
        ZoomKeyframe::new(1.0, Vec2::new(6.0, 6.0), 4.0),
    ]);
    let times: Vec<f64> = track.keys().iter().map(|k| k.time).collect();
    assert_eq!(times, vec![0.0, 1.0, 1.0, 2.0]);
    assert_eq!(track.keys()[1].x, 5.0);
    assert_eq!(track.keys()[2].x, 6.0);
    assert_eq!(track.kind(), TrackKind::Sparse);
    assert_eq!(track.time_span(), Some((0.0, 2.0)));
}

#[test]
fn tracking_lerp_never_blends_marker_type() {
    let a = TrackingKeyframe::new(0.0, Point::new(0.0, 0.0), MarkerType::Emoji);
    let b = TrackingKeyframe::new(1.0, Point::new(10.0, 20.0), MarkerType::Gif);
    let mid = <TrackingKeyframe as Lerp>::lerp(&a, &b, 0.5);
    assert_eq!(mid.position(), Point::new(5.0, 10.0));
    assert_eq!(mid.time, 0.5);
    assert_eq!(mid.marker_type, MarkerType::Emoji);
}

#[test]
fn keyframes_accept_legacy_timestamp_field() {
    let k: TrackingKeyframe =
        serde_json::from_str(r#"{"timestamp": 1.5, "x": 3, "y": 4, "markerType": "gif"}"#)
            .unwrap();
    assert_eq!(k.time, 1.5);
    assert_eq!(k.marker_type, MarkerType::Gif);

    let z: ZoomKeyframe =
        serde_json::from_str(r#"{"timestamp": 2.0, "x": 0, "y": 0, "scale": 2}"#).unwrap();
    assert_eq!(z.time, 2.0);

    let out = serde_json::to_value(k).unwrap();
    assert_eq!(out["time"], 1.5);
    assert_eq!(out["markerType"], "gif");
    assert!(out.get("timestamp").is_none());
}

#[test]
fn marker_type_parse_is_case_insensitive() {
    assert_eq!(MarkerType::parse("Emoji"), Some(MarkerType::Emoji));
    assert_eq!(MarkerType::parse(" GIF "), Some(MarkerType::Gif));
    assert_eq!(MarkerType::parse("sparkle"), None);
}

#[test]
fn dense_tracks_serialize_their_rate() {
    let track = Track::dense(vec![ZoomKeyframe::identity_at(0.0)], Fps::PREVIEW);
    assert!(track.is_dense());
    let v = serde_json::to_value(&track).unwrap();
    assert_eq!(v["kind"]["kind"], "dense");
    assert_eq!(v["kind"]["fps"]["num"], 30);
}
