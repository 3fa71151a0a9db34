use crate::{
    animation::{ease::Ease, lerp::Lerp},
    foundation::math::segment_fraction,
    keyframe::model::Timed,
};

/// Keys bracketing `time`: the last key at or before it and the first key at or after it.
///
/// Queries before the first key resolve to the first key on both sides, queries past the last
/// key to the last key. NaN resolves to the first key. Returns `None` for an empty slice.
pub fn bracket<K: Timed>(keys: &[K], time: f64) -> Option<(&K, &K)> {
    let first = keys.first()?;
    let last = keys.last()?;
    let before = match keys.partition_point(|k| k.time() <= time) {
        0 => first,
        i => &keys[i - 1],
    };
    let after = keys
        .get(keys.partition_point(|k| k.time() < time))
        .unwrap_or(last);
    Some((before, after))
}

/// Interpolate between `before` and `after` at `time`, shaped by `ease`.
///
/// A zero-length or non-finite segment returns `before` unchanged. The result carries `time`
/// clamped into the segment.
pub fn lerp_between<K: Timed + Lerp>(before: &K, after: &K, time: f64, ease: Ease) -> K {
    let raw = segment_fraction(time, before.time(), after.time());
    if raw == 0.0 {
        return before.clone();
    }
    let at = <f64 as Lerp>::lerp(&before.time(), &after.time(), raw);
    K::lerp(before, after, ease.apply(raw)).with_time(at)
}

/// Sample a sorted key slice at `time` with linear (optionally eased) interpolation.
pub fn sample_linear<K: Timed + Lerp>(keys: &[K], time: f64, ease: Ease) -> Option<K> {
    let (before, after) = bracket(keys, time)?;
    Some(lerp_between(before, after, time, ease))
}

/// Value of the nearest key at or before `time`, without interpolation.
pub fn sample_snap<K: Timed>(keys: &[K], time: f64) -> Option<K> {
    bracket(keys, time).map(|(before, _)| before.clone())
}

#[cfg(test)]
#[path = "../../tests/unit/interp/linear.rs"]
mod tests;
