use crate::{
    animation::{ease::Ease, lerp::Lerp},
    foundation::core::Fps,
    keyframe::model::{Timed, Track, sorted_by_time},
};

/// Upper bound on the samples one segment may emit.
pub const MAX_SEGMENT_SAMPLES: usize = 1 << 18;

/// Bake sparse keys into fixed-rate samples for cheap lookup during preview.
///
/// Each segment with positive length emits `max(1, floor(len * fps))` eased samples at
/// `s / steps` for `s in 0..steps`, capped at [`MAX_SEGMENT_SAMPLES`]; the final input key is
/// appended as the last sample. Zero-length segments emit nothing so output times stay strictly
/// ascending. When every key shares one instant the last key is emitted twice, so any non-empty
/// input yields at least two samples.
#[tracing::instrument(level = "debug", skip(keys), fields(keys = keys.len()))]
pub fn densify<K: Timed + Lerp>(keys: &[K], fps: Fps) -> Track<K> {
    let sorted = sorted_by_time(keys.to_vec());
    let rate = fps.as_f64();

    let mut out = Vec::new();
    for w in sorted.windows(2) {
        let (a, b) = (&w[0], &w[1]);
        let span = b.time() - a.time();
        if !(span.is_finite() && span > 0.0) {
            continue;
        }
        let wanted = (span * rate).floor();
        let steps = if wanted > MAX_SEGMENT_SAMPLES as f64 {
            tracing::warn!(span, wanted, cap = MAX_SEGMENT_SAMPLES, "segment sample count capped");
            MAX_SEGMENT_SAMPLES
        } else {
            (wanted as usize).max(1)
        };
        out.reserve(steps);
        for s in 0..steps {
            let frac = s as f64 / steps as f64;
            out.push(K::lerp(a, b, Ease::InOutQuad.apply(frac)).with_time(a.time() + span * frac));
        }
    }
    if let Some(last) = sorted.last() {
        out.push(last.clone());
        if out.len() < 2 {
            out.push(last.clone());
        }
    }

    tracing::debug!(samples = out.len(), "densified keyframes");
    Track::dense(out, fps)
}

/// Densify a sparse track; dense tracks are returned as-is.
pub fn densify_track<K: Timed + Lerp>(track: &Track<K>, fps: Fps) -> Track<K> {
    if track.is_dense() {
        return track.clone();
    }
    densify(track.keys(), fps)
}

#[cfg(test)]
#[path = "../../tests/unit/interp/resample.rs"]
mod tests;
