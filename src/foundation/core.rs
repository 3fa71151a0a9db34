use crate::foundation::error::{SmartzoomError, SmartzoomResult};

pub use kurbo::{Affine, Point, Vec2};

/// Closed time range `[start, end]` in seconds, typically a clip's trim range.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimeRange {
    /// Range start in seconds.
    pub start: f64,
    /// Range end in seconds (inclusive).
    pub end: f64,
}

impl TimeRange {
    /// Create a validated range with finite bounds and `start <= end`.
    pub fn new(start: f64, end: f64) -> SmartzoomResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(SmartzoomError::validation("TimeRange bounds must be finite"));
        }
        if start > end {
            return Err(SmartzoomError::validation("TimeRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Length of the range in seconds.
    pub fn duration(self) -> f64 {
        self.end - self.start
    }

    /// Return `true` when `t` lies inside `[start, end]`.
    pub fn contains(self, t: f64) -> bool {
        self.start <= t && t <= self.end
    }

    /// Clamp a time into this range. NaN clamps to `start`.
    pub fn clamp(self, t: f64) -> f64 {
        if t.is_nan() {
            return self.start;
        }
        t.clamp(self.start, self.end)
    }

    /// Time at fraction `frac` of the range (`0` is `start`, `1` is `end`).
    pub fn lerp_time(self, frac: f64) -> f64 {
        self.start + self.duration() * frac.clamp(0.0, 1.0)
    }
}

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Preview resample rate used when callers do not pick one.
    pub const PREVIEW: Self = Self { num: 30, den: 1 };

    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> SmartzoomResult<Self> {
        if den == 0 {
            return Err(SmartzoomError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(SmartzoomError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self::PREVIEW
    }
}

/// Intrinsic pixel dimensions of the source media.
///
/// Only known after the media player reports a load.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NaturalSize {
    /// Width in natural pixels.
    pub width: f64,
    /// Height in natural pixels.
    pub height: f64,
}

impl NaturalSize {
    /// Build a size from width and height.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both dimensions are finite and strictly positive.
    pub fn is_ready(self) -> bool {
        is_positive_dim(self.width) && is_positive_dim(self.height)
    }
}

/// Rendered, aspect-corrected output rectangle in frame pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameLayout {
    /// Width in frame pixels.
    pub width: f64,
    /// Height in frame pixels.
    pub height: f64,
}

impl FrameLayout {
    /// Build a layout from width and height.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both dimensions are finite and strictly positive.
    pub fn is_ready(self) -> bool {
        is_positive_dim(self.width) && is_positive_dim(self.height)
    }
}

fn is_positive_dim(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
