/// Easing curve applied to a normalized segment position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Identity mapping.
    #[default]
    Linear,
    /// Quadratic ease-in-out: `2t²` below the midpoint, `1 - 2(1-t)²` above it.
    InOutQuad,
}

impl Ease {
    /// Map `t` through the curve. `t` is clamped to `[0, 1]` first; NaN maps to `0`.
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
