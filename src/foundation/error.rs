/// Convenience result type used across smartzoom.
pub type SmartzoomResult<T> = Result<T, SmartzoomError>;

/// Top-level error taxonomy for boundary operations.
///
/// Sampling and mapping never produce errors; degenerate data is absorbed with fallbacks.
/// Errors only come from constructing validated values, parsing persisted data and the
/// export seam.
#[derive(thiserror::Error, Debug)]
pub enum SmartzoomError {
    /// Invalid caller-provided data (ranges, rates, clip lists).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing persisted records.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from collaborators or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SmartzoomError {
    /// Build a [`SmartzoomError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SmartzoomError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for SmartzoomError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
