use std::path::{Path, PathBuf};

use crate::foundation::error::{SmartzoomError, SmartzoomResult};

/// One trimmed source clip handed to the native processor.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipSpec {
    /// Source media path.
    pub path: PathBuf,
    /// Trim start in seconds.
    pub trim_start: f64,
    /// Trim end in seconds.
    pub trim_end: f64,
}

impl ClipSpec {
    /// Check the path is set and the trim range is finite and non-empty.
    pub fn validate(&self) -> SmartzoomResult<()> {
        if self.path.as_os_str().is_empty() {
            return Err(SmartzoomError::validation("clip path must not be empty"));
        }
        if !self.trim_start.is_finite() || !self.trim_end.is_finite() {
            return Err(SmartzoomError::validation(format!(
                "clip '{}' trim bounds must be finite",
                self.path.display()
            )));
        }
        if self.trim_start < 0.0 || self.trim_start >= self.trim_end {
            return Err(SmartzoomError::validation(format!(
                "clip '{}' needs 0 <= trim_start < trim_end (got {}..{})",
                self.path.display(),
                self.trim_start,
                self.trim_end
            )));
        }
        Ok(())
    }
}

/// Opaque trim/merge/encode backend (platform video pipeline).
pub trait MediaProcessor {
    /// Process `clips` into `out` and return the written path.
    fn process(&self, clips: &[ClipSpec], out: &Path) -> SmartzoomResult<PathBuf>;
}

/// Validate a clip list and hand it to `processor`.
pub fn export_clips(
    processor: &dyn MediaProcessor,
    clips: &[ClipSpec],
    out: &Path,
) -> SmartzoomResult<PathBuf> {
    if clips.is_empty() {
        return Err(SmartzoomError::validation("export needs at least one clip"));
    }
    for clip in clips {
        clip.validate()?;
    }
    tracing::info!(clips = clips.len(), out = %out.display(), "exporting clips");
    let written = processor.process(clips, out)?;
    tracing::debug!(path = %written.display(), "export finished");
    Ok(written)
}

#[cfg(test)]
#[path = "../../tests/unit/export/process.rs"]
mod tests;
