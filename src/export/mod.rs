//! Seam to the native export pipeline.

pub(crate) mod process;
