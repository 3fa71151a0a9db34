//! Natural-space to frame-space conversion and gesture deltas.

pub(crate) mod coords;
pub(crate) mod gesture;
