//! Editing sessions: default keys, gesture edits, snapshot publishing and finalization.

pub(crate) mod edit;
