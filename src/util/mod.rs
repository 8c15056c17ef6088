//! Shared utilities.

/// Frame delta timing with pluggable time sources.
pub mod frame_timing;
