//! Shared utilities.

/// Per-phase query timing.
pub mod phase_timer;
