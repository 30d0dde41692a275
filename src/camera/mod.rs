//! Camera and screen-space conversions for building pick rays.
//!
//! Provides a perspective camera, the viewport it renders into, and the
//! screen → NDC → world-ray pipeline used by every pick query.

/// Core camera struct and ray construction.
pub mod core;
/// Viewport dimensions and screen-space conversions.
pub mod viewport;

pub use self::core::Camera;
pub use viewport::Viewport;
