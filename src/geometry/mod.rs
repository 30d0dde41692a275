//! Ray, plane and bounding-volume primitives used by the picker.
//!
//! These stand in for the rendering toolkit's intersection helpers: ray
//! construction lives in [`crate::camera`], everything that tests a ray
//! against something lives here.

/// Oriented bounding boxes for broad-phase culling.
pub mod bounds;
/// Planes and ray-plane intersection.
pub mod plane;
/// Rays and ray-primitive intersection tests.
pub mod ray;

pub use bounds::OrientedBox;
pub use plane::Plane;
pub use ray::Ray;
