//! Diagnostic overlay capability.
//!
//! The picker can describe what it tested (the ray, culled-in tile boxes,
//! hit points, resolved feature boxes) to an overlay for display. Nothing
//! recorded here influences query results.

use glam::Vec3;

use crate::geometry::{OrientedBox, Ray};

/// Receiver for diagnostic shapes. Rebuilt from scratch on every query.
pub trait DebugOverlay {
    /// Drop everything from the previous query.
    fn reset(&mut self);
    /// The pick ray, drawn to `length`.
    fn add_ray(&mut self, ray: &Ray, length: f32);
    /// A world-space box; `hit` marks boxes the ray crossed.
    fn add_box(&mut self, bounds: &OrientedBox, hit: bool);
    /// A world-space hit point.
    fn add_point(&mut self, point: Vec3);
}

/// Overlay that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOverlay;

impl DebugOverlay for NoOverlay {
    fn reset(&mut self) {}
    fn add_ray(&mut self, _ray: &Ray, _length: f32) {}
    fn add_box(&mut self, _bounds: &OrientedBox, _hit: bool) {}
    fn add_point(&mut self, _point: Vec3) {}
}

/// A recorded diagnostic shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayShape {
    /// Line from `from` to `to`.
    Ray {
        /// Start.
        from: Vec3,
        /// End.
        to: Vec3,
    },
    /// Wireframe box.
    Box {
        /// World-space box.
        bounds: OrientedBox,
        /// Whether the ray crossed it.
        hit: bool,
    },
    /// Hit marker.
    Point(Vec3),
}

/// Overlay that keeps the shapes of the last query for a renderer to draw.
#[derive(Debug, Clone, Default)]
pub struct OverlayRecorder {
    shapes: Vec<OverlayShape>,
}

impl OverlayRecorder {
    /// Shapes recorded by the last query.
    #[must_use]
    pub fn shapes(&self) -> &[OverlayShape] {
        &self.shapes
    }
}

impl DebugOverlay for OverlayRecorder {
    fn reset(&mut self) {
        self.shapes.clear();
    }

    fn add_ray(&mut self, ray: &Ray, length: f32) {
        self.shapes.push(OverlayShape::Ray {
            from: ray.origin,
            to: ray.at(length),
        });
    }

    fn add_box(&mut self, bounds: &OrientedBox, hit: bool) {
        self.shapes.push(OverlayShape::Box {
            bounds: *bounds,
            hit,
        });
    }

    fn add_point(&mut self, point: Vec3) {
        self.shapes.push(OverlayShape::Point(point));
    }
}
