use glam::{Mat4, Vec3, Vec4};

use super::Viewport;
use crate::geometry::Ray;

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Camera at `eye` looking at `target` with z up and map-scale clip
    /// planes. A straight-down view uses +y as up instead.
    #[must_use]
    pub fn looking_at(eye: Vec3, target: Vec3, viewport: Viewport) -> Self {
        let forward = (target - eye).normalize_or_zero();
        let up = if forward.cross(Vec3::Z).length_squared() < 1e-6 {
            Vec3::Y
        } else {
            Vec3::Z
        };
        Self {
            eye,
            target,
            up,
            aspect: viewport.aspect(),
            fovy: 45.0,
            znear: 1.0,
            zfar: 100_000.0,
        }
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.build_view()
    }

    /// World → camera transform.
    #[must_use]
    pub fn build_view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Projection matrix.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        // perspective_rh maps depth to [0,1], matching the unprojection in
        // screen_to_ray
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build a world-space pick ray through a screen point.
    ///
    /// The ray starts at the eye, so hit distances along it are camera
    /// distances.
    #[must_use]
    pub fn screen_to_ray(
        &self,
        viewport: Viewport,
        screen_x: f32,
        screen_y: f32,
    ) -> Ray {
        let ndc = viewport.to_ndc(screen_x, screen_y);
        let inv_view_proj = self.build_matrix().inverse();

        // Unproject near and far points ([0,1] depth range)
        let world_near = inv_view_proj * Vec4::new(ndc.x, ndc.y, 0.0, 1.0);
        let world_far = inv_view_proj * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);

        // Perspective divide
        let near = world_near.truncate() / world_near.w;
        let far = world_far.truncate() / world_far.w;

        Ray::new(self.eye, far - near)
    }

    /// Size in world units of one screen pixel at `distance` from the eye.
    #[must_use]
    pub fn world_per_pixel(&self, viewport: Viewport, distance: f32) -> f32 {
        let half_fov = (self.fovy * 0.5).to_radians();
        2.0 * distance * half_fov.tan() / viewport.height.max(1.0)
    }
}
