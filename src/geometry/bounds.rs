use glam::{Quat, Vec3};

use super::Ray;

/// Box defined by a center, half-extents along its own axes, and a rotation
/// from box-local to the enclosing frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedBox {
    /// Box center.
    pub center: Vec3,
    /// Half-size along each local axis. Zero is allowed (flat boxes).
    pub half_extents: Vec3,
    /// Rotation from box-local axes to the enclosing frame.
    pub rotation: Quat,
}

impl OrientedBox {
    /// Create an oriented box.
    #[must_use]
    pub fn new(center: Vec3, half_extents: Vec3, rotation: Quat) -> Self {
        Self {
            center,
            half_extents,
            rotation,
        }
    }

    /// Axis-aligned box spanning `min..max`.
    #[must_use]
    pub fn from_min_max(min: Vec3, max: Vec3) -> Self {
        Self {
            center: (min + max) * 0.5,
            half_extents: ((max - min) * 0.5).abs(),
            rotation: Quat::IDENTITY,
        }
    }

    /// The same box moved by `offset` (tile-local → world).
    #[inline]
    #[must_use]
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            center: self.center + offset,
            ..*self
        }
    }

    /// Slab test in the box frame. Only reports hit/no-hit.
    #[must_use]
    pub fn intersects_ray(&self, ray: &Ray) -> bool {
        if !self.half_extents.is_finite()
            || self.half_extents.min_element() < 0.0
        {
            return false;
        }

        let inv_rotation = self.rotation.inverse();
        let origin = inv_rotation * (ray.origin - self.center);
        let direction = inv_rotation * ray.direction;

        let mut t_min = 0.0_f32;
        let mut t_max = f32::INFINITY;
        for axis in 0..3 {
            let half = self.half_extents[axis];
            let o = origin[axis];
            let d = direction[axis];

            if d.abs() < 1e-12 {
                // Parallel to this slab: must start inside it.
                if o < -half || o > half {
                    return false;
                }
                continue;
            }

            let inv_d = 1.0 / d;
            let mut t0 = (-half - o) * inv_d;
            let mut t1 = (half - o) * inv_d;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_min > t_max {
                return false;
            }
        }
        true
    }
}
