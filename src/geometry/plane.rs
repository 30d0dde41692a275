use glam::Vec3;

use super::Ray;

/// A plane in 3D space: `normal · p + distance = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal pointing into the positive half-space.
    pub normal: Vec3,
    /// Signed distance from origin (`n · p + d = 0`).
    pub distance: f32,
}

impl Plane {
    /// Horizontal ground plane `z = height`, normal pointing up.
    #[must_use]
    pub fn ground(height: f32) -> Self {
        Self {
            normal: Vec3::Z,
            distance: -height,
        }
    }

    /// Signed distance from point to plane (positive = in front, negative =
    /// behind)
    #[inline]
    #[must_use]
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }

    /// Ray parameter where `ray` crosses this plane.
    ///
    /// `None` when the ray runs parallel to the plane or the crossing lies
    /// behind the ray origin.
    #[must_use]
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let denom = self.normal.dot(ray.direction);
        if denom.abs() < 1e-8 {
            return None;
        }
        let t = -self.distance_to_point(ray.origin) / denom;
        (t >= 0.0).then_some(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ground_plane_signed_distance() {
        let plane = Plane::ground(2.0);
        assert_eq!(plane.distance_to_point(Vec3::new(5.0, 5.0, 3.0)), 1.0);
        assert_eq!(plane.distance_to_point(Vec3::new(0.0, 0.0, -1.0)), -3.0);
    }

    #[test]
    fn ground_plane_ray_hit() {
        let plane = Plane::ground(1.0);
        let ray = Ray::new(Vec3::new(3.0, 4.0, 11.0), Vec3::NEG_Z);
        let t = plane.intersect_ray(&ray);
        assert_eq!(t, Some(10.0));
        assert_eq!(ray.at(10.0), Vec3::new(3.0, 4.0, 1.0));
    }

    #[test]
    fn ground_plane_rejects_parallel_and_receding_rays() {
        let plane = Plane::ground(0.0);
        let parallel = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::X);
        assert!(plane.intersect_ray(&parallel).is_none());
        let upward = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
        assert!(plane.intersect_ray(&upward).is_none());
    }
}
