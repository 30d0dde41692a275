use glam::{Vec2, Vec3};

/// Below this, a divisor is treated as zero.
const EPSILON: f32 = 1e-8;

/// A half-line in world or tile-local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray, normalizing `direction`.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at parameter `t` along the ray.
    #[inline]
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// The same ray expressed relative to `offset` (world → tile-local).
    #[inline]
    #[must_use]
    pub fn relative_to(&self, offset: Vec3) -> Self {
        Self {
            origin: self.origin - offset,
            direction: self.direction,
        }
    }
}

/// Closest approach between a ray and a line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentApproach {
    /// Ray parameter of the closest point on the ray.
    pub ray_t: f32,
    /// Closest point on the segment.
    pub segment_point: Vec3,
    /// Distance between the two closest points.
    pub distance: f32,
}

/// Ray-sphere intersection test.
///
/// Returns the distance along the ray to the first intersection in front of
/// the origin, or `None` if there is none.
pub fn ray_sphere_intersect(
    ray: &Ray,
    center: Vec3,
    radius: f32,
) -> Option<f32> {
    let oc = ray.origin - center;
    let a = ray.direction.dot(ray.direction);
    if a < EPSILON {
        return None;
    }
    let b = 2.0 * oc.dot(ray.direction);
    let c = oc.dot(oc) - radius * radius;
    let discriminant = b * b - 4.0 * a * c;

    if discriminant < 0.0 {
        return None;
    }

    let t = (-b - discriminant.sqrt()) / (2.0 * a);
    if t > 0.0 {
        Some(t)
    } else {
        // Try the far intersection (we're inside the sphere)
        let t2 = (-b + discriminant.sqrt()) / (2.0 * a);
        (t2 > 0.0).then_some(t2)
    }
}

/// Double-sided Möller–Trumbore ray-triangle test.
///
/// Returns the ray parameter of the hit, if it lies in front of the origin.
pub fn ray_triangle_intersect(
    ray: &Ray,
    a: Vec3,
    b: Vec3,
    c: Vec3,
) -> Option<f32> {
    let edge1 = b - a;
    let edge2 = c - a;
    let p = ray.direction.cross(edge2);
    let det = edge1.dot(p);
    if det.abs() < EPSILON {
        return None;
    }
    let inv_det = 1.0 / det;

    let s = ray.origin - a;
    let u = s.dot(p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = ray.direction.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = edge2.dot(q) * inv_det;
    (t > EPSILON).then_some(t)
}

/// Closest approach between a ray and the segment `a..b`.
///
/// The ray parameter is clamped to be non-negative, the segment parameter to
/// `[0, 1]`.
pub fn ray_segment_approach(ray: &Ray, a: Vec3, b: Vec3) -> SegmentApproach {
    let u = ray.direction;
    let v = b - a;
    let w0 = ray.origin - a;

    let uu = u.dot(u).max(EPSILON);
    let uv = u.dot(v);
    let vv = v.dot(v);
    let uw = u.dot(w0);
    let vw = v.dot(w0);

    let (t, s) = if vv < EPSILON {
        // Degenerate segment: closest point on the ray to `a`.
        ((-uw / uu).max(0.0), 0.0)
    } else {
        let denom = uu * vv - uv * uv;
        let s = if denom < EPSILON {
            0.0
        } else {
            ((uu * vw - uv * uw) / denom).clamp(0.0, 1.0)
        };
        let t = ((uv * s - uw) / uu).max(0.0);
        let s = ((vw + uv * t) / vv).clamp(0.0, 1.0);
        (t, s)
    };

    let on_ray = ray.at(t);
    let segment_point = a + v * s;
    SegmentApproach {
        ray_t: t,
        segment_point,
        distance: on_ray.distance(segment_point),
    }
}

/// Perpendicular distance from `p` to the 2D segment `a..b`.
pub fn point_segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq < EPSILON {
        return p.distance(a);
    }
    let s = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down_from(x: f32, y: f32) -> Ray {
        Ray::new(Vec3::new(x, y, 10.0), Vec3::NEG_Z)
    }

    #[test]
    fn sphere_hit_front_and_inside() {
        let ray = down_from(0.0, 0.0);
        let t = ray_sphere_intersect(&ray, Vec3::ZERO, 1.0);
        assert!((t.unwrap_or_default() - 9.0).abs() < 1e-5);

        let inside = Ray::new(Vec3::ZERO, Vec3::X);
        let t = ray_sphere_intersect(&inside, Vec3::ZERO, 2.0);
        assert!((t.unwrap_or_default() - 2.0).abs() < 1e-5);
    }

    #[test]
    fn sphere_behind_ray_is_missed() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::Z);
        assert!(ray_sphere_intersect(&ray, Vec3::ZERO, 1.0).is_none());
    }

    #[test]
    fn triangle_hit_is_double_sided() {
        let (a, b, c) = (Vec3::ZERO, Vec3::X * 2.0, Vec3::Y * 2.0);
        let ray = down_from(0.5, 0.5);
        assert_eq!(ray_triangle_intersect(&ray, a, b, c), Some(10.0));
        // Reversed winding still hits
        assert_eq!(ray_triangle_intersect(&ray, a, c, b), Some(10.0));
    }

    #[test]
    fn triangle_miss_outside_edges() {
        let (a, b, c) = (Vec3::ZERO, Vec3::X, Vec3::Y);
        let outside = down_from(0.8, 0.8);
        assert!(ray_triangle_intersect(&outside, a, b, c).is_none());
        let beside = down_from(-0.1, 0.5);
        assert!(ray_triangle_intersect(&beside, a, b, c).is_none());
    }

    #[test]
    fn segment_approach_crossing() {
        let ray = down_from(0.5, 0.1);
        let approach =
            ray_segment_approach(&ray, Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));
        assert!((approach.distance - 0.1).abs() < 1e-5);
        assert!((approach.ray_t - 10.0).abs() < 1e-4);
        assert!((approach.segment_point.x - 0.5).abs() < 1e-5);
    }

    #[test]
    fn segment_approach_clamps_to_endpoint() {
        let ray = down_from(3.0, 0.0);
        let approach =
            ray_segment_approach(&ray, Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));
        assert!((approach.distance - 2.0).abs() < 1e-5);
        assert_eq!(approach.segment_point, Vec3::X);
    }

    #[test]
    fn point_segment_distance_cases() {
        let (a, b) = (Vec2::ZERO, Vec2::new(10.0, 0.0));
        assert_eq!(point_segment_distance(Vec2::new(5.0, 3.0), a, b), 3.0);
        assert_eq!(point_segment_distance(Vec2::new(-4.0, 3.0), a, b), 5.0);
        // Degenerate segment collapses to a point
        assert_eq!(point_segment_distance(Vec2::new(3.0, 4.0), a, a), 5.0);
    }
}
