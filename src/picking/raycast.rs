//! Precise ray tests against render objects.
//!
//! The [`Raycaster`] trait is the seam to the rendering toolkit's own
//! intersection routines; [`MeshRaycaster`] is a CPU implementation over the
//! scene's vertex buffers.

use glam::Vec3;

use crate::geometry::ray::{
    ray_segment_approach, ray_sphere_intersect, ray_triangle_intersect,
};
use crate::geometry::Ray;
use crate::scene::{Primitive, RenderObject};

/// One raw hit of a ray against a render object, in the object's frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Hit position.
    pub point: Vec3,
    /// Distance along the ray.
    pub distance: f32,
    /// Triangle index, for triangle meshes.
    pub face_index: Option<u32>,
    /// Buffer index of the segment start or the point, for lines and
    /// points.
    pub index: Option<u32>,
}

/// Ray-object intersection primitive.
pub trait Raycaster {
    /// Append every hit of `ray` on `object` to `hits`.
    ///
    /// `ray` is expressed in the object's (tile-local) frame.
    fn intersect_object(
        &self,
        ray: &Ray,
        object: &RenderObject,
        hits: &mut Vec<RayHit>,
    );
}

/// CPU raycaster over triangle, line-segment and point buffers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshRaycaster {
    /// Maximum ray-to-segment distance that counts as a line hit.
    pub line_threshold: f32,
}

impl Default for MeshRaycaster {
    fn default() -> Self {
        Self {
            line_threshold: 1.0,
        }
    }
}

impl MeshRaycaster {
    fn intersect_triangles(
        ray: &Ray,
        object: &RenderObject,
        hits: &mut Vec<RayHit>,
    ) {
        let face_count = object.buffer_len() / 3;
        for face in 0..face_count {
            let base = face * 3;
            let (Some(a), Some(b), Some(c)) = (
                object.vertex(base),
                object.vertex(base + 1),
                object.vertex(base + 2),
            ) else {
                continue;
            };
            if let Some(t) = ray_triangle_intersect(ray, a, b, c) {
                hits.push(RayHit {
                    point: ray.at(t),
                    distance: t,
                    face_index: Some(face as u32),
                    index: None,
                });
            }
        }
    }

    fn intersect_lines(
        &self,
        ray: &Ray,
        object: &RenderObject,
        hits: &mut Vec<RayHit>,
    ) {
        let len = object.buffer_len();
        for start in (0..len.saturating_sub(1)).step_by(2) {
            let (Some(a), Some(b)) =
                (object.vertex(start), object.vertex(start + 1))
            else {
                continue;
            };
            let approach = ray_segment_approach(ray, a, b);
            if approach.ray_t > 0.0
                && approach.distance <= self.line_threshold
            {
                hits.push(RayHit {
                    point: approach.segment_point,
                    distance: approach.ray_t,
                    face_index: None,
                    index: Some(start as u32),
                });
            }
        }
    }

    fn intersect_points(
        ray: &Ray,
        object: &RenderObject,
        radius: f32,
        hits: &mut Vec<RayHit>,
    ) {
        for (i, &position) in object.positions.iter().enumerate() {
            if let Some(t) = ray_sphere_intersect(ray, position, radius) {
                hits.push(RayHit {
                    point: ray.at(t),
                    distance: t,
                    face_index: None,
                    index: Some(i as u32),
                });
            }
        }
    }
}

impl Raycaster for MeshRaycaster {
    fn intersect_object(
        &self,
        ray: &Ray,
        object: &RenderObject,
        hits: &mut Vec<RayHit>,
    ) {
        // Drawn somewhere other than its buffer says.
        if object.displaced {
            return;
        }
        match object.primitive {
            Primitive::Triangles => {
                Self::intersect_triangles(ray, object, hits);
            }
            Primitive::Lines => self.intersect_lines(ray, object, hits),
            Primitive::Points { radius } => {
                Self::intersect_points(ray, object, radius, hits);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down_from(x: f32, y: f32) -> Ray {
        Ray::new(Vec3::new(x, y, 10.0), Vec3::NEG_Z)
    }

    fn two_quads() -> RenderObject {
        // Quad A over x in [0, 1], quad B over x in [2, 3]
        let positions = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
            Vec3::new(3.0, 1.0, 0.0),
            Vec3::new(2.0, 1.0, 0.0),
        ];
        let indices = vec![0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7];
        RenderObject::triangles(positions, Some(indices))
    }

    #[test]
    fn indexed_triangles_report_face_index() {
        let mut hits = Vec::new();
        MeshRaycaster::default().intersect_object(
            &down_from(2.8, 0.2),
            &two_quads(),
            &mut hits,
        );
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].face_index, Some(2));
        assert_eq!(hits[0].distance, 10.0);
        assert!(hits[0].point.distance(Vec3::new(2.8, 0.2, 0.0)) < 1e-5);
    }

    #[test]
    fn line_segments_within_threshold() {
        let line = RenderObject::lines(vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(0.0, 5.0, 0.0),
            Vec3::new(10.0, 5.0, 0.0),
        ]);
        let caster = MeshRaycaster {
            line_threshold: 0.5,
        };
        let mut hits = Vec::new();
        caster.intersect_object(&down_from(4.0, 5.3), &line, &mut hits);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].index, Some(2));

        hits.clear();
        caster.intersect_object(&down_from(4.0, 2.5), &line, &mut hits);
        assert!(hits.is_empty());
    }

    #[test]
    fn points_report_point_index() {
        let points = RenderObject::points(
            vec![Vec3::new(0.0, 0.0, 0.0), Vec3::new(5.0, 0.0, 0.0)],
            1.0,
        );
        let mut hits = Vec::new();
        MeshRaycaster::default().intersect_object(
            &down_from(5.2, 0.0),
            &points,
            &mut hits,
        );
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].index, Some(1));
        assert!(hits[0].distance < 10.0);
    }

    #[test]
    fn displaced_objects_are_never_hit() {
        let mut object = two_quads();
        object.displaced = true;
        let mut hits = Vec::new();
        MeshRaycaster::default().intersect_object(
            &down_from(0.5, 0.5),
            &object,
            &mut hits,
        );
        assert!(hits.is_empty());
    }
}
