use glam::{Vec2, Vec3};

use super::raycast::RayHit;
use crate::scene::{ObjInfo, Technique, TileKey};

/// What kind of map element a pick result refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PickObjectType {
    /// Hit on something without usable metadata.
    #[default]
    Unspecified,
    /// Point feature or text glyph anchored at a point.
    Point,
    /// Line feature of any flavor.
    Line,
    /// Polygon feature.
    Area,
    /// Text label, from the label system.
    Text,
    /// Icon, from the label system.
    Icon,
    /// Generic 3D object.
    Object3d,
}

/// Where a result was hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickPoint {
    /// Label-system screen position.
    Screen(Vec2),
    /// World-space position.
    World(Vec3),
}

/// Raw geometric detail of a ray-tested hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Tile the hit object belongs to.
    pub tile: TileKey,
    /// Index of the render object within its tile.
    pub object: usize,
    /// World-space hit point.
    pub point: Vec3,
    /// Distance from the ray origin.
    pub distance: f32,
    /// Triangle index, for triangle meshes.
    pub face_index: Option<u32>,
    /// Vertex, segment-start or point index, for lines and points.
    pub index: Option<u32>,
}

impl Intersection {
    /// Lift a tile-local raycast hit into world space.
    #[must_use]
    pub fn from_hit(
        hit: RayHit,
        tile: TileKey,
        object: usize,
        tile_center: Vec3,
    ) -> Self {
        Self {
            tile,
            object,
            point: hit.point + tile_center,
            distance: hit.distance,
            face_index: hit.face_index,
            index: hit.index,
        }
    }
}

/// One entry of a pick query's answer.
///
/// References point back into the scene (or label system) that produced
/// the result; nothing is copied.
#[derive(Debug, Clone, PartialEq)]
pub struct PickResult<'a> {
    /// Kind of element hit.
    pub category: PickObjectType,
    /// Hit position.
    pub point: PickPoint,
    /// Sort key: camera distance for geometry and roads, the label
    /// system's own depth for labels.
    pub distance: f32,
    /// Source feature ID, when the hit object holds a single feature.
    pub feature_id: Option<u64>,
    /// Ray-test detail. Absent for labels and roads.
    pub intersection: Option<Intersection>,
    /// Rendering technique, when technique picking is enabled.
    pub technique: Option<&'a Technique>,
    /// Metadata record of the hit feature.
    pub user_data: Option<&'a ObjInfo>,
}

impl<'a> PickResult<'a> {
    /// Result with only a category, position and distance.
    #[must_use]
    pub fn new(
        category: PickObjectType,
        point: PickPoint,
        distance: f32,
    ) -> Self {
        Self {
            category,
            point,
            distance,
            feature_id: None,
            intersection: None,
            technique: None,
            user_data: None,
        }
    }

    /// Hit on geometry without feature metadata.
    #[must_use]
    pub fn unspecified(intersection: Intersection) -> Self {
        Self {
            intersection: Some(intersection),
            ..Self::new(
                PickObjectType::Unspecified,
                PickPoint::World(intersection.point),
                intersection.distance,
            )
        }
    }

    /// World position of the hit, if it has one.
    #[must_use]
    pub fn world_point(&self) -> Option<Vec3> {
        match self.point {
            PickPoint::World(p) => Some(p),
            PickPoint::Screen(_) => None,
        }
    }
}
