use glam::Vec3;

use super::FeatureDataId;

/// How a render object's vertices are assembled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// Triangle list, optionally indexed.
    Triangles,
    /// Independent line segments (vertex pairs), optionally indexed.
    Lines,
    /// Discrete points drawn as sprites of the given world radius. One
    /// point is one feature.
    Points {
        /// Hit radius in world units.
        radius: f32,
    },
}

/// One renderable batch inside a tile. Positions are tile-local.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderObject {
    /// Vertex assembly.
    pub primitive: Primitive,
    /// Vertex positions relative to the tile center.
    pub positions: Vec<Vec3>,
    /// Optional index buffer.
    pub indices: Option<Vec<u32>>,
    /// Entry in the owning tile's feature-data side table.
    pub feature: Option<FeatureDataId>,
    /// Entry in the owning tile's technique table.
    pub technique: Option<usize>,
    /// Geometry is displaced in the vertex shader, so its buffer positions
    /// are not where it is drawn. Such objects are skipped by ray tests and
    /// picked through the road picker instead.
    pub displaced: bool,
}

impl RenderObject {
    fn with_primitive(primitive: Primitive, positions: Vec<Vec3>) -> Self {
        Self {
            primitive,
            positions,
            indices: None,
            feature: None,
            technique: None,
            displaced: false,
        }
    }

    /// Triangle mesh.
    #[must_use]
    pub fn triangles(positions: Vec<Vec3>, indices: Option<Vec<u32>>) -> Self {
        Self {
            indices,
            ..Self::with_primitive(Primitive::Triangles, positions)
        }
    }

    /// Line segments from consecutive vertex pairs.
    #[must_use]
    pub fn lines(positions: Vec<Vec3>) -> Self {
        Self::with_primitive(Primitive::Lines, positions)
    }

    /// Point sprites.
    #[must_use]
    pub fn points(positions: Vec<Vec3>, radius: f32) -> Self {
        Self::with_primitive(Primitive::Points { radius }, positions)
    }

    /// Link this object to feature data in its tile.
    #[must_use]
    pub fn with_feature(mut self, feature: FeatureDataId) -> Self {
        self.feature = Some(feature);
        self
    }

    /// Link this object to a technique in its tile.
    #[must_use]
    pub fn with_technique(mut self, technique: usize) -> Self {
        self.technique = Some(technique);
        self
    }

    /// Mark the geometry as shader-displaced.
    #[must_use]
    pub fn displaced(mut self) -> Self {
        self.displaced = true;
        self
    }

    /// Whether this object is drawn as discrete points.
    #[must_use]
    pub fn is_points(&self) -> bool {
        matches!(self.primitive, Primitive::Points { .. })
    }

    /// Number of entries in the buffer that `starts` offsets refer to: the
    /// index count when indexed, otherwise the vertex count.
    #[must_use]
    pub fn buffer_len(&self) -> usize {
        self.indices
            .as_ref()
            .map_or(self.positions.len(), Vec::len)
    }

    /// Vertex position at buffer offset `i`, following the index buffer if
    /// there is one.
    #[must_use]
    pub fn vertex(&self, i: usize) -> Option<Vec3> {
        let vertex = match &self.indices {
            Some(indices) => *indices.get(i)? as usize,
            None => i,
        };
        self.positions.get(vertex).copied()
    }
}
