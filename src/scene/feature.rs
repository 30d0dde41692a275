use serde::{Deserialize, Serialize};

use crate::error::PickError;
use crate::geometry::OrientedBox;

/// Per-feature metadata record, as decoded from the tile's source data.
///
/// The picker only ever hands out shared references to these.
pub type ObjInfo = serde_json::Map<String, serde_json::Value>;

/// Geometry category a batched buffer was generated from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum GeometryKind {
    /// No category recorded.
    #[default]
    Unspecified,
    /// Point markers.
    Point,
    /// Text glyph quads anchored at a point.
    Text,
    /// Plain line.
    Line,
    /// Line extruded into a ribbon.
    ExtrudedLine,
    /// Solid (screen-width) line.
    SolidLine,
    /// Text laid out along a path.
    TextPath,
    /// Flat polygon fill.
    Polygon,
    /// Polygon extruded into a prism.
    ExtrudedPolygon,
    /// Generic 3D model.
    Object3d,
    /// Any other generated geometry.
    Other,
}

impl GeometryKind {
    /// Whether this category is drawn as a line.
    #[must_use]
    pub fn is_line(self) -> bool {
        matches!(
            self,
            Self::Line | Self::ExtrudedLine | Self::SolidLine | Self::TextPath
        )
    }
}

/// Rendering technique descriptor attached to pick results on request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technique {
    /// Style name, e.g. `"solid-line"`.
    pub name: String,
    /// Index of this technique in the tile's technique table.
    pub index: usize,
    /// Line width in world units, for line techniques.
    pub line_width: Option<f32>,
}

/// Handle into a tile's feature-data side table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeatureDataId(pub usize);

/// Packed metadata for one batched render object.
///
/// `starts[i]` is the buffer offset (index-buffer position for indexed
/// triangles, vertex index otherwise) where feature `i` begins, and
/// `obj_infos[i]` is its metadata record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TileFeatureData {
    /// Category the buffer was generated from.
    pub geometry: GeometryKind,
    starts: Vec<u32>,
    obj_infos: Vec<ObjInfo>,
    ids: Vec<u64>,
    bounds: Vec<OrientedBox>,
}

impl TileFeatureData {
    /// Build feature data, checking that `starts` is strictly ascending and
    /// parallel to `obj_infos` when both are present.
    pub fn new(
        geometry: GeometryKind,
        starts: Vec<u32>,
        obj_infos: Vec<ObjInfo>,
    ) -> Result<Self, PickError> {
        if let Some(pos) = starts.windows(2).position(|w| w[0] >= w[1]) {
            return Err(PickError::InvalidFeatureData(format!(
                "starts not strictly ascending at {pos}: {} >= {}",
                starts[pos],
                starts[pos + 1]
            )));
        }
        if !starts.is_empty()
            && !obj_infos.is_empty()
            && starts.len() != obj_infos.len()
        {
            return Err(PickError::InvalidFeatureData(format!(
                "{} starts but {} obj_infos",
                starts.len(),
                obj_infos.len()
            )));
        }
        Ok(Self {
            geometry,
            starts,
            obj_infos,
            ids: Vec::new(),
            bounds: Vec::new(),
        })
    }

    /// Attach source feature IDs.
    #[must_use]
    pub fn with_ids(mut self, ids: Vec<u64>) -> Self {
        self.ids = ids;
        self
    }

    /// Attach per-feature bounding volumes (debug display only).
    #[must_use]
    pub fn with_bounds(mut self, bounds: Vec<OrientedBox>) -> Self {
        self.bounds = bounds;
        self
    }

    /// Feature start offsets, ascending.
    #[must_use]
    pub fn starts(&self) -> &[u32] {
        &self.starts
    }

    /// Source feature IDs.
    #[must_use]
    pub fn ids(&self) -> &[u64] {
        &self.ids
    }

    /// Metadata record of feature `index`.
    #[must_use]
    pub fn obj_info(&self, index: usize) -> Option<&ObjInfo> {
        self.obj_infos.get(index)
    }

    /// Bounding volume of feature `index`, if one was attached.
    #[must_use]
    pub fn feature_bounds(&self, index: usize) -> Option<&OrientedBox> {
        self.bounds.get(index)
    }

    /// The feature ID, when this buffer holds exactly one feature.
    #[must_use]
    pub fn single_feature_id(&self) -> Option<u64> {
        match self.ids.as_slice() {
            [id] => Some(*id),
            _ => None,
        }
    }

    /// Buffer range `[start, end)` occupied by feature `index`, with the
    /// last feature running to `buffer_len`.
    #[must_use]
    pub fn feature_range(
        &self,
        index: usize,
        buffer_len: usize,
    ) -> Option<std::ops::Range<usize>> {
        let start = *self.starts.get(index)? as usize;
        let end = self
            .starts
            .get(index + 1)
            .map_or(buffer_len, |&next| next as usize);
        (start <= end && end <= buffer_len).then_some(start..end)
    }
}
