use std::fmt;

use glam::Vec3;

use super::{FeatureDataId, RenderObject, Technique, TileFeatureData};
use crate::geometry::OrientedBox;

// ---------------------------------------------------------------------------
// Data sources
// ---------------------------------------------------------------------------

/// What kind of content a data source streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataSourceKind {
    /// Vector map features (pickable).
    #[default]
    Vector,
    /// Terrain elevation meshes.
    Terrain,
    /// Background/ground planes.
    Background,
}

/// A named tile source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSource {
    /// Source name, for logs.
    pub name: String,
    /// Content kind.
    pub kind: DataSourceKind,
}

impl DataSource {
    /// Vector source with the given name.
    #[must_use]
    pub fn vector(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: DataSourceKind::Vector,
        }
    }

    /// Whether tiles from this source take part in geometry picking.
    /// Terrain and background sources are synthetic and never do.
    #[must_use]
    pub fn is_pickable(&self) -> bool {
        self.kind == DataSourceKind::Vector
    }
}

// ---------------------------------------------------------------------------
// Tiles
// ---------------------------------------------------------------------------

/// Tile address in a quadtree tiling scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileKey {
    /// Zoom level.
    pub level: u8,
    /// Row at that level.
    pub row: u32,
    /// Column at that level.
    pub column: u32,
}

impl TileKey {
    /// Create a tile key.
    #[must_use]
    pub fn new(level: u8, row: u32, column: u32) -> Self {
        Self { level, row, column }
    }
}

impl fmt::Display for TileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.level, self.row, self.column)
    }
}

/// A renderable tile: render objects in tile-local coordinates plus the side
/// tables they reference.
#[derive(Debug, Clone)]
pub struct Tile {
    /// Tile address.
    pub key: TileKey,
    /// World-space origin of the tile-local frame.
    pub center: Vec3,
    /// Tile-local bounding volume.
    pub bounds: OrientedBox,
    objects: Vec<RenderObject>,
    features: Vec<TileFeatureData>,
    techniques: Vec<Technique>,
}

impl Tile {
    /// Empty tile.
    #[must_use]
    pub fn new(key: TileKey, center: Vec3, bounds: OrientedBox) -> Self {
        Self {
            key,
            center,
            bounds,
            objects: Vec::new(),
            features: Vec::new(),
            techniques: Vec::new(),
        }
    }

    /// Store feature data and return its handle.
    pub fn add_feature_data(&mut self, data: TileFeatureData) -> FeatureDataId {
        self.features.push(data);
        FeatureDataId(self.features.len() - 1)
    }

    /// Store a technique, overwriting its `index` with its table slot.
    pub fn add_technique(&mut self, mut technique: Technique) -> usize {
        let index = self.techniques.len();
        technique.index = index;
        self.techniques.push(technique);
        index
    }

    /// Append a render object and return its index.
    pub fn add_object(&mut self, object: RenderObject) -> usize {
        self.objects.push(object);
        self.objects.len() - 1
    }

    /// Render objects in draw order.
    #[must_use]
    pub fn objects(&self) -> &[RenderObject] {
        &self.objects
    }

    /// Feature data referenced by `object`, if any.
    #[must_use]
    pub fn feature_data(
        &self,
        object: &RenderObject,
    ) -> Option<&TileFeatureData> {
        object.feature.and_then(|id| self.features.get(id.0))
    }

    /// Technique referenced by `object`, if any.
    #[must_use]
    pub fn technique(&self, object: &RenderObject) -> Option<&Technique> {
        object.technique.and_then(|i| self.techniques.get(i))
    }

    /// Bounding volume in world space.
    #[must_use]
    pub fn world_bounds(&self) -> OrientedBox {
        self.bounds.translated(self.center)
    }
}

/// The tiles currently rendered for one data source.
#[derive(Debug, Clone)]
pub struct TileGroup {
    /// Source the tiles came from.
    pub source: DataSource,
    /// Visible tiles.
    pub tiles: Vec<Tile>,
}

impl TileGroup {
    /// Group `tiles` under `source`.
    #[must_use]
    pub fn new(source: DataSource, tiles: Vec<Tile>) -> Self {
        Self { source, tiles }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::GeometryKind;

    fn tile() -> Tile {
        Tile::new(
            TileKey::new(14, 5, 9),
            Vec3::new(1000.0, 2000.0, 0.0),
            OrientedBox::from_min_max(
                Vec3::new(-50.0, -50.0, 0.0),
                Vec3::new(50.0, 50.0, 10.0),
            ),
        )
    }

    #[test]
    fn side_tables_resolve_from_objects() {
        let mut tile = tile();
        let fid = tile.add_feature_data(
            TileFeatureData::new(GeometryKind::Polygon, Vec::new(), Vec::new())
                .unwrap(),
        );
        let tid = tile.add_technique(Technique {
            name: "fill".into(),
            index: 99,
            line_width: None,
        });
        let plain = tile.add_object(RenderObject::lines(Vec::new()));
        let linked = tile.add_object(
            RenderObject::triangles(Vec::new(), None)
                .with_feature(fid)
                .with_technique(tid),
        );

        let objects = tile.objects();
        assert!(tile.feature_data(&objects[plain]).is_none());
        let data = tile.feature_data(&objects[linked]);
        assert_eq!(data.map(|d| d.geometry), Some(GeometryKind::Polygon));
        let technique = tile.technique(&objects[linked]);
        assert_eq!(technique.map(|t| t.index), Some(0));
    }

    #[test]
    fn world_bounds_follow_center() {
        let bounds = tile().world_bounds();
        assert_eq!(bounds.center, Vec3::new(1000.0, 2000.0, 5.0));
    }

    #[test]
    fn only_vector_sources_are_pickable() {
        assert!(DataSource::vector("osm").is_pickable());
        let terrain = DataSource {
            name: "dem".into(),
            kind: DataSourceKind::Terrain,
        };
        assert!(!terrain.is_pickable());
    }

    #[test]
    fn tile_key_display() {
        assert_eq!(TileKey::new(3, 1, 2).to_string(), "3/1/2");
    }
}
