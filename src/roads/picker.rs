use glam::Vec2;
use rustc_hash::FxHashMap;

use super::{RoadPickProvider, RoadQuery};
use crate::geometry::ray::point_segment_distance;
use crate::options::RoadOptions;
use crate::picking::{PickObjectType, PickPoint, PickResult};
use crate::scene::{DataSource, RenderObject, Tile, TileFeatureData, TileKey};

/// One road centerline, flattened onto the ground plane.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadRecord {
    /// Render object the road was drawn by.
    pub object: usize,
    /// Feature index within that object's metadata.
    pub feature: usize,
    /// Drawn width in world units.
    pub width: f32,
    /// Tile-local centerline.
    pub points: Vec<Vec2>,
    min: Vec2,
    max: Vec2,
}

impl RoadRecord {
    /// Record a centerline. Needs at least one point.
    #[must_use]
    pub fn new(
        object: usize,
        feature: usize,
        width: f32,
        points: Vec<Vec2>,
    ) -> Self {
        let (min, max) = points.iter().fold(
            (Vec2::splat(f32::INFINITY), Vec2::splat(f32::NEG_INFINITY)),
            |(min, max), &p| (min.min(p), max.max(p)),
        );
        Self {
            object,
            feature,
            width,
            points,
            min,
            max,
        }
    }

    /// Whether `point` is within `half_width` of the centerline.
    #[must_use]
    pub fn hit(&self, point: Vec2, half_width: f32) -> bool {
        let margin = Vec2::splat(half_width);
        if point.cmplt(self.min - margin).any()
            || point.cmpgt(self.max + margin).any()
        {
            return false;
        }
        self.points.windows(2).any(|segment| {
            point_segment_distance(point, segment[0], segment[1])
                <= half_width
        })
    }
}

/// Road acceleration data of one registered tile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoadIntersectionData {
    /// Every road centerline in the tile.
    pub roads: Vec<RoadRecord>,
}

/// Ground-plane road picker keyed by data source, then tile.
#[derive(Debug, Clone, Default)]
pub struct RoadPicker {
    options: RoadOptions,
    sources: FxHashMap<String, FxHashMap<TileKey, RoadIntersectionData>>,
}

impl RoadPicker {
    /// Create a picker with no registered tiles.
    #[must_use]
    pub fn new(options: RoadOptions) -> Self {
        Self {
            options,
            sources: FxHashMap::default(),
        }
    }

    /// Number of tiles holding road data, over all sources.
    #[must_use]
    pub fn registered_tiles(&self) -> usize {
        self.sources.values().map(FxHashMap::len).sum()
    }

    /// Road data of a registered tile.
    #[must_use]
    pub fn tile_data(
        &self,
        source: &DataSource,
        key: TileKey,
    ) -> Option<&RoadIntersectionData> {
        self.sources.get(&source.name)?.get(&key)
    }

    fn build(&self, tile: &Tile) -> RoadIntersectionData {
        let mut roads = Vec::new();
        for (object_index, object) in tile.objects().iter().enumerate() {
            if !object.displaced {
                continue;
            }
            let Some(feature) = tile.feature_data(object) else {
                continue;
            };
            if !feature.geometry.is_line() {
                continue;
            }
            let width = tile
                .technique(object)
                .and_then(|t| t.line_width)
                .unwrap_or(self.options.default_width);
            collect_centerlines(
                object_index,
                object,
                feature,
                width,
                &mut roads,
            );
        }
        RoadIntersectionData { roads }
    }
}

/// One polyline per feature range; without `starts` the whole buffer is a
/// single road.
fn collect_centerlines(
    object_index: usize,
    object: &RenderObject,
    feature: &TileFeatureData,
    width: f32,
    roads: &mut Vec<RoadRecord>,
) {
    let len = object.buffer_len();
    let count = feature.starts().len().max(1);
    for i in 0..count {
        let range = if feature.starts().is_empty() {
            0..len
        } else {
            let Some(range) = feature.feature_range(i, len) else {
                continue;
            };
            range
        };
        let points: Vec<Vec2> = range
            .filter_map(|j| object.vertex(j))
            .map(|p| p.truncate())
            .collect();
        if points.len() >= 2 {
            roads.push(RoadRecord::new(object_index, i, width, points));
        }
    }
}

impl RoadPickProvider for RoadPicker {
    fn configure(&mut self, options: &RoadOptions) {
        self.options = options.clone();
        if !self.options.enabled {
            self.sources.clear();
        }
    }

    fn register_tile(
        &mut self,
        source: &DataSource,
        tile: &Tile,
    ) -> Option<&RoadIntersectionData> {
        if !self.options.enabled {
            return None;
        }
        let data = self.build(tile);
        if data.roads.is_empty() {
            self.unregister_tile(source, tile.key);
            return None;
        }
        log::trace!(
            "registered {} roads for tile {} of {}",
            data.roads.len(),
            tile.key,
            source.name
        );
        let tiles = self.sources.entry(source.name.clone()).or_default();
        if tiles.insert(tile.key, data).is_some() {
            log::warn!(
                "tile {} of {} registered twice for road picking, replacing",
                tile.key,
                source.name
            );
        }
        tiles.get(&tile.key)
    }

    fn unregister_tile(&mut self, source: &DataSource, key: TileKey) {
        let Some(tiles) = self.sources.get_mut(&source.name) else {
            return;
        };
        let _ = tiles.remove(&key);
        if tiles.is_empty() {
            let _ = self.sources.remove(&source.name);
        }
    }

    fn intersect_roads<'a>(
        &self,
        source: &DataSource,
        tile: &'a Tile,
        query: &RoadQuery,
        results: &mut Vec<PickResult<'a>>,
    ) {
        let Some(data) = self.tile_data(source, tile.key) else {
            return;
        };
        let local = (query.ground_point - tile.center).truncate();
        let distance = query.camera_position.distance(query.ground_point);
        let objects = tile.objects();

        for road in &data.roads {
            let half_width = road.width.max(query.min_width) * 0.5;
            if !road.hit(local, half_width) {
                continue;
            }
            let Some(object) = objects.get(road.object) else {
                continue;
            };
            let feature = tile.feature_data(object);
            let mut result = PickResult::new(
                PickObjectType::Line,
                PickPoint::World(query.ground_point),
                distance,
            );
            result.feature_id =
                feature.and_then(|f| f.ids().get(road.feature).copied());
            result.user_data = feature.and_then(|f| f.obj_info(road.feature));
            if query.with_technique {
                result.technique = tile.technique(object);
            }
            results.push(result);
        }
    }
}
