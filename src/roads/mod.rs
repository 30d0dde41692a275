//! Road centerline picking.
//!
//! Road lines are widened in the vertex shader, so their buffers hold
//! centerlines rather than the drawn triangles and cannot be ray-tested.
//! Instead the pick ray is projected onto a ground plane and the resulting
//! point is tested against each road's centerline with its width.
//!
//! Tiles must be registered with [`RoadPickProvider::register_tile`] before
//! they can yield road hits. An unregistered tile silently produces none.
//! Road data is keyed by data source and tile address together, since two
//! sources can stream tiles with the same address.

mod picker;

use glam::Vec3;
pub use picker::{RoadIntersectionData, RoadPicker, RoadRecord};

use crate::options::RoadOptions;
use crate::picking::PickResult;
use crate::scene::{DataSource, Tile, TileKey};

/// Per-query inputs for road hit testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoadQuery {
    /// Eye position; result distances are measured from here.
    pub camera_position: Vec3,
    /// World-space intersection of the pick ray with the ground plane.
    pub ground_point: Vec3,
    /// Minimum hit width in world units at the ground point.
    pub min_width: f32,
    /// Attach the road's technique to results.
    pub with_technique: bool,
}

/// Road hit testing over registered tiles.
pub trait RoadPickProvider {
    /// Apply changed road options.
    fn configure(&mut self, options: &RoadOptions);

    /// Build and keep the road acceleration data for `tile` of `source`.
    ///
    /// Returns `None` when road picking is disabled or the tile has no
    /// roads. Registering a tile again replaces its data.
    fn register_tile(
        &mut self,
        source: &DataSource,
        tile: &Tile,
    ) -> Option<&RoadIntersectionData>;

    /// Drop the data of an evicted tile.
    fn unregister_tile(&mut self, source: &DataSource, key: TileKey);

    /// Append a `Line` result for every registered road of `tile` under
    /// `query.ground_point`.
    fn intersect_roads<'a>(
        &self,
        source: &DataSource,
        tile: &'a Tile,
        query: &RoadQuery,
        results: &mut Vec<PickResult<'a>>,
    );
}
