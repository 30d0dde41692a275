//! Broad-phase rejection of tiles the pick ray cannot touch.

use crate::geometry::Ray;
use crate::scene::{Tile, TileGroup};

/// Tiles from pickable sources whose world bounding box the ray crosses, in
/// group order.
///
/// Terrain and background sources are skipped without testing.
pub fn tiles_under_ray<'a>(
    ray: &Ray,
    groups: &'a [TileGroup],
) -> Vec<&'a Tile> {
    let mut tested = 0_usize;
    let hits: Vec<&Tile> = groups
        .iter()
        .filter(|group| group.source.is_pickable())
        .flat_map(|group| group.tiles.iter())
        .filter(|tile| {
            tested += 1;
            let hit = tile.world_bounds().intersects_ray(ray);
            if hit {
                log::trace!("pick ray crosses tile {}", tile.key);
            }
            hit
        })
        .collect();
    log::trace!("broad phase kept {} of {tested} tiles", hits.len());
    hits
}
