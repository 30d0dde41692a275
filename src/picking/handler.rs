//! The pick query: labels, culled geometry and roads merged into one
//! distance-ordered list.

use web_time::Duration;

use super::cull::tiles_under_ray;
use super::feature_index::resolve_feature_index;
use super::overlay::{DebugOverlay, NoOverlay};
use super::raycast::{MeshRaycaster, RayHit, Raycaster};
use super::{
    pick_object_type, Intersection, LabelPicker, PickPoint, PickResult,
};
use crate::camera::{Camera, Viewport};
use crate::geometry::{Plane, Ray};
use crate::options::Options;
use crate::roads::{
    RoadIntersectionData, RoadPickProvider, RoadPicker, RoadQuery,
};
use crate::scene::{DataSource, Tile, TileGroup, TileKey};
use crate::util::phase_timer::PhaseTimer;

/// Everything a query reads from the host for one frame.
pub struct PickContext<'a> {
    /// Camera the scene was rendered with.
    pub camera: &'a Camera,
    /// Render target size.
    pub viewport: Viewport,
    /// Visible tiles, grouped by data source.
    pub tiles: &'a [TileGroup],
    /// Label system, if labels are drawn.
    pub labels: Option<&'a dyn LabelPicker>,
    /// Asks the host to draw another frame.
    pub request_redraw: Option<&'a dyn Fn()>,
}

impl<'a> PickContext<'a> {
    /// Context without labels or redraw callback.
    #[must_use]
    pub fn new(
        camera: &'a Camera,
        viewport: Viewport,
        tiles: &'a [TileGroup],
    ) -> Self {
        Self {
            camera,
            viewport,
            tiles,
            labels: None,
            request_redraw: None,
        }
    }

    /// Attach the label system.
    #[must_use]
    pub fn with_labels(mut self, labels: &'a dyn LabelPicker) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Attach a redraw callback, invoked once per query.
    #[must_use]
    pub fn with_redraw(mut self, request_redraw: &'a dyn Fn()) -> Self {
        self.request_redraw = Some(request_redraw);
        self
    }
}

/// Runs pick queries and owns per-tile road data.
///
/// Must not be re-entered from a callback of its own query.
pub struct PickHandler<O: DebugOverlay = NoOverlay> {
    options: Options,
    raycaster: Box<dyn Raycaster>,
    roads: Box<dyn RoadPickProvider>,
    overlay: O,
    last_timings: Vec<(&'static str, Duration)>,
}

impl PickHandler {
    /// Handler with the CPU mesh raycaster, ground-plane road picker and no
    /// debug overlay.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self::with_overlay(options, NoOverlay)
    }
}

impl<O: DebugOverlay> PickHandler<O> {
    /// Handler feeding diagnostics to `overlay` when `debug.show_overlay`
    /// is set.
    #[must_use]
    pub fn with_overlay(options: Options, overlay: O) -> Self {
        let roads = RoadPicker::new(options.roads.clone());
        Self {
            options,
            raycaster: Box::new(MeshRaycaster::default()),
            roads: Box::new(roads),
            overlay,
            last_timings: Vec::new(),
        }
    }

    /// Replace the ray-object intersection primitive.
    #[must_use]
    pub fn with_raycaster(mut self, raycaster: Box<dyn Raycaster>) -> Self {
        self.raycaster = raycaster;
        self
    }

    /// Replace the road picker. Tiles registered so far are not carried
    /// over.
    #[must_use]
    pub fn with_road_picker(
        mut self,
        mut roads: Box<dyn RoadPickProvider>,
    ) -> Self {
        roads.configure(&self.options.roads);
        self.roads = roads;
        self
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace options. Disabling road picking drops all road data.
    pub fn set_options(&mut self, options: Options) {
        self.roads.configure(&options.roads);
        self.options = options;
    }

    /// The debug overlay as left by the last query.
    #[must_use]
    pub fn overlay(&self) -> &O {
        &self.overlay
    }

    /// Per-phase timings of the last query. Empty unless
    /// `debug.log_timings` is set.
    #[must_use]
    pub fn last_timings(&self) -> &[(&'static str, Duration)] {
        &self.last_timings
    }

    /// Call once for every tile of `source` that becomes available, whether
    /// or not picking is in use yet. Tiles never registered give no road
    /// hits.
    pub fn register_tile(
        &mut self,
        source: &DataSource,
        tile: &Tile,
    ) -> Option<&RoadIntersectionData> {
        self.roads.register_tile(source, tile)
    }

    /// Call when a tile of `source` is evicted.
    pub fn unregister_tile(&mut self, source: &DataSource, key: TileKey) {
        self.roads.unregister_tile(source, key);
    }

    /// Everything under screen point (`screen_x`, `screen_y`), nearest
    /// first.
    ///
    /// Label results keep the label system's distances and are sorted
    /// together with world distances of geometry and road hits; equal
    /// distances keep label, geometry, road order.
    pub fn intersect_map_objects<'a>(
        &mut self,
        ctx: &PickContext<'a>,
        screen_x: f32,
        screen_y: f32,
    ) -> Vec<PickResult<'a>> {
        let mut timer =
            PhaseTimer::start("pick", self.options.debug.log_timings);
        let show_overlay = self.options.debug.show_overlay;
        self.overlay.reset();

        let ray = ctx.camera.screen_to_ray(ctx.viewport, screen_x, screen_y);
        if show_overlay {
            self.overlay.add_ray(&ray, ctx.camera.zfar);
        }

        let mut results = Vec::new();
        if let Some(labels) = ctx.labels {
            let position = ctx.viewport.to_label_space(screen_x, screen_y);
            labels.pick_text_elements(position, &mut results);
        }
        timer.lap("labels");

        let tiles = tiles_under_ray(&ray, ctx.tiles);
        timer.lap("cull");

        let hits = self.raycast_tiles(&ray, &tiles);
        timer.lap("raycast");

        for (tile, object_index, hit) in hits {
            let result = self.geometry_result(tile, object_index, hit);
            results.push(result);
        }
        timer.lap("classify");

        if self.options.roads.enabled {
            self.intersect_roads(ctx, &ray, &mut results);
        }
        timer.lap("roads");

        results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        if let Some(max) = self.options.picking.max_result_count {
            results.truncate(max);
        }
        timer.lap("sort");
        self.last_timings = timer.finish();

        if let Some(request_redraw) = ctx.request_redraw {
            request_redraw();
        }
        results
    }

    /// Raw hits on every object of the culled tiles, in tile then object
    /// order.
    fn raycast_tiles<'a>(
        &mut self,
        ray: &Ray,
        tiles: &[&'a Tile],
    ) -> Vec<(&'a Tile, usize, RayHit)> {
        let mut hits = Vec::new();
        let mut object_hits = Vec::new();
        for &tile in tiles {
            if self.options.debug.show_overlay {
                self.overlay.add_box(&tile.world_bounds(), true);
            }
            let local_ray = ray.relative_to(tile.center);
            for (object_index, object) in tile.objects().iter().enumerate() {
                object_hits.clear();
                self.raycaster.intersect_object(
                    &local_ray,
                    object,
                    &mut object_hits,
                );
                hits.extend(
                    object_hits.iter().map(|&hit| (tile, object_index, hit)),
                );
            }
        }
        hits
    }

    fn geometry_result<'a>(
        &mut self,
        tile: &'a Tile,
        object_index: usize,
        hit: RayHit,
    ) -> PickResult<'a> {
        let intersection =
            Intersection::from_hit(hit, tile.key, object_index, tile.center);
        let show_overlay = self.options.debug.show_overlay;
        if show_overlay {
            self.overlay.add_point(intersection.point);
        }

        let object = &tile.objects()[object_index];
        let Some(feature) = tile.feature_data(object) else {
            if object.feature.is_some() {
                log::warn!(
                    "tile {}: object {object_index} points past its feature \
                     table",
                    tile.key
                );
            }
            return PickResult::unspecified(intersection);
        };

        let feature_index = resolve_feature_index(
            object,
            Some(feature),
            hit.face_index,
            hit.index,
        );
        if show_overlay {
            if let Some(bounds) =
                feature_index.and_then(|i| feature.feature_bounds(i))
            {
                self.overlay.add_box(&bounds.translated(tile.center), true);
            }
        }

        PickResult {
            category: pick_object_type(feature.geometry),
            point: PickPoint::World(intersection.point),
            distance: intersection.distance,
            feature_id: feature.single_feature_id(),
            intersection: Some(intersection),
            technique: if self.options.picking.pick_technique {
                tile.technique(object)
            } else {
                None
            },
            user_data: feature_index.and_then(|i| feature.obj_info(i)),
        }
    }

    fn intersect_roads<'a>(
        &mut self,
        ctx: &PickContext<'a>,
        ray: &Ray,
        results: &mut Vec<PickResult<'a>>,
    ) {
        let ground = Plane::ground(self.options.roads.ground_height);
        let Some(t) = ground.intersect_ray(ray) else {
            return;
        };
        let ground_point = ray.at(t);
        if self.options.debug.show_overlay {
            self.overlay.add_point(ground_point);
        }

        let min_width = self.options.roads.min_hit_width_px
            * ctx.camera.world_per_pixel(ctx.viewport, t);
        let query = RoadQuery {
            camera_position: ctx.camera.eye,
            ground_point,
            min_width,
            with_technique: self.options.picking.pick_technique,
        };
        for group in ctx.tiles {
            for tile in &group.tiles {
                self.roads.intersect_roads(
                    &group.source,
                    tile,
                    &query,
                    results,
                );
            }
        }
    }
}
