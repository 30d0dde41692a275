//! Tile scene model consumed by the picker.
//!
//! Tiles, render objects and their per-feature metadata are produced by
//! tile geometry generation and owned by the tile-visibility system; the
//! picker only reads them. Per-object metadata lives in a typed side table
//! on each [`Tile`], referenced from [`RenderObject::feature`] by
//! [`FeatureDataId`].

mod feature;
mod object;
mod tile;

pub use feature::{
    FeatureDataId, GeometryKind, ObjInfo, Technique, TileFeatureData,
};
pub use object::{Primitive, RenderObject};
pub use tile::{DataSource, DataSourceKind, Tile, TileGroup, TileKey};
