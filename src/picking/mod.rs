//! CPU hit-testing against a tiled map scene.
//!
//! A screen position is turned into a world ray, tiles whose bounds the ray
//! crosses are ray-tested object by object, and each hit is resolved to the
//! feature it belongs to. Label hits and ground-plane road hits are merged
//! in, and the whole list is ordered by distance.

mod classify;
mod cull;
mod feature_index;
mod handler;
mod labels;
mod overlay;
mod raycast;
mod result;

pub use classify::pick_object_type;
pub use cull::tiles_under_ray;
pub use feature_index::{
    feature_index_in_starts, feature_index_linear, resolve_feature_index,
};
pub use handler::{PickContext, PickHandler};
pub use labels::LabelPicker;
pub use overlay::{DebugOverlay, NoOverlay, OverlayRecorder, OverlayShape};
pub use raycast::{MeshRaycaster, RayHit, Raycaster};
pub use result::{Intersection, PickObjectType, PickPoint, PickResult};
