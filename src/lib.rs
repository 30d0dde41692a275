// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! CPU picking for tiled 3D map scenes.
//!
//! Given a camera and a screen position, tilepick reports every map element
//! under that position (text labels, ray-tested tile geometry and roads)
//! ordered nearest first, with the source feature's metadata attached.
//!
//! # Key entry points
//!
//! - [`picking::PickHandler`] - runs pick queries and keeps per-tile road
//!   data
//! - [`picking::PickContext`] - the camera, viewport, visible tiles and
//!   label system a query reads
//! - [`scene::Tile`] - render objects plus their feature metadata tables
//! - [`options::Options`] - runtime configuration (result shaping, roads,
//!   diagnostics)
//!
//! # Query pipeline
//!
//! screen point → world ray → label hits → tile culling → per-object
//! raycast → feature resolution → ground-plane road hits → stable sort by
//! distance → optional truncation.

pub mod camera;
pub mod error;
pub mod geometry;
pub mod options;
pub mod picking;
pub mod roads;
pub mod scene;
pub mod util;

pub use error::PickError;
