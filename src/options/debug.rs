use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Diagnostic toggles. Neither changes query results.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Debug", inline)]
#[serde(default)]
pub struct DebugOptions {
    /// Feed the pick ray, culled tile boxes and hits to the debug overlay.
    #[schemars(title = "Show Overlay")]
    pub show_overlay: bool,
    /// Log per-phase query timings at debug level.
    #[schemars(title = "Log Timings")]
    pub log_timings: bool,
}
