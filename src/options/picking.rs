use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Result-shaping options for pick queries.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Picking", inline)]
#[serde(default)]
pub struct PickingOptions {
    /// Attach the rendering technique to each result.
    #[schemars(title = "Pick Technique")]
    pub pick_technique: bool,
    /// Keep at most this many results after sorting.
    #[schemars(title = "Max Results")]
    pub max_result_count: Option<usize>,
}
