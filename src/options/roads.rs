use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Roads", inline)]
#[serde(default)]
/// Road centerline picking parameters.
pub struct RoadOptions {
    /// Hit-test shader-displaced road lines against the ground plane.
    #[schemars(title = "Enabled")]
    pub enabled: bool,
    /// Height (world z) of the ground reference plane.
    #[schemars(title = "Ground Height")]
    pub ground_height: f32,
    /// Width in world units for roads whose technique has none.
    #[schemars(
        title = "Default Width",
        range(min = 0.0, max = 100.0),
        extend("step" = 0.5)
    )]
    pub default_width: f32,
    /// Roads thinner than this on screen are widened to it for hit
    /// testing.
    #[schemars(
        title = "Min Hit Width (px)",
        range(min = 0.0, max = 32.0),
        extend("step" = 1.0)
    )]
    pub min_hit_width_px: f32,
}

impl Default for RoadOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            ground_height: 0.0,
            default_width: 2.0,
            min_hit_width_px: 4.0,
        }
    }
}
