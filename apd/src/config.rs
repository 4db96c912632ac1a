use serde::{Deserialize, Serialize};

use terra_rs::geometry::rescale::RescaleConfig;

use crate::io::svg_util::SvgDrawOptions;

/// Configuration for the drag driver
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApdConfig {
    /// Configuration of the area-preserving rescaler
    pub rescale_config: RescaleConfig,
    /// Feature property holding the country names in the input map
    pub name_property: String,
    /// Seed for the PRNG. If undefined, the driver will run in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Number of Move events in a generated walk session
    pub walk_moves: usize,
    /// Standard deviation of a single walk step, in degrees
    pub walk_step_sigma: f64,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for ApdConfig {
    fn default() -> Self {
        Self {
            rescale_config: RescaleConfig::default(),
            name_property: "name".to_string(),
            prng_seed: Some(0),
            walk_moves: 40,
            walk_step_sigma: 1.5,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
