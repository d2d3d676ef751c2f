use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::consts::{
    DEFAULT_CONTRAST_FACTOR, DEFAULT_DARK_COLOR, DEFAULT_LIGHT_COLOR, DEFAULT_MAX_LONGEST_EDGE,
    DEFAULT_MIN_SHORTEST_EDGE,
};
use crate::error::Result;
use crate::filters::levels::validate_factor;
use crate::resize::validate_bounds;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Midtone contrast factor (> 0, 1.0 = no change).
    pub contrast_factor: f32,
    /// Color that black maps to in the normal duotone.
    pub dark_color: Rgb,
    /// Color that white maps to in the normal duotone.
    pub light_color: Rgb,
    pub resize: ResizeConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            contrast_factor: DEFAULT_CONTRAST_FACTOR,
            dark_color: DEFAULT_DARK_COLOR,
            light_color: DEFAULT_LIGHT_COLOR,
            resize: ResizeConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Check parameters before any pixel work is done.
    pub fn validate(&self) -> Result<()> {
        validate_factor(self.contrast_factor)?;
        validate_bounds(self.resize.max_longest_edge, self.resize.min_shortest_edge)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeConfig {
    /// Longest edge is scaled down to this many pixels.
    pub max_longest_edge: u32,
    /// Shortest edge is scaled up to at least this many pixels.
    /// Wins over `max_longest_edge` when both cannot hold.
    pub min_shortest_edge: u32,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            max_longest_edge: DEFAULT_MAX_LONGEST_EDGE,
            min_shortest_edge: DEFAULT_MIN_SHORTEST_EDGE,
        }
    }
}
