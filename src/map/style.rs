//! Maps the (big map, single run) state to a route style descriptor.

use crate::core::config::MapConfig;
use crate::core::constants::DASH_PATTERN;
use crate::render::Color;
use serde::{Deserialize, Serialize};

/// Derived styling decision for the route pass. Recomputed on every input
/// change; holds no identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStyle {
    pub color: Color,
    pub weight: f32,
    pub opacity: f32,
    /// Dash is only ever applied to multi-track rendering, never to a
    /// highlighted single run.
    pub dash_pattern: Option<[f32; 2]>,
}

/// Pure and total: identical inputs always yield an identical descriptor.
pub fn resolve(is_big_map: bool, is_single_run: bool, config: &MapConfig) -> RouteStyle {
    RouteStyle {
        color: config.main_color,
        weight: if is_big_map { 1.0 } else { 2.0 },
        opacity: if is_single_run {
            1.0
        } else {
            config.line_opacity
        },
        dash_pattern: if config.use_dash_line && !is_single_run {
            Some(DASH_PATTERN)
        } else {
            None
        },
    }
}
