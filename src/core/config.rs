//! Configuration inputs consumed, not owned, by the rendering core.
//!
//! Changing any of these values must never require touching selection or
//! fit logic; they are threaded through as plain data.

use crate::render::Color;

/// Which locale variant the map is presented for. The domestic locale gets
/// the region-aggregate treatment at world-scale zooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    Domestic,
    International,
}

impl Locale {
    pub fn is_domestic(&self) -> bool {
        matches!(self, Locale::Domestic)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    /// Raster basemap tile URL template.
    pub tile_url: String,
    /// Attribution string for the raster basemap.
    pub attribution: String,
    /// Vector basemap style document URL.
    pub style_url: String,
    /// Fixed route color, independent of selection state.
    pub main_color: Color,
    /// Line opacity used for multi-track rendering, < 1 so many overlapping
    /// tracks do not visually saturate.
    pub line_opacity: f32,
    /// Global toggle for dashed multi-track lines.
    pub use_dash_line: bool,
    /// Region-fill color for the province overlay.
    pub province_fill_color: Color,
    /// Locale flag deciding the region-aggregate treatment.
    pub locale: Locale,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            tile_url: "https://tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "© OpenStreetMap contributors".to_string(),
            style_url: "https://basemaps.cartocdn.com/gl/dark-matter-gl-style/style.json"
                .to_string(),
            main_color: Color::from_hex("#e0ed5e").unwrap_or(Color::rgb(224, 237, 94)),
            line_opacity: 0.4,
            use_dash_line: true,
            province_fill_color: Color::from_hex("#47b8e0").unwrap_or(Color::rgb(71, 184, 224)),
            locale: Locale::International,
        }
    }
}

impl MapConfig {
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_dash_line(mut self, enabled: bool) -> Self {
        self.use_dash_line = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MapConfig::default();
        assert!(config.line_opacity < 1.0);
        assert_eq!(config.locale, Locale::International);
        assert!(config.tile_url.contains("{z}/{x}/{y}"));
    }

    #[test]
    fn test_builder_style_overrides() {
        let config = MapConfig::default()
            .with_locale(Locale::Domestic)
            .with_dash_line(false);
        assert!(config.locale.is_domestic());
        assert!(!config.use_dash_line);
    }
}
