//! Vector-tile backend adapter.
//!
//! Models a GL-style vector engine: a basemap style document, an optional
//! province-fill pass, and a route line pass. Unlike the raster backend,
//! the region aggregate never replaces the routes here; it feeds only the
//! fill pass, and the raw tracks stay on screen at every zoom. The vector
//! engine always takes a dash array, so solid lines are expressed as [2, 0].

use crate::core::constants::{PROVINCE_FILL_OPACITY, SOLID_PATTERN};
use crate::data::geojson::Geometry;
use crate::map::camera::CameraFit;
use crate::map::style::{self, RouteStyle};
use crate::render::{
    impl_adapter_core, marker, AdapterCore, DrawCommand, FillRenderStyle, LineRenderStyle,
    RenderAdapter, Scene,
};
use crate::Result;

/// Holds no configuration of its own; everything it draws comes from the
/// scene, so one `MapConfig` governs selection, styling, and the basemap.
#[derive(Default)]
pub struct VectorAdapter {
    core: AdapterCore,
}

impl VectorAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    fn line_style(style: &RouteStyle) -> LineRenderStyle {
        LineRenderStyle {
            color: style.color,
            width: style.weight,
            opacity: style.opacity,
            dash_pattern: style.dash_pattern.unwrap_or(SOLID_PATTERN).to_vec(),
            blur: 1.0,
            round_caps: true,
        }
    }
}

impl RenderAdapter for VectorAdapter {
    impl_adapter_core!(core);

    fn update(&mut self, scene: &Scene<'_>) -> Result<()> {
        let mut layers = vec![DrawCommand::StyleLayer {
            style_url: scene.config.style_url.clone(),
        }];

        // Province fill pass, gated and filtered to the highlighted names.
        if scene.overlay.enabled {
            let fill = FillRenderStyle {
                color: scene.config.province_fill_color,
                opacity: PROVINCE_FILL_OPACITY,
            };
            for feature in scene.regions.filter_named(&scene.overlay.names) {
                for ring in feature.geometry.exterior_rings() {
                    if !ring.is_empty() {
                        layers.push(DrawCommand::RegionFill {
                            name: feature.name().map(String::from),
                            ring,
                            style: fill.clone(),
                        });
                    }
                }
            }
        }

        // Route pass: always the raw tracks, never the aggregate. The
        // single-run flag is therefore derived from the raw tracks too; the
        // selection's flag describes the display geometry, which at domestic
        // big-map zooms is the aggregate. A lone run keeps its full-opacity,
        // solid highlight here even while the fill data is selected.
        let resolved = style::resolve(
            scene.selection.is_big_map,
            scene.tracks.is_single_run(),
            scene.config,
        );
        let line_style = Self::line_style(&resolved);
        for feature in &scene.tracks.features {
            if let Geometry::LineString { coordinates } = &feature.geometry {
                if !coordinates.is_empty() {
                    layers.push(DrawCommand::Polyline {
                        points: feature.geometry.positions().collect(),
                        style: line_style.clone(),
                    });
                }
            }
        }

        // Markers follow the raw tracks: a single run stays highlighted
        // even while the fill pass is showing.
        layers.extend(marker::single_run_markers(scene.tracks));

        let camera = scene.camera.map(CameraFit::to_command);
        self.core.submit(layers, camera)
    }
}
