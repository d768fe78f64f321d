//! Raster-tile backend adapter.
//!
//! Models a classic slippy-tile engine: a basemap tile layer plus a layer
//! group that is cleared and redrawn as one unit per update. At big-map
//! zooms in the domestic locale the selector hands this backend the region
//! aggregate, which *replaces* the route layer entirely: regions are drawn
//! as stroked outlines in the route style, and no start/end markers appear.

use crate::data::geojson::Geometry;
use crate::map::camera::CameraFit;
use crate::map::style::RouteStyle;
use crate::render::{
    impl_adapter_core, marker, AdapterCore, DrawCommand, LineRenderStyle, RenderAdapter, Scene,
};
use crate::Result;

/// Holds no configuration of its own; everything it draws comes from the
/// scene, so one `MapConfig` governs selection, styling, and the basemap.
#[derive(Default)]
pub struct RasterAdapter {
    core: AdapterCore,
}

impl RasterAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    fn line_style(style: &RouteStyle) -> LineRenderStyle {
        LineRenderStyle {
            color: style.color,
            width: style.weight,
            opacity: style.opacity,
            dash_pattern: style.dash_pattern.map(Vec::from).unwrap_or_default(),
            blur: 0.0,
            round_caps: false,
        }
    }
}

impl RenderAdapter for RasterAdapter {
    impl_adapter_core!(core);

    fn update(&mut self, scene: &Scene<'_>) -> Result<()> {
        let mut layers = vec![DrawCommand::TileLayer {
            url_template: scene.config.tile_url.clone(),
            attribution: scene.config.attribution.clone(),
        }];

        // Route pass over whatever the selector chose to display. Polygon
        // features (the region aggregate) are stroked with the same style.
        let line_style = Self::line_style(scene.style);
        for feature in &scene.selection.display.features {
            match &feature.geometry {
                Geometry::LineString { coordinates } if !coordinates.is_empty() => {
                    layers.push(DrawCommand::Polyline {
                        points: feature.geometry.positions().collect(),
                        style: line_style.clone(),
                    });
                }
                Geometry::LineString { .. } => {}
                polygon => {
                    for ring in polygon.exterior_rings() {
                        if !ring.is_empty() {
                            layers.push(DrawCommand::Polyline {
                                points: ring,
                                style: line_style.clone(),
                            });
                        }
                    }
                }
            }
        }

        // Markers belong to the route layer; when the aggregate replaced it
        // there is no single run and none are drawn.
        layers.extend(marker::single_run_markers(scene.selection.display));

        let camera = scene.camera.map(CameraFit::to_command);
        self.core.submit(layers, camera)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{Locale, MapConfig};
    use crate::core::view::ViewState;
    use crate::data::geojson::FeatureCollection;
    use crate::data::regions::RegionDataset;
    use crate::map::{camera, overlay, selector, style};
    use crate::render::MemorySurface;
    use fxhash::FxHashSet;

    fn run_update(
        adapter: &mut RasterAdapter,
        tracks: &FeatureCollection,
        view: ViewState,
        locale: Locale,
        regions: &RegionDataset,
        config: &MapConfig,
    ) {
        let selection = selector::select(tracks, &view, locale, regions);
        let resolved = style::resolve(selection.is_big_map, selection.is_single_run, config);
        let fit = camera::fit(selection.display, selection.is_single_run);
        let gate = overlay::overlay(locale, selection.is_big_map, &FxHashSet::default());
        let scene = Scene {
            tracks,
            selection: &selection,
            style: &resolved,
            camera: fit.as_ref(),
            overlay: &gate,
            regions,
            config,
        };
        adapter.update(&scene).unwrap();
    }

    #[test]
    fn test_update_replaces_previous_frame() {
        let config = MapConfig::default();
        let mut adapter = RasterAdapter::new();
        let (surface, log) = MemorySurface::new();
        adapter.mount(Box::new(surface)).unwrap();

        let tracks = FeatureCollection::from_tracks(vec![vec![[10.0, 1.0], [20.0, 5.0]]]);
        let regions = RegionDataset::default();
        let view = ViewState::new(20.0, 20.0, 5.0);

        run_update(&mut adapter, &tracks, view, Locale::International, &regions, &config);
        let first_len = adapter.commands().len();
        run_update(&mut adapter, &tracks, view, Locale::International, &regions, &config);

        // Idempotent: repeated identical updates do not accumulate layers.
        assert_eq!(adapter.commands().len(), first_len);
        assert_eq!(log.borrow().frames.len(), 2);
        assert_eq!(log.borrow().frames[0], log.borrow().frames[1]);
    }

    #[test]
    fn test_basemap_comes_from_scene_config() {
        let mut config = MapConfig::default();
        config.tile_url = "https://tiles.example.com/{z}/{x}/{y}.png".to_string();
        config.attribution = "example tiles".to_string();

        let mut adapter = RasterAdapter::new();
        let (surface, _log) = MemorySurface::new();
        adapter.mount(Box::new(surface)).unwrap();

        let tracks = FeatureCollection::default();
        let regions = RegionDataset::default();
        run_update(
            &mut adapter,
            &tracks,
            ViewState::new(20.0, 20.0, 5.0),
            Locale::International,
            &regions,
            &config,
        );

        match &adapter.commands()[0] {
            DrawCommand::TileLayer {
                url_template,
                attribution,
            } => {
                assert_eq!(url_template, &config.tile_url);
                assert_eq!(attribution, &config.attribution);
            }
            other => panic!("expected tile layer, got {:?}", other),
        }
    }

    #[test]
    fn test_big_map_domestic_replaces_routes_with_regions() {
        let config = MapConfig::default().with_locale(Locale::Domestic);
        let mut adapter = RasterAdapter::new();
        let (surface, _log) = MemorySurface::new();
        adapter.mount(Box::new(surface)).unwrap();

        let tracks = FeatureCollection::from_tracks(vec![vec![[10.0, 1.0], [20.0, 5.0]]]);
        let regions = RegionDataset::default();
        run_update(
            &mut adapter,
            &tracks,
            ViewState::new(20.0, 20.0, 2.0),
            Locale::Domestic,
            &regions,
            &config,
        );

        let polylines = adapter
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Polyline { .. }))
            .count();
        // One outline per region, none for the replaced track.
        assert_eq!(polylines, regions.collection().features.len());
        // The replaced route layer carries no markers.
        assert!(!adapter
            .commands()
            .iter()
            .any(|c| matches!(c, DrawCommand::Marker { .. })));
    }

    #[test]
    fn test_empty_collection_draws_basemap_only_and_no_fit() {
        let config = MapConfig::default();
        let mut adapter = RasterAdapter::new();
        let (surface, _log) = MemorySurface::new();
        adapter.mount(Box::new(surface)).unwrap();

        let tracks = FeatureCollection::default();
        let regions = RegionDataset::default();
        run_update(
            &mut adapter,
            &tracks,
            ViewState::new(20.0, 20.0, 5.0),
            Locale::International,
            &regions,
            &config,
        );

        let commands = adapter.commands();
        assert_eq!(commands.len(), 1);
        assert!(matches!(commands[0], DrawCommand::TileLayer { .. }));
    }
}
