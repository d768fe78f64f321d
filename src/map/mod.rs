//! The rendering pipeline orchestrator.
//!
//! `RunMap` wires the pure stages together on every input change:
//! select → resolve → fit → adapter update. All recomputation is
//! synchronous; there is no background work and nothing to cancel.

pub mod camera;
pub mod overlay;
pub mod selector;
pub mod style;

use crate::core::config::MapConfig;
use crate::core::view::ViewState;
use crate::data::geojson::FeatureCollection;
use crate::data::regions::RegionDataset;
use crate::render::{DrawSurface, RenderAdapter, Scene};
use crate::Result;
use fxhash::FxHashSet;

type ViewChangeHandler = Box<dyn Fn(ViewState)>;
type YearChangeHandler = Box<dyn Fn(&str)>;

/// One rendered map instance: a backend adapter plus the configuration and
/// region data the pipeline reads.
///
/// View state stays owned by the surrounding application. The map only
/// proposes updates through [`RunMap::on_view_change`]; it never mutates
/// authoritative state itself.
pub struct RunMap {
    config: MapConfig,
    regions: RegionDataset,
    adapter: Box<dyn RenderAdapter>,
    on_view_change: Option<ViewChangeHandler>,
    on_year_change: Option<YearChangeHandler>,
}

impl RunMap {
    /// Which backend to instantiate is an external configuration concern;
    /// any [`RenderAdapter`] works here.
    pub fn new(config: MapConfig, adapter: Box<dyn RenderAdapter>) -> Self {
        Self {
            config,
            regions: RegionDataset::default(),
            adapter,
            on_view_change: None,
            on_year_change: None,
        }
    }

    /// Replaces the built-in region aggregate with externally supplied data.
    pub fn with_regions(mut self, regions: RegionDataset) -> Self {
        self.regions = regions;
        self
    }

    /// Registers the single callback receiving proposed view-state updates
    /// (zoom buttons, external pan) so the owner can persist them.
    pub fn on_view_change(mut self, handler: impl Fn(ViewState) + 'static) -> Self {
        self.on_view_change = Some(Box::new(handler));
        self
    }

    /// Registers the year-change passthrough. The identifier is opaque to
    /// the core.
    pub fn on_year_change(mut self, handler: impl Fn(&str) + 'static) -> Self {
        self.on_year_change = Some(Box::new(handler));
        self
    }

    /// Acquires the drawing surface. The only operation whose failure is
    /// surfaced: without a surface the component cannot render at all.
    pub fn mount(&mut self, surface: Box<dyn DrawSurface>) -> Result<()> {
        self.adapter.mount(surface)
    }

    /// Releases the drawing surface. Idempotent; also happens on drop.
    pub fn unmount(&mut self) {
        self.adapter.unmount();
    }

    /// Runs the full pipeline for one render cycle. Call whenever the
    /// geometry input or the view state changes.
    pub fn render(
        &mut self,
        tracks: &FeatureCollection,
        view: &ViewState,
        highlighted: &FxHashSet<String>,
    ) -> Result<()> {
        let view = view.sanitized();

        let selection = selector::select(tracks, &view, self.config.locale, &self.regions);
        let style = style::resolve(selection.is_big_map, selection.is_single_run, &self.config);
        let camera = camera::fit(selection.display, selection.is_single_run);
        let overlay = overlay::overlay(self.config.locale, selection.is_big_map, highlighted);

        log::debug!(
            "render cycle: {} displayed feature(s), single_run={}, big_map={}, fit={}",
            selection.display.features.len(),
            selection.is_single_run,
            selection.is_big_map,
            camera.is_some(),
        );

        let scene = Scene {
            tracks,
            selection: &selection,
            style: &style,
            camera: camera.as_ref(),
            overlay: &overlay,
            regions: &self.regions,
            config: &self.config,
        };
        self.adapter.update(&scene)
    }

    /// Applies an externally driven camera change without recomputation.
    pub fn set_view(&mut self, view: &ViewState) {
        self.adapter.set_camera(&view.sanitized());
    }

    /// Zoom button: steps the backend camera in and proposes the new view
    /// state upward.
    pub fn zoom_in(&mut self) -> ViewState {
        let view = self.adapter.zoom_in();
        self.propose(view);
        view
    }

    /// Zoom button: steps the backend camera out and proposes the new view
    /// state upward.
    pub fn zoom_out(&mut self) -> ViewState {
        let view = self.adapter.zoom_out();
        self.propose(view);
        view
    }

    /// Forwards a year identifier to the external control, uninterpreted.
    pub fn change_year(&self, year: &str) {
        if let Some(handler) = &self.on_year_change {
            handler(year);
        }
    }

    pub fn adapter(&self) -> &dyn RenderAdapter {
        self.adapter.as_ref()
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    fn propose(&self, view: ViewState) {
        if let Some(handler) = &self.on_view_change {
            handler(view);
        }
    }
}
