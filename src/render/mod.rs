//! Backend-agnostic rendering contract.
//!
//! Both backends translate the same scene into a queue of [`DrawCommand`]s
//! presented to a [`DrawSurface`]. An `update` replaces the full command set,
//! so repeated calls with identical inputs produce identical visible state.
//! The camera command is always emitted strictly after the layer commands,
//! so a bounds fit is computed against the newly drawn geometry.

pub mod marker;
pub mod raster;
pub mod vector;

use crate::core::config::MapConfig;
use crate::core::geo::{LatLng, LatLngBounds};
use crate::core::view::ViewState;
use crate::data::geojson::FeatureCollection;
use crate::data::regions::RegionDataset;
use crate::map::camera::CameraFit;
use crate::map::overlay::RegionOverlay;
use crate::map::selector::Selection;
use crate::map::style::RouteStyle;
use crate::render::marker::MarkerIcon;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Serializable rgba color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa` hex notation.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?;
        match hex.len() {
            3 => {
                let component = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 1], 16)
                        .ok()
                        .map(|v| v * 16 + v)
                };
                Some(Self::rgb(component(0)?, component(1)?, component(2)?))
            }
            6 | 8 => {
                let component = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
                let a = if hex.len() == 8 { component(6)? } else { 255 };
                Some(Self::new(component(0)?, component(2)?, component(4)?, a))
            }
            _ => None,
        }
    }
}

/// Resolved stroke style for a route pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineRenderStyle {
    pub color: Color,
    pub width: f32,
    pub opacity: f32,
    /// Dash pattern; empty for a solid line.
    pub dash_pattern: Vec<f32>,
    /// Edge blur in pixels (vector engine only; 0 disables).
    pub blur: f32,
    /// Round line joins and caps (vector engine only).
    pub round_caps: bool,
}

/// Resolved style for a region-fill pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillRenderStyle {
    pub color: Color,
    pub opacity: f32,
}

/// Commands a backend issues to its drawing surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Raster basemap: slippy tiles plus attribution.
    TileLayer {
        url_template: String,
        attribution: String,
    },
    /// Vector basemap: a style document.
    StyleLayer { style_url: String },
    /// One stroked path.
    Polyline {
        points: Vec<LatLng>,
        style: LineRenderStyle,
    },
    /// One filled region ring.
    RegionFill {
        name: Option<String>,
        ring: Vec<LatLng>,
        style: FillRenderStyle,
    },
    /// An anchored icon.
    Marker { position: LatLng, icon: MarkerIcon },
    /// Camera fit against drawn geometry; always the last command of a frame.
    FitBounds { bounds: LatLngBounds, padding: f64 },
    /// Direct camera placement without recomputation.
    SetView { center: LatLng, zoom: f64 },
}

/// Everything an adapter needs for one `update` cycle. Built by the
/// [`crate::map::RunMap`] pipeline; adapters only read it.
pub struct Scene<'a> {
    /// The raw input collection, untouched by selection.
    pub tracks: &'a FeatureCollection,
    /// Selector output: display geometry plus derived flags.
    pub selection: &'a Selection<'a>,
    /// Route style resolved for the display geometry. The vector backend
    /// re-resolves against the raw tracks, which its route pass draws.
    pub style: &'a RouteStyle,
    /// Camera target, absent when no fit applies.
    pub camera: Option<&'a CameraFit>,
    /// Province overlay decision.
    pub overlay: &'a RegionOverlay,
    /// Region-aggregate dataset shared by both backends.
    pub regions: &'a RegionDataset,
    /// The one configuration governing the frame; adapters hold no copy.
    pub config: &'a MapConfig,
}

/// Drawing surface supplied by the embedding application: the one resource
/// with a scoped lifecycle. Attached on mount, detached on unmount, released
/// on every exit path.
pub trait DrawSurface {
    /// Acquire the surface. Failure here is the one error surfaced to the
    /// owning application: the component cannot render at all.
    fn attach(&mut self) -> Result<()>;

    /// Release the surface and any backend resources it holds.
    fn detach(&mut self);

    /// Present a full frame, replacing everything previously drawn.
    fn present(&mut self, commands: &[DrawCommand]) -> Result<()>;
}

/// Backend contract: two interchangeable implementations, raster and vector.
/// Which one to instantiate is an external configuration concern.
pub trait RenderAdapter {
    /// Scoped acquisition of a drawing surface. Re-mounting releases the
    /// previous surface first.
    fn mount(&mut self, surface: Box<dyn DrawSurface>) -> Result<()>;

    /// Releases the surface. Idempotent.
    fn unmount(&mut self);

    fn is_mounted(&self) -> bool;

    /// Replaces all route/marker/overlay layers with the scene's content and
    /// applies the camera target if present. Idempotent for equal scenes.
    fn update(&mut self, scene: &Scene<'_>) -> Result<()>;

    /// Directly sets the camera without recomputation (external pan/zoom).
    fn set_camera(&mut self, view: &ViewState);

    /// Moves the backend's own camera one zoom step in and reports the new
    /// view state upward; the core never owns authoritative view state.
    fn zoom_in(&mut self) -> ViewState;

    /// Moves the backend's own camera one zoom step out; see [`Self::zoom_in`].
    fn zoom_out(&mut self) -> ViewState;

    /// The backend's current camera.
    fn camera(&self) -> ViewState;

    /// The last presented frame, camera command included.
    fn commands(&self) -> &[DrawCommand];
}

/// Shared adapter mechanics: surface lifecycle, camera state, frame assembly.
/// Backends embed this and only implement scene translation.
pub(crate) struct AdapterCore {
    surface: Option<Box<dyn DrawSurface>>,
    camera: ViewState,
    layers: Vec<DrawCommand>,
    camera_command: Option<DrawCommand>,
    presented: Vec<DrawCommand>,
}

impl AdapterCore {
    pub(crate) fn new() -> Self {
        Self {
            surface: None,
            camera: ViewState::default(),
            layers: Vec::new(),
            camera_command: None,
            presented: Vec::new(),
        }
    }

    pub(crate) fn mount(&mut self, mut surface: Box<dyn DrawSurface>) -> Result<()> {
        // Re-mount must not leak the previous surface.
        self.unmount();
        surface.attach()?;
        self.surface = Some(surface);
        Ok(())
    }

    pub(crate) fn unmount(&mut self) {
        if let Some(mut surface) = self.surface.take() {
            surface.detach();
        }
    }

    pub(crate) fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    pub(crate) fn camera(&self) -> ViewState {
        self.camera
    }

    /// Installs a new layer set and camera command, then presents the frame.
    /// The camera command goes strictly after the layers.
    pub(crate) fn submit(
        &mut self,
        layers: Vec<DrawCommand>,
        camera_command: Option<DrawCommand>,
    ) -> Result<()> {
        self.layers = layers;
        self.camera_command = camera_command;
        self.flush()
    }

    pub(crate) fn set_camera(&mut self, view: &ViewState) {
        let view = view.sanitized();
        self.camera = view;
        self.camera_command = Some(DrawCommand::SetView {
            center: view.center(),
            zoom: view.zoom,
        });
        if let Err(e) = self.flush() {
            log::warn!("camera update not presented: {}", e);
        }
    }

    pub(crate) fn zoom_by(&mut self, delta: f64) -> ViewState {
        let next = self.camera.with_zoom_delta(delta);
        self.set_camera(&next);
        next
    }

    pub(crate) fn commands(&self) -> &[DrawCommand] {
        &self.presented
    }

    fn flush(&mut self) -> Result<()> {
        let mut frame = self.layers.clone();
        if let Some(camera) = &self.camera_command {
            frame.push(camera.clone());
        }
        match self.surface.as_mut() {
            Some(surface) => surface.present(&frame)?,
            // Not mounted yet: keep the frame so a later mount can present it.
            None => log::debug!("frame assembled without a mounted surface"),
        }
        self.presented = frame;
        Ok(())
    }
}

impl Default for AdapterCore {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AdapterCore {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Implements the surface/camera plumbing of [`RenderAdapter`] for a backend
/// struct with an [`AdapterCore`] field, leaving only `update` to the backend.
macro_rules! impl_adapter_core {
    ($field:ident) => {
        fn mount(
            &mut self,
            surface: Box<dyn $crate::render::DrawSurface>,
        ) -> $crate::Result<()> {
            self.$field.mount(surface)
        }

        fn unmount(&mut self) {
            self.$field.unmount();
        }

        fn is_mounted(&self) -> bool {
            self.$field.is_mounted()
        }

        fn set_camera(&mut self, view: &$crate::core::view::ViewState) {
            self.$field.set_camera(view);
        }

        fn zoom_in(&mut self) -> $crate::core::view::ViewState {
            self.$field.zoom_by($crate::core::constants::ZOOM_DELTA)
        }

        fn zoom_out(&mut self) -> $crate::core::view::ViewState {
            self.$field.zoom_by(-$crate::core::constants::ZOOM_DELTA)
        }

        fn camera(&self) -> $crate::core::view::ViewState {
            self.$field.camera()
        }

        fn commands(&self) -> &[$crate::render::DrawCommand] {
            self.$field.commands()
        }
    };
}

pub(crate) use impl_adapter_core;

/// Frame log shared with a [`MemorySurface`], for inspection by embedders
/// and tests.
#[derive(Debug, Default)]
pub struct SurfaceLog {
    pub attached: bool,
    pub detach_count: u32,
    pub frames: Vec<Vec<DrawCommand>>,
}

impl SurfaceLog {
    pub fn last_frame(&self) -> Option<&Vec<DrawCommand>> {
        self.frames.last()
    }
}

/// An in-memory drawing surface that records presented frames. Doubles as
/// the reference implementation of the surface lifecycle.
pub struct MemorySurface {
    log: Rc<RefCell<SurfaceLog>>,
    fail_attach: bool,
}

impl MemorySurface {
    pub fn new() -> (Self, Rc<RefCell<SurfaceLog>>) {
        let log = Rc::new(RefCell::new(SurfaceLog::default()));
        (
            Self {
                log: Rc::clone(&log),
                fail_attach: false,
            },
            log,
        )
    }

    /// A surface whose attach always fails, for exercising mount errors.
    pub fn failing() -> Self {
        Self {
            log: Rc::new(RefCell::new(SurfaceLog::default())),
            fail_attach: true,
        }
    }
}

impl DrawSurface for MemorySurface {
    fn attach(&mut self) -> Result<()> {
        if self.fail_attach {
            return Err(crate::Error::Mount("surface unavailable".to_string()));
        }
        self.log.borrow_mut().attached = true;
        Ok(())
    }

    fn detach(&mut self) {
        let mut log = self.log.borrow_mut();
        log.attached = false;
        log.detach_count += 1;
    }

    fn present(&mut self, commands: &[DrawCommand]) -> Result<()> {
        let mut log = self.log.borrow_mut();
        if !log.attached {
            return Err(crate::Error::Render("surface not attached".to_string()));
        }
        log.frames.push(commands.to_vec());
        Ok(())
    }
}
