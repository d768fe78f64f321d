//! # runmap
//!
//! A map-rendering coordination core for presenting running routes.
//!
//! Given a geometry collection and a view state, the crate derives what to
//! draw (route set or region aggregate), how to draw it (line weight,
//! opacity, dash pattern), and where to point the camera (two-point or
//! bounding-box fit), then drives one of two interchangeable rendering
//! backends (a raster-tile adapter and a vector-tile adapter) through a
//! single [`render::RenderAdapter`] contract.

pub mod core;
pub mod data;
pub mod map;
pub mod prelude;
pub mod render;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::{Locale, MapConfig},
    geo::{LatLng, LatLngBounds},
    view::ViewState,
};

pub use crate::data::{
    geojson::{Feature, FeatureCollection, Geometry},
    regions::RegionDataset,
};

pub use crate::map::{
    camera::{fit, CameraFit},
    overlay::{overlay, RegionOverlay},
    selector::{select, Selection},
    style::{resolve, RouteStyle},
    RunMap,
};

pub use crate::render::{
    raster::RasterAdapter, vector::VectorAdapter, Color, DrawCommand, DrawSurface, RenderAdapter,
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Mount error: {0}")]
    Mount(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Error type alias for convenience
pub type Error = MapError;
