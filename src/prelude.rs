//! Prelude module for common runmap types and functions
//!
//! Re-exports the most commonly used items for easy importing with
//! `use runmap::prelude::*;`.

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
    marker::{MarkerIcon, MarkerKind},
    raster::RasterAdapter,
    vector::VectorAdapter,
    Color, DrawCommand, DrawSurface, FillRenderStyle, LineRenderStyle, MemorySurface,
    RenderAdapter, Scene, SurfaceLog,
};

pub use crate::{Error as MapError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
