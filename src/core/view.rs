use crate::core::constants::{DEFAULT_LATITUDE, DEFAULT_LONGITUDE, DEFAULT_ZOOM, ZOOM_DELTA};
use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};

/// Serializable camera descriptor: where the map is looking.
///
/// The view state is owned by the surrounding application; the core only
/// reads it and proposes updates (see [`crate::map::RunMap::on_view_change`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    #[serde(default = "default_zoom")]
    pub zoom: f64,
}

fn default_latitude() -> f64 {
    DEFAULT_LATITUDE
}

fn default_longitude() -> f64 {
    DEFAULT_LONGITUDE
}

fn default_zoom() -> f64 {
    DEFAULT_ZOOM
}

impl ViewState {
    pub fn new(latitude: f64, longitude: f64, zoom: f64) -> Self {
        Self {
            latitude,
            longitude,
            zoom,
        }
        .sanitized()
    }

    /// Replaces non-finite fields and invalid zoom with the documented
    /// defaults. The default view is a deliberate world view, not an
    /// arbitrary fallback.
    pub fn sanitized(mut self) -> Self {
        if !self.latitude.is_finite() {
            self.latitude = DEFAULT_LATITUDE;
        }
        if !self.longitude.is_finite() {
            self.longitude = DEFAULT_LONGITUDE;
        }
        if !self.zoom.is_finite() || self.zoom < 0.0 {
            self.zoom = DEFAULT_ZOOM;
        }
        self
    }

    /// The camera center as a coordinate.
    pub fn center(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }

    /// A copy of this view with the zoom moved by `delta`, floored at 0.
    pub fn with_zoom_delta(&self, delta: f64) -> Self {
        Self {
            zoom: (self.zoom + delta).max(0.0),
            ..*self
        }
    }

    /// One zoom step in.
    pub fn zoomed_in(&self) -> Self {
        self.with_zoom_delta(ZOOM_DELTA)
    }

    /// One zoom step out.
    pub fn zoomed_out(&self) -> Self {
        self.with_zoom_delta(-ZOOM_DELTA)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
            zoom: DEFAULT_ZOOM,
        }
    }
}
