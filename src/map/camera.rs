//! Computes the camera adjustment framing the displayed geometry.

use crate::core::constants::FIT_PADDING;
use crate::core::geo::LatLngBounds;
use crate::data::geojson::FeatureCollection;
use crate::render::DrawCommand;
use serde::{Deserialize, Serialize};

/// Camera target: either a two-point fit on a single run's start/end, or a
/// bounding-box fit over every feature. "No fit" is `Option::None` at the
/// [`fit`] call site, and means the camera stays where it is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CameraFit {
    /// Bounds containing exactly the run's first and last coordinate, the
    /// same two points the start/end markers anchor to.
    TwoPoint { bounds: LatLngBounds, padding: f64 },
    /// Union bounding box of all feature coordinates.
    Bounds { bounds: LatLngBounds, padding: f64 },
}

impl CameraFit {
    pub fn bounds(&self) -> &LatLngBounds {
        match self {
            CameraFit::TwoPoint { bounds, .. } | CameraFit::Bounds { bounds, .. } => bounds,
        }
    }

    pub fn padding(&self) -> f64 {
        match self {
            CameraFit::TwoPoint { padding, .. } | CameraFit::Bounds { padding, .. } => *padding,
        }
    }

    /// The draw command applying this fit. Both backends emit it through
    /// this one conversion, so the fit math matches exactly.
    pub fn to_command(&self) -> DrawCommand {
        DrawCommand::FitBounds {
            bounds: self.bounds().clone(),
            padding: self.padding(),
        }
    }
}

/// Computes the camera target for the displayed geometry.
///
/// - Single run: bounds spanning exactly the first and last coordinate of
///   the sole feature, padded 50 px. A one-coordinate run degenerates to a
///   point fit, which is allowed.
/// - Otherwise, with features present: the union bounding box, padded the
///   same, but only when the box is a valid region. An invalid box (all
///   features empty) yields no fit, leaving the camera unchanged.
/// - Zero features: no fit.
pub fn fit(display: &FeatureCollection, is_single_run: bool) -> Option<CameraFit> {
    if is_single_run {
        let geometry = &display.features.first()?.geometry;
        let start = geometry.first_coordinate()?;
        let end = geometry.last_coordinate()?;
        let mut bounds = LatLngBounds::from_point(start);
        bounds.extend(&end);
        return Some(CameraFit::TwoPoint {
            bounds,
            padding: FIT_PADDING,
        });
    }

    if display.is_empty() {
        return None;
    }

    match display.bounds() {
        Some(bounds) if bounds.is_valid() => Some(CameraFit::Bounds {
            bounds,
            padding: FIT_PADDING,
        }),
        _ => {
            log::debug!("skipping camera fit: no valid bounds for {} feature(s)",
                display.features.len());
            None
        }
    }
}
