//! Start/end marker descriptors for a single highlighted run.
//!
//! The markers are anchored at the first and last coordinate of the run,
//! semantically "start" and "end", not min/max. Icon geometry matches the
//! 25 px pin with its tip translated to the coordinate.

use crate::core::constants::{MARKER_ICON_ANCHOR, MARKER_ICON_SIZE};
use crate::data::geojson::FeatureCollection;
use crate::render::{Color, DrawCommand};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerKind {
    Start,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerIcon {
    pub kind: MarkerKind,
    pub color: Color,
    /// Icon size in pixels.
    pub size: (u32, u32),
    /// Pixel translation anchoring the pin tip to the coordinate.
    pub anchor: (f32, f32),
}

impl MarkerIcon {
    pub fn start() -> Self {
        Self {
            kind: MarkerKind::Start,
            color: Color::rgb(0x4c, 0xaf, 0x50),
            size: MARKER_ICON_SIZE,
            anchor: MARKER_ICON_ANCHOR,
        }
    }

    pub fn end() -> Self {
        Self {
            kind: MarkerKind::End,
            color: Color::rgb(0xf4, 0x43, 0x36),
            size: MARKER_ICON_SIZE,
            anchor: MARKER_ICON_ANCHOR,
        }
    }
}

/// Marker commands for a displayed single run: start pin at the first
/// coordinate, end pin at the last. Shared by both backends so placement
/// matches exactly. Empty when the collection is not a single run.
///
/// A one-coordinate run is a degenerate single run: start and end coincide,
/// which is allowed.
pub fn single_run_markers(display: &FeatureCollection) -> Vec<DrawCommand> {
    if !display.is_single_run() {
        return Vec::new();
    }
    let geometry = &display.features[0].geometry;
    match (geometry.first_coordinate(), geometry.last_coordinate()) {
        (Some(start), Some(end)) => vec![
            DrawCommand::Marker {
                position: start,
                icon: MarkerIcon::start(),
            },
            DrawCommand::Marker {
                position: end,
                icon: MarkerIcon::end(),
            },
        ],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLng;

    #[test]
    fn test_markers_for_single_run() {
        let collection =
            FeatureCollection::from_tracks(vec![vec![[10.0, 1.0], [20.0, 5.0], [30.0, 9.0]]]);
        let markers = single_run_markers(&collection);
        assert_eq!(markers.len(), 2);

        match &markers[0] {
            DrawCommand::Marker { position, icon } => {
                assert_eq!(*position, LatLng::new(1.0, 10.0));
                assert_eq!(icon.kind, MarkerKind::Start);
            }
            other => panic!("expected start marker, got {:?}", other),
        }
        match &markers[1] {
            DrawCommand::Marker { position, icon } => {
                assert_eq!(*position, LatLng::new(9.0, 30.0));
                assert_eq!(icon.kind, MarkerKind::End);
            }
            other => panic!("expected end marker, got {:?}", other),
        }
    }

    #[test]
    fn test_degenerate_single_point_run() {
        let collection = FeatureCollection::from_tracks(vec![vec![[10.0, 1.0]]]);
        let markers = single_run_markers(&collection);
        assert_eq!(markers.len(), 2);
        // Start and end coincide; allowed, not an error.
        let positions: Vec<_> = markers
            .iter()
            .map(|m| match m {
                DrawCommand::Marker { position, .. } => *position,
                other => panic!("unexpected command {:?}", other),
            })
            .collect();
        assert_eq!(positions[0], positions[1]);
    }

    #[test]
    fn test_no_markers_for_multi_track() {
        let collection = FeatureCollection::from_tracks(vec![
            vec![[10.0, 1.0], [20.0, 5.0]],
            vec![[30.0, 9.0], [40.0, 9.0]],
        ]);
        assert!(single_run_markers(&collection).is_empty());
        assert!(single_run_markers(&FeatureCollection::default()).is_empty());
    }
}
