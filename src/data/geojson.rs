use crate::core::geo::{LatLng, LatLngBounds};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Geometry kinds the core renders. Positions are GeoJSON ordered:
/// (longitude, latitude). Conversion to [`LatLng`] happens exactly once,
/// in [`LatLng::from_lon_lat`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    LineString {
        coordinates: Vec<[f64; 2]>,
    },
    Polygon {
        coordinates: Vec<Vec<[f64; 2]>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<[f64; 2]>>>,
    },
}

impl Geometry {
    /// Number of positions in the geometry.
    pub fn coordinate_count(&self) -> usize {
        match self {
            Geometry::LineString { coordinates } => coordinates.len(),
            Geometry::Polygon { coordinates } => coordinates.iter().map(Vec::len).sum(),
            Geometry::MultiPolygon { coordinates } => coordinates
                .iter()
                .flat_map(|polygon| polygon.iter())
                .map(Vec::len)
                .sum(),
        }
    }

    /// First position, in input order.
    pub fn first_coordinate(&self) -> Option<LatLng> {
        self.positions().next()
    }

    /// Last position, in input order.
    pub fn last_coordinate(&self) -> Option<LatLng> {
        self.positions().last()
    }

    /// Iterates every position as a [`LatLng`], preserving input order.
    pub fn positions(&self) -> Box<dyn Iterator<Item = LatLng> + '_> {
        match self {
            Geometry::LineString { coordinates } => {
                Box::new(coordinates.iter().copied().map(LatLng::from_lon_lat))
            }
            Geometry::Polygon { coordinates } => Box::new(
                coordinates
                    .iter()
                    .flatten()
                    .copied()
                    .map(LatLng::from_lon_lat),
            ),
            Geometry::MultiPolygon { coordinates } => Box::new(
                coordinates
                    .iter()
                    .flat_map(|polygon| polygon.iter())
                    .flatten()
                    .copied()
                    .map(LatLng::from_lon_lat),
            ),
        }
    }

    /// Bounding box over all positions, `None` for an empty geometry.
    pub fn bounds(&self) -> Option<LatLngBounds> {
        let points: Vec<LatLng> = self.positions().collect();
        LatLngBounds::from_points(&points)
    }

    /// Exterior rings as LatLng sequences: one ring per polygon, the whole
    /// line for a LineString. Used by the fill passes.
    pub fn exterior_rings(&self) -> Vec<Vec<LatLng>> {
        match self {
            Geometry::LineString { coordinates } => {
                vec![coordinates.iter().copied().map(LatLng::from_lon_lat).collect()]
            }
            Geometry::Polygon { coordinates } => coordinates
                .first()
                .map(|ring| ring.iter().copied().map(LatLng::from_lon_lat).collect())
                .into_iter()
                .collect(),
            Geometry::MultiPolygon { coordinates } => coordinates
                .iter()
                .filter_map(|polygon| polygon.first())
                .map(|ring| ring.iter().copied().map(LatLng::from_lon_lat).collect())
                .collect(),
        }
    }
}

/// A feature: one geometry plus opaque metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub geometry: Geometry,
    #[serde(default)]
    pub properties: HashMap<String, serde_json::Value>,
}

impl Feature {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            properties: HashMap::new(),
        }
    }

    pub fn with_property<V: Into<serde_json::Value>>(mut self, key: &str, value: V) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }

    /// The feature's `name` property, when it is a string.
    pub fn name(&self) -> Option<&str> {
        self.properties.get("name").and_then(|v| v.as_str())
    }
}

/// A geographic feature collection, supplied per render cycle and treated
/// as immutable input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    /// Parses a GeoJSON feature collection from raw JSON.
    pub fn from_str(geojson: &str) -> crate::Result<Self> {
        serde_json::from_str(geojson)
            .map_err(|e| crate::Error::ParseError(format!("Invalid GeoJSON: {}", e)))
    }

    /// Builds a collection of one LineString track per coordinate sequence.
    pub fn from_tracks(tracks: Vec<Vec<[f64; 2]>>) -> Self {
        Self::new(
            tracks
                .into_iter()
                .map(|coordinates| Feature::new(Geometry::LineString { coordinates }))
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// A collection is a single run iff it has exactly one feature and that
    /// feature's coordinate sequence is non-empty.
    pub fn is_single_run(&self) -> bool {
        self.features.len() == 1 && self.features[0].geometry.coordinate_count() > 0
    }

    /// Union bounding box of all feature coordinates, `None` when every
    /// feature is empty.
    pub fn bounds(&self) -> Option<LatLngBounds> {
        let mut bounds: Option<LatLngBounds> = None;
        for feature in &self.features {
            if let Some(feature_bounds) = feature.geometry.bounds() {
                bounds = Some(match bounds {
                    Some(b) => b.union(&feature_bounds),
                    None => feature_bounds,
                });
            }
        }
        bounds
    }
}
