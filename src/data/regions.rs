//! The precomputed region-aggregate dataset shown at world-scale zooms for
//! the domestic locale.
//!
//! The real administrative-boundary geometry is an external collaborator;
//! this module holds the handle type, the name-filter operation, and a
//! coarse built-in placeholder so the crate works standalone.

use crate::data::geojson::{Feature, FeatureCollection, Geometry};
use fxhash::FxHashSet;
use once_cell::sync::Lazy;

/// Named region polygons, opaque to the selection logic.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionDataset {
    collection: FeatureCollection,
}

impl RegionDataset {
    pub fn new(collection: FeatureCollection) -> Self {
        Self { collection }
    }

    /// The full aggregate collection, used by the raster backend when it
    /// replaces the route layer on a big map.
    pub fn collection(&self) -> &FeatureCollection {
        &self.collection
    }

    /// Features whose `name` property is in the given set. Unmatched names
    /// are silently excluded; they are not an error.
    pub fn filter_named(&self, names: &FxHashSet<String>) -> Vec<&Feature> {
        self.collection
            .features
            .iter()
            .filter(|feature| feature.name().is_some_and(|name| names.contains(name)))
            .collect()
    }
}

impl Default for RegionDataset {
    fn default() -> Self {
        BUILTIN.clone()
    }
}

/// Coarse placeholder polygons standing in for the external boundary data.
static BUILTIN: Lazy<RegionDataset> = Lazy::new(|| {
    let region = |name: &str, ring: Vec<[f64; 2]>| {
        Feature::new(Geometry::Polygon {
            coordinates: vec![ring],
        })
        .with_property("name", name)
    };

    RegionDataset::new(FeatureCollection::new(vec![
        region(
            "Beijing",
            vec![
                [115.4, 39.4],
                [117.5, 39.4],
                [117.5, 41.1],
                [115.4, 41.1],
                [115.4, 39.4],
            ],
        ),
        region(
            "Shanghai",
            vec![
                [120.9, 30.7],
                [122.0, 30.7],
                [122.0, 31.9],
                [120.9, 31.9],
                [120.9, 30.7],
            ],
        ),
        region(
            "Guangdong",
            vec![
                [109.7, 20.2],
                [117.3, 20.2],
                [117.3, 25.5],
                [109.7, 25.5],
                [109.7, 20.2],
            ],
        ),
    ]))
});

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> FxHashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_builtin_dataset_is_not_a_single_run() {
        let dataset = RegionDataset::default();
        assert!(dataset.collection().features.len() > 1);
        assert!(!dataset.collection().is_single_run());
    }

    #[test]
    fn test_filter_named() {
        let dataset = RegionDataset::default();
        let matched = dataset.filter_named(&names(&["Beijing"]));
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name(), Some("Beijing"));
    }

    #[test]
    fn test_unmatched_names_are_silently_excluded() {
        let dataset = RegionDataset::default();
        let matched = dataset.filter_named(&names(&["Beijing", "Atlantis"]));
        assert_eq!(matched.len(), 1);

        let none = dataset.filter_named(&names(&["Atlantis"]));
        assert!(none.is_empty());
    }
}
