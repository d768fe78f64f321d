//! Decides which dataset to render for the current view.

use crate::core::config::Locale;
use crate::core::constants::BIG_MAP_ZOOM;
use crate::core::view::ViewState;
use crate::data::geojson::FeatureCollection;
use crate::data::regions::RegionDataset;

/// Selector output: the geometry to display plus the two flags every
/// downstream decision keys off.
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    /// What to display: the input collection, or the region aggregate when
    /// the big-map replacement rule applies.
    pub display: &'a FeatureCollection,
    /// Exactly one non-empty displayed feature.
    pub is_single_run: bool,
    /// World/country-scale view (zoom at or below the threshold).
    pub is_big_map: bool,
}

/// Selects the display dataset for a render cycle.
///
/// At big-map zooms in the domestic locale the display geometry is the
/// precomputed region aggregate. The raster backend renders it *instead of*
/// the route layer; the vector backend uses it only for its province-fill
/// pass and keeps the routes. That asymmetry is intentional and lives in
/// the backends, not here.
///
/// Never errors: an absent or empty collection degrades to zero features.
pub fn select<'a>(
    collection: &'a FeatureCollection,
    view: &ViewState,
    locale: Locale,
    regions: &'a RegionDataset,
) -> Selection<'a> {
    // Inclusive threshold: at zoom exactly 3 the map is still zoomed out.
    let is_big_map = view.zoom <= BIG_MAP_ZOOM;

    let display = if is_big_map && locale.is_domestic() {
        regions.collection()
    } else {
        collection
    };

    Selection {
        display,
        // Computed on the display geometry: once the aggregate replaces the
        // routes there is no single run to highlight.
        is_single_run: display.is_single_run(),
        is_big_map,
    }
}
