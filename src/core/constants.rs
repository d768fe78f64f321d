//! Engine-wide constants derived from common web-map conventions.
//! Keeping them in a single place makes it easier to tweak magic numbers.

/// Zoom level at or below which the map counts as "zoomed out" (world view).
/// The threshold is inclusive: zoom exactly 3 is still a big map.
pub const BIG_MAP_ZOOM: f64 = 3.0;

/// Padding in pixels applied on each side of a camera fit.
pub const FIT_PADDING: f64 = 50.0;

/// Dash pattern applied to multi-track rendering when dashing is enabled.
pub const DASH_PATTERN: [f32; 2] = [2.0, 2.0];

/// Dash pattern the vector engine uses for a solid line (it always takes one).
pub const SOLID_PATTERN: [f32; 2] = [2.0, 0.0];

/// Programmatic +/- zoom step for the zoom buttons.
pub const ZOOM_DELTA: f64 = 1.0;

/// Defaults for an absent or invalid view state: a deliberate world view.
pub const DEFAULT_LATITUDE: f64 = 20.0;
pub const DEFAULT_LONGITUDE: f64 = 20.0;
pub const DEFAULT_ZOOM: f64 = 3.0;

/// Start/end marker icon size in pixels.
pub const MARKER_ICON_SIZE: (u32, u32) = (25, 25);

/// Pixel offset that anchors the icon tip to the coordinate.
pub const MARKER_ICON_ANCHOR: (f32, f32) = (-12.0, -25.0);

/// Fill opacity of the province overlay pass.
pub const PROVINCE_FILL_OPACITY: f32 = 0.3;
