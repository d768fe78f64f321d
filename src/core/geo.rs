use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Creates a LatLng from a GeoJSON position pair.
    ///
    /// GeoJSON positions are (longitude, latitude), the reverse of this
    /// type's field order. This constructor is the single place where the
    /// inversion happens; every boundary goes through it.
    pub fn from_lon_lat(pair: [f64; 2]) -> Self {
        Self {
            lat: pair[1],
            lng: pair[0],
        }
    }

    /// Converts back to a GeoJSON (longitude, latitude) position pair.
    pub fn to_lon_lat(&self) -> [f64; 2] {
        [self.lng, self.lat]
    }

    /// Validates that the coordinates are within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat >= -90.0 && self.lat <= 90.0 && self.lng >= -180.0 && self.lng <= 180.0
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Represents a bounding box of geographical coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Creates zero-area bounds at a single point.
    pub fn from_point(point: LatLng) -> Self {
        Self::new(point, point)
    }

    /// Creates bounds containing all of the given points, or `None` when the
    /// slice is empty.
    pub fn from_points(points: &[LatLng]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self::from_point(*first);
        for point in rest {
            bounds.extend(point);
        }
        Some(bounds)
    }

    /// Extends the bounds to include a point
    pub fn extend(&mut self, point: &LatLng) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    /// Gets the center point of the bounds
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }

    /// Checks if the bounds contain a point
    pub fn contains(&self, point: &LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }

    /// Returns the union of this bounds with another bounds
    pub fn union(&self, other: &LatLngBounds) -> LatLngBounds {
        let mut bounds = self.clone();
        bounds.extend(&other.south_west);
        bounds.extend(&other.north_east);
        bounds
    }

    /// A bounds is valid when its corners are finite, ordered, and inside
    /// the coordinate domain. Degenerate (zero-area) bounds are valid: a
    /// single-point fit is allowed.
    pub fn is_valid(&self) -> bool {
        self.south_west.is_valid()
            && self.north_east.is_valid()
            && self.south_west.lat <= self.north_east.lat
            && self.south_west.lng <= self.north_east.lng
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lon_lat_ordering() {
        // GeoJSON pair is (lon, lat); the struct stores (lat, lng).
        let coord = LatLng::from_lon_lat([116.4, 39.9]);
        assert_eq!(coord.lat, 39.9);
        assert_eq!(coord.lng, 116.4);
        assert_eq!(coord.to_lon_lat(), [116.4, 39.9]);
    }

    #[test]
    fn test_bounds_from_points() {
        let points = vec![
            LatLng::new(40.0, -74.0),
            LatLng::new(41.0, -73.0),
            LatLng::new(40.5, -73.5),
        ];
        let bounds = LatLngBounds::from_points(&points).unwrap();
        assert_eq!(bounds.south_west, LatLng::new(40.0, -74.0));
        assert_eq!(bounds.north_east, LatLng::new(41.0, -73.0));
        assert!(bounds.is_valid());

        assert!(LatLngBounds::from_points(&[]).is_none());
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = LatLngBounds::new(LatLng::new(40.0, -75.0), LatLng::new(41.0, -73.0));
        assert!(bounds.contains(&LatLng::new(40.5, -74.0)));
        assert!(!bounds.contains(&LatLng::new(42.0, -74.0)));
    }

    #[test]
    fn test_degenerate_bounds_are_valid() {
        let point = LatLng::new(10.0, 20.0);
        let bounds = LatLngBounds::from_point(point);
        assert!(bounds.is_valid());
        assert_eq!(bounds.center(), point);
    }

    #[test]
    fn test_invalid_bounds() {
        // Corners out of order.
        let bounds = LatLngBounds::new(LatLng::new(41.0, -73.0), LatLng::new(40.0, -75.0));
        assert!(!bounds.is_valid());

        let bounds = LatLngBounds::new(LatLng::new(f64::NAN, 0.0), LatLng::new(1.0, 1.0));
        assert!(!bounds.is_valid());
    }
}
