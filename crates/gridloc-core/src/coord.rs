//! The rounded `(longitude, latitude)` lattice point.

use crate::precision::round_to;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A geographic lattice point as a `(longitude, latitude)` pair.
///
/// Equality and hashing use the exact bit pattern of both components, so a
/// coordinate is only meaningful as a set member once it has been rounded
/// to a grid precision with [`Coordinate::rounded`]. Ordering is ascending
/// by longitude, then latitude, using the IEEE total order.
#[derive(Clone, Copy, Debug)]
pub struct Coordinate {
    lon: f64,
    lat: f64,
}

impl Coordinate {
    /// Create a coordinate without rounding.
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Create a coordinate with both components rounded to `precision`.
    pub fn rounded(lon: f64, lat: f64, precision: u32) -> Self {
        Self {
            lon: round_to(lon, precision),
            lat: round_to(lat, precision),
        }
    }

    /// This coordinate rounded to `precision` decimal places.
    pub fn round(self, precision: u32) -> Self {
        Self::rounded(self.lon, self.lat, precision)
    }

    /// Longitude (x).
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Latitude (y).
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Offset by `(d_lon, d_lat)` and round to `precision`.
    pub fn offset(&self, d_lon: f64, d_lat: f64, precision: u32) -> Self {
        Self::rounded(self.lon + d_lon, self.lat + d_lat, precision)
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.lon.to_bits() == other.lon.to_bits() && self.lat.to_bits() == other.lat.to_bits()
    }
}

impl Eq for Coordinate {}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lon.to_bits().hash(state);
        self.lat.to_bits().hash(state);
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.lon
            .total_cmp(&other.lon)
            .then_with(|| self.lat.total_cmp(&other.lat))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lon, self.lat)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self::new(lon, lat)
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self::new(lon, lat)
    }
}

impl From<geo::Point<f64>> for Coordinate {
    fn from(p: geo::Point<f64>) -> Self {
        Self::new(p.x(), p.y())
    }
}

impl From<geo::Coord<f64>> for Coordinate {
    fn from(c: geo::Coord<f64>) -> Self {
        Self::new(c.x, c.y)
    }
}

impl From<Coordinate> for geo::Coord<f64> {
    fn from(c: Coordinate) -> Self {
        geo::Coord { x: c.lon, y: c.lat }
    }
}

impl From<Coordinate> for geo::Point<f64> {
    fn from(c: Coordinate) -> Self {
        geo::Point::new(c.lon, c.lat)
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(c: Coordinate) -> Self {
        (c.lon, c.lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn rounding_collapses_float_noise() {
        let a = Coordinate::rounded(0.1 + 0.2, 1.0, 1);
        let b = Coordinate::rounded(0.3, 1.0, 1);
        assert_eq!(a, b);
        let set: HashSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn unrounded_noise_is_distinct() {
        let a = Coordinate::new(0.1 + 0.2, 1.0);
        let b = Coordinate::new(0.3, 1.0);
        assert_ne!(a, b);
    }

    #[test]
    fn negative_zero_matches_zero_after_rounding() {
        let a = Coordinate::rounded(-0.0, 0.0, 2);
        let b = Coordinate::rounded(0.0, 0.0, 2);
        assert_eq!(a, b);
    }

    #[test]
    fn ordering_is_lon_then_lat() {
        let mut v = vec![
            Coordinate::new(2.0, 1.0),
            Coordinate::new(1.0, 3.0),
            Coordinate::new(1.0, 2.0),
            Coordinate::new(-1.0, 9.0),
        ];
        v.sort();
        let pairs: Vec<(f64, f64)> = v.into_iter().map(Into::into).collect();
        assert_eq!(pairs, vec![(-1.0, 9.0), (1.0, 2.0), (1.0, 3.0), (2.0, 1.0)]);
    }

    #[test]
    fn offset_rounds_result() {
        let c = Coordinate::new(174.7, -41.3);
        let n = c.offset(0.1, -0.1, 1);
        assert_eq!(n, Coordinate::new(174.8, -41.4));
    }

    #[test]
    fn geo_conversions_preserve_axes() {
        let c = Coordinate::new(172.5, -43.5);
        let p: geo::Point<f64> = c.into();
        assert_eq!(p.x(), 172.5);
        assert_eq!(p.y(), -43.5);
        assert_eq!(Coordinate::from(p), c);
        let gc: geo::Coord<f64> = c.into();
        assert_eq!(Coordinate::from(gc), c);
        assert_eq!(Coordinate::from([172.5, -43.5]), c);
    }
}
