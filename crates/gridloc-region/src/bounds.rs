//! Axis-aligned bounding boxes in degrees.

use gridloc_core::Coordinate;

/// Bounding box as `(lon_min, lat_min, lon_max, lat_max)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// Minimum longitude.
    pub lon_min: f64,
    /// Minimum latitude.
    pub lat_min: f64,
    /// Maximum longitude.
    pub lon_max: f64,
    /// Maximum latitude.
    pub lat_max: f64,
}

impl Bounds {
    /// Create a bounding box from its four edges.
    pub fn new(lon_min: f64, lat_min: f64, lon_max: f64, lat_max: f64) -> Self {
        Self {
            lon_min,
            lat_min,
            lon_max,
            lat_max,
        }
    }

    /// The edges in `(lon_min, lat_min, lon_max, lat_max)` order.
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.lon_min, self.lat_min, self.lon_max, self.lat_max)
    }

    /// Smallest box covering both `self` and `other`.
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            lon_min: self.lon_min.min(other.lon_min),
            lat_min: self.lat_min.min(other.lat_min),
            lon_max: self.lon_max.max(other.lon_max),
            lat_max: self.lat_max.max(other.lat_max),
        }
    }

    /// Every edge truncated toward zero onto a multiple of `step`.
    ///
    /// Truncation means negative edges move up, not down; callers that need
    /// full coverage widen the upper edges by one step after snapping.
    pub fn snapped(&self, step: f64) -> Bounds {
        let snap = |v: f64| (v / step).trunc() * step;
        Bounds {
            lon_min: snap(self.lon_min),
            lat_min: snap(self.lat_min),
            lon_max: snap(self.lon_max),
            lat_max: snap(self.lat_max),
        }
    }

    /// Inclusive containment test.
    pub fn contains(&self, c: &Coordinate) -> bool {
        c.lon() >= self.lon_min
            && c.lon() <= self.lon_max
            && c.lat() >= self.lat_min
            && c.lat() <= self.lat_max
    }
}

impl From<geo::Rect<f64>> for Bounds {
    fn from(r: geo::Rect<f64>) -> Self {
        Bounds::new(r.min().x, r.min().y, r.max().x, r.max().y)
    }
}
