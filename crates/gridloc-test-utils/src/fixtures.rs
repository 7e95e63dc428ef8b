//! Reusable grid and region fixtures.
//!
//! - [`sample_a`]..[`sample_d`]: four integer points; only `d` lies inside
//!   [`quad_region`].
//! - [`square_region`]: axis-aligned square from `(5.5, 5.5)` to `(7.5, 7.5)`.
//! - [`random_grid`]: deterministic integer-lattice grid from a seed.

use geo::{polygon, Polygon};
use gridloc_grid::Grid;
use gridloc_region::Region;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

pub fn sample_a() -> (f64, f64) {
    (1.0, 2.0)
}

pub fn sample_b() -> (f64, f64) {
    (2.0, 3.0)
}

pub fn sample_c() -> (f64, f64) {
    (3.0, 3.0)
}

pub fn sample_d() -> (f64, f64) {
    (4.0, 5.0)
}

/// Grid of `a`, `b`, `c` at step 1.
pub fn grid_abc() -> Grid {
    Grid::new(1.0, [sample_a(), sample_b(), sample_c()])
}

/// Grid of `b`, `c`, `d` at step 1.
pub fn grid_bcd() -> Grid {
    Grid::new(1.0, [sample_b(), sample_c(), sample_d()])
}

/// Grid of all four sample points at step 1.
pub fn grid_abcd() -> Grid {
    Grid::new(1.0, [sample_a(), sample_b(), sample_c(), sample_d()])
}

/// Quadrilateral containing [`sample_d`] and none of the other samples.
pub fn quad_polygon() -> Polygon<f64> {
    polygon![(x: 3.5, y: 3.5), (x: 5.5, y: 3.5), (x: 5.5, y: 7.5), (x: 3.5, y: 5.5)]
}

pub fn quad_region() -> Region {
    Region::new("quad", vec![quad_polygon()])
}

pub fn square_polygon() -> Polygon<f64> {
    rectangle(5.5, 5.5, 7.5, 7.5)
}

/// Lattice points of [`square_region`] at step 1.
pub fn square_points() -> Vec<(f64, f64)> {
    vec![(6.0, 6.0), (6.0, 7.0), (7.0, 6.0), (7.0, 7.0)]
}

pub fn square_region() -> Region {
    Region::new("square", vec![square_polygon()])
}

/// Closed axis-aligned rectangle polygon.
pub fn rectangle(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon<f64> {
    polygon![(x: x0, y: y0), (x: x1, y: y0), (x: x1, y: y1), (x: x0, y: y1)]
}

/// Up to `n` distinct integer points in `[-extent, extent)^2` at step 1.
///
/// The same seed always yields the same grid.
pub fn random_grid(seed: u64, n: usize, extent: i32) -> Grid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let points: Vec<(f64, f64)> = (0..n)
        .map(|_| {
            (
                f64::from(rng.gen_range(-extent..extent)),
                f64::from(rng.gen_range(-extent..extent)),
            )
        })
        .collect();
    Grid::new(1.0, points)
}
