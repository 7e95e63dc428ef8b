//! 8-connected neighbour expansion.

use crate::grid::Grid;
use gridloc_core::Coordinate;
use indexmap::IndexSet;
use smallvec::SmallVec;

/// The 3x3 block in `(d_lon, d_lat)` step units: the point itself plus its
/// N, S, W, E, NW, NE, SW, SE neighbours.
const OFFSETS_9: [(i32, i32); 9] = [
    (0, 0),
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

impl Grid {
    /// The 3x3 lattice block centred on `point`, at this grid's step.
    ///
    /// `point` itself comes first. Results are rounded to the grid precision
    /// but need not be members of the grid.
    pub fn neighbourhood(&self, point: &Coordinate) -> SmallVec<[Coordinate; 9]> {
        let step = self.step();
        let precision = self.precision();
        OFFSETS_9
            .iter()
            .map(|&(dx, dy)| point.offset(f64::from(dx) * step, f64::from(dy) * step, precision))
            .collect()
    }

    /// Surround every point with its 8 lattice neighbours.
    ///
    /// The result holds the union of the 3x3 blocks around all points.
    /// Attributes are carried over unchanged; new points have none.
    pub fn add_neighbours(&self) -> Grid {
        let mut points = IndexSet::with_capacity(self.len() * 3);
        for point in self.iter() {
            points.extend(self.neighbourhood(point));
        }
        tracing::debug!(
            before = self.len(),
            after = points.len(),
            "neighbours added"
        );
        Grid::from_parts(self.step(), points, self.attributes().clone())
    }

    /// Apply [`add_neighbours`](Grid::add_neighbours) `iterations` times.
    pub fn expand(&self, iterations: usize) -> Grid {
        let mut grid = self.clone();
        for _ in 0..iterations {
            grid = grid.add_neighbours();
        }
        grid
    }
}
