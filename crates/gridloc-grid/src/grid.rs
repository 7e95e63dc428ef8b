//! The immutable [`Grid`] value and its constructors.

use crate::error::GridError;
use gridloc_core::{precision_of, Attributes, Coordinate};
use gridloc_region::Region;
use indexmap::{IndexMap, IndexSet};

/// Sparse per-point attribute storage.
pub type AttributeMap = IndexMap<Coordinate, Attributes>;

/// An immutable set of lattice points at a fixed rounding precision.
///
/// Every coordinate is rounded to [`precision`](Grid::precision) on the
/// way in, so points produced by different arithmetic compare equal and
/// deduplicate. Points always iterate in ascending `(lon, lat)` order, and
/// iterating twice yields the same sequence.
///
/// No operation mutates a grid: union, clipping, neighbour expansion, and
/// annotation all return a new `Grid`.
///
/// # Examples
///
/// ```
/// use gridloc_grid::Grid;
///
/// let grid = Grid::for_bounds(0.0, 2.0, 0.0, 2.0, 0.5);
/// assert_eq!(grid.len(), 16);
/// assert_eq!(grid.precision(), 1);
///
/// let padded = grid.add_neighbours();
/// assert_eq!(padded.len(), 36);
/// assert_eq!(grid.len(), 16);
/// ```
#[derive(Clone, Debug)]
pub struct Grid {
    step: f64,
    precision: u32,
    points: IndexSet<Coordinate>,
    attributes: AttributeMap,
}

impl Grid {
    /// Create a grid from any sequence of coordinate-like values.
    ///
    /// Each value is rounded to the precision of `step`; duplicates collapse.
    pub fn new<I, P>(step: f64, points: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Coordinate>,
    {
        let precision = precision_of(step);
        let points = points
            .into_iter()
            .map(|p| p.into().round(precision))
            .collect();
        Self::from_parts(step, points, AttributeMap::new())
    }

    /// An empty grid with the given step.
    pub fn empty(step: f64) -> Self {
        Self::from_parts(step, IndexSet::new(), AttributeMap::new())
    }

    /// Create a grid from untyped numeric rows, as produced by a reader.
    ///
    /// Every row must hold exactly two values `[lon, lat]`. The first row
    /// that does not is reported as [`GridError::MalformedPoint`].
    pub fn from_rows<I, R>(step: f64, rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[f64]>,
    {
        let points = rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| match row.as_ref() {
                &[lon, lat] => Ok(Coordinate::new(lon, lat)),
                other => Err(GridError::MalformedPoint {
                    index,
                    len: other.len(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(step, points))
    }

    /// Every `(lon, lat)` in the half-open box `[lon_min, lon_max) x [lat_min, lat_max)`.
    ///
    /// Values are generated as `min + i * step`, so the maximum is only
    /// included if the arithmetic lands on it exactly. The grid is
    /// equidistant in degrees, not kilometres.
    pub fn for_bounds(lat_min: f64, lat_max: f64, lon_min: f64, lon_max: f64, step: f64) -> Self {
        if !(step.is_finite() && step > 0.0) {
            tracing::warn!(step, "non-positive or non-finite step, returning empty grid");
            return Self::empty(step);
        }
        let precision = precision_of(step);
        let lats = arange(lat_min, lat_max, step);
        let lons = arange(lon_min, lon_max, step);

        let mut points = IndexSet::with_capacity(lats.len() * lons.len());
        for &lat in &lats {
            for &lon in &lons {
                points.insert(Coordinate::rounded(lon, lat, precision));
            }
        }
        tracing::debug!(
            lat_min,
            lat_max,
            lon_min,
            lon_max,
            step,
            points = points.len(),
            "grid for bounds"
        );
        Self::from_parts(step, points, AttributeMap::new())
    }

    /// Every lattice point at `step` strictly inside `region`.
    ///
    /// The region's bounding box is snapped onto the lattice, widened by
    /// one step on the upper edges so that snapping never loses coverage,
    /// and the resulting box grid is clipped to the polygons.
    pub fn for_polygon(step: f64, region: &Region) -> Self {
        let Some(bounds) = region.total_bounds() else {
            tracing::warn!(region = region.name(), "empty region, returning empty grid");
            return Self::empty(step);
        };
        let b = bounds.snapped(step);
        Self::for_bounds(
            b.lat_min,
            b.lat_max + step,
            b.lon_min,
            b.lon_max + step,
            step,
        )
        .intersection(region)
    }

    /// This grid with `attributes` attached.
    ///
    /// Keys are rounded to the grid precision. Existing attributes are
    /// replaced.
    pub fn with_attributes(&self, attributes: AttributeMap) -> Self {
        let precision = self.precision;
        let attributes = attributes
            .into_iter()
            .map(|(c, attrs)| (c.round(precision), attrs))
            .collect();
        Self::from_parts(self.step, self.points.clone(), attributes)
    }

    /// Assemble a grid from already-rounded parts, restoring canonical order.
    pub(crate) fn from_parts(
        step: f64,
        mut points: IndexSet<Coordinate>,
        mut attributes: AttributeMap,
    ) -> Self {
        points.sort();
        attributes.sort_keys();
        Self {
            step,
            precision: precision_of(step),
            points,
            attributes,
        }
    }

    /// Step the grid was created with.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Decimal places every coordinate is rounded to.
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the grid has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether `point`, rounded to this grid's precision, is a member.
    pub fn contains(&self, point: impl Into<Coordinate>) -> bool {
        self.points.contains(&point.into().round(self.precision))
    }

    /// Points in ascending `(lon, lat)` order.
    pub fn iter(&self) -> indexmap::set::Iter<'_, Coordinate> {
        self.points.iter()
    }

    /// The underlying point set.
    pub fn points(&self) -> &IndexSet<Coordinate> {
        &self.points
    }

    /// The full attribute map, including entries for points no longer in
    /// the grid.
    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    /// Points as `(lon, lat)` pairs in grid order.
    pub fn to_pairs(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|&c| c.into()).collect()
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.step.to_bits() == other.step.to_bits()
            && self.points == other.points
            && self.attributes == other.attributes
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Coordinate;
    type IntoIter = indexmap::set::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// `start, start + step, ...` while strictly below `stop`.
fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    let n = ((stop - start) / step).ceil();
    if !(n > 0.0) {
        return Vec::new();
    }
    (0..n as usize).map(|i| start + i as f64 * step).collect()
}
