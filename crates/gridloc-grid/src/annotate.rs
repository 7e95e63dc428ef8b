//! Per-point attribute annotation and lookup.

use crate::grid::Grid;
use gridloc_core::{AttrValue, Attributes, Coordinate};
use gridloc_region::Region;

impl Grid {
    /// Set attribute `name` to `value` on every point, or only on points
    /// inside `clip` when given.
    ///
    /// Points outside the clip keep their previous attributes. The returned
    /// grid has exactly the points of `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use geo::polygon;
    /// use gridloc_grid::Grid;
    /// use gridloc_region::Region;
    ///
    /// let backarc = Region::new(
    ///     "backarc",
    ///     vec![polygon![(x: 0.5, y: 0.5), (x: 1.5, y: 0.5), (x: 1.5, y: 1.5), (x: 0.5, y: 1.5)]],
    /// );
    /// let grid = Grid::for_bounds(0.0, 2.0, 0.0, 2.0, 1.0)
    ///     .annotate("backarc", "0", None)
    ///     .annotate("backarc", "1", Some(&backarc));
    ///
    /// assert_eq!(grid.attribute((1.0, 1.0), "backarc").unwrap().to_string(), "1");
    /// assert_eq!(grid.attribute((0.0, 0.0), "backarc").unwrap().to_string(), "0");
    /// ```
    pub fn annotate(
        &self,
        name: impl Into<String>,
        value: impl Into<AttrValue>,
        clip: Option<&Region>,
    ) -> Grid {
        let name = name.into();
        let value = value.into();
        let mut attributes = self.attributes().clone();
        let mut annotated = 0usize;
        for point in self.iter().filter(|p| clip.map_or(true, |r| r.contains(p))) {
            attributes
                .entry(*point)
                .or_default()
                .insert(name.clone(), value.clone());
            annotated += 1;
        }
        tracing::debug!(
            attribute = %name,
            clip = clip.map(Region::name),
            annotated,
            total = self.len(),
            "grid annotated"
        );
        Grid::from_parts(self.step(), self.points().clone(), attributes)
    }

    /// A copy of the attributes recorded for `point`; empty if none.
    ///
    /// `point` is rounded to the grid precision before lookup.
    pub fn get_attributes(&self, point: impl Into<Coordinate>) -> Attributes {
        let key = point.into().round(self.precision());
        self.attributes().get(&key).cloned().unwrap_or_default()
    }

    /// A single attribute of `point`, if recorded.
    pub fn attribute(&self, point: impl Into<Coordinate>, name: &str) -> Option<&AttrValue> {
        let key = point.into().round(self.precision());
        self.attributes().get(&key).and_then(|attrs| attrs.get(name))
    }
}
