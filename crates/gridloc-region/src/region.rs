//! Named polygon collections.

use crate::bounds::Bounds;
use crate::predicate::RegionPredicate;
use geo::{BoundingRect, Contains, Geometry, Polygon, Rect};
use gridloc_core::Coordinate;

/// A named, immutable collection of polygons.
///
/// Bounding boxes are computed once at construction: the region-wide box
/// for [`total_bounds`](Region::total_bounds) and one box per polygon, used
/// to skip the exact containment test for points that cannot be inside.
///
/// # Examples
///
/// ```
/// use geo::{polygon, Polygon};
/// use gridloc_core::Coordinate;
/// use gridloc_region::Region;
///
/// let square: Polygon<f64> = polygon![
///     (x: 5.5, y: 5.5), (x: 7.5, y: 5.5), (x: 7.5, y: 7.5), (x: 5.5, y: 7.5),
/// ];
/// let region = Region::new("square", vec![square]);
///
/// assert!(region.contains(&Coordinate::new(6.0, 6.0)));
/// assert!(!region.contains(&Coordinate::new(8.0, 6.0)));
/// assert_eq!(region.total_bounds().unwrap().as_tuple(), (5.5, 5.5, 7.5, 7.5));
/// ```
#[derive(Clone, Debug)]
pub struct Region {
    name: String,
    polygons: Vec<Polygon<f64>>,
    polygon_bounds: Vec<Option<Rect<f64>>>,
    bounds: Option<Bounds>,
}

impl Region {
    /// Build a region from a list of polygons.
    pub fn new(name: impl Into<String>, polygons: Vec<Polygon<f64>>) -> Self {
        let name = name.into();
        let polygon_bounds: Vec<Option<Rect<f64>>> =
            polygons.iter().map(|p| p.bounding_rect()).collect();
        let bounds = polygon_bounds
            .iter()
            .flatten()
            .map(|r| Bounds::from(*r))
            .reduce(|acc, b| acc.union(&b));
        if polygons.is_empty() {
            tracing::warn!(region = %name, "region has no polygons");
        }
        tracing::debug!(region = %name, polygons = polygons.len(), "region built");
        Self {
            name,
            polygons,
            polygon_bounds,
            bounds,
        }
    }

    /// Build a region from arbitrary geometries.
    ///
    /// Polygons, multi-polygons, rectangles, triangles, and geometry
    /// collections are flattened into the polygon list. Points and lines
    /// have no area and are skipped with a warning.
    pub fn from_geometries(
        name: impl Into<String>,
        geometries: impl IntoIterator<Item = Geometry<f64>>,
    ) -> Self {
        let name = name.into();
        let mut polygons = Vec::new();
        for geometry in geometries {
            collect_polygons(&name, geometry, &mut polygons);
        }
        Self::new(name, polygons)
    }

    /// Region name, used in diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The polygons making up this region.
    pub fn polygons(&self) -> &[Polygon<f64>] {
        &self.polygons
    }

    /// Number of polygons.
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    /// Whether the region has no polygons.
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Bounding box of all polygons, or `None` for an empty region.
    pub fn total_bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// `true` iff any polygon strictly contains `point`.
    pub fn contains(&self, point: &Coordinate) -> bool {
        let c: geo::Coord<f64> = (*point).into();
        self.polygons
            .iter()
            .zip(&self.polygon_bounds)
            .any(|(polygon, rect)| match rect {
                Some(rect) if !rect_covers(rect, &c) => false,
                _ => polygon.contains(&c),
            })
    }

    /// Containment predicate selecting points inside this region.
    pub fn predicate(&self) -> RegionPredicate<'_> {
        RegionPredicate::inside(self)
    }
}

fn rect_covers(rect: &Rect<f64>, c: &geo::Coord<f64>) -> bool {
    c.x >= rect.min().x && c.x <= rect.max().x && c.y >= rect.min().y && c.y <= rect.max().y
}

fn collect_polygons(region: &str, geometry: Geometry<f64>, out: &mut Vec<Polygon<f64>>) {
    match geometry {
        Geometry::Polygon(p) => out.push(p),
        Geometry::MultiPolygon(mp) => out.extend(mp.0),
        Geometry::Rect(r) => out.push(r.to_polygon()),
        Geometry::Triangle(t) => out.push(t.to_polygon()),
        Geometry::GeometryCollection(gc) => {
            for g in gc.0 {
                collect_polygons(region, g, out);
            }
        }
        other => {
            tracing::warn!(
                region,
                kind = geometry_kind(&other),
                "skipping geometry without area"
            );
        }
    }
}

fn geometry_kind(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        _ => "Geometry",
    }
}
