//! Set algebra and filtering over grids.

use crate::grid::Grid;
use gridloc_core::Coordinate;
use gridloc_region::{Region, RegionPredicate};
use indexmap::IndexSet;

/// The right-hand side of a set operation: another grid or a polygon region.
///
/// A region operand is interpreted per operation: `union` first rasterises
/// it at the left grid's step, while `intersection` and `difference` clip
/// by containment.
#[derive(Clone, Copy, Debug)]
pub enum Operand<'a> {
    /// An explicit set of lattice points.
    Grid(&'a Grid),
    /// A polygon region.
    Region(&'a Region),
}

impl<'a> From<&'a Grid> for Operand<'a> {
    fn from(g: &'a Grid) -> Self {
        Operand::Grid(g)
    }
}

impl<'a> From<&'a Region> for Operand<'a> {
    fn from(r: &'a Region) -> Self {
        Operand::Region(r)
    }
}

impl Grid {
    /// Points in `self` or `other`.
    ///
    /// Attributes of `other` overwrite those of `self` per point. Step and
    /// precision come from `self`; points and attribute keys of `other` are
    /// rounded to that precision, so coarser results merge colliding points.
    pub fn union<'a>(&self, other: impl Into<Operand<'a>>) -> Grid {
        match other.into() {
            Operand::Grid(g) => self.union_grid(g),
            Operand::Region(r) => self.union_grid(&Grid::for_polygon(self.step(), r)),
        }
    }

    /// Points in both `self` and `other`. Attributes come from `self`.
    pub fn intersection<'a>(&self, other: impl Into<Operand<'a>>) -> Grid {
        match other.into() {
            Operand::Grid(g) => self.retain_points(|p| g.points().contains(p)),
            Operand::Region(r) => self.clip(RegionPredicate::inside(r)),
        }
    }

    /// Points in `self` but not in `other`. Attributes come from `self`.
    pub fn difference<'a>(&self, other: impl Into<Operand<'a>>) -> Grid {
        match other.into() {
            Operand::Grid(g) => self.retain_points(|p| !g.points().contains(p)),
            Operand::Region(r) => self.clip(RegionPredicate::outside(r)),
        }
    }

    /// Points for which `predicate` holds. Attributes come from `self`.
    ///
    /// The predicate must be free of side effects; evaluation order is not
    /// part of the contract.
    pub fn filter(&self, predicate: impl Fn(&Coordinate) -> bool) -> Grid {
        self.retain_points(predicate)
    }

    /// Points accepted by a region predicate.
    pub fn clip(&self, predicate: RegionPredicate<'_>) -> Grid {
        let clipped = self.retain_points(predicate.as_fn());
        tracing::debug!(
            region = predicate.region().name(),
            mode = ?predicate.mode(),
            before = self.len(),
            after = clipped.len(),
            "grid clipped"
        );
        clipped
    }

    fn union_grid(&self, other: &Grid) -> Grid {
        let precision = self.precision();
        let mut points = self.points().clone();
        points.extend(other.points().iter().map(|p| p.round(precision)));
        let mut attributes = self.attributes().clone();
        for (point, attrs) in other.attributes() {
            attributes.insert(point.round(precision), attrs.clone());
        }
        Grid::from_parts(self.step(), points, attributes)
    }

    fn retain_points(&self, keep: impl Fn(&Coordinate) -> bool) -> Grid {
        let points: IndexSet<Coordinate> = self.points().iter().filter(|p| keep(p)).copied().collect();
        Grid::from_parts(self.step(), points, self.attributes().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::polygon;
    use proptest::prelude::*;

    fn a() -> (f64, f64) {
        (1.0, 2.0)
    }
    fn b() -> (f64, f64) {
        (2.0, 3.0)
    }
    fn c() -> (f64, f64) {
        (3.0, 3.0)
    }
    fn d() -> (f64, f64) {
        (4.0, 5.0)
    }

    /// Quadrilateral containing `d` but none of `a`, `b`, `c`.
    fn quad() -> Region {
        Region::new(
            "quad",
            vec![polygon![(x: 3.5, y: 3.5), (x: 5.5, y: 3.5), (x: 5.5, y: 7.5), (x: 3.5, y: 5.5)]],
        )
    }

    // ── Grid operands ───────────────────────────────────────────

    #[test]
    fn union_of_grids() {
        let ga = Grid::new(1.0, [a(), b(), c()]);
        let gb = Grid::new(1.0, [b(), c(), d()]);
        let result = ga.union(&gb);
        assert_eq!(result.to_pairs(), vec![a(), b(), c(), d()]);
        assert_eq!(ga.to_pairs(), vec![a(), b(), c()]);
        assert_eq!(gb.to_pairs(), vec![b(), c(), d()]);
    }

    #[test]
    fn intersection_of_grids() {
        let ga = Grid::new(1.0, [a(), b(), c()]);
        let gb = Grid::new(1.0, [b(), c(), d()]);
        assert_eq!(ga.intersection(&gb).to_pairs(), vec![b(), c()]);
        assert_eq!(ga.to_pairs(), vec![a(), b(), c()]);
    }

    #[test]
    fn difference_of_grids() {
        let ga = Grid::new(1.0, [a(), b(), c()]);
        let gb = Grid::new(1.0, [b(), c(), d()]);
        assert_eq!(ga.difference(&gb).to_pairs(), vec![a()]);
        assert_eq!(ga.to_pairs(), vec![a(), b(), c()]);
    }

    #[test]
    fn union_rounds_right_operand_to_left_precision() {
        let ga = Grid::new(1.0, [(1.0, 1.0)]);
        let gb = Grid::new(0.5, [(0.5, 0.5), (2.5, 1.0)]);
        let u = ga.union(&gb);
        assert_eq!(u.step(), 1.0);
        assert_eq!(u.precision(), 0);
        // (0.5, 0.5) rounds onto (1, 1); (2.5, 1.0) onto (3, 1).
        assert_eq!(u.to_pairs(), vec![(1.0, 1.0), (3.0, 1.0)]);
        assert!(u.iter().all(|p| *p == p.round(u.precision())));
        assert!(u.contains((0.5, 0.5)));
    }

    #[test]
    fn union_rekeys_right_attributes() {
        let ga = Grid::new(1.0, [(1.0, 1.0)]);
        let gb = Grid::new(0.5, [(0.5, 0.5)]).annotate("zone", "b", None);
        let u = ga.union(&gb);
        assert_eq!(u.attribute((1.0, 1.0), "zone"), Some(&"b".into()));
        assert_eq!(u.attributes().len(), 1);
    }

    // ── Region operands ─────────────────────────────────────────

    #[test]
    fn intersection_with_region() {
        let g = Grid::new(1.0, [a(), b(), c(), d()]);
        assert_eq!(g.intersection(&quad()).to_pairs(), vec![d()]);
    }

    #[test]
    fn difference_with_region() {
        let g = Grid::new(1.0, [a(), b(), c(), d()]);
        assert_eq!(g.difference(&quad()).to_pairs(), vec![a(), b(), c()]);
    }

    #[test]
    fn union_with_region_rasterises_at_own_step() {
        let region = quad();
        let g = Grid::new(1.0, [a(), b(), c()]);
        let via_region = g.union(&region);
        let via_grid = g.union(&Grid::for_polygon(1.0, &region));
        assert_eq!(via_region, via_grid);
        assert!(via_region.contains(d()));
    }

    #[test]
    fn operand_from_conversions() {
        let g = Grid::new(1.0, [a()]);
        let r = quad();
        assert!(matches!(Operand::from(&g), Operand::Grid(_)));
        assert!(matches!(Operand::from(&r), Operand::Region(_)));
    }

    // ── Filtering ───────────────────────────────────────────────

    #[test]
    fn filter_by_closure() {
        let g = Grid::new(1.0, [a(), b(), c(), d()]);
        let f = g.filter(|p| p.lon() + p.lat() > 5.0);
        assert_eq!(f.to_pairs(), vec![c(), d()]);
        assert_eq!(g.len(), 4);
    }

    #[test]
    fn filter_keeps_attributes() {
        let g = Grid::new(1.0, [a(), d()]).annotate("zone", "x", None);
        let f = g.filter(|p| p.lon() < 2.0);
        assert_eq!(f.len(), 1);
        // Entry for the dropped point is retained.
        assert_eq!(f.attributes().len(), 2);
        assert_eq!(f.get_attributes(a()).get("zone"), Some(&"x".into()));
    }

    // ── Properties ──────────────────────────────────────────────

    fn arb_grid() -> impl Strategy<Value = Grid> {
        prop::collection::vec((-10i32..10, -10i32..10), 0..40)
            .prop_map(|v| Grid::new(1.0, v.into_iter().map(|(x, y)| (x as f64, y as f64))))
    }

    proptest! {
        #[test]
        fn union_is_idempotent(ga in arb_grid(), gb in arb_grid()) {
            let u = ga.union(&gb);
            prop_assert_eq!(u.union(&ga), u);
        }

        #[test]
        fn intersection_is_no_larger(ga in arb_grid(), gb in arb_grid()) {
            let i = ga.intersection(&gb);
            prop_assert!(i.len() <= ga.len().min(gb.len()));
        }

        #[test]
        fn difference_is_disjoint(ga in arb_grid(), gb in arb_grid()) {
            prop_assert!(ga.difference(&gb).intersection(&gb).is_empty());
        }

        #[test]
        fn operands_unchanged(ga in arb_grid(), gb in arb_grid()) {
            let (ca, cb) = (ga.clone(), gb.clone());
            let _ = ga.union(&gb);
            let _ = ga.intersection(&gb);
            let _ = ga.difference(&gb);
            prop_assert_eq!(ga, ca);
            prop_assert_eq!(gb, cb);
        }

        #[test]
        fn union_has_no_duplicates_at_precision(
            ga in arb_grid(),
            raw in prop::collection::vec((-20i32..20, -20i32..20), 0..40),
        ) {
            let fine = Grid::new(
                0.5,
                raw.into_iter().map(|(x, y)| (f64::from(x) * 0.5, f64::from(y) * 0.5)),
            );
            let u = ga.union(&fine);
            let rounded: IndexSet<Coordinate> = u.iter().map(|p| p.round(u.precision())).collect();
            prop_assert_eq!(rounded.len(), u.len());
        }

        #[test]
        fn partition_by_region(ga in arb_grid()) {
            let region = quad();
            let inside = ga.intersection(&region);
            let outside = ga.difference(&region);
            prop_assert_eq!(inside.len() + outside.len(), ga.len());
            let merged = inside.union(&outside);
            prop_assert_eq!(merged.points(), ga.points());
        }
    }
}
