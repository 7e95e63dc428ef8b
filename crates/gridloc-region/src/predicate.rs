//! Adapter turning a [`Region`] into a point predicate.

use crate::region::Region;
use gridloc_core::Coordinate;

/// Which side of a region a clip keeps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClipMode {
    /// Keep points contained in the region (intersection).
    Inside,
    /// Keep points not contained in the region (difference).
    Outside,
}

/// A region viewed as a point predicate.
///
/// [`contains`](Self::contains) is the raw containment test;
/// [`test`](Self::test) applies the [`ClipMode`], so the same adapter
/// serves both intersection and difference clipping.
#[derive(Clone, Copy, Debug)]
pub struct RegionPredicate<'a> {
    region: &'a Region,
    mode: ClipMode,
}

impl<'a> RegionPredicate<'a> {
    /// Predicate accepting points inside `region`.
    pub fn inside(region: &'a Region) -> Self {
        Self {
            region,
            mode: ClipMode::Inside,
        }
    }

    /// Predicate accepting points outside `region`.
    pub fn outside(region: &'a Region) -> Self {
        Self {
            region,
            mode: ClipMode::Outside,
        }
    }

    /// The wrapped region.
    pub fn region(&self) -> &'a Region {
        self.region
    }

    /// Clip mode.
    pub fn mode(&self) -> ClipMode {
        self.mode
    }

    /// `true` iff any polygon of the region contains `point`.
    pub fn contains(&self, point: &Coordinate) -> bool {
        self.region.contains(point)
    }

    /// Containment with the clip mode applied.
    pub fn test(&self, point: &Coordinate) -> bool {
        match self.mode {
            ClipMode::Inside => self.contains(point),
            ClipMode::Outside => !self.contains(point),
        }
    }

    /// This predicate as a closure, for APIs taking `Fn(&Coordinate) -> bool`.
    pub fn as_fn(&self) -> impl Fn(&Coordinate) -> bool + 'a {
        let this = *self;
        move |point| this.test(point)
    }
}
