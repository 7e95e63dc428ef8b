//! Polygon regions for clipping gridloc grids.
//!
//! A [`Region`] is a named, immutable collection of polygons exposing the
//! two queries the grid algebra needs: a point-containment test and a
//! bounding box. [`RegionPredicate`] adapts a region into the predicate
//! form consumed by grid filtering and clipping.
//!
//! # Containment
//!
//! Containment is strict: a point lying exactly on a polygon boundary is
//! not contained. A point is inside a region iff it is inside any of its
//! polygons; the test short-circuits on the first containing polygon.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod predicate;
pub mod region;

pub use bounds::Bounds;
pub use predicate::{ClipMode, RegionPredicate};
pub use region::Region;
