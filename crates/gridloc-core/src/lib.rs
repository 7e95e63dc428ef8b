//! Core types for gridloc lattice grids.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! value types every other gridloc crate builds on: the rounded
//! [`Coordinate`], the decimal [precision model](precision), and the sparse
//! per-point [`Attributes`] map.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod attr;
pub mod coord;
pub mod precision;

pub use attr::{AttrValue, Attributes};
pub use coord::Coordinate;
pub use precision::{format_float, precision_of, round_to};
