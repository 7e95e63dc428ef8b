//! Immutable polygon-constrained lattice grids.
//!
//! A [`Grid`] is a deduplicated set of `(lon, lat)` points sitting on a
//! regular lattice of spacing `step` degrees, together with sparse per-point
//! attributes. Grids are built from explicit points, from a bounding box
//! ([`Grid::for_bounds`]), or from a polygon region ([`Grid::for_polygon`]),
//! and combined with set algebra, neighbour expansion, and annotation. Every
//! operation returns a new grid.
//!
//! # Rounding
//!
//! Every coordinate entering a grid is rounded to the decimal precision of
//! the step (`0.1` gives one place, `0.25` two, `1.0` zero). Floating-point
//! noise from lattice arithmetic therefore never produces distinct points
//! that should be equal.
//!
//! # Ordering
//!
//! Points always iterate in ascending `(lon, lat)` order. Two grids holding
//! the same points iterate identically, so serialised output is stable.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod algebra;
pub mod annotate;
pub mod compare;
pub mod config;
pub mod error;
pub mod grid;
pub mod neighbours;

pub use algebra::Operand;
pub use compare::{compare, ComparisonSummary, GridComparison};
pub use config::{ConfigError, GenerateConfig};
pub use error::GridError;
pub use grid::{AttributeMap, Grid};
