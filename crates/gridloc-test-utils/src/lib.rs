//! Test fixtures for gridloc development.
//!
//! Provides the canonical sample points and polygons used across the
//! workspace tests, plus seeded random grids for property-style checks
//! outside `proptest`.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::*;
