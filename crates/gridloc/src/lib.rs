//! Gridloc: polygon-constrained geographic lattice grids.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! gridloc sub-crates. For most users, adding `gridloc` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gridloc::prelude::*;
//! use gridloc::geo::polygon;
//!
//! // Land and a backarc zone covering its eastern half.
//! let land = Region::new(
//!     "land",
//!     vec![polygon![(x: 170.05, y: -44.95), (x: 170.55, y: -44.95),
//!                   (x: 170.55, y: -44.45), (x: 170.05, y: -44.45)]],
//! );
//! let backarc = Region::new(
//!     "backarc",
//!     vec![polygon![(x: 170.25, y: -44.95), (x: 170.55, y: -44.95),
//!                   (x: 170.55, y: -44.45), (x: 170.25, y: -44.45)]],
//! );
//!
//! // 0.1 degree lattice clipped to the land, padded by two neighbour rings.
//! let config = GenerateConfig { neighbours: 2, ..Default::default() };
//! let grid = config
//!     .generate(&land)
//!     .unwrap()
//!     .annotate("backarc", 0, None)
//!     .annotate("backarc", 1, Some(&backarc));
//!
//! assert_eq!(grid.len(), 81);
//! assert_eq!(grid.attribute((170.4, -44.6), "backarc"), Some(&AttrValue::Int(1)));
//!
//! let mut csv = Vec::new();
//! gridloc::io::write_attr_grid(&grid, &mut csv, &["lat", "lon", "backarc"]).unwrap();
//! assert!(csv.starts_with(b"lat,lon,backarc\n"));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridloc-core` | Coordinates, precision, attribute values |
//! | [`region`] | `gridloc-region` | Polygon regions, bounds, containment predicates |
//! | [`grid`] | `gridloc-grid` | The `Grid` value, set algebra, generation, comparison |
//! | [`io`] | `gridloc-io` | CSV, zip, base64, and polygon file formats |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types (`gridloc-core`).
///
/// Contains [`types::Coordinate`], the precision helpers
/// ([`types::precision_of`], [`types::round_to`]), and the sparse
/// [`types::Attributes`] map.
pub use gridloc_core as types;

/// Polygon regions (`gridloc-region`).
///
/// [`region::Region`] groups polygons under a name and answers the
/// containment and bounding-box queries used for clipping.
pub use gridloc_region as region;

/// Lattice grids (`gridloc-grid`).
///
/// [`grid::Grid`] construction, set algebra, neighbour expansion,
/// annotation, [`grid::compare`], and [`grid::GenerateConfig`].
pub use gridloc_grid as grid;

/// Readers and writers (`gridloc-io`).
///
/// Plain and attribute CSV, zlib+base64 blobs, zip archives, and polygon
/// files via [`io::load_polygon_file`].
pub use gridloc_io as io;

/// The `geo` crate, for building polygons.
pub use geo;

/// Common imports for typical gridloc usage.
///
/// ```rust
/// use gridloc::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use gridloc_core::{AttrValue, Attributes, Coordinate};

    // Regions
    pub use gridloc_region::{Bounds, ClipMode, Region, RegionPredicate};

    // Grids
    pub use gridloc_grid::{compare, GenerateConfig, Grid, Operand};

    // Errors
    pub use gridloc_grid::{ConfigError, GridError};
    pub use gridloc_io::IoError;

    // I/O
    pub use gridloc_io::{load_polygon_file, read_grid_file, write_grid_file, CsvLayout};
}
