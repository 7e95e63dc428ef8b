//! Readers and writers for gridloc grids and polygon files.
//!
//! - [`grid_csv`]: headerless `lon,lat` (or `lat,lon`) CSV.
//! - [`attr_csv`]: CSV with a header row and attribute columns.
//! - [`blob`]: zlib-compressed base64 strings for embedding grids in code.
//! - [`archive`]: single-entry zip archives.
//! - [`polygon`]: WKT-CSV and GeoJSON polygon files loaded as regions.
//!
//! All fallible operations return [`IoError`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod archive;
pub mod attr_csv;
pub mod blob;
pub mod error;
pub mod grid_csv;
pub mod polygon;

pub use archive::{load_zip, read_first_entry, write_zip};
pub use attr_csv::{write_attr_grid, write_attr_grid_file, DEFAULT_COLUMNS};
pub use blob::{
    compress_string, decompress_string, grid_from_base64, grid_to_base64, pairs_from_base64,
    wrap_blob,
};
pub use error::IoError;
pub use grid_csv::{read_grid, read_grid_file, read_pairs, write_grid, write_grid_file, CsvLayout};
pub use polygon::{
    load_geojson, load_polygon_file, load_wkt_csv, write_wkt_csv, write_wkt_csv_zip, PolygonFormat,
    WktRecord,
};
