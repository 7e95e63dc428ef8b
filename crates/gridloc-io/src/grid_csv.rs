//! Headerless two-column grid CSV.
//!
//! One row per point, in grid order. The column order is chosen by
//! [`CsvLayout`]; the grid step is not stored and must be supplied when
//! reading.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use gridloc_core::{format_float, Coordinate};
use gridloc_grid::Grid;

use crate::error::IoError;

/// Column order of a plain grid CSV.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CsvLayout {
    /// `lon,lat`.
    #[default]
    LonLat,
    /// `lat,lon`.
    LatLon,
}

impl CsvLayout {
    /// `LatLon` when `lat_first`, otherwise `LonLat`.
    pub fn from_lat_first(lat_first: bool) -> Self {
        if lat_first {
            Self::LatLon
        } else {
            Self::LonLat
        }
    }

    /// Order a coordinate's components for output.
    pub fn columns(self, c: &Coordinate) -> (f64, f64) {
        match self {
            Self::LonLat => (c.lon(), c.lat()),
            Self::LatLon => (c.lat(), c.lon()),
        }
    }

    /// Interpret two input columns as `(lon, lat)`.
    pub fn to_lon_lat(self, first: f64, second: f64) -> (f64, f64) {
        match self {
            Self::LonLat => (first, second),
            Self::LatLon => (second, first),
        }
    }
}

/// Write `grid` as headerless CSV.
///
/// Floats always carry a fractional digit (`1.0`, `174.7`).
pub fn write_grid<W: Write>(grid: &Grid, writer: W, layout: CsvLayout) -> Result<(), IoError> {
    let mut out = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);
    for point in grid {
        let (first, second) = layout.columns(point);
        out.write_record([format_float(first), format_float(second)])?;
    }
    out.flush()?;
    Ok(())
}

/// Write `grid` to a file at `path`, replacing any existing file.
pub fn write_grid_file(
    grid: &Grid,
    path: impl AsRef<Path>,
    layout: CsvLayout,
) -> Result<(), IoError> {
    let path = path.as_ref();
    write_grid(grid, File::create(path)?, layout)?;
    tracing::info!(path = %path.display(), points = grid.len(), "grid written");
    Ok(())
}

/// Read a headerless CSV whose first two columns are coordinates.
///
/// Extra columns are ignored. Rows with fewer than two fields or with
/// non-numeric coordinates are rejected with [`IoError::Parse`].
pub fn read_grid<R: Read>(reader: R, step: f64, layout: CsvLayout) -> Result<Grid, IoError> {
    let pairs = read_pairs(reader, layout)?;
    let rows = pairs.into_iter().map(|(lon, lat)| [lon, lat]);
    Ok(Grid::from_rows(step, rows)?)
}

/// Read a grid CSV file at `path`.
pub fn read_grid_file(
    path: impl AsRef<Path>,
    step: f64,
    layout: CsvLayout,
) -> Result<Grid, IoError> {
    let path = path.as_ref();
    let grid = read_grid(File::open(path)?, step, layout)?;
    tracing::info!(path = %path.display(), points = grid.len(), "grid loaded");
    Ok(grid)
}

/// Read the first two columns of every row as `(lon, lat)` in file order.
///
/// Duplicates are kept and nothing is rounded.
pub fn read_pairs<R: Read>(reader: R, layout: CsvLayout) -> Result<Vec<(f64, f64)>, IoError> {
    let mut input = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut pairs = Vec::new();
    for (index, record) in input.records().enumerate() {
        let record = record?;
        let row = index + 1;
        if record.len() < 2 {
            return Err(IoError::Parse {
                row,
                detail: format!("expected 2 fields, got {}", record.len()),
            });
        }
        let first = parse_field(&record[0], row)?;
        let second = parse_field(&record[1], row)?;
        pairs.push(layout.to_lon_lat(first, second));
    }
    Ok(pairs)
}

fn parse_field(field: &str, row: usize) -> Result<f64, IoError> {
    field.trim().parse().map_err(|_| IoError::Parse {
        row,
        detail: format!("not a number: {field:?}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn written(grid: &Grid, layout: CsvLayout) -> String {
        let mut buf = Vec::new();
        write_grid(grid, &mut buf, layout).unwrap();
        String::from_utf8(buf).unwrap()
    }

    // ── Writing ─────────────────────────────────────────────────

    #[test]
    fn writes_lon_lat_with_fraction() {
        let grid = Grid::new(1.0, [(1.0, 2.0), (3.0, 4.0)]);
        assert_eq!(written(&grid, CsvLayout::LonLat), "1.0,2.0\n3.0,4.0\n");
        assert_eq!(written(&grid, CsvLayout::LatLon), "2.0,1.0\n4.0,3.0\n");
    }

    #[test]
    fn writes_decimal_step_without_noise() {
        let grid = Grid::new(0.1, [(174.6 + 0.1, -41.3)]);
        assert_eq!(written(&grid, CsvLayout::LonLat), "174.7,-41.3\n");
    }

    #[test]
    fn empty_grid_writes_nothing() {
        assert_eq!(written(&Grid::empty(1.0), CsvLayout::LonLat), "");
    }

    // ── Reading ─────────────────────────────────────────────────

    #[test]
    fn reads_either_layout() {
        let data = "1,2\n3,4";
        let lon_lat = read_grid(data.as_bytes(), 1.0, CsvLayout::LonLat).unwrap();
        assert_eq!(lon_lat.to_pairs(), vec![(1.0, 2.0), (3.0, 4.0)]);
        let lat_lon = read_grid(data.as_bytes(), 1.0, CsvLayout::LatLon).unwrap();
        assert_eq!(lat_lon.to_pairs(), vec![(2.0, 1.0), (4.0, 3.0)]);
    }

    #[test]
    fn ignores_extra_columns() {
        let grid = read_grid("1,2,x\n3,4,y\n".as_bytes(), 1.0, CsvLayout::LonLat).unwrap();
        assert_eq!(grid.len(), 2);
    }

    #[test]
    fn short_row_is_parse_error() {
        let err = read_grid("1,2\n3\n".as_bytes(), 1.0, CsvLayout::LonLat).unwrap_err();
        assert!(matches!(err, IoError::Parse { row: 2, .. }));
    }

    #[test]
    fn non_numeric_is_parse_error() {
        let err = read_grid("lon,lat\n1,2\n".as_bytes(), 1.0, CsvLayout::LonLat).unwrap_err();
        assert!(matches!(err, IoError::Parse { row: 1, .. }));
    }

    #[test]
    fn read_pairs_keeps_file_order() {
        let pairs = read_pairs("3,4\n1,2\n3,4\n".as_bytes(), CsvLayout::LonLat).unwrap();
        assert_eq!(pairs, vec![(3.0, 4.0), (1.0, 2.0), (3.0, 4.0)]);
    }

    proptest! {
        #[test]
        fn round_trip_preserves_points(
            raw in prop::collection::vec((-360i32..360, -180i32..180), 0..50),
            lat_first in any::<bool>(),
        ) {
            let layout = CsvLayout::from_lat_first(lat_first);
            let grid = Grid::new(
                0.25,
                raw.into_iter().map(|(x, y)| (f64::from(x) * 0.25, f64::from(y) * 0.25)),
            );
            let text = written(&grid, layout);
            let back = read_grid(text.as_bytes(), 0.25, layout).unwrap();
            prop_assert_eq!(back, grid);
        }
    }

    #[test]
    fn layout_from_flag() {
        assert_eq!(CsvLayout::from_lat_first(true), CsvLayout::LatLon);
        assert_eq!(CsvLayout::from_lat_first(false), CsvLayout::default());
    }
}
