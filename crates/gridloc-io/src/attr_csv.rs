//! Grid CSV with a header row and per-point attribute columns.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use gridloc_core::format_float;
use gridloc_grid::Grid;

use crate::error::IoError;

/// Columns written when none are given.
pub const DEFAULT_COLUMNS: [&str; 2] = ["lat", "lon"];

/// Write `grid` with a header row of `columns`.
///
/// `lat`/`latitude` and `lon`/`longitude` columns hold the coordinate; any
/// other column holds the point's attribute of that name, or is left empty
/// when the point has none.
pub fn write_attr_grid<W, S>(grid: &Grid, writer: W, columns: &[S]) -> Result<(), IoError>
where
    W: Write,
    S: AsRef<str>,
{
    let mut out = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);
    out.write_record(columns.iter().map(AsRef::as_ref))?;
    for point in grid {
        let attrs = grid.attributes().get(point);
        let row = columns.iter().map(|col| match col.as_ref() {
            "lat" | "latitude" => format_float(point.lat()),
            "lon" | "longitude" => format_float(point.lon()),
            name => attrs
                .and_then(|a| a.get(name))
                .map(ToString::to_string)
                .unwrap_or_default(),
        });
        out.write_record(row)?;
    }
    out.flush()?;
    Ok(())
}

/// Write an attribute CSV to `path`, replacing any existing file.
pub fn write_attr_grid_file<S: AsRef<str>>(
    grid: &Grid,
    path: impl AsRef<Path>,
    columns: &[S],
) -> Result<(), IoError> {
    let path = path.as_ref();
    write_attr_grid(grid, File::create(path)?, columns)?;
    tracing::info!(
        path = %path.display(),
        points = grid.len(),
        columns = columns.len(),
        "attribute grid written"
    );
    Ok(())
}
