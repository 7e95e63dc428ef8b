//! Error types for grid and polygon I/O.

use gridloc_grid::GridError;
use std::fmt;
use std::io;

/// Errors that can occur while reading or writing grids and polygon files.
#[derive(Debug)]
pub enum IoError {
    /// An I/O error occurred during read or write.
    Io(io::Error),
    /// The CSV layer rejected the input or output.
    Csv(csv::Error),
    /// A CSV row could not be interpreted.
    Parse {
        /// 1-based row number in the input.
        row: usize,
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// A required column is absent from the header row.
    MissingColumn {
        /// The column that was expected.
        column: String,
    },
    /// A geometry field is not valid WKT.
    Wkt {
        /// 1-based data row number.
        row: usize,
        /// Parser message.
        detail: String,
    },
    /// A GeoJSON document could not be parsed or converted.
    GeoJson(geojson::Error),
    /// A zip archive could not be read or written.
    Zip(zip::result::ZipError),
    /// A zip archive has no entries.
    EmptyArchive,
    /// A blob is not valid standard base64.
    Base64(base64::DecodeError),
    /// The file suffix does not name a supported polygon format.
    UnsupportedFormat {
        /// The offending file name.
        name: String,
    },
    /// Parsed rows did not form a valid grid.
    Grid(GridError),
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Csv(e) => write!(f, "CSV error: {e}"),
            Self::Parse { row, detail } => write!(f, "row {row}: {detail}"),
            Self::MissingColumn { column } => write!(f, "missing column {column:?}"),
            Self::Wkt { row, detail } => write!(f, "row {row}: invalid WKT: {detail}"),
            Self::GeoJson(e) => write!(f, "GeoJSON error: {e}"),
            Self::Zip(e) => write!(f, "zip error: {e}"),
            Self::EmptyArchive => write!(f, "zip archive has no entries"),
            Self::Base64(e) => write!(f, "base64 error: {e}"),
            Self::UnsupportedFormat { name } => {
                write!(f, "unsupported polygon file format: {name}")
            }
            Self::Grid(e) => write!(f, "grid error: {e}"),
        }
    }
}

impl std::error::Error for IoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Csv(e) => Some(e),
            Self::GeoJson(e) => Some(e),
            Self::Zip(e) => Some(e),
            Self::Base64(e) => Some(e),
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for IoError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e)
    }
}

impl From<geojson::Error> for IoError {
    fn from(e: geojson::Error) -> Self {
        Self::GeoJson(e)
    }
}

impl From<zip::result::ZipError> for IoError {
    fn from(e: zip::result::ZipError) -> Self {
        Self::Zip(e)
    }
}

impl From<base64::DecodeError> for IoError {
    fn from(e: base64::DecodeError) -> Self {
        Self::Base64(e)
    }
}

impl From<GridError> for IoError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
