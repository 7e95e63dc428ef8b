//! Polygon file loading: WKT-in-CSV, GeoJSON, and zipped variants.
//!
//! [`load_polygon_file`] picks a reader from the file suffix and turns the
//! resulting geometries into a [`Region`]. The readers are also exposed
//! directly for callers that want per-record properties.

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use geo::{Coord, Geometry, MapCoords};
use geojson::GeoJson;
use gridloc_core::{precision_of, round_to};
use gridloc_region::Region;
use indexmap::IndexMap;
use wkt::{ToWkt, TryFromWkt};

use crate::archive::{load_zip, write_zip};
use crate::error::IoError;

/// Name of the WKT column in a WKT-CSV file.
pub const GEOMETRY_COLUMN: &str = "geometry";

/// One row of a WKT-CSV file.
#[derive(Clone, Debug, PartialEq)]
pub struct WktRecord {
    /// Every non-geometry column, in header order.
    pub properties: IndexMap<String, String>,
    /// The parsed `geometry` column.
    pub geometry: Geometry<f64>,
}

/// Polygon file formats recognised by suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolygonFormat {
    /// `.wkt.csv`
    WktCsv,
    /// `.geojson` or `.json`
    GeoJson,
}

impl PolygonFormat {
    /// Suffixes of each format, longest first.
    const SUFFIXES: [(&'static str, PolygonFormat); 3] = [
        (".wkt.csv", PolygonFormat::WktCsv),
        (".geojson", PolygonFormat::GeoJson),
        (".json", PolygonFormat::GeoJson),
    ];

    /// Format implied by `name`, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        Self::SUFFIXES
            .iter()
            .find(|(suffix, _)| lower.ends_with(suffix))
            .map(|&(_, format)| format)
    }
}

/// Read a CSV with a `geometry` column of WKT values.
pub fn load_wkt_csv<R: Read>(reader: R) -> Result<Vec<WktRecord>, IoError> {
    let mut input = csv::Reader::from_reader(reader);
    let headers = input.headers()?.clone();
    let geometry_idx = headers
        .iter()
        .position(|h| h == GEOMETRY_COLUMN)
        .ok_or_else(|| IoError::MissingColumn {
            column: GEOMETRY_COLUMN.to_owned(),
        })?;

    let mut records = Vec::new();
    for (index, record) in input.records().enumerate() {
        let record = record?;
        let row = index + 1;
        let wkt_text = record.get(geometry_idx).ok_or_else(|| IoError::Parse {
            row,
            detail: format!("missing {GEOMETRY_COLUMN} field"),
        })?;
        let geometry = Geometry::<f64>::try_from_wkt_str(wkt_text).map_err(|e| IoError::Wkt {
            row,
            detail: e.to_string(),
        })?;
        let properties = headers
            .iter()
            .zip(record.iter())
            .enumerate()
            .filter(|&(i, _)| i != geometry_idx)
            .map(|(_, (h, v))| (h.to_owned(), v.to_owned()))
            .collect();
        records.push(WktRecord {
            properties,
            geometry,
        });
    }
    Ok(records)
}

/// Write records as CSV with one column per property plus `geometry`.
///
/// Property columns appear in first-seen order across all records; a
/// record without a given property gets an empty field.
pub fn write_wkt_csv<W: Write>(records: &[WktRecord], writer: W) -> Result<(), IoError> {
    let mut columns: Vec<&str> = Vec::new();
    for record in records {
        for key in record.properties.keys() {
            if key != GEOMETRY_COLUMN && !columns.contains(&key.as_str()) {
                columns.push(key);
            }
        }
    }

    let mut out = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);
    out.write_record(columns.iter().copied().chain([GEOMETRY_COLUMN]))?;
    for record in records {
        let values = columns.iter().map(|c| {
            record
                .properties
                .get(*c)
                .cloned()
                .unwrap_or_default()
        });
        out.write_record(values.chain([record.geometry.wkt_string()]))?;
    }
    out.flush()?;
    Ok(())
}

/// Write records as a zipped WKT-CSV with coordinates rounded to one
/// decimal place more than the precision of `tolerance`.
///
/// The archive is written to `path` with `.zip` appended and holds a single
/// entry named after the file name of `path`. Returns the archive path.
pub fn write_wkt_csv_zip(
    records: &[WktRecord],
    path: impl AsRef<Path>,
    tolerance: f64,
) -> Result<std::path::PathBuf, IoError> {
    let path = path.as_ref();
    let precision = precision_of(tolerance) + 1;
    let rounded: Vec<WktRecord> = records
        .iter()
        .map(|r| WktRecord {
            properties: r.properties.clone(),
            geometry: r.geometry.map_coords(|c| Coord {
                x: round_to(c.x, precision),
                y: round_to(c.y, precision),
            }),
        })
        .collect();

    let mut data = Vec::new();
    write_wkt_csv(&rounded, &mut data)?;
    let inner_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let zip_path = write_zip(path, &inner_name, data)?;
    tracing::info!(
        path = %zip_path.display(),
        records = records.len(),
        precision,
        "wkt csv zip written"
    );
    Ok(zip_path)
}

/// Read every geometry of a GeoJSON document.
///
/// Feature collections, single features, and bare geometries are all
/// accepted; features without a geometry are skipped.
pub fn load_geojson<R: Read>(mut reader: R) -> Result<Vec<Geometry<f64>>, IoError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let document: GeoJson = text.parse()?;
    let collection: geo::GeometryCollection<f64> = geojson::quick_collection(&document)?;
    Ok(collection.0)
}

/// Load a polygon file into a [`Region`] named after the file.
///
/// The format is chosen by suffix: `.wkt.csv`, `.geojson`, or `.json`,
/// optionally wrapped as `<name>.zip` in which case the archive's first
/// entry is read and its own name decides the format.
pub fn load_polygon_file(path: impl AsRef<Path>) -> Result<Region, IoError> {
    let path = path.as_ref();
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let geometries = if file_name.to_ascii_lowercase().ends_with(".zip") {
        let (inner, data) = load_zip(path)?;
        read_geometries(&inner, data.as_slice())?
    } else {
        read_geometries(&file_name, BufReader::new(File::open(path)?))?
    };

    let region = Region::from_geometries(region_name(&file_name), geometries);
    tracing::info!(
        path = %path.display(),
        region = region.name(),
        polygons = region.len(),
        "polygon file loaded"
    );
    Ok(region)
}

fn read_geometries<R: Read>(name: &str, reader: R) -> Result<Vec<Geometry<f64>>, IoError> {
    match PolygonFormat::from_name(name) {
        Some(PolygonFormat::WktCsv) => Ok(load_wkt_csv(reader)?
            .into_iter()
            .map(|r| r.geometry)
            .collect()),
        Some(PolygonFormat::GeoJson) => load_geojson(reader),
        None => Err(IoError::UnsupportedFormat {
            name: name.to_owned(),
        }),
    }
}

/// `file_name` with a trailing `.zip` and then any format suffix removed.
fn region_name(file_name: &str) -> String {
    let mut name = strip_suffix_ignore_case(file_name, ".zip");
    for (suffix, _) in PolygonFormat::SUFFIXES {
        let stripped = strip_suffix_ignore_case(name, suffix);
        if stripped.len() != name.len() {
            name = stripped;
            break;
        }
    }
    name.to_owned()
}

fn strip_suffix_ignore_case<'a>(s: &'a str, suffix: &str) -> &'a str {
    let split = s.len().saturating_sub(suffix.len());
    match (s.get(..split), s.get(split..)) {
        (Some(head), Some(tail)) if tail.eq_ignore_ascii_case(suffix) => head,
        _ => s,
    }
}
