//! Zlib-compressed, base64-encoded text blobs.
//!
//! Used to embed small grids as string constants: the plain grid CSV is
//! zlib-compressed and encoded with the standard base64 alphabet.

use std::io::{Read, Write};

use base64::{engine::general_purpose::STANDARD, Engine};
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use gridloc_grid::Grid;

use crate::error::IoError;
use crate::grid_csv::{read_pairs, write_grid, CsvLayout};

/// Compress `text` with zlib and encode it as base64.
pub fn compress_string(text: &str) -> Result<String, IoError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(text.as_bytes())?;
    let compressed = encoder.finish()?;
    Ok(STANDARD.encode(compressed))
}

/// Inverse of [`compress_string`].
///
/// Surrounding whitespace and line breaks inside the blob are ignored.
pub fn decompress_string(blob: &str) -> Result<String, IoError> {
    let cleaned: String = blob.chars().filter(|c| !c.is_whitespace()).collect();
    let compressed = STANDARD.decode(cleaned)?;
    let mut text = String::new();
    ZlibDecoder::new(compressed.as_slice()).read_to_string(&mut text)?;
    Ok(text)
}

/// The grid's plain CSV, compressed and base64-encoded.
pub fn grid_to_base64(grid: &Grid, layout: CsvLayout) -> Result<String, IoError> {
    let mut plain = Vec::new();
    write_grid(grid, &mut plain, layout)?;
    let text = String::from_utf8(plain).map_err(|e| IoError::Parse {
        row: 0,
        detail: e.to_string(),
    })?;
    compress_string(&text)
}

/// Decode a blob to its coordinate pairs, in stored column order.
///
/// The pairs are returned exactly as written: no rounding, no
/// deduplication, and no swapping of columns.
pub fn pairs_from_base64(blob: &str) -> Result<Vec<(f64, f64)>, IoError> {
    let text = decompress_string(blob)?;
    read_pairs(text.as_bytes(), CsvLayout::LonLat)
}

/// Decode a blob written by [`grid_to_base64`] into a grid.
pub fn grid_from_base64(blob: &str, step: f64, layout: CsvLayout) -> Result<Grid, IoError> {
    let text = decompress_string(blob)?;
    crate::grid_csv::read_grid(text.as_bytes(), step, layout)
}

/// Split `blob` into quoted lines of at most `width` characters.
///
/// The output is a parenthesised sequence of string literals, suitable for
/// pasting into source code.
pub fn wrap_blob(blob: &str, width: usize) -> String {
    let width = width.max(1);
    let mut out = String::from("(\n");
    let chars: Vec<char> = blob.chars().collect();
    for chunk in chars.chunks(width) {
        out.push('\'');
        out.extend(chunk);
        out.push_str("'\n");
    }
    out.push(')');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_round_trip() {
        let text = "1.0,2.0\n3.0,4.0\n";
        let blob = compress_string(text).unwrap();
        assert!(blob.chars().all(|c| c.is_ascii_alphanumeric() || "+/=".contains(c)));
        assert_eq!(decompress_string(&blob).unwrap(), text);
    }

    #[test]
    fn pairs_in_grid_order() {
        let expected = vec![(1.0, 2.0), (3.0, 4.0), (5.0, 6.0), (7.0, 8.0)];
        let grid = Grid::new(1.0, expected.iter().rev().copied());
        let blob = grid_to_base64(&grid, CsvLayout::LonLat).unwrap();
        assert_eq!(pairs_from_base64(&blob).unwrap(), expected);
    }

    #[test]
    fn grid_round_trip_lat_first() {
        let grid = Grid::new(0.1, [(174.7, -41.3), (172.6, -43.5)]);
        let blob = grid_to_base64(&grid, CsvLayout::LatLon).unwrap();
        assert_eq!(grid_from_base64(&blob, 0.1, CsvLayout::LatLon).unwrap(), grid);
        assert_eq!(pairs_from_base64(&blob).unwrap()[0], (-43.5, 172.6));
    }

    #[test]
    fn wrapped_blob_decodes() {
        let blob = compress_string("some,text\n").unwrap();
        let wrapped = wrap_blob(&blob, 8);
        assert!(wrapped.starts_with("(\n'"));
        let inner: String = wrapped
            .lines()
            .filter(|l| l.starts_with('\''))
            .map(|l| l.trim_matches('\''))
            .collect();
        assert_eq!(decompress_string(&inner).unwrap(), "some,text\n");
    }

    #[test]
    fn invalid_base64_is_error() {
        assert!(matches!(
            decompress_string("not base64!"),
            Err(IoError::Base64(_))
        ));
    }
}
