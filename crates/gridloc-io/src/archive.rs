//! Single-entry zip archives.

use std::ffi::OsString;
use std::fs::File;
use std::io::{Read, Seek, Write};
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::error::IoError;

/// Read the first entry of a zip archive at `path`.
///
/// Returns the entry's name and its uncompressed bytes.
pub fn load_zip(path: impl AsRef<Path>) -> Result<(String, Vec<u8>), IoError> {
    let path = path.as_ref();
    let entry = read_first_entry(File::open(path)?)?;
    tracing::debug!(
        path = %path.display(),
        entry = %entry.0,
        bytes = entry.1.len(),
        "zip entry loaded"
    );
    Ok(entry)
}

/// Read the first entry of a zip archive from any seekable reader.
pub fn read_first_entry<R: Read + Seek>(reader: R) -> Result<(String, Vec<u8>), IoError> {
    let mut archive = ZipArchive::new(reader)?;
    if archive.is_empty() {
        return Err(IoError::EmptyArchive);
    }
    let mut file = archive.by_index(0)?;
    let name = file.name().to_owned();
    let mut data = Vec::with_capacity(usize::try_from(file.size()).unwrap_or(0));
    file.read_to_end(&mut data)?;
    Ok((name, data))
}

/// Write `data` as the single deflate-compressed entry `inner_name` of a new
/// archive at `path` with `.zip` appended.
///
/// Returns the path of the written archive.
pub fn write_zip(
    path: impl AsRef<Path>,
    inner_name: &str,
    data: impl AsRef<[u8]>,
) -> Result<PathBuf, IoError> {
    let mut zip_path = OsString::from(path.as_ref().as_os_str());
    zip_path.push(".zip");
    let zip_path = PathBuf::from(zip_path);

    let mut writer = ZipWriter::new(File::create(&zip_path)?);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    writer.start_file(inner_name, options)?;
    writer.write_all(data.as_ref())?;
    writer.finish()?;

    tracing::debug!(path = %zip_path.display(), entry = inner_name, "zip written");
    Ok(zip_path)
}
