//! Archive entry layout and zip serialization.
//!
//! Paths are the archive's only addressing mechanism; every path is derived
//! from the full set of discriminating dimensions (slot, mode, category,
//! subcategory, size) so that no two logical variants can collide.

use std::collections::BTreeSet;
use std::io::{Cursor, Write};

use anyhow::{Context, Result, bail};
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

use super::{ColorMode, PackageName, RasterFormat, Slot, VectorFormat};

/// One (path, bytes) pair destined for the output archive.
#[derive(Debug, Clone)]
pub struct ArchiveEntry {
    pub path: String,
    pub bytes: Vec<u8>,
}

impl ArchiveEntry {
    pub fn new(path: String, bytes: Vec<u8>) -> Self {
        Self { path, bytes }
    }
}

/// `{Slot}/{Mode}/Vector/{SUB}/{pkg}-{slot}-{mode}.{ext}`
pub fn vector_path(
    name: &PackageName,
    slot: Slot,
    mode: ColorMode,
    format: VectorFormat,
) -> String {
    format!(
        "{}/{}/Vector/{}/{}-{}-{}.{}",
        slot.folder(),
        mode.folder(),
        format.subfolder(),
        name,
        slot.token(),
        mode.token(),
        format.ext(),
    )
}

/// `{Slot}/{Mode}/Raster/{SUB}/{pkg}-{slot}-{mode}-{size}.{ext}`
pub fn raster_path(
    name: &PackageName,
    slot: Slot,
    mode: ColorMode,
    format: RasterFormat,
    size: u32,
) -> String {
    format!(
        "{}/{}/Raster/{}/{}-{}-{}-{}.{}",
        slot.folder(),
        mode.folder(),
        format.subfolder(),
        name,
        slot.token(),
        mode.token(),
        size,
        format.ext(),
    )
}

/// `{Slot}/{Mode}/Favicon/{fixed-name}` - favicon filenames are fixed by
/// platform convention, so the path collapses to a flat folder per mode.
pub fn favicon_path(slot: Slot, mode: ColorMode, filename: &str) -> String {
    format!("{}/{}/Favicon/{}", slot.folder(), mode.folder(), filename)
}

/// `Master/{pkg}-master.{ext}`
pub fn master_path(name: &PackageName, ext: &str) -> String {
    format!("Master/{name}-master.{ext}")
}

/// `Guidelines/{filename}` - static reference documents.
pub fn doc_path(filename: &str) -> String {
    format!("Guidelines/{filename}")
}

/// Serialize all entries into one zip archive.
///
/// Duplicate paths abort the whole request: a silent overwrite would drop an
/// expected variant from the package.
pub fn write_zip(entries: &[ArchiveEntry]) -> Result<Vec<u8>> {
    let mut seen = BTreeSet::new();
    for entry in entries {
        if !seen.insert(entry.path.as_str()) {
            bail!("duplicate archive path `{}`", entry.path);
        }
    }

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in entries {
        writer
            .start_file(entry.path.as_str(), options)
            .with_context(|| format!("Failed to start zip entry `{}`", entry.path))?;
        writer
            .write_all(&entry.bytes)
            .with_context(|| format!("Failed to write zip entry `{}`", entry.path))?;
    }

    let cursor = writer.finish().context("Failed to finalize zip archive")?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pkg() -> PackageName {
        PackageName::sanitize("acme")
    }

    #[test]
    fn test_vector_path_shape() {
        assert_eq!(
            vector_path(&pkg(), Slot::Logomark, ColorMode::Color, VectorFormat::Svg),
            "Logomark/Color/Vector/SVG/acme-logomark-color.svg"
        );
        assert_eq!(
            vector_path(&pkg(), Slot::Wordmark, ColorMode::Black, VectorFormat::Ai),
            "Wordmark/Black/Vector/Illustrator/acme-wordmark-black.ai"
        );
    }

    #[test]
    fn test_raster_path_shape() {
        assert_eq!(
            raster_path(&pkg(), Slot::Vertical, ColorMode::White, RasterFormat::Png, 4000),
            "Vertical/White/Raster/PNG/acme-vertical-white-4000.png"
        );
    }

    #[test]
    fn test_favicon_path_shape() {
        assert_eq!(
            favicon_path(Slot::Logomark, ColorMode::Black, "favicon.ico"),
            "Logomark/Black/Favicon/favicon.ico"
        );
    }

    #[test]
    fn test_paths_unique_across_dimensions() {
        let mut paths = BTreeSet::new();
        for slot in Slot::ALL {
            for mode in ColorMode::ALL {
                for format in VectorFormat::ALL {
                    assert!(paths.insert(vector_path(&pkg(), slot, mode, format)));
                }
                for format in RasterFormat::ALL {
                    for size in [250, 500, 1000, 4000] {
                        assert!(paths.insert(raster_path(&pkg(), slot, mode, format, size)));
                    }
                }
            }
        }
    }

    #[test]
    fn test_write_zip_roundtrip() {
        let entries = vec![
            ArchiveEntry::new("a/b.txt".into(), b"hello".to_vec()),
            ArchiveEntry::new("a/c.txt".into(), b"world".to_vec()),
        ];
        let data = write_zip(&entries).unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(data)).unwrap();
        assert_eq!(archive.len(), 2);
        let mut content = String::new();
        std::io::Read::read_to_string(&mut archive.by_name("a/b.txt").unwrap(), &mut content)
            .unwrap();
        assert_eq!(content, "hello");
    }

    #[test]
    fn test_write_zip_rejects_duplicate_paths() {
        let entries = vec![
            ArchiveEntry::new("same.txt".into(), b"1".to_vec()),
            ArchiveEntry::new("same.txt".into(), b"2".to_vec()),
        ];
        assert!(write_zip(&entries).is_err());
    }
}
