//! Raster variant derivation.
//!
//! Per canonical size: rasterize the (recolored) vector with the longer
//! dimension at the target size, pad 2% on all sides onto a transparent
//! canvas; that padded raster is the canonical PNG. JPEG flattens onto an
//! opaque backing (logomark gets the inset-square framing first), WEBP and
//! TIFF are transcodes of the same pixels.

use anyhow::Result;

use crate::config::PackageConfig;
use crate::image::{encode, render};

use super::{ArchiveEntry, ColorMode, PackageRequest, RasterFormat, Slot, archive};

/// Canonical raster size ladder, in pixels of the longer dimension.
pub const SIZES: [u32; 4] = [250, 500, 1000, 4000];

/// Transparent margin added around every raster, as a fraction of the size.
pub const OUTER_PAD_FRACTION: f32 = 0.02;

/// Inset fraction for square-framed composites (logomark JPEG, favicons).
pub const INSET_FRACTION: f32 = 0.26;

/// Emit all selected raster variants for one (asset, mode) branch.
pub fn emit(
    tree: &usvg::Tree,
    slot: Slot,
    mode: ColorMode,
    request: &PackageRequest,
    config: &PackageConfig,
) -> Result<Vec<ArchiveEntry>> {
    let selection = &request.selection;
    if !selection.any_raster() {
        return Ok(Vec::new());
    }

    let name = &request.name;
    let backing = mode.backing(request.background);
    let mut entries = Vec::new();

    for size in SIZES {
        let padded = render::render_padded(tree, size, OUTER_PAD_FRACTION)?;
        let rgba = render::to_rgba(&padded);

        if selection.raster(RasterFormat::Png) {
            entries.push(ArchiveEntry::new(
                archive::raster_path(name, slot, mode, RasterFormat::Png, size),
                encode::png(&rgba)?,
            ));
        }

        if selection.raster(RasterFormat::Jpg) {
            // JPEG has no alpha. Logomarks are re-composed onto a fresh
            // square with the fixed inset so framing stays consistent
            // regardless of source aspect ratio; other slots flatten the
            // padded raster directly.
            let flat = if slot == Slot::Logomark {
                let square = render::compose_inset_square(tree, size, INSET_FRACTION)?;
                render::flatten(&square, backing)
            } else {
                render::flatten(&padded, backing)
            };
            entries.push(ArchiveEntry::new(
                archive::raster_path(name, slot, mode, RasterFormat::Jpg, size),
                encode::jpeg(&flat, config.jpeg_quality)?,
            ));
        }

        if selection.raster(RasterFormat::Webp) {
            entries.push(ArchiveEntry::new(
                archive::raster_path(name, slot, mode, RasterFormat::Webp, size),
                encode::webp(&rgba, config.webp_quality)?,
            ));
        }

        if selection.raster(RasterFormat::Tiff) {
            entries.push(ArchiveEntry::new(
                archive::raster_path(name, slot, mode, RasterFormat::Tiff, size),
                encode::tiff(&rgba)?,
            ));
        }
    }

    Ok(entries)
}
