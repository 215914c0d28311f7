//! Favicon family emission.
//!
//! Only the `logomark` slot produces favicons, and only when the token is
//! selected. The family is emitted exactly once per (slot, mode) as its own
//! pass - never from inside the raster-size loop - so the size ladder cannot
//! duplicate it.

use anyhow::Result;

use crate::image::{encode, render};

use super::raster::INSET_FRACTION;
use super::{ArchiveEntry, ColorMode, PackageRequest, archive};

/// Platform home-screen icons: (pixel size, fixed filename stem).
const PLATFORM_ICONS: [(u32, &str); 3] = [
    (192, "android-chrome-192x192"),
    (512, "android-chrome-512x512"),
    (180, "apple-touch-icon"),
];

/// Frame sizes packed into favicon.ico.
const ICO_SIZES: [u32; 3] = [16, 32, 48];

/// Windows tile size.
const TILE_SIZE: u32 = 150;

/// Emit the full favicon family for one (logomark, mode) branch.
///
/// Every raster member is the same composite: contain-fit into a 26%-inset
/// centered box on a square canvas, flattened onto the mode's backing color.
/// The pinned-tab SVG is a copy of the mode-colored markup.
pub fn emit(
    tree: &usvg::Tree,
    markup: &str,
    mode: ColorMode,
    request: &PackageRequest,
) -> Result<Vec<ArchiveEntry>> {
    let slot = super::Slot::Logomark;
    let backing = mode.backing(request.background);
    let mut entries = Vec::new();

    let composite = |size: u32| -> Result<image::RgbaImage> {
        let square = render::compose_inset_square(tree, size, INSET_FRACTION)?;
        Ok(render::flatten(&square, backing))
    };

    for (size, stem) in PLATFORM_ICONS {
        entries.push(ArchiveEntry::new(
            archive::favicon_path(slot, mode, &format!("{stem}.png")),
            encode::png(&composite(size)?)?,
        ));
    }

    let frames = ICO_SIZES
        .iter()
        .map(|&size| composite(size))
        .collect::<Result<Vec<_>>>()?;
    entries.push(ArchiveEntry::new(
        archive::favicon_path(slot, mode, "favicon.ico"),
        encode::ico(&frames)?,
    ));

    entries.push(ArchiveEntry::new(
        archive::favicon_path(slot, mode, &format!("mstile-{TILE_SIZE}x{TILE_SIZE}.png")),
        encode::png(&composite(TILE_SIZE)?)?,
    ));

    entries.push(ArchiveEntry::new(
        archive::favicon_path(slot, mode, "safari-pinned-tab.svg"),
        markup.as_bytes().to_vec(),
    ));

    Ok(entries)
}
