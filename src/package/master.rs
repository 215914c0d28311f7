//! Master composite sheet.
//!
//! Lays every present asset out across the selected color modes on a single
//! SVG canvas: a fixed 2-column grid, one row-group per mode, each cell
//! 500x300 logical units, each asset embedded in a `<g>` with a translate
//! transform centering it in its cell. Document-pipeline copies (eps/ai/pdf)
//! are byte-identical passthroughs of the SVG, matching the vector emission
//! rule.

use anyhow::Result;

use crate::image::recolor;
use crate::image::svg;

use super::{ArchiveEntry, ColorMode, PackageRequest, SourceAsset, archive};

/// Grid geometry, in logical SVG units.
const COLUMNS: usize = 2;
const CELL_WIDTH: f32 = 500.0;
const CELL_HEIGHT: f32 = 300.0;

/// Padding around the whole grid.
const CANVAS_PAD: f32 = 50.0;

/// Extensions the sheet is emitted under. The first is the real document.
const SHEET_EXTENSIONS: [&str; 4] = ["svg", "eps", "ai", "pdf"];

/// Emit the master sheet plus its passthrough copies.
pub fn emit(request: &PackageRequest, modes: &[ColorMode]) -> Result<Vec<ArchiveEntry>> {
    let sheet = compose(&request.assets, modes)?;
    Ok(SHEET_EXTENSIONS
        .iter()
        .map(|ext| {
            ArchiveEntry::new(
                archive::master_path(&request.name, ext),
                sheet.as_bytes().to_vec(),
            )
        })
        .collect())
}

/// Compose the sheet document.
pub fn compose(assets: &[SourceAsset], modes: &[ColorMode]) -> Result<String> {
    let rows_per_mode = assets.len().div_ceil(COLUMNS);
    let grid_width = COLUMNS as f32 * CELL_WIDTH;
    let grid_height = (modes.len() * rows_per_mode) as f32 * CELL_HEIGHT;
    let canvas_width = grid_width + 2.0 * CANVAS_PAD;
    let canvas_height = grid_height + 2.0 * CANVAS_PAD;

    // Canonicalized markup nests cleanly (no XML declaration) and keeps the
    // recolor input normalized.
    let canonical: Vec<String> = assets
        .iter()
        .map(|asset| svg::canonicalize(asset.markup()))
        .collect::<Result<Vec<_>>>()?;

    let mut cells = String::new();
    for (mode_index, mode) in modes.iter().enumerate() {
        for (asset_index, asset) in assets.iter().enumerate() {
            let markup = match mode.flat() {
                None => canonical[asset_index].clone(),
                Some(flat) => recolor::recolor(&canonical[asset_index], flat),
            };

            let row = mode_index * rows_per_mode + asset_index / COLUMNS;
            let col = asset_index % COLUMNS;
            let (width, height) = asset.dimensions();
            let tx = CANVAS_PAD + col as f32 * CELL_WIDTH + (CELL_WIDTH - width) / 2.0;
            let ty = CANVAS_PAD + row as f32 * CELL_HEIGHT + (CELL_HEIGHT - height) / 2.0;

            cells.push_str(&format!(
                "  <g transform=\"translate({tx} {ty})\">{markup}</g>\n"
            ));
        }
    }

    Ok(format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{canvas_width}\" height=\"{canvas_height}\" viewBox=\"0 0 {canvas_width} {canvas_height}\">\n{cells}</svg>\n"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::color::HexColor;
    use crate::package::{OutputSelection, PackageName, Slot};

    const A: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="60"><rect width="100" height="60" fill="#445566"/></svg>"##;
    const B: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="80" height="80"><circle cx="40" cy="40" r="40" fill="#778899"/></svg>"##;

    fn assets() -> Vec<SourceAsset> {
        vec![
            SourceAsset::new(Slot::Vertical, A.as_bytes().to_vec()).unwrap(),
            SourceAsset::new(Slot::Logomark, B.as_bytes().to_vec()).unwrap(),
            SourceAsset::new(Slot::Wordmark, A.as_bytes().to_vec()).unwrap(),
        ]
    }

    #[test]
    fn test_cell_count_is_assets_times_modes() {
        let sheet = compose(&assets(), &[ColorMode::Color, ColorMode::Black]).unwrap();
        assert_eq!(sheet.matches("<g transform=").count(), 6);
    }

    #[test]
    fn test_canvas_spans_all_row_groups() {
        // 3 assets -> 2 rows per mode; 2 modes -> 4 rows of 300 + 2*50 pad.
        let sheet = compose(&assets(), &[ColorMode::Color, ColorMode::Black]).unwrap();
        assert!(sheet.contains("height=\"1300\""));
        assert!(sheet.contains("width=\"1100\""));
    }

    #[test]
    fn test_recolored_row_groups() {
        let sheet = compose(&assets(), &[ColorMode::Black]).unwrap();
        assert!(sheet.contains("fill=\"black\""));
        assert!(!sheet.contains("#445566"));
    }

    #[test]
    fn test_cell_centering_translate() {
        // First asset (100x60) centered in first cell: (50 + 200, 50 + 120).
        let sheet = compose(&assets(), &[ColorMode::Color]).unwrap();
        assert!(sheet.contains("translate(250 170)"));
    }

    #[test]
    fn test_emit_writes_all_sheet_extensions() {
        let request = PackageRequest {
            assets: assets(),
            name: PackageName::sanitize("acme"),
            selection: OutputSelection::parse("master"),
            background: HexColor::WHITE,
        };
        let entries = emit(&request, &[ColorMode::Color]).unwrap();
        let paths: Vec<_> = entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            [
                "Master/acme-master.svg",
                "Master/acme-master.eps",
                "Master/acme-master.ai",
                "Master/acme-master.pdf",
            ]
        );
        assert!(entries.windows(2).all(|w| w[0].bytes == w[1].bytes));
    }
}
