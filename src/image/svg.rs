//! SVG parsing helpers built on usvg.
//!
//! Parsing yields the intrinsic document size used for aspect-ratio decisions;
//! canonicalization re-serializes markup into a normalized single-line form
//! (used before recoloring when enabled, and always before embedding documents
//! into the master sheet).

use anyhow::{Context, Result};

/// Parse SVG bytes into a usvg tree.
pub fn parse(data: &[u8]) -> Result<usvg::Tree> {
    usvg::Tree::from_data(data, &usvg::Options::default()).context("Failed to parse SVG")
}

/// Intrinsic document dimensions (width, height) in pixels.
pub fn dimensions(data: &[u8]) -> Result<(f32, f32)> {
    let tree = parse(data)?;
    let size = tree.size();
    Ok((size.width(), size.height()))
}

/// Re-serialize markup into canonical, minified form.
///
/// Normalizes attribute representation and drops the XML declaration, which
/// also makes the output safe to nest inside another SVG document.
pub fn canonicalize(markup: &str) -> Result<String> {
    let tree = parse(markup.as_bytes())?;
    let write_options = usvg::WriteOptions {
        indent: usvg::Indent::None,
        ..Default::default()
    };
    Ok(tree.to_string(&write_options))
}
