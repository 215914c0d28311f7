//! Vector rasterization built on resvg / tiny-skia.
//!
//! Three canvas operations cover every raster variant:
//! - [`render_padded`]: longer dimension scaled to the target size, aspect
//!   ratio preserved, transparent margin added on all four sides
//! - [`compose_inset_square`]: contain-fit into a centered box inset from a
//!   fresh square canvas (logomark JPEG framing, favicons, tiles)
//! - [`flatten`]: alpha-composite over an opaque backing color

use anyhow::{Context, Result, bail};
use image::RgbaImage;
use tiny_skia::{Pixmap, PixmapPaint, Transform};

use super::color::HexColor;

/// Rasterize so the longer document dimension equals `target`, preserving
/// aspect ratio.
pub fn render_fit(tree: &usvg::Tree, target: u32) -> Result<Pixmap> {
    let size = tree.size();
    let long = size.width().max(size.height());
    if long <= 0.0 {
        bail!("SVG has no drawable area");
    }

    let scale = target as f32 / long;
    let width = (size.width() * scale).round().max(1.0) as u32;
    let height = (size.height() * scale).round().max(1.0) as u32;

    let mut pixmap = Pixmap::new(width, height)
        .with_context(|| format!("Failed to allocate {width}x{height} pixmap"))?;
    resvg::render(tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());
    Ok(pixmap)
}

/// Rasterize at `size` and pad with a transparent margin of
/// `round(size * pad_fraction)` on all four sides. Padding is additive to the
/// final pixel dimensions.
pub fn render_padded(tree: &usvg::Tree, size: u32, pad_fraction: f32) -> Result<Pixmap> {
    let rendered = render_fit(tree, size)?;
    let margin = (size as f32 * pad_fraction).round() as u32;
    if margin == 0 {
        return Ok(rendered);
    }

    let mut padded = Pixmap::new(
        rendered.width() + 2 * margin,
        rendered.height() + 2 * margin,
    )
    .context("Failed to allocate padded pixmap")?;
    padded.draw_pixmap(
        margin as i32,
        margin as i32,
        rendered.as_ref(),
        &PixmapPaint::default(),
        Transform::identity(),
        None,
    );
    Ok(padded)
}

/// Compose onto a fresh transparent square of side `side`: the document is
/// contain-fit into a box inset by `round(side * inset_fraction)` per side
/// and centered. Guarantees consistent framing independent of the source
/// aspect ratio.
pub fn compose_inset_square(tree: &usvg::Tree, side: u32, inset_fraction: f32) -> Result<Pixmap> {
    let inset = (side as f32 * inset_fraction).round() as u32;
    let content = side
        .checked_sub(2 * inset)
        .filter(|c| *c > 0)
        .with_context(|| format!("inset {inset} leaves no content area at {side}px"))?;

    let rendered = render_fit(tree, content)?;
    let mut canvas = Pixmap::new(side, side).context("Failed to allocate square canvas")?;
    let x = (side - rendered.width()) / 2;
    let y = (side - rendered.height()) / 2;
    canvas.draw_pixmap(
        x as i32,
        y as i32,
        rendered.as_ref(),
        &PixmapPaint::default(),
        Transform::identity(),
        None,
    );
    Ok(canvas)
}

/// Convert a pixmap to a straight-alpha RGBA image.
pub fn to_rgba(pixmap: &Pixmap) -> RgbaImage {
    let mut out = RgbaImage::new(pixmap.width(), pixmap.height());
    for (pixel, dest) in pixmap.pixels().iter().zip(out.pixels_mut()) {
        let c = pixel.demultiply();
        *dest = image::Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    out
}

/// Alpha-composite over an opaque backing color. The result is fully opaque.
pub fn flatten(pixmap: &Pixmap, backing: HexColor) -> RgbaImage {
    let mut out = RgbaImage::new(pixmap.width(), pixmap.height());
    for (pixel, dest) in pixmap.pixels().iter().zip(out.pixels_mut()) {
        // Source is premultiplied: out = src + backing * (1 - alpha).
        let inv = 255 - pixel.alpha() as u16;
        let over = |src: u8, bg: u8| (src as u16 + (bg as u16 * inv + 127) / 255).min(255) as u8;
        *dest = image::Rgba([
            over(pixel.red(), backing.r),
            over(pixel.green(), backing.g),
            over(pixel.blue(), backing.b),
            255,
        ]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::svg;

    const WIDE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="100"><rect width="200" height="100" fill="#ff0000"/></svg>"##;
    const TALL: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="50" height="100"><rect width="50" height="100" fill="#00ff00"/></svg>"##;

    #[test]
    fn test_render_fit_width_constrained() {
        let tree = svg::parse(WIDE.as_bytes()).unwrap();
        let pixmap = render_fit(&tree, 500).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (500, 250));
    }

    #[test]
    fn test_render_fit_height_constrained() {
        let tree = svg::parse(TALL.as_bytes()).unwrap();
        let pixmap = render_fit(&tree, 500).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (250, 500));
    }

    #[test]
    fn test_render_padded_dimensions() {
        let tree = svg::parse(WIDE.as_bytes()).unwrap();
        let pixmap = render_padded(&tree, 250, 0.02).unwrap();
        // margin = round(250 * 0.02) = 5, added to each side
        assert_eq!((pixmap.width(), pixmap.height()), (260, 135));
    }

    #[test]
    fn test_render_padded_margin_is_transparent() {
        let tree = svg::parse(WIDE.as_bytes()).unwrap();
        let pixmap = render_padded(&tree, 250, 0.02).unwrap();
        assert_eq!(pixmap.pixel(0, 0).unwrap().alpha(), 0);
    }

    #[test]
    fn test_compose_inset_square_dimensions() {
        let tree = svg::parse(WIDE.as_bytes()).unwrap();
        let pixmap = compose_inset_square(&tree, 192, 0.26).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (192, 192));
        // Corner stays transparent; center is covered.
        assert_eq!(pixmap.pixel(0, 0).unwrap().alpha(), 0);
        assert_eq!(pixmap.pixel(96, 96).unwrap().alpha(), 255);
    }

    #[test]
    fn test_flatten_fills_transparent_areas() {
        let tree = svg::parse(WIDE.as_bytes()).unwrap();
        let pixmap = render_padded(&tree, 250, 0.02).unwrap();
        let flat = flatten(&pixmap, HexColor::WHITE);
        assert_eq!(flat.get_pixel(0, 0).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_flatten_keeps_opaque_content() {
        let tree = svg::parse(WIDE.as_bytes()).unwrap();
        let pixmap = render_fit(&tree, 100).unwrap();
        let flat = flatten(&pixmap, HexColor::BLACK);
        assert_eq!(flat.get_pixel(50, 25).0, [255, 0, 0, 255]);
    }
}
