//! Raster format encoders.
//!
//! PNG is the canonical variant; WEBP and TIFF are transcodes of the same
//! pixels, JPEG is encoded from a flattened (opaque) image, and ICO packs
//! multiple pre-encoded PNG frames.

use std::io::Cursor;

use anyhow::{Context, Result};
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use tiff::encoder::{TiffEncoder, colortype, compression::Lzw};

/// Encode RGBA pixels as PNG.
pub fn png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    PngEncoder::new(&mut out)
        .write_image(img.as_raw(), img.width(), img.height(), ExtendedColorType::Rgba8)
        .context("PNG encoding failed")?;
    Ok(out)
}

/// Encode an opaque RGBA image as JPEG at the given quality.
pub fn jpeg(img: &RgbaImage, quality: u8) -> Result<Vec<u8>> {
    let rgb = image::DynamicImage::ImageRgba8(img.clone()).into_rgb8();
    let mut out = Vec::new();
    JpegEncoder::new_with_quality(&mut out, quality)
        .encode(rgb.as_raw(), rgb.width(), rgb.height(), ExtendedColorType::Rgb8)
        .context("JPEG encoding failed")?;
    Ok(out)
}

/// Encode RGBA pixels as lossy WEBP at the given quality (0-100).
pub fn webp(img: &RgbaImage, quality: u8) -> Result<Vec<u8>> {
    let encoder = webp::Encoder::from_rgba(img.as_raw(), img.width(), img.height());
    Ok(encoder.encode(quality as f32).to_vec())
}

/// Encode RGBA pixels as LZW-compressed TIFF.
pub fn tiff(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    let mut encoder = TiffEncoder::new(&mut cursor).context("TIFF encoder init failed")?;
    encoder
        .write_image_with_compression::<colortype::RGBA8, _>(
            img.width(),
            img.height(),
            Lzw,
            img.as_raw(),
        )
        .context("TIFF encoding failed")?;
    Ok(cursor.into_inner())
}

/// Pack RGBA frames into a multi-resolution ICO.
pub fn ico(frames: &[RgbaImage]) -> Result<Vec<u8>> {
    let mut icon_dir = IconDir::new(ResourceType::Icon);
    for frame in frames {
        let image = IconImage::from_rgba_data(frame.width(), frame.height(), frame.as_raw().clone());
        let entry = IconDirEntry::encode(&image)
            .with_context(|| format!("ICO frame encoding failed at {}px", frame.width()))?;
        icon_dir.add_entry(entry);
    }

    let mut out = Vec::new();
    icon_dir.write(&mut out).context("ICO encoding failed")?;
    Ok(out)
}
