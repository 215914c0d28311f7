//! `[package]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [package]
//! modes = ["color", "black", "white"]   # Default color-mode subset
//! background = "#ffffff"                # Default flatten background
//! jpeg_quality = 100
//! webp_quality = 80
//! canonicalize = false                  # Normalize markup before recoloring
//! ```
//!
//! `modes` is the config-driven default; mode tokens in a request's
//! `extensions` list override it. `background` applies when a request does
//! not send one.

use serde::{Deserialize, Serialize};

use crate::image::color::HexColor;
use crate::package::ColorMode;

/// Package pipeline settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageConfig {
    /// Color modes produced when the request selects none.
    pub modes: Vec<ColorMode>,

    /// Flatten background when the request does not send one.
    pub background: HexColor,

    /// JPEG encoder quality (0-100).
    pub jpeg_quality: u8,

    /// WEBP encoder quality (0-100).
    pub webp_quality: u8,

    /// Canonicalize markup through the SVG parser before recoloring.
    /// `Color` mode output always stays byte-identical to the upload.
    pub canonicalize: bool,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            modes: ColorMode::ALL.to_vec(),
            background: HexColor::WHITE,
            jpeg_quality: 100,
            webp_quality: 80,
            canonicalize: false,
        }
    }
}
