//! Logo package domain model and variant-generation pipeline.
//!
//! A request carries up to four slotted vector assets, an output selection,
//! a package name, and a background color; the builder fans out over
//! (asset x color mode), derives every requested variant, and assembles one
//! zip archive addressed purely by entry path.

mod archive;
mod builder;
mod docs;
mod favicon;
mod master;
mod name;
mod raster;
mod selection;
mod vector;


pub use archive::ArchiveEntry;
pub use builder::{BuiltPackage, build_package};
pub use name::PackageName;
pub use selection::OutputSelection;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::image::color::HexColor;
use crate::image::recolor::FlatColor;
use crate::image::svg;

// ============================================================================
// Token Categories
// ============================================================================

/// Logical slot of an uploaded source asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Slot {
    Vertical,
    Horizontal,
    Logomark,
    Wordmark,
}

impl Slot {
    pub const ALL: [Slot; 4] = [
        Slot::Vertical,
        Slot::Horizontal,
        Slot::Logomark,
        Slot::Wordmark,
    ];

    /// Top-level archive folder for this slot.
    pub fn folder(self) -> &'static str {
        match self {
            Self::Vertical => "Vertical",
            Self::Horizontal => "Horizontal",
            Self::Logomark => "Logomark",
            Self::Wordmark => "Wordmark",
        }
    }

    /// Form-field name and filename component.
    pub fn token(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
            Self::Logomark => "logomark",
            Self::Wordmark => "wordmark",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.token() == token)
    }
}

/// Color rendition of an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Color,
    Black,
    White,
}

impl ColorMode {
    pub const ALL: [ColorMode; 3] = [ColorMode::Color, ColorMode::Black, ColorMode::White];

    /// Archive folder for this mode.
    pub fn folder(self) -> &'static str {
        match self {
            Self::Color => "Color",
            Self::Black => "Black",
            Self::White => "White",
        }
    }

    /// Filename component and selection token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Black => "black",
            Self::White => "white",
        }
    }

    /// The flat recolor target, if this mode transforms markup at all.
    /// `Color` passes source bytes through unchanged.
    pub fn flat(self) -> Option<FlatColor> {
        match self {
            Self::Color => None,
            Self::Black => Some(FlatColor::Black),
            Self::White => Some(FlatColor::White),
        }
    }

    /// Backing color for opaque formats (JPEG, favicon PNGs).
    ///
    /// Contrast rule: black artwork gets a white backing, white artwork a
    /// black backing; only `Color` uses the user-chosen background.
    pub fn backing(self, user: HexColor) -> HexColor {
        match self {
            Self::Color => user,
            Self::Black => HexColor::WHITE,
            Self::White => HexColor::BLACK,
        }
    }
}

/// Vector output formats. Non-SVG entries are byte-identical copies of the
/// (possibly recolored) markup with swapped extensions; downstream design
/// tools are expected to re-save. Documented behavior, not a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VectorFormat {
    Svg,
    Ai,
    Eps,
    Afdesign,
}

impl VectorFormat {
    pub const ALL: [VectorFormat; 4] = [
        VectorFormat::Svg,
        VectorFormat::Ai,
        VectorFormat::Eps,
        VectorFormat::Afdesign,
    ];

    /// Archive subfolder under `Vector/`.
    pub fn subfolder(self) -> &'static str {
        match self {
            Self::Svg => "SVG",
            Self::Ai => "Illustrator",
            Self::Eps => "EPS",
            Self::Afdesign => "Designer",
        }
    }

    /// File extension, doubling as the selection token.
    pub fn ext(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Ai => "ai",
            Self::Eps => "eps",
            Self::Afdesign => "afdesign",
        }
    }
}

/// Raster output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RasterFormat {
    Png,
    Jpg,
    Webp,
    Tiff,
}

impl RasterFormat {
    pub const ALL: [RasterFormat; 4] = [
        RasterFormat::Png,
        RasterFormat::Jpg,
        RasterFormat::Webp,
        RasterFormat::Tiff,
    ];

    /// Archive subfolder under `Raster/`.
    pub fn subfolder(self) -> &'static str {
        match self {
            Self::Png => "PNG",
            Self::Jpg => "JPG",
            Self::Webp => "WEBP",
            Self::Tiff => "TIFF",
        }
    }

    /// File extension, doubling as the selection token.
    pub fn ext(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpg => "jpg",
            Self::Webp => "webp",
            Self::Tiff => "tiff",
        }
    }
}

/// Optional extra artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Extra {
    /// Composite master sheet of all assets across modes.
    Master,
    /// Favicon family (logomark slot only).
    Favicons,
    /// Motion usage guide.
    Motion,
    /// Format reference guide.
    Formats,
    /// Archive layout guide.
    Structure,
}

// ============================================================================
// Request Model
// ============================================================================

/// One uploaded vector document, read-only for the lifetime of a request.
#[derive(Debug, Clone)]
pub struct SourceAsset {
    pub slot: Slot,
    markup: String,
    width: f32,
    height: f32,
}

impl SourceAsset {
    /// Wrap uploaded bytes, reading the intrinsic document size.
    pub fn new(slot: Slot, data: Vec<u8>) -> Result<Self> {
        let (width, height) = svg::dimensions(&data)
            .with_context(|| format!("invalid vector document in `{}` slot", slot.token()))?;
        let markup = String::from_utf8(data)
            .with_context(|| format!("`{}` upload is not valid UTF-8", slot.token()))?;
        Ok(Self {
            slot,
            markup,
            width,
            height,
        })
    }

    /// Raw source markup, exactly as uploaded.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn dimensions(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

/// A fully parsed package request.
#[derive(Debug, Clone)]
pub struct PackageRequest {
    pub assets: Vec<SourceAsset>,
    pub name: PackageName,
    pub selection: OutputSelection,
    pub background: HexColor,
}

#[cfg(test)]
mod token_tests {
    use super::*;

    #[test]
    fn test_slot_tokens_roundtrip() {
        for slot in Slot::ALL {
            assert_eq!(Slot::from_token(slot.token()), Some(slot));
        }
        assert_eq!(Slot::from_token("diagonal"), None);
    }

    #[test]
    fn test_backing_contrast_rule() {
        let user = HexColor::parse("#336699").unwrap();
        assert_eq!(ColorMode::Color.backing(user), user);
        assert_eq!(ColorMode::Black.backing(user), HexColor::WHITE);
        assert_eq!(ColorMode::White.backing(user), HexColor::BLACK);
    }

    #[test]
    fn test_color_mode_has_no_flat_target() {
        assert!(ColorMode::Color.flat().is_none());
        assert!(ColorMode::Black.flat().is_some());
        assert!(ColorMode::White.flat().is_some());
    }
}
