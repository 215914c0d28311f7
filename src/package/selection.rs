//! Output selection parsed from the request's comma-separated token list.
//!
//! One immutable value passed down the whole pipeline and queried by set
//! membership; never mutated mid-flight. Unknown tokens are ignored for
//! forward compatibility, not rejected.

use std::collections::BTreeSet;

use super::{ColorMode, Extra, RasterFormat, VectorFormat};

/// The closed token vocabulary, split by category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputSelection {
    vectors: BTreeSet<VectorFormat>,
    rasters: BTreeSet<RasterFormat>,
    modes: BTreeSet<ColorMode>,
    extras: BTreeSet<Extra>,
}

impl OutputSelection {
    /// Parse a comma-separated token list. Tokens are case-insensitive,
    /// whitespace around them is ignored, and unknown tokens are dropped
    /// silently.
    pub fn parse(input: &str) -> Self {
        let mut selection = Self::default();
        for raw in input.split(',') {
            let token = raw.trim().to_ascii_lowercase();
            match token.as_str() {
                "svg" => { selection.vectors.insert(VectorFormat::Svg); },
                "ai" => { selection.vectors.insert(VectorFormat::Ai); },
                "eps" => { selection.vectors.insert(VectorFormat::Eps); },
                "afdesign" => { selection.vectors.insert(VectorFormat::Afdesign); },

                "png" => { selection.rasters.insert(RasterFormat::Png); },
                "jpg" | "jpeg" => { selection.rasters.insert(RasterFormat::Jpg); },
                "webp" => { selection.rasters.insert(RasterFormat::Webp); },
                "tiff" | "tif" => { selection.rasters.insert(RasterFormat::Tiff); },

                "color" => { selection.modes.insert(ColorMode::Color); },
                "black" => { selection.modes.insert(ColorMode::Black); },
                "white" => { selection.modes.insert(ColorMode::White); },

                "master" => { selection.extras.insert(Extra::Master); },
                "favicon" | "favicons" => { selection.extras.insert(Extra::Favicons); },
                "motion" => { selection.extras.insert(Extra::Motion); },
                "formats" => { selection.extras.insert(Extra::Formats); },
                "structure" => { selection.extras.insert(Extra::Structure); },

                _ => {}
            }
        }
        selection
    }

    pub fn vector(&self, format: VectorFormat) -> bool {
        self.vectors.contains(&format)
    }

    pub fn raster(&self, format: RasterFormat) -> bool {
        self.rasters.contains(&format)
    }

    pub fn extra(&self, extra: Extra) -> bool {
        self.extras.contains(&extra)
    }

    pub fn any_raster(&self) -> bool {
        !self.rasters.is_empty()
    }

    /// Color modes to process: the request's mode tokens, or the config-driven
    /// default subset when the request names none.
    pub fn modes_or(&self, default: &[ColorMode]) -> Vec<ColorMode> {
        if self.modes.is_empty() {
            default.to_vec()
        } else {
            self.modes.iter().copied().collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_tokens() {
        let sel = OutputSelection::parse("svg,png,jpg,color,black,favicons");
        assert!(sel.vector(VectorFormat::Svg));
        assert!(!sel.vector(VectorFormat::Eps));
        assert!(sel.raster(RasterFormat::Png));
        assert!(sel.raster(RasterFormat::Jpg));
        assert!(!sel.raster(RasterFormat::Tiff));
        assert!(sel.extra(Extra::Favicons));
        assert_eq!(
            sel.modes_or(&ColorMode::ALL),
            vec![ColorMode::Color, ColorMode::Black]
        );
    }

    #[test]
    fn test_unknown_tokens_ignored() {
        let sel = OutputSelection::parse("svg,hologram,png,");
        assert!(sel.vector(VectorFormat::Svg));
        assert!(sel.raster(RasterFormat::Png));
    }

    #[test]
    fn test_favicon_alias() {
        assert!(OutputSelection::parse("favicon").extra(Extra::Favicons));
        assert!(OutputSelection::parse("favicons").extra(Extra::Favicons));
    }

    #[test]
    fn test_whitespace_and_case() {
        let sel = OutputSelection::parse(" SVG , Png ");
        assert!(sel.vector(VectorFormat::Svg));
        assert!(sel.raster(RasterFormat::Png));
    }

    #[test]
    fn test_empty_modes_fall_back_to_default() {
        let sel = OutputSelection::parse("svg");
        assert_eq!(sel.modes_or(&[ColorMode::Color]), vec![ColorMode::Color]);
    }

    #[test]
    fn test_empty_selection_is_legal() {
        let sel = OutputSelection::parse("");
        assert!(!sel.any_raster());
        assert!(!sel.vector(VectorFormat::Svg));
    }
}
