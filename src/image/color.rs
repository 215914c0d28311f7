//! Hex color parsing for backgrounds and flatten/matte fills.

use serde::{Deserialize, Serialize};

/// An opaque RGB color parsed from a `#rgb` or `#rrggbb` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Parse a hex color string. Accepts `#rrggbb` and the short `#rgb` form,
    /// with or without the leading `#`.
    pub fn parse(input: &str) -> Option<Self> {
        let hex = input.trim().trim_start_matches('#');
        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self { r, g, b })
            }
            3 => {
                let d = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok();
                let (r, g, b) = (d(0)?, d(1)?, d(2)?);
                Some(Self {
                    r: r * 17,
                    g: g * 17,
                    b: b * 17,
                })
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for HexColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("invalid hex color `{value}`"))
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_six_digit() {
        let c = HexColor::parse("#88c0d0").unwrap();
        assert_eq!((c.r, c.g, c.b), (0x88, 0xc0, 0xd0));
    }

    #[test]
    fn test_parse_three_digit() {
        let c = HexColor::parse("#fff").unwrap();
        assert_eq!(c, HexColor::WHITE);
        let c = HexColor::parse("abc").unwrap();
        assert_eq!((c.r, c.g, c.b), (0xaa, 0xbb, 0xcc));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(HexColor::parse("zzzzzz").is_none());
        assert!(HexColor::parse("#12345").is_none());
        assert!(HexColor::parse("").is_none());
    }

    #[test]
    fn test_display_roundtrip() {
        let c = HexColor::parse("#112233").unwrap();
        assert_eq!(c.to_string(), "#112233");
        assert_eq!(HexColor::parse(&c.to_string()), Some(c));
    }
}
