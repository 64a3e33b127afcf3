// Hex color values used by theme colors and token foregrounds

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Framework-agnostic RGBA color, parsed from `#rrggbb` or `#rrggbbaa`.
///
/// Alpha is kept optional so a 6-digit value renders back as 6 digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: Option<u8>,
}

// (L + 0.05) / 0.05 == 1.05 / (L + 0.05)
const CONTRAST_CROSSOVER: f32 = 0.179;

impl HexColor {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: None }
    }

    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a: Some(a) }
    }

    /// Convert from hex u32 (0xRRGGBB)
    pub const fn from_hex(hex: u32) -> Self {
        Self::from_rgb(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Parse `#rrggbb` / `#rrggbbaa`. The leading `#` is required.
    pub fn parse(value: &str) -> Option<Self> {
        let hex = value.strip_prefix('#')?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            6 => Some(Self::from_rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::from_rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// Components as floats in 0.0..=1.0; a missing alpha is opaque.
    pub fn rgba(&self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a.unwrap_or(0xFF) as f32 / 255.0,
        ]
    }

    /// Relative luminance (sRGB, Rec. 709 weights), ignoring alpha
    pub fn luminance(&self) -> f32 {
        fn channel(c: f32) -> f32 {
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        let [r, g, b, _] = self.rgba();
        0.2126 * channel(r) + 0.7152 * channel(g) + 0.0722 * channel(b)
    }

    /// Below the luminance where black and white text have equal contrast
    pub fn is_dark(&self) -> bool {
        self.luminance() < CONTRAST_CROSSOVER
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if let Some(a) = self.a {
            write!(f, "{:02x}", a)?;
        }
        Ok(())
    }
}

/// Raised when a string is not a 6 or 8 digit hex color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidHexColor(pub String);

impl fmt::Display for InvalidHexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid hex color '{}' (expected #rrggbb or #rrggbbaa)", self.0)
    }
}

impl std::error::Error for InvalidHexColor {}

impl FromStr for HexColor {
    type Err = InvalidHexColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| InvalidHexColor(s.to_string()))
    }
}

impl TryFrom<String> for HexColor {
    type Error = InvalidHexColor;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
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
    use proptest::prelude::*;

    #[test]
    fn parses_six_digit() {
        let color = HexColor::parse("#3b82f6").unwrap();
        assert_eq!(color, HexColor::from_hex(0x3b82f6));
        assert_eq!(color.a, None);
    }

    #[test]
    fn parses_eight_digit_alpha() {
        let color = HexColor::parse("#83a06c33").unwrap();
        assert_eq!(color, HexColor::from_rgba(0x83, 0xa0, 0x6c, 0x33));
        assert!((color.rgba()[3] - 0.2).abs() < 0.01);
    }

    #[test]
    fn uppercase_renders_lowercase() {
        let color: HexColor = "#81279C".parse().unwrap();
        assert_eq!(color.to_string(), "#81279c");
    }

    #[test]
    fn rejects_malformed() {
        for bad in ["", "#", "#fff", "#12345", "#1234567", "282c34", "#gg0000", "#+12345", "#282c34 "] {
            assert!(HexColor::parse(bad).is_none(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn luminance_orders_dark_and_light() {
        assert!(HexColor::from_hex(0x282c34).is_dark());
        assert!(!HexColor::from_hex(0xfffae8).is_dark());
    }

    #[test]
    fn mid_tones_read_as_light() {
        assert!(!HexColor::from_hex(0xa0a0a0).is_dark());
        assert!(!HexColor::from_hex(0x808080).is_dark());
        assert!(HexColor::from_hex(0x6e6e6e).is_dark());
        assert!(HexColor::from_hex(0x171212).is_dark());
    }

    #[test]
    fn serde_uses_hex_string() {
        let color = HexColor::from_rgba(0x58, 0x6e, 0x75, 0xaa);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#586e75aa\"");
        let bad: Result<HexColor, _> = serde_json::from_str("\"#586e7\"");
        assert!(bad.is_err());
    }

    proptest! {
        #[test]
        fn display_reparses(r: u8, g: u8, b: u8, a: Option<u8>) {
            let color = HexColor { r, g, b, a };
            prop_assert_eq!(HexColor::parse(&color.to_string()), Some(color));
        }
    }
}
