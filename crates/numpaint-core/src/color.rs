//! Color primitives
//!
//! RGB triples and the small amount of color math the processor needs:
//! squared Euclidean distance, six-digit hex strings, and the YIQ
//! luminance rule used to pick the label text color for a palette entry.

use serde::{Deserialize, Serialize};

/// An RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    /// Red component
    pub r: u8,
    /// Green component
    pub g: u8,
    /// Blue component
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Squared Euclidean distance to another color in RGB space.
    ///
    /// Maximum value is `3 * 255^2 = 195075`, well within `u32`.
    #[inline]
    pub fn distance_squared(self, other: Rgb) -> u32 {
        let dr = i32::from(self.r) - i32::from(other.r);
        let dg = i32::from(self.g) - i32::from(other.g);
        let db = i32::from(self.b) - i32::from(other.b);
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Format as a lowercase six-digit hex string, e.g. `#ff8000`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse a `#rrggbb` hex string (case-insensitive).
    ///
    /// Returns `None` if the string is not exactly seven characters or
    /// contains non-hex digits.
    pub fn from_hex(hex: &str) -> Option<Rgb> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
        Some(Rgb::new(r, g, b))
    }

    /// YIQ luminance: `(299*r + 587*g + 114*b) / 1000`, in [0, 255].
    #[inline]
    pub fn yiq_luminance(self) -> u32 {
        (299 * u32::from(self.r) + 587 * u32::from(self.g) + 114 * u32::from(self.b)) / 1000
    }
}

/// Label text color drawn on top of a palette color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextColor {
    /// Black text (light background)
    Black,
    /// White text (dark background)
    White,
}

impl TextColor {
    /// Choose black or white text for a background color.
    ///
    /// Backgrounds with YIQ luminance >= 128 get black text, darker
    /// backgrounds get white text.
    pub fn for_background(rgb: Rgb) -> TextColor {
        if rgb.yiq_luminance() >= 128 {
            TextColor::Black
        } else {
            TextColor::White
        }
    }

    /// The hex string for this text color.
    pub fn as_hex(self) -> &'static str {
        match self {
            TextColor::Black => "#000000",
            TextColor::White => "#ffffff",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_squared() {
        let black = Rgb::new(0, 0, 0);
        let white = Rgb::new(255, 255, 255);
        assert_eq!(black.distance_squared(black), 0);
        assert_eq!(black.distance_squared(white), 3 * 255 * 255);
        assert_eq!(white.distance_squared(black), black.distance_squared(white));
    }

    #[test]
    fn test_hex_round_trip() {
        let colors = [
            Rgb::new(0, 0, 0),
            Rgb::new(255, 255, 255),
            Rgb::new(255, 128, 0),
            Rgb::new(18, 52, 86),
        ];
        for color in colors {
            let hex = color.to_hex();
            assert_eq!(Rgb::from_hex(&hex), Some(color));
        }
        assert_eq!(Rgb::new(255, 128, 0).to_hex(), "#ff8000");
    }

    #[test]
    fn test_hex_parse_rejects_malformed() {
        assert_eq!(Rgb::from_hex("ff8000"), None);
        assert_eq!(Rgb::from_hex("#ff800"), None);
        assert_eq!(Rgb::from_hex("#ff80000"), None);
        assert_eq!(Rgb::from_hex("#gg8000"), None);
        assert_eq!(Rgb::from_hex("#FF8000"), Some(Rgb::new(255, 128, 0)));
    }

    #[test]
    fn test_yiq_luminance() {
        assert_eq!(Rgb::new(0, 0, 0).yiq_luminance(), 0);
        assert_eq!(Rgb::new(255, 255, 255).yiq_luminance(), 255);
        // Pure green is bright, pure blue is dark.
        assert!(Rgb::new(0, 255, 0).yiq_luminance() >= 128);
        assert!(Rgb::new(0, 0, 255).yiq_luminance() < 128);
    }

    #[test]
    fn test_text_color_choice() {
        assert_eq!(
            TextColor::for_background(Rgb::new(255, 255, 0)),
            TextColor::Black
        );
        assert_eq!(
            TextColor::for_background(Rgb::new(32, 32, 96)),
            TextColor::White
        );
        assert_eq!(TextColor::Black.as_hex(), "#000000");
        assert_eq!(TextColor::White.as_hex(), "#ffffff");
    }
}
