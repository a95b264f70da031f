//! Palette entries for the worksheet output.
//!
//! A palette entry pairs a quantized color with its display metadata: the
//! 1-based id printed on the worksheet, the hex string used by renderers,
//! and the label text color chosen by YIQ luminance.

use crate::color::{Rgb, TextColor};
use serde::{Deserialize, Serialize};

/// One color of the worksheet palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteColor {
    /// Display id, 1-based, contiguous within a palette
    pub id: u32,
    /// The quantized color
    pub rgb: Rgb,
    /// Lowercase `#rrggbb` form of `rgb`
    pub hex: String,
    /// Label text color against this background
    pub text_color: TextColor,
    /// Total pixels of this color across all regions (filled by the emitter)
    pub count: u64,
}

impl PaletteColor {
    /// Create a palette entry for a quantized color.
    ///
    /// `hex` and `text_color` are derived from `rgb`; `count` starts at
    /// zero and is filled in when the worksheet is assembled.
    pub fn new(id: u32, rgb: Rgb) -> Self {
        Self {
            id,
            rgb,
            hex: rgb.to_hex(),
            text_color: TextColor::for_background(rgb),
            count: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_display_fields() {
        let entry = PaletteColor::new(3, Rgb::new(255, 128, 0));
        assert_eq!(entry.id, 3);
        assert_eq!(entry.hex, "#ff8000");
        assert_eq!(entry.text_color, TextColor::Black);
        assert_eq!(entry.count, 0);
        assert_eq!(Rgb::from_hex(&entry.hex), Some(entry.rgb));
    }

    #[test]
    fn test_dark_color_gets_white_text() {
        let entry = PaletteColor::new(1, Rgb::new(20, 20, 60));
        assert_eq!(entry.text_color, TextColor::White);
    }
}
