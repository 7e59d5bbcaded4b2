//! RGB channel view of a canonical hex color.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]

use serde::{Deserialize, Serialize};
use std::fmt;

use super::HexColor;

/// RGB color value derived from a [`HexColor`].
///
/// Used for terminal swatches; the hex string stays the source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use hexmatch::models::RgbColor;
    ///
    /// let color = RgbColor::new(0, 128, 255);
    /// assert_eq!(color.to_hex(), "#0080FF");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Converts the color to a crossterm color for terminal rendering.
    #[must_use]
    pub const fn to_crossterm_color(&self) -> crossterm::style::Color {
        crossterm::style::Color::Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }

    /// Perceived brightness (ITU-R BT.601 luma), 0-255.
    #[must_use]
    pub fn luma(&self) -> u8 {
        let weighted = 299 * u32::from(self.r) + 587 * u32::from(self.g) + 114 * u32::from(self.b);
        // Max is 255 * 1000 / 1000 so the division always fits in u8
        u8::try_from(weighted / 1000).unwrap_or(u8::MAX)
    }

    /// Whether dark text reads better on top of this color.
    #[must_use]
    pub fn is_light(&self) -> bool {
        self.luma() >= 140
    }
}

impl From<&HexColor> for RgbColor {
    fn from(color: &HexColor) -> Self {
        let digits = color.digits();
        // HexColor guarantees six valid hex digits
        let channel =
            |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).unwrap_or(0);
        Self::new(channel(0..2), channel(2..4), channel(4..6))
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
