//! CSS-style hex colors used for item and zone fills.

use std::fmt;

use egui::Color32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The value did not start with `#`.
    #[error("Color `{0}` must start with '#'")]
    MissingHash(String),
    /// The number of hex digits was not 3, 4, 6 or 8.
    #[error("Color `{0}` must have 3, 4, 6 or 8 hex digits")]
    BadLength(String),
    /// A character was not a hex digit.
    #[error("Color `{value}` contains invalid hex digit '{digit}'")]
    BadDigit {
        /// Full input value.
        value: String,
        /// Offending character.
        digit: char,
    },
}

/// An sRGB color with straight alpha, written as `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl HexColor {
    /// Fill shown by a zone nobody has dropped into yet.
    pub const NEUTRAL: Self = Self::rgb(0xff, 0xff, 0xff);

    /// Opaque color from channel values.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    /// Color with an explicit alpha channel.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a hex color, accepting short and long forms in any case.
    pub fn parse(value: &str) -> Result<Self, ColorParseError> {
        let trimmed = value.trim();
        let digits = trimmed
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(value.to_string()))?;
        let mut nibbles = Vec::with_capacity(8);
        for ch in digits.chars() {
            let nibble = ch.to_digit(16).ok_or_else(|| ColorParseError::BadDigit {
                value: value.to_string(),
                digit: ch,
            })?;
            nibbles.push(nibble as u8);
        }
        let channels: Vec<u8> = match nibbles.len() {
            3 | 4 => nibbles.iter().map(|n| n * 17).collect(),
            6 | 8 => nibbles.chunks(2).map(|pair| pair[0] * 16 + pair[1]).collect(),
            _ => return Err(ColorParseError::BadLength(value.to_string())),
        };
        let alpha = channels.get(3).copied().unwrap_or(0xff);
        Ok(Self::rgba(channels[0], channels[1], channels[2], alpha))
    }

    /// Convert to an egui color for painting.
    pub fn to_color32(self) -> Color32 {
        Color32::from_rgba_unmultiplied(self.r, self.g, self.b, self.a)
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 0xff {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}
