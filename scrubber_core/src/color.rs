//! Hex color literals used for bar, track and glow strokes

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;

/// An opaque sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Format as `#RRGGBB`
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Parse `#RGB` or `#RRGGBB` (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(s.to_string()))?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::BadDigit(s.to_string()));
        }

        let nibble = |c: u8| (c as char).to_digit(16).unwrap_or(0) as u8;
        let bytes = digits.as_bytes();
        match bytes.len() {
            3 => {
                let [r, g, b] = [bytes[0], bytes[1], bytes[2]].map(|c| nibble(c) * 17);
                Ok(Color::rgb(r, g, b))
            }
            6 => {
                let byte = |i: usize| nibble(bytes[i]) << 4 | nibble(bytes[i + 1]);
                Ok(Color::rgb(byte(0), byte(2), byte(4)))
            }
            _ => Err(ColorError::BadLength(s.to_string())),
        }
    }
}
