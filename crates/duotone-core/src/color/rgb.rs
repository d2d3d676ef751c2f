use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DuotoneError, Result};

/// An 8-bit sRGB color triple.
///
/// Serializes as a `#rrggbb` hex string so it can be written directly in TOML.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl FromStr for Rgb {
    type Err = DuotoneError;

    fn from_str(s: &str) -> Result<Self> {
        hex_to_rgb(s)
    }
}

impl TryFrom<String> for Rgb {
    type Error = DuotoneError;

    fn try_from(s: String) -> Result<Self> {
        hex_to_rgb(&s)
    }
}

impl From<Rgb> for String {
    fn from(rgb: Rgb) -> Self {
        rgb_to_hex(rgb)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parse a `#rrggbb` or `#rgb` color (the `#` is optional, case-insensitive).
///
/// Three-digit colors expand each nibble, so `#abc` equals `#aabbcc`.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let invalid = || DuotoneError::InvalidColorFormat(hex.to_string());
    let trimmed = hex.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    let nibbles: Vec<u8> = digits
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<_>>()
        .ok_or_else(invalid)?;

    match nibbles.as_slice() {
        &[r1, r0, g1, g0, b1, b0] => Ok(Rgb::new(r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0)),
        &[r, g, b] => Ok(Rgb::new(r * 17, g * 17, b * 17)),
        _ => Err(invalid()),
    }
}

/// Format a color as lowercase `#rrggbb`.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    rgb.to_string()
}

/// Clamp to [0, 255] and truncate. NaN maps to 0.
pub fn clamp_u8(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 255.0) as u8
}
