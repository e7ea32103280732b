//! 24-bit RGB colors and the linear blend used by hover transitions.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// An 8-bit-per-channel RGB color, written as `#rrggbb`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

/// Error type for hex color parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// Not six hex digits (with or without a leading `#`)
    #[error("Invalid color length: {0} (expected #rrggbb)")]
    InvalidLength(String),

    /// A channel is not valid hexadecimal
    #[error("Invalid hex digits in color: {0}")]
    InvalidHex(String),
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a colour from RGB values
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn r(self) -> u8 {
        self.r
    }

    pub const fn g(self) -> u8 {
        self.g
    }

    pub const fn b(self) -> u8 {
        self.b
    }

    /// Blend towards `end` by `fraction`, channel by channel.
    ///
    /// Each channel is `start + (end - start) * fraction`, truncated toward
    /// zero. `fraction` is clamped to `[0, 1]`.
    #[must_use]
    pub fn interpolate(self, end: Self, fraction: f64) -> Self {
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        Self {
            r: blend_channel(self.r, end.r, fraction),
            g: blend_channel(self.g, end.g, fraction),
            b: blend_channel(self.b, end.b, fraction),
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn blend_channel(start: u8, end: u8, fraction: f64) -> u8 {
    let diff = f64::from(end) - f64::from(start);
    let value = (f64::from(start) + diff * fraction).trunc();
    value.clamp(0.0, 255.0) as u8
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        [value.r, value.g, value.b]
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorError::InvalidLength(s.to_owned()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ColorError::InvalidHex(s.to_owned()))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
