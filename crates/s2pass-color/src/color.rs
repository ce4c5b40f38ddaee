#![forbid(unsafe_code)]

//! RGBA color values with hex parsing and perceived luminance.

use std::fmt;
use std::str::FromStr;

// Rec. 601 luma coefficients. These are load-bearing for visual parity
// with the original app's contrast decisions; do not swap for BT.709 or a
// full sRGB-linear relative luminance.
const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// An RGBA color with normalized `f32` channels in `[0.0, 1.0]`.
///
/// Values are immutable once created and carry no identity beyond their
/// channels. Construct from bytes with [`Rgba::from_rgb8`], from a hex
/// string with [`Rgba::from_hex`], or directly with [`Rgba::new`] (which
/// clamps out-of-range channels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red channel (0.0–1.0).
    pub r: f32,
    /// Green channel (0.0–1.0).
    pub g: f32,
    /// Blue channel (0.0–1.0).
    pub b: f32,
    /// Alpha channel (0.0 transparent – 1.0 opaque).
    pub a: f32,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    /// Opaque white.
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Create a color from normalized channels, clamping each into `[0, 1]`.
    #[must_use]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Create a fully opaque color from normalized channels.
    #[must_use]
    pub fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Create a color from 8-bit channels.
    #[must_use]
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create a fully opaque color from 8-bit channels.
    #[must_use]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Copy of this color with a replaced alpha channel.
    #[must_use]
    pub fn with_alpha(self, a: f32) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Round channels back to 8-bit values, in `[r, g, b, a]` order.
    #[must_use]
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            (self.a * 255.0).round() as u8,
        ]
    }

    /// Parse a hex color string.
    ///
    /// Every non-alphanumeric character is stripped first, so `#F5A623`,
    /// `0xF5A623`, and `F5A623` all parse. The remaining digits must be
    /// one of:
    ///
    /// - 3 digits — shorthand RGB; each digit `d` expands to the byte
    ///   `d * 17`, alpha 255
    /// - 6 digits — `RRGGBB`, alpha 255
    /// - 8 digits — `AARRGGBB` (alpha first, not CSS `RRGGBBAA`)
    ///
    /// # Errors
    ///
    /// [`InvalidColorFormat::Length`] for any other digit count (including
    /// empty input), [`InvalidColorFormat::Digit`] for a non-hex character
    /// that survives stripping.
    pub fn from_hex(hex: &str) -> Result<Self, InvalidColorFormat> {
        let digits: Vec<char> = hex.chars().filter(char::is_ascii_alphanumeric).collect();

        let mut value: u32 = 0;
        for &c in &digits {
            let digit = c.to_digit(16).ok_or(InvalidColorFormat::Digit(c))?;
            value = (value << 4) | digit;
        }

        let (a, r, g, b) = match digits.len() {
            // Shorthand RGB: 0xF * 17 = 255
            3 => (
                255,
                ((value >> 8) & 0xF) * 17,
                ((value >> 4) & 0xF) * 17,
                (value & 0xF) * 17,
            ),
            6 => (255, (value >> 16) & 0xFF, (value >> 8) & 0xFF, value & 0xFF),
            8 => (
                (value >> 24) & 0xFF,
                (value >> 16) & 0xFF,
                (value >> 8) & 0xFF,
                value & 0xFF,
            ),
            n => return Err(InvalidColorFormat::Length(n)),
        };

        Ok(Self::from_rgba8(r as u8, g as u8, b as u8, a as u8))
    }

    /// Parse a hex color string, falling back to opaque black on failure.
    ///
    /// This reproduces the original app's silent-degrade behavior. Callers
    /// cannot distinguish intentional black from malformed input through
    /// the return value; prefer [`Rgba::from_hex`] unless that tradeoff is
    /// deliberate.
    #[must_use]
    pub fn from_hex_lossy(hex: &str) -> Self {
        Self::from_hex(hex).unwrap_or(Self::BLACK)
    }

    /// Format as an uppercase hex string: `#RRGGBB`, or `#AARRGGBB` when
    /// the rounded alpha is not 255.
    #[must_use]
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{a:02X}{r:02X}{g:02X}{b:02X}")
        }
    }

    /// Perceived luminance in `[0.0, 1.0]` (Rec. 601 luma approximation).
    ///
    /// `0.299·R + 0.587·G + 0.114·B`, ignoring alpha. A pure function of
    /// the channel values; recomputed on demand, never cached.
    #[must_use]
    pub fn luminance(self) -> f32 {
        LUMA_R * self.r + LUMA_G * self.g + LUMA_B * self.b
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgba {
    type Err = InvalidColorFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rgba {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rgba {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

/// A hex color string that could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidColorFormat {
    /// Digit count after stripping non-alphanumerics was not 3, 6, or 8.
    Length(usize),
    /// A character that survived stripping is not a hex digit.
    Digit(char),
}

impl fmt::Display for InvalidColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length(n) => write!(f, "hex color has {n} digits (expected 3, 6, or 8)"),
            Self::Digit(c) => write!(f, "invalid hex digit {c:?} in color"),
        }
    }
}

impl std::error::Error for InvalidColorFormat {}
