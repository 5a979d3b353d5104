#![forbid(unsafe_code)]

//! Canonical sRGB color values.
//!
//! Every string that enters the engine is normalized here, once, into a
//! [`Color`]. The accepted text forms are `#RGB` and `#RRGGBB` with
//! case-insensitive hex digits; shorthand is expanded on parse so the
//! canonical form is always `#RRGGBB` in upper case.
//!
//! # Example
//!
//! ```
//! use shadeforge::Color;
//!
//! let color: Color = "#3af".parse().unwrap();
//! assert_eq!(color, Color::rgb(0x33, 0xAA, 0xFF));
//! assert_eq!(color.to_hex(), "#33AAFF");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{ColorError, Result};

/// A 24-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Create a color from 8-bit channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[must_use]
    pub const fn r(self) -> u8 {
        self.r
    }

    #[must_use]
    pub const fn g(self) -> u8 {
        self.g
    }

    #[must_use]
    pub const fn b(self) -> u8 {
        self.b
    }

    /// Parse `#RGB` or `#RRGGBB`.
    pub fn from_hex(input: &str) -> Result<Self> {
        let Some(digits) = input.strip_prefix('#') else {
            return Err(ColorError::invalid(input, "missing leading '#'"));
        };
        let bytes = digits.as_bytes();
        let nibble = |c: u8| {
            parse_hex_digit(c).ok_or_else(|| ColorError::invalid(input, "non-hex digit"))
        };

        match bytes.len() {
            3 => {
                let r = nibble(bytes[0])?;
                let g = nibble(bytes[1])?;
                let b = nibble(bytes[2])?;
                Ok(Self::rgb((r << 4) | r, (g << 4) | g, (b << 4) | b))
            }
            6 => {
                let r = (nibble(bytes[0])? << 4) | nibble(bytes[1])?;
                let g = (nibble(bytes[2])? << 4) | nibble(bytes[3])?;
                let b = (nibble(bytes[4])? << 4) | nibble(bytes[5])?;
                Ok(Self::rgb(r, g, b))
            }
            _ => Err(ColorError::invalid(input, "expected 3 or 6 hex digits")),
        }
    }

    /// Canonical `#RRGGBB` text.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Channels normalized to `[0, 1]`.
    #[must_use]
    pub fn to_unit(self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }

    /// Build a color from unit channels, clamping and rounding to 8 bits.
    #[must_use]
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self::rgb(unit_to_u8(r), unit_to_u8(g), unit_to_u8(b))
    }

    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let [r, g, b] = self.to_unit();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let d = max - min;

        if d <= f64::EPSILON {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            ((g - b) / d).rem_euclid(6.0)
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl { h: h * 60.0, s, l }
    }

    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        let Hsl { h, s, l } = hsl.clamped();
        if s <= f64::EPSILON {
            return Self::from_unit(l, l, l);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        let h = h / 360.0;

        Self::from_unit(
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self> {
        Self::from_hex(value)
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}

/// Hue (degrees, `[0, 360)`), saturation and lightness (both `[0, 1]`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Same hue and saturation at a different lightness.
    #[must_use]
    pub fn with_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }

    fn clamped(self) -> Self {
        Self {
            h: self.h.rem_euclid(360.0),
            s: self.s.clamp(0.0, 1.0),
            l: self.l.clamp(0.0, 1.0),
        }
    }
}

const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

fn unit_to_u8(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_hex(&text).map_err(serde::de::Error::custom)
    }
}
