#![forbid(unsafe_code)]

//! Shade keys and the ten-step shade scale.

use std::fmt;
use std::str::FromStr;

use crate::color::Color;
use crate::contrast::relative_luminance;
use crate::error::UnknownShadeKey;

/// One step of a shade scale, `50` (lightest) through `900` (darkest).
///
/// Ordering is numeric: `ShadeKey::S100 < ShadeKey::S900`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShadeKey {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
}

impl ShadeKey {
    /// All keys in numeric order.
    pub const ALL: [Self; 10] = [
        Self::S50,
        Self::S100,
        Self::S200,
        Self::S300,
        Self::S400,
        Self::S500,
        Self::S600,
        Self::S700,
        Self::S800,
        Self::S900,
    ];

    #[must_use]
    pub const fn value(self) -> u16 {
        match self {
            Self::S50 => 50,
            Self::S100 => 100,
            Self::S200 => 200,
            Self::S300 => 300,
            Self::S400 => 400,
            Self::S500 => 500,
            Self::S600 => 600,
            Self::S700 => 700,
            Self::S800 => 800,
            Self::S900 => 900,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::S50 => "50",
            Self::S100 => "100",
            Self::S200 => "200",
            Self::S300 => "300",
            Self::S400 => "400",
            Self::S500 => "500",
            Self::S600 => "600",
            Self::S700 => "700",
            Self::S800 => "800",
            Self::S900 => "900",
        }
    }

    #[must_use]
    pub const fn from_value(value: u16) -> Option<Self> {
        Some(match value {
            50 => Self::S50,
            100 => Self::S100,
            200 => Self::S200,
            300 => Self::S300,
            400 => Self::S400,
            500 => Self::S500,
            600 => Self::S600,
            700 => Self::S700,
            800 => Self::S800,
            900 => Self::S900,
            _ => return None,
        })
    }

    /// Position in [`ShadeKey::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Keys `50` through `400`.
    #[must_use]
    pub const fn is_light(self) -> bool {
        self.value() < 500
    }
}

impl fmt::Display for ShadeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShadeKey {
    type Err = UnknownShadeKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownShadeKey(s.to_owned()))
    }
}

/// Ten shades derived from one seed color.
///
/// Only [`crate::PaletteGenerator`] builds these, so every scale holds all
/// ten keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShadeScale {
    seed: Color,
    shades: [Color; 10],
}

impl ShadeScale {
    pub(crate) const fn new(seed: Color, shades: [Color; 10]) -> Self {
        Self { seed, shades }
    }

    /// The color the scale was generated from.
    #[must_use]
    pub const fn seed(&self) -> Color {
        self.seed
    }

    #[must_use]
    pub const fn get(&self, key: ShadeKey) -> Color {
        self.shades[key.index()]
    }

    /// Always ten.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.shades.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Entries in numeric key order.
    pub fn iter(&self) -> impl Iterator<Item = (ShadeKey, Color)> + '_ {
        ShadeKey::ALL.into_iter().zip(self.shades.iter().copied())
    }

    /// Relative luminance of each shade in numeric key order.
    #[must_use]
    pub fn luminances(&self) -> [f64; 10] {
        self.shades.map(relative_luminance)
    }
}

impl std::ops::Index<ShadeKey> for ShadeScale {
    type Output = Color;

    fn index(&self, key: ShadeKey) -> &Color {
        &self.shades[key.index()]
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ShadeKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ShadeKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ShadeScale {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, color) in self.iter() {
            map.serialize_entry(&key, &color)?;
        }
        map.end()
    }
}
