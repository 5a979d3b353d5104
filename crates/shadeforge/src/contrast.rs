#![forbid(unsafe_code)]

//! WCAG 2.x relative luminance and contrast ratio.
//!
//! Luminance uses the sRGB transfer threshold `0.03928` from the WCAG 2.0
//! text, not the `0.04045` of IEC 61966-2-1. The two differ only for channel
//! values that never occur at 8-bit precision.
//!
//! # Example
//!
//! ```
//! use shadeforge::{Color, ContrastLevel, contrast_ratio, passes};
//!
//! let ratio = contrast_ratio(Color::WHITE, Color::BLACK);
//! assert!((ratio - 21.0).abs() < 1e-9);
//! assert!(passes(ratio, ContrastLevel::Aaa));
//! ```

use std::fmt;

use crate::color::Color;
use crate::error::Result;

/// Minimum ratio for large text (18pt, or 14pt bold) at level AA.
pub const WCAG_AA_LARGE_TEXT: f64 = 3.0;
/// Minimum ratio for body text at level AA.
pub const WCAG_AA_NORMAL_TEXT: f64 = 4.5;
/// Minimum ratio for body text at level AAA.
pub const WCAG_AAA_NORMAL_TEXT: f64 = 7.0;

/// Named WCAG compliance thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContrastLevel {
    /// Large text at AA, `3.0:1`.
    #[cfg_attr(feature = "serde", serde(rename = "AALarge"))]
    AaLarge,
    /// Body text at AA, `4.5:1`.
    #[cfg_attr(feature = "serde", serde(rename = "AA"))]
    Aa,
    /// Body text at AAA, `7.0:1`.
    #[cfg_attr(feature = "serde", serde(rename = "AAA"))]
    Aaa,
}

impl ContrastLevel {
    /// Ordered from least to most demanding.
    pub const ALL: [Self; 3] = [Self::AaLarge, Self::Aa, Self::Aaa];

    #[must_use]
    pub const fn threshold(self) -> f64 {
        match self {
            Self::AaLarge => WCAG_AA_LARGE_TEXT,
            Self::Aa => WCAG_AA_NORMAL_TEXT,
            Self::Aaa => WCAG_AAA_NORMAL_TEXT,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AaLarge => "AALarge",
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        }
    }

    /// The most demanding level `ratio` satisfies, if any.
    #[must_use]
    pub fn highest_passed(ratio: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .rev()
            .find(|level| passes(ratio, *level))
    }
}

impl fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance in `[0, 1]`.
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let [r, g, b] = color.to_unit();
    0.2126 * srgb_to_linear(r) + 0.7152 * srgb_to_linear(g) + 0.0722 * srgb_to_linear(b)
}

/// Symmetric contrast ratio in `[1, 21]`.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let lum_a = relative_luminance(a);
    let lum_b = relative_luminance(b);
    let lighter = lum_a.max(lum_b);
    let darker = lum_a.min(lum_b);
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio between two hex strings.
pub fn contrast_ratio_hex(a: &str, b: &str) -> Result<f64> {
    Ok(contrast_ratio(Color::from_hex(a)?, Color::from_hex(b)?))
}

#[must_use]
pub fn passes(ratio: f64, level: ContrastLevel) -> bool {
    ratio >= level.threshold()
}

#[must_use]
pub fn passes_aa(ratio: f64) -> bool {
    passes(ratio, ContrastLevel::Aa)
}

#[must_use]
pub fn passes_aa_large(ratio: f64) -> bool {
    passes(ratio, ContrastLevel::AaLarge)
}

#[must_use]
pub fn passes_aaa(ratio: f64) -> bool {
    passes(ratio, ContrastLevel::Aaa)
}

/// Pick the candidate with the highest contrast against `background`.
///
/// Ties go to the earliest candidate. Returns `None` for an empty slice.
#[must_use]
pub fn best_text_color(background: Color, candidates: &[Color]) -> Option<Color> {
    let (&first, rest) = candidates.split_first()?;
    let mut best = first;
    let mut best_ratio = contrast_ratio(first, background);
    for &candidate in rest {
        let ratio = contrast_ratio(candidate, background);
        if ratio > best_ratio {
            best = candidate;
            best_ratio = ratio;
        }
    }
    Some(best)
}

/// Pass/fail summary for one color pair.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ContrastReport {
    pub ratio: f64,
    pub aa_large: bool,
    pub aa: bool,
    pub aaa: bool,
}

impl ContrastReport {
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            ratio,
            aa_large: passes_aa_large(ratio),
            aa: passes_aa(ratio),
            aaa: passes_aaa(ratio),
        }
    }

    #[must_use]
    pub fn highest_level(&self) -> Option<ContrastLevel> {
        ContrastLevel::highest_passed(self.ratio)
    }
}

#[must_use]
pub fn contrast_report(foreground: Color, background: Color) -> ContrastReport {
    ContrastReport::from_ratio(contrast_ratio(foreground, background))
}
