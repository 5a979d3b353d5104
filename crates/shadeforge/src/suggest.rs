#![forbid(unsafe_code)]

//! Shade suggestions: complementary light/dark pairing and best-contrast
//! text shade selection.
//!
//! [`find_best_contrast_shade`] is reachable from live editor input, so it
//! never fails. Bad input yields the default key `"50"` together with a
//! [`SuggestionWarning`], and the same warning is emitted as a `tracing`
//! event at `WARN` level.
//!
//! The background is classified as dark or light and a preferred subset of
//! keys is reported on the result, but selection itself is plain
//! highest-ratio with ties to the first candidate seen. The preferred subset
//! does not bias the choice.
//!
//! # Example
//!
//! ```
//! use shadeforge::{ShadeCandidates, find_best_contrast_shade};
//!
//! let candidates: ShadeCandidates = [("50", "#FFFFFF"), ("900", "#000000")]
//!     .into_iter()
//!     .collect();
//! let suggestion = find_best_contrast_shade("#FFFFFF", &candidates);
//! assert_eq!(suggestion.key, "900");
//! assert!(suggestion.warning.is_none());
//! ```

use std::fmt;

use crate::color::Color;
use crate::contrast::{ContrastLevel, WCAG_AA_NORMAL_TEXT, contrast_ratio, relative_luminance};
use crate::shade::{ShadeKey, ShadeScale};

pub const ENV_DARK_THRESHOLD: &str = "SHADEFORGE_DARK_THRESHOLD";
pub const ENV_MIN_RATIO: &str = "SHADEFORGE_MIN_RATIO";

const DEFAULT_DARK_THRESHOLD: f64 = 0.45;
const DEFAULT_KEY: ShadeKey = ShadeKey::S50;
const FALLBACK_COMPLEMENT: ShadeKey = ShadeKey::S800;

const DARK_BACKGROUND_PREFERRED: [ShadeKey; 3] = [ShadeKey::S50, ShadeKey::S100, ShadeKey::S200];
const LIGHT_BACKGROUND_PREFERRED: [ShadeKey; 3] = [ShadeKey::S900, ShadeKey::S800, ShadeKey::S700];

// ── Complementary shades ────────────────────────────────────────────────

/// Mirror a shade across the middle of the scale (`50↔900`, `300↔600`, …).
#[must_use]
pub const fn suggest_complementary_shade(key: ShadeKey) -> ShadeKey {
    match key {
        ShadeKey::S50 => ShadeKey::S900,
        ShadeKey::S100 => ShadeKey::S800,
        ShadeKey::S200 => ShadeKey::S700,
        ShadeKey::S300 => ShadeKey::S600,
        ShadeKey::S400 => ShadeKey::S500,
        ShadeKey::S500 => ShadeKey::S400,
        ShadeKey::S600 => ShadeKey::S300,
        ShadeKey::S700 => ShadeKey::S200,
        ShadeKey::S800 => ShadeKey::S100,
        ShadeKey::S900 => ShadeKey::S50,
    }
}

/// String form of [`suggest_complementary_shade`]; unknown labels map to `800`.
#[must_use]
pub fn suggest_complementary_shade_str(key: &str) -> ShadeKey {
    match key.parse::<ShadeKey>() {
        Ok(key) => suggest_complementary_shade(key),
        Err(err) => {
            tracing::debug!(%err, fallback = %FALLBACK_COMPLEMENT, "complement lookup fell back");
            FALLBACK_COMPLEMENT
        }
    }
}

// ── Candidates ──────────────────────────────────────────────────────────

/// A candidate text-color scale as it arrives from the editor: ordered
/// `(key, hex)` string pairs.
///
/// Order is significant; ties in [`find_best_contrast_shade`] go to the
/// entry that appears first. Keys outside the ten standard labels are
/// allowed and scanned like any other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShadeCandidates {
    entries: Vec<(String, String)>,
}

impl ShadeCandidates {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, color: impl Into<String>) -> Self {
        self.push(key, color);
        self
    }

    pub fn push(&mut self, key: impl Into<String>, color: impl Into<String>) {
        self.entries.push((key.into(), color.into()));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for ShadeCandidates
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<&ShadeScale> for ShadeCandidates {
    fn from(scale: &ShadeScale) -> Self {
        scale
            .iter()
            .map(|(key, color)| (key.as_str(), color.to_hex()))
            .collect()
    }
}

// ── Configuration ───────────────────────────────────────────────────────

/// Tuning for [`ShadeSuggester`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SuggestConfig {
    /// Backgrounds with relative luminance below this are dark.
    /// Default: 0.45.
    pub dark_threshold: f64,

    /// Ratio a candidate must reach to count as accessible.
    /// Default: 4.5 (WCAG AA body text).
    pub min_ratio: f64,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            dark_threshold: DEFAULT_DARK_THRESHOLD,
            min_ratio: WCAG_AA_NORMAL_TEXT,
        }
    }
}

impl SuggestConfig {
    #[must_use]
    pub fn with_dark_threshold(mut self, luminance: f64) -> Self {
        self.dark_threshold = luminance;
        self
    }

    #[must_use]
    pub fn with_min_ratio(mut self, ratio: f64) -> Self {
        self.min_ratio = ratio;
        self
    }

    /// Require the threshold of a named WCAG level.
    #[must_use]
    pub fn with_min_level(self, level: ContrastLevel) -> Self {
        self.with_min_ratio(level.threshold())
    }

    /// Load config from the process environment.
    ///
    /// Reads:
    /// - `SHADEFORGE_DARK_THRESHOLD`: luminance below which a background is dark
    /// - `SHADEFORGE_MIN_RATIO`: minimum acceptable contrast ratio
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Load config using a custom environment lookup (for tests).
    #[must_use]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(val) = get_env(ENV_DARK_THRESHOLD)
            && let Ok(luminance) = val.trim().parse::<f64>()
        {
            config.dark_threshold = luminance;
        }

        if let Some(val) = get_env(ENV_MIN_RATIO)
            && let Ok(ratio) = val.trim().parse::<f64>()
        {
            config.min_ratio = ratio;
        }

        config.validated()
    }

    /// Clamp `dark_threshold` to `0.0..=1.0` and `min_ratio` to `1.0..=21.0`.
    ///
    /// Non-finite values fall back to the defaults.
    #[must_use]
    pub fn validated(mut self) -> Self {
        self.dark_threshold = if self.dark_threshold.is_finite() {
            self.dark_threshold.clamp(0.0, 1.0)
        } else {
            DEFAULT_DARK_THRESHOLD
        };
        self.min_ratio = if self.min_ratio.is_finite() {
            self.min_ratio.clamp(1.0, 21.0)
        } else {
            WCAG_AA_NORMAL_TEXT
        };
        self
    }
}

// ── Results ─────────────────────────────────────────────────────────────

/// Degraded-input signal attached to a suggestion.
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionWarning {
    /// The background was missing or not a valid hex color.
    InvalidBackground { input: String },
    /// The candidate scale was empty or held no parsable colors.
    InvalidPalette { candidates: usize },
    /// Nothing reached the minimum ratio; the best candidate was returned.
    NoShadeMeetsMinimum { best_ratio: f64, min_ratio: f64 },
}

impl SuggestionWarning {
    /// True when the default key was returned instead of a scanned one.
    #[must_use]
    pub const fn is_default(&self) -> bool {
        matches!(
            self,
            Self::InvalidBackground { .. } | Self::InvalidPalette { .. }
        )
    }
}

impl fmt::Display for SuggestionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBackground { input } => {
                write!(f, "invalid background color {input:?}; using default shade")
            }
            Self::InvalidPalette { candidates } => write!(
                f,
                "candidate scale has no usable colors ({candidates} entries); using default shade"
            ),
            Self::NoShadeMeetsMinimum {
                best_ratio,
                min_ratio,
            } => write!(
                f,
                "no shade meets the minimum contrast {min_ratio:.2}:1 (best {best_ratio:.2}:1)"
            ),
        }
    }
}

/// Outcome of [`find_best_contrast_shade`].
#[derive(Debug, Clone, PartialEq)]
pub struct ShadeSuggestion {
    /// Chosen candidate key, or `"50"` when input was unusable.
    pub key: String,
    /// Contrast of the chosen shade against the background.
    pub ratio: Option<f64>,
    /// Whether the background classified as dark.
    pub is_dark_background: bool,
    /// Keys that read best on this kind of background. Informational only.
    pub preferred: &'static [ShadeKey],
    pub warning: Option<SuggestionWarning>,
}

impl ShadeSuggestion {
    fn fallback(warning: SuggestionWarning) -> Self {
        tracing::warn!(%warning, default = %DEFAULT_KEY, "shade suggestion degraded");
        Self {
            key: DEFAULT_KEY.as_str().to_owned(),
            ratio: None,
            is_dark_background: false,
            preferred: &[],
            warning: Some(warning),
        }
    }

    /// The chosen key as a standard label, if it is one.
    #[must_use]
    pub fn shade_key(&self) -> Option<ShadeKey> {
        self.key.parse().ok()
    }

    /// True when the chosen shade reached the configured minimum.
    #[must_use]
    pub fn meets_minimum(&self) -> bool {
        self.ratio.is_some() && self.warning.is_none()
    }

    #[must_use]
    pub fn is_preferred(&self) -> bool {
        self.shade_key()
            .is_some_and(|key| self.preferred.contains(&key))
    }
}

// ── Suggester ───────────────────────────────────────────────────────────

/// Picks readable text shades for a background.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ShadeSuggester {
    config: SuggestConfig,
}

impl ShadeSuggester {
    #[must_use]
    pub fn new(config: SuggestConfig) -> Self {
        Self {
            config: config.validated(),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &SuggestConfig {
        &self.config
    }

    #[must_use]
    pub fn is_dark(&self, background: Color) -> bool {
        relative_luminance(background) < self.config.dark_threshold
    }

    /// Keys that read best on `background`.
    #[must_use]
    pub fn preferred_keys(&self, background: Color) -> &'static [ShadeKey] {
        if self.is_dark(background) {
            &DARK_BACKGROUND_PREFERRED
        } else {
            &LIGHT_BACKGROUND_PREFERRED
        }
    }

    /// Parse `background` and pick the best candidate for it.
    #[must_use]
    pub fn find_best_contrast_shade(
        &self,
        background: &str,
        candidates: &ShadeCandidates,
    ) -> ShadeSuggestion {
        match Color::from_hex(background) {
            Ok(color) => self.find_best_for(color, candidates),
            Err(_) => ShadeSuggestion::fallback(SuggestionWarning::InvalidBackground {
                input: background.to_owned(),
            }),
        }
    }

    /// Pick the candidate with the highest contrast against `background`.
    #[must_use]
    pub fn find_best_for(
        &self,
        background: Color,
        candidates: &ShadeCandidates,
    ) -> ShadeSuggestion {
        if candidates.is_empty() {
            return ShadeSuggestion::fallback(SuggestionWarning::InvalidPalette { candidates: 0 });
        }

        let is_dark = self.is_dark(background);
        let preferred = self.preferred_keys(background);

        let mut best: Option<(&str, f64)> = None;
        for (key, hex) in candidates.iter() {
            let Ok(color) = Color::from_hex(hex) else {
                tracing::debug!(key, color = hex, "skipping unparsable candidate");
                continue;
            };
            let ratio = contrast_ratio(color, background);
            if best.is_none_or(|(_, best_ratio)| ratio > best_ratio) {
                best = Some((key, ratio));
            }
        }

        let Some((key, ratio)) = best else {
            return ShadeSuggestion::fallback(SuggestionWarning::InvalidPalette {
                candidates: candidates.len(),
            });
        };

        let warning = (ratio < self.config.min_ratio).then(|| {
            let warning = SuggestionWarning::NoShadeMeetsMinimum {
                best_ratio: ratio,
                min_ratio: self.config.min_ratio,
            };
            tracing::warn!(%background, key, %warning, "returning best available shade");
            warning
        });

        tracing::debug!(
            %background,
            is_dark,
            key,
            ratio,
            "selected text shade"
        );

        ShadeSuggestion {
            key: key.to_owned(),
            ratio: Some(ratio),
            is_dark_background: is_dark,
            preferred,
            warning,
        }
    }

    /// Best shade of a generated scale against `background`.
    #[must_use]
    pub fn find_best_in_scale(&self, background: Color, scale: &ShadeScale) -> ShadeSuggestion {
        self.find_best_for(background, &ShadeCandidates::from(scale))
    }
}

/// [`ShadeSuggester::find_best_contrast_shade`] with the default config.
#[must_use]
pub fn find_best_contrast_shade(
    background: &str,
    candidates: &ShadeCandidates,
) -> ShadeSuggestion {
    ShadeSuggester::default().find_best_contrast_shade(background, candidates)
}

#[cfg(feature = "serde")]
impl serde::Serialize for ShadeCandidates {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ShadeCandidates {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct CandidatesVisitor;

        impl<'de> serde::de::Visitor<'de> for CandidatesVisitor {
            type Value = ShadeCandidates;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of shade keys to hex colors")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut candidates = ShadeCandidates::new();
                while let Some((key, color)) = map.next_entry::<String, String>()? {
                    candidates.push(key, color);
                }
                Ok(candidates)
            }
        }

        deserializer.deserialize_map(CandidatesVisitor)
    }
}
