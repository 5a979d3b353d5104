#![forbid(unsafe_code)]

//! Seed color → ten-step shade scale.
//!
//! The seed sits at `500`. Lighter keys raise HSL lightness toward a light
//! anchor and darker keys lower it toward a dark anchor, with hue and
//! saturation held at the seed's values. For fixed hue and saturation every
//! sRGB channel is non-decreasing in HSL lightness, so relative luminance
//! never increases from `50` to `900`.
//!
//! Anchors are widened to the seed's own lightness when the seed lies
//! outside them: a white seed keeps white at every light step, a black seed
//! keeps black at every dark step.
//!
//! # Configuration
//!
//! ```bash
//! # Lightness that key 50 approaches (0.75..=1.0)
//! export SHADEFORGE_LIGHT_ANCHOR=0.97
//!
//! # Lightness that key 900 approaches (0.0..=0.25)
//! export SHADEFORGE_DARK_ANCHOR=0.04
//! ```
//!
//! # Example
//!
//! ```
//! use shadeforge::{ShadeKey, generate_palette};
//!
//! let scale = generate_palette("#3182CE").unwrap();
//! assert_eq!(scale[ShadeKey::S500].to_hex(), "#3182CE");
//! ```

use crate::color::Color;
use crate::error::Result;
use crate::shade::{ShadeKey, ShadeScale};

pub const ENV_LIGHT_ANCHOR: &str = "SHADEFORGE_LIGHT_ANCHOR";
pub const ENV_DARK_ANCHOR: &str = "SHADEFORGE_DARK_ANCHOR";

const DEFAULT_LIGHT_ANCHOR: f64 = 0.97;
const DEFAULT_DARK_ANCHOR: f64 = 0.04;
const MIN_LIGHT_ANCHOR: f64 = 0.75;
const MAX_DARK_ANCHOR: f64 = 0.25;

/// Fraction of the distance from the seed to the light anchor, per key.
const LIGHT_STEPS: [(ShadeKey, f64); 5] = [
    (ShadeKey::S50, 0.95),
    (ShadeKey::S100, 0.8),
    (ShadeKey::S200, 0.6),
    (ShadeKey::S300, 0.4),
    (ShadeKey::S400, 0.2),
];

/// Fraction of the distance from the seed to the dark anchor, per key.
const DARK_STEPS: [(ShadeKey, f64); 4] = [
    (ShadeKey::S600, 0.2),
    (ShadeKey::S700, 0.4),
    (ShadeKey::S800, 0.6),
    (ShadeKey::S900, 0.9),
];

/// Lightness anchors for shade generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PaletteConfig {
    /// HSL lightness approached by the light end of the scale.
    /// Default: 0.97.
    pub light_anchor: f64,

    /// HSL lightness approached by the dark end of the scale.
    /// Default: 0.04.
    pub dark_anchor: f64,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            light_anchor: DEFAULT_LIGHT_ANCHOR,
            dark_anchor: DEFAULT_DARK_ANCHOR,
        }
    }
}

impl PaletteConfig {
    #[must_use]
    pub fn with_light_anchor(mut self, lightness: f64) -> Self {
        self.light_anchor = lightness;
        self
    }

    #[must_use]
    pub fn with_dark_anchor(mut self, lightness: f64) -> Self {
        self.dark_anchor = lightness;
        self
    }

    /// Load config from the process environment.
    ///
    /// Reads `SHADEFORGE_LIGHT_ANCHOR` and `SHADEFORGE_DARK_ANCHOR`.
    /// Unparsable values are ignored; the result is [`validated`](Self::validated).
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

        if let Some(val) = get_env(ENV_LIGHT_ANCHOR)
            && let Ok(lightness) = val.trim().parse::<f64>()
        {
            config.light_anchor = lightness;
        }

        if let Some(val) = get_env(ENV_DARK_ANCHOR)
            && let Ok(lightness) = val.trim().parse::<f64>()
        {
            config.dark_anchor = lightness;
        }

        config.validated()
    }

    /// Clamp anchors to safe ranges.
    ///
    /// - `light_anchor` to `0.75..=1.0`
    /// - `dark_anchor` to `0.0..=0.25`
    ///
    /// Non-finite values fall back to the defaults.
    #[must_use]
    pub fn validated(mut self) -> Self {
        self.light_anchor = if self.light_anchor.is_finite() {
            self.light_anchor.clamp(MIN_LIGHT_ANCHOR, 1.0)
        } else {
            DEFAULT_LIGHT_ANCHOR
        };
        self.dark_anchor = if self.dark_anchor.is_finite() {
            self.dark_anchor.clamp(0.0, MAX_DARK_ANCHOR)
        } else {
            DEFAULT_DARK_ANCHOR
        };
        self
    }
}

/// Builds shade scales from seed colors.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaletteGenerator {
    config: PaletteConfig,
}

impl PaletteGenerator {
    #[must_use]
    pub fn new(config: PaletteConfig) -> Self {
        Self {
            config: config.validated(),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &PaletteConfig {
        &self.config
    }

    #[must_use]
    pub fn generate(&self, seed: Color) -> ShadeScale {
        let hsl = seed.to_hsl();
        let light = self.config.light_anchor.max(hsl.l);
        let dark = self.config.dark_anchor.min(hsl.l);

        let mut shades = [seed; 10];
        for (key, t) in LIGHT_STEPS {
            let lightness = hsl.l + (light - hsl.l) * t;
            shades[key.index()] = Color::from_hsl(hsl.with_lightness(lightness));
        }
        for (key, t) in DARK_STEPS {
            let lightness = hsl.l - (hsl.l - dark) * t;
            shades[key.index()] = Color::from_hsl(hsl.with_lightness(lightness));
        }

        tracing::debug!(
            seed = %seed,
            hue = hsl.h,
            saturation = hsl.s,
            lightness = hsl.l,
            lightest = %shades[ShadeKey::S50.index()],
            darkest = %shades[ShadeKey::S900.index()],
            "generated shade scale"
        );

        ShadeScale::new(seed, shades)
    }

    /// Parse `seed` as hex and generate its scale.
    pub fn generate_hex(&self, seed: &str) -> Result<ShadeScale> {
        Ok(self.generate(Color::from_hex(seed)?))
    }
}

/// Generate a scale with the default anchors.
pub fn generate_palette(seed: &str) -> Result<ShadeScale> {
    PaletteGenerator::default().generate_hex(seed)
}
