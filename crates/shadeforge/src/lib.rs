#![forbid(unsafe_code)]

//! Shade-scale generation and WCAG contrast utilities for theme editors.
//!
//! # Role
//! `shadeforge` is the numeric core behind a color-theme editor. It expands
//! one seed color into a ten-step shade scale, measures WCAG contrast
//! between colors, and picks readable text shades for a background. The
//! editor around it owns state, rendering and persistence; this crate only
//! answers questions about colors.
//!
//! # This crate provides
//! - [`Color`] parsing and formatting for `#RGB` / `#RRGGBB` hex.
//! - [`PaletteGenerator`] for seed → [`ShadeScale`].
//! - [`contrast_ratio`], [`relative_luminance`] and [`ContrastLevel`]
//!   thresholds.
//! - [`suggest_complementary_shade`] and [`find_best_contrast_shade`].
//!
//! # Behavior
//! Every operation is a pure function over immutable values. Nothing is
//! cached or shared, so any call is safe from any thread. Malformed hex is a
//! [`ColorError`]; degraded input to the shade search is a
//! [`SuggestionWarning`] on an otherwise usable result.

/// Hex parsing and HSL conversion.
pub mod color;
/// WCAG luminance, contrast ratio and compliance levels.
pub mod contrast;
/// Error types.
pub mod error;
/// Seed → shade scale generation.
pub mod palette;
/// Shade keys and scales.
pub mod shade;
/// Complementary and best-contrast shade selection.
pub mod suggest;

pub use color::{Color, Hsl};
pub use contrast::{
    ContrastLevel,
    ContrastReport,
    // WCAG constants
    WCAG_AA_LARGE_TEXT,
    WCAG_AA_NORMAL_TEXT,
    WCAG_AAA_NORMAL_TEXT,
    // WCAG contrast utilities
    best_text_color,
    contrast_ratio,
    contrast_ratio_hex,
    contrast_report,
    passes,
    passes_aa,
    passes_aa_large,
    passes_aaa,
    relative_luminance,
};
pub use error::{ColorError, Result, UnknownShadeKey};
pub use palette::{PaletteConfig, PaletteGenerator, generate_palette};
pub use shade::{ShadeKey, ShadeScale};
pub use suggest::{
    ShadeCandidates, ShadeSuggester, ShadeSuggestion, SuggestConfig, SuggestionWarning,
    find_best_contrast_shade, suggest_complementary_shade, suggest_complementary_shade_str,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_types_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Color>();
        assert_send_sync::<ShadeScale>();
        assert_send_sync::<ShadeCandidates>();
        assert_send_sync::<ShadeSuggestion>();
        assert_send_sync::<PaletteGenerator>();
        assert_send_sync::<ShadeSuggester>();
        assert_send_sync::<ColorError>();
    }

    #[test]
    fn generate_then_pick_text_for_its_own_shades() {
        let scale = generate_palette("#38A169").unwrap();
        let candidates = ShadeCandidates::from(&scale);

        let on_light = find_best_contrast_shade(&scale[ShadeKey::S50].to_hex(), &candidates);
        assert_eq!(on_light.shade_key(), Some(ShadeKey::S900));

        let on_dark = find_best_contrast_shade(&scale[ShadeKey::S900].to_hex(), &candidates);
        assert_eq!(on_dark.shade_key(), Some(ShadeKey::S50));
    }

    #[test]
    fn complement_of_best_shade_lands_on_the_other_side() {
        let best = ShadeKey::S900;
        let complement = suggest_complementary_shade(best);
        assert_eq!(complement, ShadeKey::S50);
        assert!(complement.is_light());
    }

    #[test]
    fn contrast_of_scale_extremes_passes_aaa() {
        let scale = generate_palette("#3182CE").unwrap();
        let ratio = contrast_ratio(scale[ShadeKey::S50], scale[ShadeKey::S900]);
        assert!(passes_aaa(ratio), "ratio {ratio}");
    }
}
