//! Property-based invariant tests for color parsing and WCAG contrast.
//!
//! 1. Canonical hex text parses back to the same color
//! 2. Shorthand `#RGB` equals the doubled long form
//! 3. Arbitrary text never panics the parser; accepted text has a valid shape
//! 4. Relative luminance lies in [0, 1]
//! 5. Contrast ratio lies in [1, 21]
//! 6. Contrast ratio of a color with itself is exactly 1
//! 7. Contrast ratio is symmetric
//! 8. Level checks agree with their thresholds
//! 9. best_text_color returns the maximal-ratio candidate

use proptest::prelude::*;
use shadeforge::{
    Color, ContrastLevel, best_text_color, contrast_ratio, contrast_ratio_hex, passes,
    passes_aa, passes_aa_large, passes_aaa, relative_luminance,
};

// ── Helpers ──────────────────────────────────────────────────────────

fn arb_color() -> impl Strategy<Value = Color> {
    any::<[u8; 3]>().prop_map(Color::from)
}

fn arb_level() -> impl Strategy<Value = ContrastLevel> {
    prop_oneof![
        Just(ContrastLevel::AaLarge),
        Just(ContrastLevel::Aa),
        Just(ContrastLevel::Aaa),
    ]
}

// ═════════════════════════════════════════════════════════════════════════
// 1-3. Parsing
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn canonical_hex_round_trips(color in arb_color()) {
        let text = color.to_hex();
        prop_assert_eq!(text.len(), 7);
        prop_assert_eq!(Color::from_hex(&text).unwrap(), color);
        prop_assert_eq!(Color::from_hex(&text.to_lowercase()).unwrap(), color);
    }

    #[test]
    fn shorthand_matches_long_form(r in 0u8..16, g in 0u8..16, b in 0u8..16) {
        let short = format!("#{r:X}{g:x}{b:X}");
        let long = format!("#{r:X}{r:X}{g:X}{g:X}{b:X}{b:X}");
        prop_assert_eq!(Color::from_hex(&short).unwrap(), Color::from_hex(&long).unwrap());
    }

    #[test]
    fn parser_never_panics(input in "\\PC{0,10}") {
        if let Ok(color) = Color::from_hex(&input) {
            prop_assert!(input.starts_with('#'));
            prop_assert!(input.len() == 4 || input.len() == 7);
            prop_assert!(input[1..].chars().all(|c| c.is_ascii_hexdigit()));
            prop_assert_eq!(color, Color::from_hex(&color.to_hex()).unwrap());
        }
    }

    #[test]
    fn non_hex_shapes_are_rejected(input in "#[0-9a-fA-F]{0,2}|#[0-9a-fA-F]{4,5}|#[0-9a-fA-F]{7,9}") {
        prop_assert!(Color::from_hex(&input).is_err());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4-7. Luminance and ratio
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn luminance_bounded(color in arb_color()) {
        let lum = relative_luminance(color);
        prop_assert!((0.0..=1.0 + 1e-12).contains(&lum), "luminance {} out of range", lum);
    }

    #[test]
    fn ratio_bounded(a in arb_color(), b in arb_color()) {
        let ratio = contrast_ratio(a, b);
        prop_assert!(ratio >= 1.0);
        prop_assert!(ratio <= 21.0 + 1e-9, "ratio {} above 21", ratio);
    }

    #[test]
    fn ratio_with_self_is_one(color in arb_color()) {
        prop_assert_eq!(contrast_ratio(color, color), 1.0);
    }

    #[test]
    fn ratio_symmetric(a in arb_color(), b in arb_color()) {
        prop_assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
        prop_assert_eq!(
            contrast_ratio_hex(&a.to_hex(), &b.to_hex()).unwrap(),
            contrast_ratio(a, b)
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. Level checks
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn level_checks_match_thresholds(ratio in 1.0f64..=21.0, level in arb_level()) {
        prop_assert_eq!(passes(ratio, level), ratio >= level.threshold());
        let shorthand = match level {
            ContrastLevel::AaLarge => passes_aa_large(ratio),
            ContrastLevel::Aa => passes_aa(ratio),
            ContrastLevel::Aaa => passes_aaa(ratio),
        };
        prop_assert_eq!(shorthand, passes(ratio, level));
    }

    #[test]
    fn stricter_levels_imply_looser(ratio in 1.0f64..=21.0) {
        if passes_aaa(ratio) {
            prop_assert!(passes_aa(ratio));
        }
        if passes_aa(ratio) {
            prop_assert!(passes_aa_large(ratio));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 9. best_text_color
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn best_text_color_is_maximal(
        background in arb_color(),
        candidates in prop::collection::vec(arb_color(), 1..12),
    ) {
        let best = best_text_color(background, &candidates).unwrap();
        let best_ratio = contrast_ratio(best, background);
        for candidate in &candidates {
            prop_assert!(contrast_ratio(*candidate, background) <= best_ratio);
        }
        prop_assert!(candidates.contains(&best));
    }
}

#[test]
fn boundary_values() {
    assert!(passes_aa(4.5));
    assert!(!passes_aa(4.499));
    assert!(passes_aaa(7.0));
    assert!(passes_aa_large(3.0));
    assert!(!passes_aa_large(2.999));
    assert!((contrast_ratio(Color::WHITE, Color::BLACK) - 21.0).abs() < 1e-3);
}
