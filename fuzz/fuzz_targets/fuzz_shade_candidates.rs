#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shadeforge::{ShadeCandidates, ShadeSuggester, SuggestConfig, suggest_complementary_shade_str};

#[derive(Debug, Arbitrary)]
struct Input {
    background: String,
    entries: Vec<(String, String)>,
    min_ratio: f64,
    dark_threshold: f64,
}

fuzz_target!(|input: Input| {
    if input.entries.len() > 64 {
        return;
    }

    let config = SuggestConfig::default()
        .with_min_ratio(input.min_ratio)
        .with_dark_threshold(input.dark_threshold);
    let suggester = ShadeSuggester::new(config);
    let candidates: ShadeCandidates = input.entries.iter().cloned().collect();

    // Never panics; the key is a candidate unless the default was returned.
    let suggestion = suggester.find_best_contrast_shade(&input.background, &candidates);
    match &suggestion.warning {
        Some(warning) if warning.is_default() => assert_eq!(suggestion.key, "50"),
        _ => assert!(candidates.contains_key(&suggestion.key)),
    }

    for (key, _) in &input.entries {
        let _ = suggest_complementary_shade_str(key);
    }
});
