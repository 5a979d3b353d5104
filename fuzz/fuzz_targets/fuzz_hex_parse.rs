#![no_main]

use libfuzzer_sys::fuzz_target;
use shadeforge::{Color, ShadeCandidates, find_best_contrast_shade, generate_palette};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if text.len() > 64 {
        return;
    }

    // Parsing must never panic.
    let Ok(color) = Color::from_hex(text) else {
        // Rejected input must also be rejected by the palette entry point.
        assert!(generate_palette(text).is_err());
        return;
    };

    // Accepted input re-parses from its canonical form.
    let canonical = color.to_hex();
    assert_eq!(Color::from_hex(&canonical), Ok(color));

    let scale = generate_palette(text).expect("accepted seed must generate");
    let candidates = ShadeCandidates::from(&scale);
    let suggestion = find_best_contrast_shade(&canonical, &candidates);
    assert!(candidates.contains_key(&suggestion.key));
});
