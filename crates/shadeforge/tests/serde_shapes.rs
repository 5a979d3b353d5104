#![cfg(feature = "serde")]

//! Wire shapes of the serde-enabled types.
//!
//! Run:
//!   cargo test -p shadeforge --features serde --test serde_shapes

use serde_json::json;
use shadeforge::{
    Color, ContrastLevel, PaletteConfig, ShadeCandidates, ShadeKey, SuggestConfig,
    contrast_report, find_best_contrast_shade, generate_palette,
};

#[test]
fn scale_serializes_as_key_to_hex_map() {
    let scale = generate_palette("#3182CE").unwrap();
    let value = serde_json::to_value(scale).unwrap();
    let map = value.as_object().unwrap();
    assert_eq!(map.len(), 10);
    assert_eq!(map["500"], json!("#3182CE"));
    for key in ShadeKey::ALL {
        let hex = map[key.as_str()].as_str().unwrap();
        assert_eq!(Color::from_hex(hex).unwrap(), scale[key]);
    }
}

#[test]
fn candidates_deserialize_in_document_order() {
    let candidates: ShadeCandidates =
        serde_json::from_str(r##"{"900": "#000000", "50": "#FFFFFF", "800": "#000"}"##).unwrap();
    let keys: Vec<_> = candidates.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["900", "50", "800"]);

    // 900 and 800 tie on a white background; the first entry wins.
    let suggestion = find_best_contrast_shade("#FFFFFF", &candidates);
    assert_eq!(suggestion.key, "900");
}

#[test]
fn candidates_round_trip() {
    let candidates = ShadeCandidates::new()
        .with("50", "#F0F4FA")
        .with("950", "#0A0A0A");
    let json = serde_json::to_string(&candidates).unwrap();
    assert_eq!(json, r##"{"50":"#F0F4FA","950":"#0A0A0A"}"##);
    let back: ShadeCandidates = serde_json::from_str(&json).unwrap();
    assert_eq!(back, candidates);
}

#[test]
fn shade_key_uses_decimal_label() {
    assert_eq!(serde_json::to_string(&ShadeKey::S300).unwrap(), "\"300\"");
    let key: ShadeKey = serde_json::from_str("\"700\"").unwrap();
    assert_eq!(key, ShadeKey::S700);
    assert!(serde_json::from_str::<ShadeKey>("\"750\"").is_err());
}

#[test]
fn contrast_level_uses_wcag_names() {
    assert_eq!(serde_json::to_string(&ContrastLevel::AaLarge).unwrap(), "\"AALarge\"");
    let level: ContrastLevel = serde_json::from_str("\"AAA\"").unwrap();
    assert_eq!(level, ContrastLevel::Aaa);
}

#[test]
fn configs_fill_missing_fields_with_defaults() {
    let palette: PaletteConfig = serde_json::from_str(r#"{"light_anchor": 0.9}"#).unwrap();
    assert_eq!(palette.light_anchor, 0.9);
    assert_eq!(palette.dark_anchor, PaletteConfig::default().dark_anchor);

    let suggest: SuggestConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(suggest, SuggestConfig::default());
}

#[test]
fn report_serializes_flags() {
    let report = contrast_report(Color::BLACK, Color::WHITE);
    let value = serde_json::to_value(report).unwrap();
    assert_eq!(value["aa"], json!(true));
    assert_eq!(value["aaa"], json!(true));
    assert_eq!(value["aa_large"], json!(true));
}
