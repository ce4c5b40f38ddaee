//! Colors serialize as hex strings so theme configs stay hand-editable.

use s2pass_color::Rgba;

#[test]
fn serializes_as_hex_string() {
    let accent = Rgba::from_rgb8(245, 166, 35);
    let json = serde_json::to_string(&accent).unwrap();
    assert_eq!(json, "\"#F5A623\"");
}

#[test]
fn translucent_color_serializes_with_alpha() {
    let shadow = Rgba::from_rgba8(0, 0, 0, 31);
    let json = serde_json::to_string(&shadow).unwrap();
    assert_eq!(json, "\"#1F000000\"");
}

#[test]
fn deserializes_from_hex_string() {
    let accent: Rgba = serde_json::from_str("\"#C7B589\"").unwrap();
    assert_eq!(accent, Rgba::from_rgb8(199, 181, 137));
}

#[test]
fn deserialize_accepts_shorthand() {
    let white: Rgba = serde_json::from_str("\"#FFF\"").unwrap();
    assert_eq!(white, Rgba::WHITE);
}

#[test]
fn deserialize_rejects_malformed_input() {
    assert!(serde_json::from_str::<Rgba>("\"ZZZZZZ\"").is_err());
    assert!(serde_json::from_str::<Rgba>("\"#F5A6\"").is_err());
}

#[test]
fn round_trip_preserves_value() {
    let original = Rgba::from_rgba8(27, 42, 74, 255);
    let json = serde_json::to_string(&original).unwrap();
    let restored: Rgba = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, original);
}
