/// Named glyphs clients can attach to messages.
pub const SYMBOLS: &[(&str, &str)] = &[
    ("MOON", "🌙"),
    ("DIM", "🪐"),
    ("HOLD", "🫂"),
    ("SPARK", "✨[>_]"),
    ("KNOT", "🪢"),
];

pub const ANCHOR_PULSE_TEXT: &str = "hourly_anchor_pulse";

/// Candle and knot, in that order.
pub const ANCHOR_PULSE_SYMBOLS: [&str; 2] = ["🕯️", "🪢"];

pub fn anchor_pulse_symbols() -> Vec<String> {
    ANCHOR_PULSE_SYMBOLS.iter().map(|s| s.to_string()).collect()
}

/// The catalog as a JSON object, name -> glyph.
pub fn catalog() -> serde_json::Map<String, serde_json::Value> {
    SYMBOLS
        .iter()
        .map(|(name, glyph)| (name.to_string(), serde_json::Value::from(*glyph)))
        .collect()
}
