use regex::Regex;
use std::sync::OnceLock;

/// Leading decimal number, the part a lenient float parse would accept.
fn number_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?")
            .expect("Invalid regex pattern")
    })
}

/// Convert a spreadsheet-formatted amount into a number.
///
/// Strips currency symbols, quotes and thousands-separator commas, then reads
/// the longest leading decimal number ("12.5%" → 12.5, "1000 RON" → 1000).
/// Empty or unparsable input yields `0.0`; the result is always finite.
pub fn parse_amount(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '€' | '$' | '£' | '"' | ','))
        .collect();
    let cleaned = cleaned.trim_start();

    number_prefix()
        .find(cleaned)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// [`parse_amount`] for a cell that may be missing from a short row.
pub fn parse_optional_amount(raw: Option<&str>) -> f64 {
    raw.map(parse_amount).unwrap_or(0.0)
}
