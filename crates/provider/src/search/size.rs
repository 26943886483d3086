//! Human-readable size parsing.
//!
//! The site displays sizes with French unit tokens ("1.37Go", "700Mo",
//! "52.16ko"); English tokens are accepted too since some releases carry
//! them in uploader-provided columns.

use once_cell::sync::Lazy;
use regex_lite::Regex;

static SIZE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+(?:[.,][0-9]+)?)\s*([A-Za-z]+)$").expect("hardcoded regex"));

const KILO: f64 = 1024.0;

/// Parse a size string into bytes. Unknown units or malformed input yield 0
/// rather than an error; a missing size must not discard an otherwise valid
/// result.
pub fn parse_size(text: &str) -> u64 {
    let Some(captures) = SIZE_RE.captures(text.trim()) else {
        return 0;
    };
    let value: f64 = match captures[1].replace(',', ".").parse() {
        Ok(v) => v,
        Err(_) => return 0,
    };
    let multiplier = match captures[2].to_lowercase().as_str() {
        "o" | "b" => 1.0,
        "ko" | "kb" | "kib" | "kio" => KILO,
        "mo" | "mb" | "mib" | "mio" => KILO * KILO,
        "go" | "gb" | "gib" | "gio" => KILO * KILO * KILO,
        "to" | "tb" | "tib" | "tio" => KILO * KILO * KILO * KILO,
        _ => return 0,
    };
    (value * multiplier) as u64
}
