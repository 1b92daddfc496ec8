//! Detection of text that a web form would coerce to a number.
//!
//! Accepted shapes:
//! - decimal literals with optional sign, fraction and exponent (`42`,
//!   `-3.5`, `.5`, `5.`, `1e3`)
//! - `Infinity` with optional sign
//! - unsigned `0x`, `0o` and `0b` prefixed integers

use std::sync::OnceLock;

use regex::Regex;

static DECIMAL_RE: OnceLock<Regex> = OnceLock::new();

fn decimal_regex() -> &'static Regex {
    DECIMAL_RE.get_or_init(|| {
        let pattern = r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("decimal literal regex failed to compile: {error}"))
    })
}

/// Return true if already-trimmed `text` is a numeric literal.
///
/// Empty text is not numeric; callers reject it as empty first.
pub(crate) fn is_numeric_literal(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    if matches!(text, "Infinity" | "+Infinity" | "-Infinity") {
        return true;
    }
    if let Some(is_radix) = radix_literal(text) {
        return is_radix;
    }
    decimal_regex().is_match(text)
}

/// Classify `0x`/`0o`/`0b` prefixed text; `None` when there is no prefix.
fn radix_literal(text: &str) -> Option<bool> {
    let mut chars = text.chars();
    if chars.next() != Some('0') {
        return None;
    }
    let radix = match chars.next() {
        Some('x' | 'X') => 16,
        Some('o' | 'O') => 8,
        Some('b' | 'B') => 2,
        _ => return None,
    };
    let digits = chars.as_str();
    Some(!digits.is_empty() && digits.chars().all(|c| c.is_digit(radix)))
}
