//! Entry checks shared by the string-typed validators.

use serde_json::Value;

use crate::error::{Rule, ValidationError};

/// Borrow the trimmed text of `value`.
///
/// `null` and `""` count as missing; any other non-string is rejected before
/// trimming, and blank text after trimming is rejected as empty.
pub(crate) fn trimmed_text<'a>(value: &'a Value, field: &str) -> Result<&'a str, ValidationError> {
    let raw = match value {
        Value::Null => return Err(ValidationError::new(field, Rule::Missing)),
        Value::String(raw) if raw.is_empty() => {
            return Err(ValidationError::new(field, Rule::Missing));
        }
        Value::String(raw) => raw.as_str(),
        _ => return Err(ValidationError::new(field, Rule::NotAString)),
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(field, Rule::Empty));
    }
    Ok(trimmed)
}

/// Upper-case the first character and lower-case the remainder.
///
/// A first character whose upper case spans several characters (`ß`) is kept
/// as is, so capitalising an already capitalised value changes nothing.
pub(crate) fn capitalise(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        let mut capitalised = String::with_capacity(text.len());
        capitalised.push(single_upper(first).unwrap_or(first));
        capitalised.push_str(&chars.as_str().to_lowercase());
        capitalised
    })
}

fn single_upper(c: char) -> Option<char> {
    let mut upper = c.to_uppercase();
    let first = upper.next()?;
    upper.next().is_none().then_some(first)
}
