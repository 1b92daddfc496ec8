//! Personal name validation.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Rule, ValidationError};
use crate::input::{capitalise, trimmed_text};
use crate::numeric::is_numeric_literal;

/// Minimum allowed length for a personal name.
pub const NAME_MIN: usize = 2;
/// Maximum allowed length for a personal name.
pub const NAME_MAX: usize = 25;

static NAME_RE: OnceLock<Regex> = OnceLock::new();

fn name_regex() -> &'static Regex {
    NAME_RE.get_or_init(|| {
        // Length is enforced separately; words are joined by one space or hyphen.
        let pattern = "^[A-Za-z]+(?:[- ][A-Za-z]+)*$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("personal name regex failed to compile: {error}"))
    })
}

/// First or last name of a household member.
///
/// ## Invariants
/// - between [`NAME_MIN`] and [`NAME_MAX`] characters.
/// - ASCII letters separated by single spaces or hyphens.
/// - first character upper case, remainder lower case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonName(String);

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<PersonName> for String {
    fn from(value: PersonName) -> Self {
        value.0
    }
}

impl TryFrom<String> for PersonName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        check_name(&Value::String(value), "name")
    }
}

/// Validate a personal name.
///
/// # Errors
///
/// Fails when the value is missing, not a string, blank, outside
/// [`NAME_MIN`]..=[`NAME_MAX`] characters once trimmed, numeric, or contains
/// anything other than letters separated by single spaces or hyphens.
///
/// # Examples
/// ```
/// use household_validation::check_name;
/// use serde_json::json;
///
/// let name = check_name(&json!("john-paul"), "first name").expect("valid name");
/// assert_eq!(name.as_ref(), "John-paul");
/// assert!(check_name(&json!("John2"), "first name").is_err());
/// ```
pub fn check_name(value: &Value, field: &str) -> Result<PersonName, ValidationError> {
    let text = trimmed_text(value, field)?;

    let length = text.chars().count();
    if !(NAME_MIN..=NAME_MAX).contains(&length) {
        return Err(ValidationError::new(
            field,
            Rule::LengthOutOfRange {
                min: NAME_MIN,
                max: NAME_MAX,
            },
        ));
    }
    if is_numeric_literal(text) {
        return Err(ValidationError::new(field, Rule::OnlyDigits));
    }
    if !name_regex().is_match(text) {
        return Err(ValidationError::new(field, Rule::NameCharacters));
    }

    Ok(PersonName(capitalise(text)))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case("Jo", "Jo")]
    #[case("john-paul", "John-paul")]
    #[case("  ada  ", "Ada")]
    #[case("mary ann", "Mary ann")]
    #[case("ALICE", "Alice")]
    fn normalises_names(#[case] input: &str, #[case] expected: &str) {
        let name = check_name(&json!(input), "first name").expect("valid name");
        assert_eq!(name.as_ref(), expected);
    }

    #[rstest]
    #[case(json!("J"), Rule::LengthOutOfRange { min: NAME_MIN, max: NAME_MAX })]
    #[case(json!("  J  "), Rule::LengthOutOfRange { min: NAME_MIN, max: NAME_MAX })]
    #[case(json!("42"), Rule::OnlyDigits)]
    #[case(json!("Infinity"), Rule::OnlyDigits)]
    #[case(json!("John2"), Rule::NameCharacters)]
    #[case(json!("O'Brien"), Rule::NameCharacters)]
    #[case(json!("Mary  Ann"), Rule::NameCharacters)]
    #[case(json!("-Ann"), Rule::NameCharacters)]
    #[case(json!("Ann-"), Rule::NameCharacters)]
    #[case(json!("Zoë"), Rule::NameCharacters)]
    #[case(json!(null), Rule::Missing)]
    #[case(json!(12), Rule::NotAString)]
    fn rejects_names(#[case] value: Value, #[case] rule: Rule) {
        let err = check_name(&value, "first name").expect_err("name should be rejected");
        assert_eq!(err.rule(), rule);
    }

    #[test]
    fn rejects_names_exceeding_max_length() {
        let long_name = "a".repeat(NAME_MAX + 1);
        let err = check_name(&json!(long_name), "last name").expect_err("too long");
        assert_eq!(
            err.rule(),
            Rule::LengthOutOfRange {
                min: NAME_MIN,
                max: NAME_MAX
            }
        );
    }

    #[test]
    fn accepts_names_at_exact_max_length() {
        let max_name = "a".repeat(NAME_MAX);
        assert!(check_name(&json!(max_name), "last name").is_ok());
    }
}
