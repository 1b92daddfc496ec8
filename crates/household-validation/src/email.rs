//! Email address validation.
//!
//! Syntax rules:
//! - local part: atext characters, optionally separated by single dots
//! - domain: alphanumeric labels joined by dots or hyphens, ending in a
//!   top-level label of at least two characters that starts with a letter
//! - at most 254 characters overall, 64 in the local part and 63 per domain
//!   label

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Rule, ValidationError};
use crate::input::trimmed_text;

/// Maximum length of a whole address.
pub const EMAIL_MAX: usize = 254;
const LOCAL_PART_MAX: usize = 64;
const DOMAIN_LABEL_MAX: usize = 63;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        let pattern = concat!(
            r"^[-!#$%&'*+/0-9=?A-Z^_a-z`{|}~](?:\.?[-!#$%&'*+/0-9=?A-Z^_a-z`{|}~])*",
            r"@[a-zA-Z0-9](?:-*\.?[a-zA-Z0-9])*\.[a-zA-Z](?:-?[a-zA-Z0-9])+$",
        );
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Lower-cased email address.
///
/// ## Invariants
/// - syntactically valid per the module rules.
/// - contains no upper-case characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl TryFrom<String> for Email {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        check_email(&Value::String(value), "email")
    }
}

/// Validate an email address.
///
/// # Errors
///
/// Fails when the value is missing, not a string, blank, or not a
/// syntactically valid address once trimmed.
///
/// # Examples
/// ```
/// use household_validation::check_email;
/// use serde_json::json;
///
/// let email = check_email(&json!(" USER@Example.com "), "email").expect("valid email");
/// assert_eq!(email.as_ref(), "user@example.com");
/// assert!(check_email(&json!("not-an-email"), "email").is_err());
/// ```
pub fn check_email(value: &Value, field: &str) -> Result<Email, ValidationError> {
    let text = trimmed_text(value, field)?;
    if !is_valid_email(text) {
        return Err(ValidationError::new(field, Rule::InvalidEmail));
    }
    Ok(Email(text.to_lowercase()))
}

fn is_valid_email(text: &str) -> bool {
    if text.len() > EMAIL_MAX {
        return false;
    }
    if !email_regex().is_match(text) {
        return false;
    }
    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };
    local.len() <= LOCAL_PART_MAX && domain.split('.').all(|label| label.len() <= DOMAIN_LABEL_MAX)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case(" USER@Example.com ", "user@example.com")]
    #[case("ada+rota@mail.example.co.uk", "ada+rota@mail.example.co.uk")]
    #[case("first.last@example.io", "first.last@example.io")]
    #[case("o'hara@my-house.org", "o'hara@my-house.org")]
    fn accepts_addresses(#[case] input: &str, #[case] expected: &str) {
        let email = check_email(&json!(input), "email").expect("valid email");
        assert_eq!(email.as_ref(), expected);
    }

    #[rstest]
    #[case("not-an-email")]
    #[case("@example.com")]
    #[case("user@")]
    #[case("user@example")]
    #[case("user@example.c")]
    #[case(".user@example.com")]
    #[case("us..er@example.com")]
    #[case("user@-example.com")]
    #[case("user@example.1om")]
    #[case("two@signs@example.com")]
    #[case("spaced user@example.com")]
    fn rejects_malformed_addresses(#[case] input: &str) {
        let err = check_email(&json!(input), "email").expect_err("invalid email");
        assert_eq!(err.rule(), Rule::InvalidEmail);
    }

    #[test]
    fn rejects_overlong_local_part() {
        let address = format!("{}@example.com", "a".repeat(LOCAL_PART_MAX + 1));
        assert!(check_email(&json!(address), "email").is_err());
    }

    #[test]
    fn rejects_overlong_domain_label() {
        let address = format!("user@{}.com", "a".repeat(DOMAIN_LABEL_MAX + 1));
        assert!(check_email(&json!(address), "email").is_err());
    }

    #[test]
    fn rejects_overlong_address() {
        let label = "a".repeat(DOMAIN_LABEL_MAX);
        let address = format!("user@{label}.{label}.{label}.{label}.com");
        assert!(address.len() > EMAIL_MAX);
        assert!(check_email(&json!(address), "email").is_err());
    }

    #[rstest]
    #[case(json!(null), Rule::Missing)]
    #[case(json!(["a@b.co"]), Rule::NotAString)]
    #[case(json!("   "), Rule::Empty)]
    fn rejects_unusable_values(#[case] value: Value, #[case] rule: Rule) {
        let err = check_email(&value, "email").expect_err("rejected");
        assert_eq!(err.rule(), rule);
    }
}
