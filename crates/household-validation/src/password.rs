//! Credential validators for sign-up and login.
//!
//! Sign-up enforces the strength policy; login only checks that something was
//! supplied, since stored credentials already met the policy when created.

use std::fmt;

use serde_json::Value;
use zeroize::Zeroizing;

use crate::error::{Rule, ValidationError};
use crate::input::trimmed_text;
use crate::numeric::is_numeric_literal;

/// Minimum sign-up password length.
pub const PASSWORD_MIN: usize = 8;
/// Special characters accepted in, and required by, sign-up passwords.
pub const PASSWORD_SPECIALS: &str = "@$!%*#?&";

/// Trimmed credential held in memory that is wiped on drop.
///
/// `Debug` and `Display` never print the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    /// Borrow the secret, e.g. to hash it.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

/// Validate a password chosen at sign-up.
///
/// # Errors
///
/// Fails when the value is missing, not a string, blank, shorter than
/// [`PASSWORD_MIN`] characters once trimmed, numeric, uses characters outside
/// letters, digits and [`PASSWORD_SPECIALS`], or lacks an upper-case letter, a
/// lower-case letter, a digit or a special character.
///
/// # Examples
/// ```
/// use household_validation::{Rule, check_password_sign_up};
/// use serde_json::json;
///
/// assert!(check_password_sign_up(&json!("Abcdef1!"), "password").is_ok());
/// let err = check_password_sign_up(&json!("short1!"), "password").expect_err("too short");
/// assert_eq!(err.rule(), Rule::PasswordTooShort { min: 8 });
/// ```
pub fn check_password_sign_up(value: &Value, field: &str) -> Result<Password, ValidationError> {
    let text = trimmed_text(value, field)?;

    if text.chars().count() < PASSWORD_MIN {
        return Err(ValidationError::new(
            field,
            Rule::PasswordTooShort { min: PASSWORD_MIN },
        ));
    }
    if is_numeric_literal(text) || !meets_strength_policy(text) {
        return Err(ValidationError::new(field, Rule::WeakPassword));
    }

    Ok(Password(Zeroizing::new(text.to_owned())))
}

/// Validate a password supplied at login.
///
/// # Errors
///
/// Fails only when the value is missing, not a string, or blank once trimmed.
///
/// # Examples
/// ```
/// use household_validation::check_password_login;
/// use serde_json::json;
///
/// let password = check_password_login(&json!(" hunter2 "), "password").expect("supplied");
/// assert_eq!(password.expose(), "hunter2");
/// ```
pub fn check_password_login(value: &Value, field: &str) -> Result<Password, ValidationError> {
    let text = trimmed_text(value, field)?;
    Ok(Password(Zeroizing::new(text.to_owned())))
}

fn meets_strength_policy(text: &str) -> bool {
    let is_special = |c: char| PASSWORD_SPECIALS.contains(c);
    text.chars().all(|c| c.is_ascii_alphanumeric() || is_special(c))
        && text.chars().any(|c| c.is_ascii_uppercase())
        && text.chars().any(|c| c.is_ascii_lowercase())
        && text.chars().any(|c| c.is_ascii_digit())
        && text.chars().any(is_special)
}
