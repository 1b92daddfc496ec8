//! Error types for field validation.
//!
//! Every validator fails with a single error kind, [`ValidationError`], which
//! pairs the caller-supplied field label with the [`Rule`] that was violated.
//! Callers branch on the rule rather than matching message text.

use std::fmt;

use thiserror::Error;

use crate::password::PASSWORD_SPECIALS;

/// Constraint violated by a rejected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Rule {
    /// No value was supplied (`null` or the empty string).
    Missing,
    /// A string was expected.
    NotAString,
    /// The value was blank once trimmed.
    Empty,
    /// The text parses entirely as a number.
    OnlyDigits,
    /// The text contains a space.
    ContainsSpace,
    /// The text is not a 24 character hexadecimal identifier.
    InvalidIdentifier,
    /// The text is not a well-formed email address.
    InvalidEmail,
    /// The text length falls outside the permitted range.
    LengthOutOfRange {
        /// Minimum permitted length in characters.
        min: usize,
        /// Maximum permitted length in characters.
        max: usize,
    },
    /// A personal name contains something other than letters, spaces or
    /// hyphens.
    NameCharacters,
    /// The password is shorter than the minimum length.
    PasswordTooShort {
        /// Minimum permitted length in characters.
        min: usize,
    },
    /// The password misses a required character class or uses a disallowed
    /// character.
    WeakPassword,
    /// A number was expected.
    NotANumber,
    /// The number has a fractional part.
    NotAnInteger,
    /// The number is integral but does not fit a signed 64-bit integer.
    OutOfRange,
    /// An array was expected.
    NotAnArray,
    /// An array element is not a non-empty string.
    InvalidElement {
        /// Zero-based position of the offending element.
        index: usize,
    },
    /// A category contains something other than letters, spaces or `&`.
    CategoryCharacters,
    /// The category is not in the fixed category table.
    UnknownCategory,
    /// A JSON object was expected.
    NotAnObject,
}

impl Rule {
    /// Stable machine-readable identifier for the rule.
    ///
    /// # Examples
    /// ```
    /// use household_validation::Rule;
    ///
    /// assert_eq!(Rule::OnlyDigits.code(), "only_digits");
    /// ```
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::NotAString => "not_a_string",
            Self::Empty => "empty",
            Self::OnlyDigits => "only_digits",
            Self::ContainsSpace => "contains_space",
            Self::InvalidIdentifier => "invalid_identifier",
            Self::InvalidEmail => "invalid_email",
            Self::LengthOutOfRange { .. } => "length_out_of_range",
            Self::NameCharacters => "name_characters",
            Self::PasswordTooShort { .. } => "password_too_short",
            Self::WeakPassword => "weak_password",
            Self::NotANumber => "not_a_number",
            Self::NotAnInteger => "not_an_integer",
            Self::OutOfRange => "out_of_range",
            Self::NotAnArray => "not_an_array",
            Self::InvalidElement { .. } => "invalid_element",
            Self::CategoryCharacters => "category_characters",
            Self::UnknownCategory => "unknown_category",
            Self::NotAnObject => "not_an_object",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "is required"),
            Self::NotAString => write!(f, "must be a string"),
            Self::Empty => write!(f, "cannot be empty or just spaces"),
            Self::OnlyDigits => write!(f, "cannot contain only digits"),
            Self::ContainsSpace => write!(f, "cannot contain spaces"),
            Self::InvalidIdentifier => {
                write!(f, "must be a 24 character hexadecimal identifier")
            }
            Self::InvalidEmail => write!(f, "must be a valid email address"),
            Self::LengthOutOfRange { min, max } => {
                write!(f, "must be between {min} and {max} characters")
            }
            Self::NameCharacters => write!(
                f,
                "may only contain letters separated by single spaces or hyphens"
            ),
            Self::PasswordTooShort { min } => {
                write!(f, "must be at least {min} characters")
            }
            Self::WeakPassword => write!(
                f,
                "must contain an uppercase letter, a lowercase letter, a digit, \
                 and one of {PASSWORD_SPECIALS}"
            ),
            Self::NotANumber => write!(f, "must be a number"),
            Self::NotAnInteger => write!(f, "must be a whole number"),
            Self::OutOfRange => write!(f, "is out of range"),
            Self::NotAnArray => write!(f, "must be an array of strings"),
            Self::InvalidElement { index } => {
                write!(f, "element {index} must be a non-empty string")
            }
            Self::CategoryCharacters => {
                write!(f, "may only contain letters, spaces, or '&'")
            }
            Self::UnknownCategory => write!(f, "must be one of the listed categories"),
            Self::NotAnObject => write!(f, "must be a JSON object"),
        }
    }
}

/// Rejection of a single field value.
///
/// ## Invariants
/// - `field` is the label supplied by the caller, unchanged.
///
/// # Examples
/// ```
/// use household_validation::{Rule, ValidationError};
///
/// let err = ValidationError::new("household name", Rule::ContainsSpace);
/// assert_eq!(err.to_string(), "household name cannot contain spaces");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} {rule}")]
pub struct ValidationError {
    field: String,
    rule: Rule,
}

impl ValidationError {
    /// Build an error for `field` violating `rule`.
    #[must_use]
    pub fn new(field: impl Into<String>, rule: Rule) -> Self {
        Self {
            field: field.into(),
            rule,
        }
    }

    /// Label of the rejected field.
    #[must_use]
    pub fn field(&self) -> &str {
        self.field.as_str()
    }

    /// Rule the value violated.
    #[must_use]
    pub const fn rule(&self) -> Rule {
        self.rule
    }
}
