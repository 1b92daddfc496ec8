//! Free-text validators: generic strings, household names and tag lists.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Rule, ValidationError};
use crate::input::{capitalise, trimmed_text};
use crate::numeric::is_numeric_literal;

/// Validate a free-text field.
///
/// Returns the trimmed text.
///
/// # Errors
///
/// Fails when the value is missing, not a string, blank, or entirely numeric.
///
/// # Examples
/// ```
/// use household_validation::check_string;
/// use serde_json::json;
///
/// assert_eq!(check_string(&json!("  Bins go out Tuesday "), "title").as_deref(), Ok("Bins go out Tuesday"));
/// assert!(check_string(&json!("2024"), "title").is_err());
/// ```
pub fn check_string(value: &Value, field: &str) -> Result<String, ValidationError> {
    non_numeric_text(value, field).map(str::to_owned)
}

fn non_numeric_text<'a>(value: &'a Value, field: &str) -> Result<&'a str, ValidationError> {
    let text = trimmed_text(value, field)?;
    if is_numeric_literal(text) {
        return Err(ValidationError::new(field, Rule::OnlyDigits));
    }
    Ok(text)
}

/// Household name normalised to a single capitalised token.
///
/// ## Invariants
/// - non-empty, not numeric, contains no spaces.
/// - first character upper case, remainder lower case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HouseholdName(String);

impl AsRef<str> for HouseholdName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for HouseholdName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<HouseholdName> for String {
    fn from(value: HouseholdName) -> Self {
        value.0
    }
}

impl TryFrom<String> for HouseholdName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        check_household_name(&Value::String(value), "household name")
    }
}

/// Validate a household name.
///
/// The name is stored capitalised so that lookups by name are
/// case-insensitive.
///
/// # Errors
///
/// Fails for the same reasons as [`check_string`], and when the trimmed name
/// contains a space.
///
/// # Examples
/// ```
/// use household_validation::check_household_name;
/// use serde_json::json;
///
/// let name = check_household_name(&json!("sMITHS"), "household name").expect("valid name");
/// assert_eq!(name.as_ref(), "Smiths");
/// assert!(check_household_name(&json!("smith family"), "household name").is_err());
/// ```
pub fn check_household_name(value: &Value, field: &str) -> Result<HouseholdName, ValidationError> {
    let text = non_numeric_text(value, field)?;
    if text.contains(' ') {
        return Err(ValidationError::new(field, Rule::ContainsSpace));
    }
    Ok(HouseholdName(capitalise(text)))
}

/// Validate a list of tags.
///
/// An empty array is accepted. Elements are trimmed and keep their order.
///
/// # Errors
///
/// Fails when the value is not an array, or when any element is not a string
/// or is blank once trimmed. The error reports the first offending index.
///
/// # Examples
/// ```
/// use household_validation::check_string_array;
/// use serde_json::json;
///
/// let tags = check_string_array(&json!([" chores", "rota "]), "tags").expect("valid tags");
/// assert_eq!(tags, ["chores", "rota"]);
/// assert!(check_string_array(&json!(["chores", "  "]), "tags").is_err());
/// ```
pub fn check_string_array(value: &Value, field: &str) -> Result<Vec<String>, ValidationError> {
    let Value::Array(items) = value else {
        return Err(ValidationError::new(field, Rule::NotAnArray));
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(text) if !text.trim().is_empty() => Ok(text.trim().to_owned()),
            _ => Err(ValidationError::new(field, Rule::InvalidElement { index })),
        })
        .collect()
}
