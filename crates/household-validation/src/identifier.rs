//! Record identifiers used as database references.
//!
//! Purpose: accept the 24 character hexadecimal identifiers issued by the
//! document store and keep both the caller's text and the decoded bytes.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Rule, ValidationError};
use crate::input::trimmed_text;

/// Number of hexadecimal characters in a [`RecordId`].
pub const RECORD_ID_LEN: usize = 24;

/// Validated 12-byte record identifier.
///
/// ## Invariants
/// - the text form is exactly [`RECORD_ID_LEN`] hexadecimal characters with
///   no surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordId([u8; 12], String);

impl RecordId {
    /// Decoded identifier bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 12] {
        &self.0
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        self.1.as_str()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<RecordId> for String {
    fn from(value: RecordId) -> Self {
        let RecordId(_, raw) = value;
        raw
    }
}

impl TryFrom<String> for RecordId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        check_id(&Value::String(value), "id")
    }
}

/// Validate a record identifier.
///
/// # Errors
///
/// Fails when the value is missing, not a string, blank, or not
/// [`RECORD_ID_LEN`] hexadecimal characters once trimmed.
///
/// # Examples
/// ```
/// use household_validation::check_id;
/// use serde_json::json;
///
/// let id = check_id(&json!(" 507f1f77bcf86cd799439011 "), "household id").expect("valid id");
/// assert_eq!(id.as_ref(), "507f1f77bcf86cd799439011");
/// assert!(check_id(&json!("507f1f77"), "household id").is_err());
/// ```
pub fn check_id(value: &Value, field: &str) -> Result<RecordId, ValidationError> {
    let text = trimmed_text(value, field)?;
    let invalid = || ValidationError::new(field, Rule::InvalidIdentifier);

    if text.len() != RECORD_ID_LEN {
        return Err(invalid());
    }
    let mut bytes = [0_u8; 12];
    hex::decode_to_slice(text, &mut bytes).map_err(|_| invalid())?;
    Ok(RecordId(bytes, text.to_owned()))
}
