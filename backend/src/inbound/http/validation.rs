//! Mapping from field validation failures to the request error payload.
//!
//! Every rejected field becomes an `invalid_request` error (HTTP 400) whose
//! details name the field label and the stable rule code, plus the element
//! index for list fields.

use household_validation::{Rule, ValidationError};
use serde_json::{Map, Value, json};

use crate::domain::Error;

/// Build the request error for a rejected field.
///
/// # Examples
/// ```
/// use household::domain::ErrorCode;
/// use household::inbound::http::validation::invalid_field_error;
/// use household_validation::{Rule, ValidationError};
/// use serde_json::json;
///
/// let err = invalid_field_error(&ValidationError::new("tags", Rule::InvalidElement { index: 2 }));
/// assert_eq!(err.code(), ErrorCode::InvalidRequest);
/// assert_eq!(
///     err.details(),
///     Some(&json!({"field": "tags", "code": "invalid_element", "index": 2}))
/// );
/// ```
#[must_use]
pub fn invalid_field_error(err: &ValidationError) -> Error {
    let mut details = Map::new();
    details.insert("field".to_owned(), json!(err.field()));
    details.insert("code".to_owned(), json!(err.rule().code()));
    if let Rule::InvalidElement { index } = err.rule() {
        details.insert("index".to_owned(), json!(index));
    }
    Error::invalid_request(err.to_string()).with_details(Value::Object(details))
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        invalid_field_error(&err)
    }
}

#[cfg(test)]
mod tests {
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;
    use rstest::rstest;

    use super::*;
    use crate::domain::ErrorCode;

    #[rstest]
    #[case(ValidationError::new("household name", Rule::ContainsSpace), "contains_space")]
    #[case(ValidationError::new("age", Rule::NotAnInteger), "not_an_integer")]
    #[case(ValidationError::new("payload", Rule::NotAnObject), "not_an_object")]
    fn maps_to_bad_request(#[case] err: ValidationError, #[case] code: &str) {
        let field = err.field().to_owned();
        let message = err.to_string();
        let mapped = Error::from(err);

        assert_eq!(mapped.code(), ErrorCode::InvalidRequest);
        assert_eq!(mapped.message(), message);
        assert_eq!(mapped.details(), Some(&json!({"field": field, "code": code})));
        assert_eq!(ResponseError::status_code(&mapped), StatusCode::BAD_REQUEST);
    }

    #[rstest]
    fn element_failures_carry_index() {
        let mapped = invalid_field_error(&ValidationError::new(
            "tags",
            Rule::InvalidElement { index: 1 },
        ));
        let details = mapped.details().expect("details present");
        assert_eq!(details["index"], json!(1));
    }
}
