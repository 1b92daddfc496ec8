//! Tests for the error payload formatting and serialisation contract.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn base_error() -> DomainError {
    DomainError::invalid_request("bad")
}

#[rstest]
fn invalid_request_constructor_sets_code(base_error: DomainError) {
    assert_eq!(base_error.code(), ErrorCode::InvalidRequest);
    assert_eq!(base_error.message(), "bad");
    assert!(base_error.details().is_none());
}

#[rstest]
fn try_new_rejects_empty_messages() {
    let result = DomainError::try_new(ErrorCode::InvalidRequest, "   ");
    assert!(matches!(result, Err(DomainErrorValidationError::EmptyMessage)));
}

#[rstest]
fn new_panics_on_blank_message() {
    let result = std::panic::catch_unwind(|| DomainError::internal(""));
    assert!(result.is_err());
}

#[rstest]
fn serialises_with_snake_case_code(base_error: DomainError) {
    let value = serde_json::to_value(base_error.with_details(json!({"field": "email"})))
        .expect("serialise error");
    assert_eq!(
        value,
        json!({
            "code": "invalid_request",
            "message": "bad",
            "details": {"field": "email"},
        })
    );
}

#[rstest]
fn omits_absent_details(base_error: DomainError) {
    let value = serde_json::to_value(base_error).expect("serialise error");
    assert!(value.get("details").is_none());
}

#[rstest]
fn display_uses_message(base_error: DomainError) {
    assert_eq!(base_error.to_string(), "bad");
}
