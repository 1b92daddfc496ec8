//! Domain primitives for the household forms.
//!
//! Purpose: define the typed forms produced from raw submissions and the
//! transport-agnostic error payload that adapters render.
//!
//! Public surface:
//! - `Error` (alias to `error::DomainError`): error response payload.
//! - `ErrorCode`: stable error identifier.
//! - `forms`: form payload validation built on `household_validation`.

pub mod error;
pub mod forms;

pub use self::error::{
    DomainError as Error, DomainErrorValidationError as ErrorValidationError, ErrorCode,
};
pub use self::forms::{FormKind, ValidatedForm, validate_form};
