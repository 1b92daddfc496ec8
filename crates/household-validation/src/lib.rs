//! Input validators for household form fields.
//!
//! Each validator takes an untyped JSON value and a field label, and either
//! returns a normalised, strongly typed value or a [`ValidationError`] naming
//! the field and the [`Rule`] it violated. Validators are pure: no I/O, no
//! shared mutable state, and the first violated rule wins.
//!
//! # Overview
//!
//! | Validator | Output | Normalisation |
//! |---|---|---|
//! | [`check_id`] | [`RecordId`] | trimmed |
//! | [`check_string`] | `String` | trimmed |
//! | [`check_household_name`] | [`HouseholdName`] | trimmed, capitalised |
//! | [`check_string_array`] | `Vec<String>` | elements trimmed |
//! | [`check_email`] | [`Email`] | trimmed, lower-cased |
//! | [`check_password_sign_up`] | [`Password`] | trimmed |
//! | [`check_password_login`] | [`Password`] | trimmed |
//! | [`check_name`] | [`PersonName`] | trimmed, capitalised |
//! | [`check_age`] | `i64` | none |
//! | [`check_category`] | [`Category`] | canonical label |
//!
//! # Example
//!
//! ```
//! use household_validation::{Rule, check_household_name};
//! use serde_json::json;
//!
//! let name = check_household_name(&json!("  smiths "), "household name").expect("valid");
//! assert_eq!(name.as_ref(), "Smiths");
//!
//! let err = check_household_name(&json!("smith family"), "household name")
//!     .expect_err("spaces are rejected");
//! assert_eq!(err.rule(), Rule::ContainsSpace);
//! ```

mod age;
mod category;
mod email;
mod error;
mod identifier;
mod input;
mod name;
mod numeric;
mod password;
mod text;

pub use age::check_age;
pub use category::{CATEGORIES, Category, check_category};
pub use email::{EMAIL_MAX, Email, check_email};
pub use error::{Rule, ValidationError};
pub use identifier::{RECORD_ID_LEN, RecordId, check_id};
pub use name::{NAME_MAX, NAME_MIN, PersonName, check_name};
pub use password::{
    PASSWORD_MIN, PASSWORD_SPECIALS, Password, check_password_login, check_password_sign_up,
};
pub use text::{HouseholdName, check_household_name, check_string, check_string_array};
