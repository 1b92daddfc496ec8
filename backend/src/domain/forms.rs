//! Request payload validation for the household forms.
//!
//! Purpose: turn an untyped JSON form submission into a typed form by running
//! the field validators in declaration order. The first invalid field rejects
//! the whole submission; nothing is aggregated.

use std::fmt;

use clap::ValueEnum;
use household_validation::{
    Category, Email, HouseholdName, Password, PersonName, RecordId, Rule, ValidationError,
    check_age, check_category, check_email, check_household_name, check_id, check_name,
    check_password_login, check_password_sign_up, check_string, check_string_array,
};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

static ABSENT: Value = Value::Null;

/// Field label reported when the payload itself is not an object.
pub const PAYLOAD_FIELD: &str = "payload";

/// Read-only view over the fields of a JSON form submission.
#[derive(Debug, Clone, Copy)]
pub struct FormPayload<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> FormPayload<'a> {
    /// Wrap a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`Rule::NotAnObject`] against [`PAYLOAD_FIELD`] for any other
    /// JSON value.
    pub fn new(payload: &'a Value) -> Result<Self, ValidationError> {
        match payload {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(ValidationError::new(PAYLOAD_FIELD, Rule::NotAnObject)),
        }
    }

    /// Raw value for `key`, or `null` when the key is absent.
    #[must_use]
    pub fn field(&self, key: &str) -> &'a Value {
        self.fields.get(key).unwrap_or(&ABSENT)
    }
}

/// Form kinds accepted by [`validate_form`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum FormKind {
    /// New member registration.
    SignUp,
    /// Member login.
    Login,
    /// Household creation.
    Household,
    /// Joining an existing household by identifier.
    JoinHousehold,
    /// Posting an announcement to the household.
    Announcement,
    /// Adding an item to the shared grocery list.
    GroceryItem,
}

impl fmt::Display for FormKind {
    /// Writes the kebab-case name accepted on the command line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => write!(f, "{self:?}"),
        }
    }
}

/// A form that can be validated from a raw payload.
pub trait Form: Sized {
    /// Kind reported in logs.
    const KIND: FormKind;

    /// Validate every field, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] raised by a field validator.
    fn from_payload(payload: &FormPayload<'_>) -> Result<Self, ValidationError>;
}

/// New member registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpForm {
    /// Capitalised first name.
    pub first_name: PersonName,
    /// Capitalised last name.
    pub last_name: PersonName,
    /// Lower-cased email address.
    pub email: Email,
    /// Password meeting the strength policy; never serialised.
    #[serde(skip)]
    pub password: Password,
    /// Age in whole years.
    pub age: i64,
}

impl Form for SignUpForm {
    const KIND: FormKind = FormKind::SignUp;

    fn from_payload(payload: &FormPayload<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            first_name: check_name(payload.field("firstName"), "first name")?,
            last_name: check_name(payload.field("lastName"), "last name")?,
            email: check_email(payload.field("email"), "email")?,
            password: check_password_sign_up(payload.field("password"), "password")?,
            age: check_age(payload.field("age"), "age")?,
        })
    }
}

/// Member login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginForm {
    /// Lower-cased email address.
    pub email: Email,
    /// Supplied password; never serialised.
    #[serde(skip)]
    pub password: Password,
}

impl Form for LoginForm {
    const KIND: FormKind = FormKind::Login;

    fn from_payload(payload: &FormPayload<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            email: check_email(payload.field("email"), "email")?,
            password: check_password_login(payload.field("password"), "password")?,
        })
    }
}

/// Household creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseholdForm {
    /// Capitalised single-token household name; also the lookup key for the
    /// household's announcements.
    pub household_name: HouseholdName,
}

impl Form for HouseholdForm {
    const KIND: FormKind = FormKind::Household;

    fn from_payload(payload: &FormPayload<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            household_name: check_household_name(
                payload.field("householdName"),
                "household name",
            )?,
        })
    }
}

/// Joining an existing household.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinHouseholdForm {
    /// Identifier of the household record.
    pub household_id: RecordId,
}

impl Form for JoinHouseholdForm {
    const KIND: FormKind = FormKind::JoinHousehold;

    fn from_payload(payload: &FormPayload<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            household_id: check_id(payload.field("householdId"), "household id")?,
        })
    }
}

/// Announcement posted to a household.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementForm {
    /// Trimmed title.
    pub title: String,
    /// Trimmed body text.
    pub body: String,
    /// Trimmed tags; empty when none were supplied.
    pub tags: Vec<String>,
}

impl Form for AnnouncementForm {
    const KIND: FormKind = FormKind::Announcement;

    fn from_payload(payload: &FormPayload<'_>) -> Result<Self, ValidationError> {
        let title = check_string(payload.field("title"), "title")?;
        let body = check_string(payload.field("body"), "body")?;
        let tags = match payload.field("tags") {
            Value::Null => Vec::new(),
            raw => check_string_array(raw, "tags")?,
        };
        Ok(Self { title, body, tags })
    }
}

/// Item added to the household grocery list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryItemForm {
    /// Trimmed item name.
    pub name: String,
    /// Category from the fixed table.
    pub category: Category,
}

impl Form for GroceryItemForm {
    const KIND: FormKind = FormKind::GroceryItem;

    fn from_payload(payload: &FormPayload<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: check_string(payload.field("name"), "item name")?,
            category: check_category(payload.field("category"), "category")?,
        })
    }
}

/// Outcome of [`validate_form`]; serialises as the normalised payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
#[expect(missing_docs, reason = "each variant wraps the form of the same name")]
pub enum ValidatedForm {
    SignUp(SignUpForm),
    Login(LoginForm),
    Household(HouseholdForm),
    JoinHousehold(JoinHouseholdForm),
    Announcement(AnnouncementForm),
    GroceryItem(GroceryItemForm),
}

/// Validate `payload` as the form named by `kind`.
///
/// Rejections are logged at debug level with the form, field and rule code.
/// Field values are never logged.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered, including
/// [`Rule::NotAnObject`] when the payload is not a JSON object.
///
/// # Examples
/// ```
/// use household::domain::forms::{FormKind, validate_form};
/// use serde_json::json;
///
/// let form = validate_form(FormKind::Household, &json!({"householdName": "smiths"}))
///     .expect("valid form");
/// assert_eq!(serde_json::to_value(&form).expect("serialise"), json!({"householdName": "Smiths"}));
/// ```
pub fn validate_form(kind: FormKind, payload: &Value) -> Result<ValidatedForm, ValidationError> {
    let fields = FormPayload::new(payload).inspect_err(|err| log_rejection(kind, err))?;
    match kind {
        FormKind::SignUp => validate::<SignUpForm>(&fields).map(ValidatedForm::SignUp),
        FormKind::Login => validate::<LoginForm>(&fields).map(ValidatedForm::Login),
        FormKind::Household => validate::<HouseholdForm>(&fields).map(ValidatedForm::Household),
        FormKind::JoinHousehold => {
            validate::<JoinHouseholdForm>(&fields).map(ValidatedForm::JoinHousehold)
        }
        FormKind::Announcement => {
            validate::<AnnouncementForm>(&fields).map(ValidatedForm::Announcement)
        }
        FormKind::GroceryItem => {
            validate::<GroceryItemForm>(&fields).map(ValidatedForm::GroceryItem)
        }
    }
}

/// Validate a single form type, logging any rejection.
///
/// # Errors
///
/// Returns the first [`ValidationError`] raised by the form's fields.
pub fn validate<F: Form>(payload: &FormPayload<'_>) -> Result<F, ValidationError> {
    F::from_payload(payload).inspect_err(|err| log_rejection(F::KIND, err))
}

fn log_rejection(kind: FormKind, err: &ValidationError) {
    debug!(
        form = %kind,
        field = err.field(),
        rule = err.rule().code(),
        "form rejected"
    );
}
