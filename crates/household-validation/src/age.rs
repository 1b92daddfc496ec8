//! Age validation.

use serde_json::{Number, Value};

use crate::error::{Rule, ValidationError};

/// Validate an age supplied as a JSON number.
///
/// Integral floating-point values such as `30.0` are accepted. JSON cannot
/// carry NaN; serialisers map it to `null`, which is rejected as missing.
///
/// # Errors
///
/// Fails when the value is missing, not a number, has a fractional part, or
/// does not fit an `i64`.
///
/// # Examples
/// ```
/// use household_validation::check_age;
/// use serde_json::json;
///
/// assert_eq!(check_age(&json!(34), "age"), Ok(34));
/// assert!(check_age(&json!(4.5), "age").is_err());
/// assert!(check_age(&json!("4"), "age").is_err());
/// ```
pub fn check_age(value: &Value, field: &str) -> Result<i64, ValidationError> {
    match value {
        Value::Null => Err(ValidationError::new(field, Rule::Missing)),
        Value::Number(number) => integer_value(number)
            .map_err(|rule| ValidationError::new(field, rule)),
        _ => Err(ValidationError::new(field, Rule::NotANumber)),
    }
}

fn integer_value(number: &Number) -> Result<i64, Rule> {
    if let Some(whole) = number.as_i64() {
        return Ok(whole);
    }
    if number.is_u64() {
        return Err(Rule::OutOfRange);
    }
    let Some(float) = number.as_f64() else {
        return Err(Rule::NotANumber);
    };
    if !float.is_finite() {
        return Err(Rule::NotANumber);
    }
    if float.fract() != 0.0 {
        return Err(Rule::NotAnInteger);
    }
    whole_float_to_i64(float).ok_or(Rule::OutOfRange)
}

fn whole_float_to_i64(float: f64) -> Option<i64> {
    // Both bounds are exactly representable powers of two.
    const UPPER: f64 = 9_223_372_036_854_775_808.0;
    const LOWER: f64 = -9_223_372_036_854_775_808.0;
    if !(LOWER..UPPER).contains(&float) {
        return None;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "caller guarantees a whole number inside the i64 range"
    )]
    Some(float as i64)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case(json!(0), 0)]
    #[case(json!(34), 34)]
    #[case(json!(-2), -2)]
    #[case(json!(30.0), 30)]
    #[case(json!(-1e3), -1000)]
    fn accepts_whole_numbers(#[case] value: Value, #[case] expected: i64) {
        assert_eq!(check_age(&value, "age"), Ok(expected));
    }

    #[rstest]
    #[case(json!(4.5), Rule::NotAnInteger)]
    #[case(json!(-0.25), Rule::NotAnInteger)]
    #[case(json!("4"), Rule::NotANumber)]
    #[case(json!(true), Rule::NotANumber)]
    #[case(json!([4]), Rule::NotANumber)]
    #[case(json!(null), Rule::Missing)]
    #[case(json!(u64::MAX), Rule::OutOfRange)]
    #[case(json!(1e300), Rule::OutOfRange)]
    fn rejects_other_values(#[case] value: Value, #[case] rule: Rule) {
        let err = check_age(&value, "age").expect_err("age should be rejected");
        assert_eq!(err.rule(), rule);
        assert_eq!(err.field(), "age");
    }

    #[test]
    fn nan_never_reaches_the_validator_as_a_number() {
        let value = json!(f64::NAN);
        assert_eq!(value, Value::Null);
        assert!(check_age(&value, "age").is_err());
    }
}
