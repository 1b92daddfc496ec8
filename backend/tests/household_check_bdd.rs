//! Behavioural tests for the `household-check` flow.
//!
//! Scenarios build a JSON payload, run it through the checker as the binary
//! would, and inspect either the normalised output or the error envelope.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use household::cli::run;
use household::config::CheckSettings;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use serde_json::{Map, Value, json};

#[derive(Default, ScenarioState)]
struct World {
    form: Slot<String>,
    payload: Slot<Map<String, Value>>,
    outcome: Slot<Result<Value, Value>>,
}

impl World {
    fn set_field(&self, key: String, value: Value) {
        let mut payload = self.payload.get().unwrap_or_default();
        payload.insert(key, value);
        self.payload.set(payload);
    }

    fn outcome(&self) -> Result<Value, Value> {
        self.outcome.get().expect("checker should have run")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

#[given("the checker is configured for the \"{form}\" form")]
fn the_checker_is_configured_for(world: &World, form: String) {
    world.form.set(form);
}

#[given("the payload field \"{key}\" is \"{value}\"")]
fn the_payload_field_is_text(world: &World, key: String, value: String) {
    world.set_field(key, json!(value));
}

#[given("the payload field \"{key}\" is the number {value:i64}")]
fn the_payload_field_is_number(world: &World, key: String, value: i64) {
    world.set_field(key, json!(value));
}

#[when("the checker runs")]
fn the_checker_runs(world: &World) {
    let settings = CheckSettings {
        form: world.form.get(),
        input: None,
        json_logs: false,
    };
    let payload = Value::Object(world.payload.get().unwrap_or_default()).to_string();
    let outcome = run(&settings, payload.as_bytes())
        .map(|output| serde_json::from_str(&output).expect("output is JSON"))
        .map_err(|err| serde_json::to_value(err.envelope()).expect("envelope serialises"));
    world.outcome.set(outcome);
}

#[then("the output field \"{key}\" is \"{expected}\"")]
fn the_output_field_is(world: &World, key: String, expected: String) {
    let output = world.outcome().expect("checker should succeed");
    assert_eq!(output[key.as_str()], json!(expected));
}

#[then("the output has no field \"{key}\"")]
fn the_output_has_no_field(world: &World, key: String) {
    let output = world.outcome().expect("checker should succeed");
    assert!(output.get(&key).is_none(), "unexpected field {key} in {output}");
}

#[then("the checker rejects field \"{field}\" with code \"{code}\"")]
fn the_checker_rejects_field(world: &World, field: String, code: String) {
    let envelope = world.outcome().expect_err("checker should fail");
    assert_eq!(envelope["code"], json!("invalid_request"));
    assert_eq!(envelope["details"], json!({"field": field, "code": code}));
}

#[then("the checker fails mentioning \"{text}\"")]
fn the_checker_fails_mentioning(world: &World, text: String) {
    let envelope = world.outcome().expect_err("checker should fail");
    let message = envelope["message"].as_str().unwrap_or_default();
    assert!(message.contains(&text), "message {message:?} lacks {text:?}");
}

#[scenario(
    path = "tests/features/household_check.feature",
    name = "A household payload is normalised"
)]
fn a_household_payload_is_normalised(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/household_check.feature",
    name = "Sign-up output never includes the password"
)]
fn sign_up_output_never_includes_the_password(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/household_check.feature",
    name = "Rejections report the field and rule"
)]
fn rejections_report_the_field_and_rule(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/household_check.feature",
    name = "Unknown forms are reported"
)]
fn unknown_forms_are_reported(world: World) {
    let _ = world;
}
