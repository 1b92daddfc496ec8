//! Checker configuration loaded via OrthoConfig.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Settings for the `household-check` command.
///
/// Values layer command-line flags over `HOUSEHOLD_CHECK_*` environment
/// variables.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "HOUSEHOLD_CHECK")]
pub struct CheckSettings {
    /// Form to validate the payload against, e.g. `sign-up`.
    pub form: Option<String>,
    /// Path to the JSON payload; stdin is read when absent.
    pub input: Option<PathBuf>,
    /// Emit log lines as JSON.
    #[ortho_config(default = false)]
    pub json_logs: bool,
}

#[cfg(test)]
mod tests {
    //! Unit tests for checker configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_args(args: &[&str]) -> CheckSettings {
        let argv = std::iter::once("household-check")
            .chain(args.iter().copied())
            .map(OsString::from);
        CheckSettings::load_from_iter(argv).expect("config should load")
    }

    #[rstest]
    fn defaults_are_used_when_missing() {
        let _guard = lock_env([
            ("HOUSEHOLD_CHECK_FORM", None::<String>),
            ("HOUSEHOLD_CHECK_INPUT", None::<String>),
            ("HOUSEHOLD_CHECK_JSON_LOGS", None::<String>),
        ]);

        let settings = load_from_args(&[]);
        assert!(settings.form.is_none());
        assert!(settings.input.is_none());
        assert!(!settings.json_logs);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("HOUSEHOLD_CHECK_FORM", Some("login".to_owned())),
            ("HOUSEHOLD_CHECK_INPUT", Some("/tmp/login.json".to_owned())),
            ("HOUSEHOLD_CHECK_JSON_LOGS", Some("true".to_owned())),
        ]);

        let settings = load_from_args(&[]);
        assert_eq!(settings.form.as_deref(), Some("login"));
        assert_eq!(settings.input, Some(PathBuf::from("/tmp/login.json")));
        assert!(settings.json_logs);
    }

    #[rstest]
    fn flags_override_environment() {
        let _guard = lock_env([
            ("HOUSEHOLD_CHECK_FORM", Some("login".to_owned())),
            ("HOUSEHOLD_CHECK_INPUT", None::<String>),
            ("HOUSEHOLD_CHECK_JSON_LOGS", None::<String>),
        ]);

        let settings = load_from_args(&["--form", "sign-up"]);
        assert_eq!(settings.form.as_deref(), Some("sign-up"));
    }
}
