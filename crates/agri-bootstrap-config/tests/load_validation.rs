//! Config loading and validation tests for agri-bootstrap-config.
// agri-bootstrap-config/tests/load_validation.rs
// =============================================================================
// Module: Config Load and Validation Tests
// Description: Exercise file loading, parse failures, and naming rules.
// Purpose: Ensure invalid configuration fails closed with descriptive errors.
// =============================================================================

use std::path::Path;

use agri_bootstrap_config::BootstrapConfig;
use agri_bootstrap_config::ConfigError;

mod common;

type TestResult = Result<(), String>;

/// Asserts a result failed with a message containing `needle`.
fn assert_invalid(result: Result<BootstrapConfig, ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(_) => Err("expected invalid config".to_string()),
    }
}

#[test]
fn load_accepts_full_config_file() -> TestResult {
    let (_dir, path) = common::write_config(
        r#"
region = "eu-west-2"

[role]
name = "pipeline-role"
custom_policy_name = "Pipeline-S3-Policy"
trust_policy_path = "docs/trust.json"
custom_policy_path = "docs/policy.json"

[bucket]
name = "pipeline-monitoring"
folder_prefixes = ["results/", "time_series/"]

[schedule]
rule_name = "pipeline-monitoring"
frequency = "daily"
function_name = "pipeline-processor"
"#,
    )?;
    let config = BootstrapConfig::load(Some(&path)).map_err(|err| err.to_string())?;
    if config.region != "eu-west-2" {
        return Err(format!("unexpected region {}", config.region));
    }
    if config.bucket.folder_prefixes.len() != 2 {
        return Err("configured prefixes must replace the defaults".to_string());
    }
    Ok(())
}

#[test]
fn load_rejects_malformed_toml() -> TestResult {
    let (_dir, path) = common::write_config("region = [broken")?;
    match BootstrapConfig::load(Some(&path)) {
        Err(ConfigError::Parse(_)) => Ok(()),
        other => Err(format!("expected parse error, got {other:?}")),
    }
}

#[test]
fn load_rejects_explicit_missing_path() -> TestResult {
    match BootstrapConfig::load(Some(Path::new("/nonexistent/agri-bootstrap.toml"))) {
        Err(ConfigError::Io(message)) if message.contains("not found") => Ok(()),
        other => Err(format!("expected io error, got {other:?}")),
    }
}

#[test]
fn load_rejects_unknown_frequency() -> TestResult {
    let (_dir, path) = common::write_config(
        r#"
[schedule]
frequency = "hourly"
"#,
    )?;
    match BootstrapConfig::load(Some(&path)) {
        Err(ConfigError::Parse(_)) => Ok(()),
        other => Err(format!("expected parse error, got {other:?}")),
    }
}

#[test]
fn validation_rejects_empty_role_name() -> TestResult {
    let (_dir, path) = common::write_config(
        r#"
[role]
name = ""
"#,
    )?;
    assert_invalid(BootstrapConfig::load(Some(&path)), "role.name must be non-empty")
}

#[test]
fn validation_rejects_uppercase_bucket_name() -> TestResult {
    let (_dir, path) = common::write_config(
        r#"
[bucket]
name = "Uppercase-Bucket"
"#,
    )?;
    assert_invalid(BootstrapConfig::load(Some(&path)), "bucket.name has invalid characters")
}

#[test]
fn validation_rejects_prefix_without_trailing_slash() -> TestResult {
    let (_dir, path) = common::write_config(
        r#"
[bucket]
folder_prefixes = ["results"]
"#,
    )?;
    assert_invalid(BootstrapConfig::load(Some(&path)), "must end with '/'")
}

#[test]
fn validation_rejects_traversal_prefix() -> TestResult {
    let (_dir, path) = common::write_config(
        r#"
[bucket]
folder_prefixes = ["../escape/"]
"#,
    )?;
    assert_invalid(BootstrapConfig::load(Some(&path)), "invalid segment")
}

#[test]
fn validation_rejects_bad_region() -> TestResult {
    let (_dir, path) = common::write_config(r#"region = "US EAST""#)?;
    assert_invalid(BootstrapConfig::load(Some(&path)), "invalid characters")
}

#[test]
fn validation_rejects_bad_rule_name() -> TestResult {
    let (_dir, path) = common::write_config(
        r#"
[schedule]
rule_name = "bad rule name"
"#,
    )?;
    assert_invalid(BootstrapConfig::load(Some(&path)), "schedule.rule_name")
}
