//! Config defaults and spec conversion tests for agri-bootstrap-config.
// agri-bootstrap-config/tests/config_defaults.rs
// =============================================================================
// Module: Config Defaults Tests
// Description: Validate default behavior and spec conversions.
// Purpose: Ensure an empty config describes the canonical deployment target.
// =============================================================================

use agri_bootstrap_core::ScheduleFrequency;

mod common;

type TestResult = Result<(), String>;

#[test]
fn default_config_validates() -> TestResult {
    let config = common::minimal_config();
    config.validate().map_err(|err| err.to_string())?;
    Ok(())
}

#[test]
fn default_role_spec_matches_canonical_names() -> TestResult {
    let spec = common::minimal_config().role_spec();
    if spec.name.as_str() != "lambda-agriculture-role" {
        return Err(format!("unexpected role name {}", spec.name));
    }
    if spec.custom_policy_name.as_str() != "UAE-Agriculture-S3-Policy" {
        return Err(format!("unexpected policy name {}", spec.custom_policy_name));
    }
    if !spec.trust_policy_path.ends_with("trust-policy.json") {
        return Err("unexpected trust policy path".to_string());
    }
    Ok(())
}

#[test]
fn default_bucket_spec_carries_six_prefixes() -> TestResult {
    let spec = common::minimal_config().bucket_spec();
    if spec.name.as_str() != "uae-agri-monitoring" {
        return Err(format!("unexpected bucket name {}", spec.name));
    }
    if spec.region.as_str() != "us-east-1" {
        return Err(format!("unexpected region {}", spec.region));
    }
    if spec.folder_prefixes.len() != 6 {
        return Err(format!("expected six prefixes, got {}", spec.folder_prefixes.len()));
    }
    Ok(())
}

#[test]
fn default_schedule_spec_is_weekly() -> TestResult {
    let spec = common::minimal_config().schedule_spec();
    if spec.rule_name.as_str() != "uae-agriculture-monitoring" {
        return Err(format!("unexpected rule name {}", spec.rule_name));
    }
    if spec.frequency != ScheduleFrequency::Weekly {
        return Err("default cadence must be weekly".to_string());
    }
    if spec.function_name.as_str() != "uae-satellite-processor" {
        return Err(format!("unexpected function name {}", spec.function_name));
    }
    Ok(())
}
