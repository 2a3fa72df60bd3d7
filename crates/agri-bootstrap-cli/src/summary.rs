// agri-bootstrap-cli/src/summary.rs
// ============================================================================
// Module: Provisioning Summary
// Description: Machine-readable summary of a provisioning invocation.
// Purpose: Let automation consume resource references without text parsing.
// Dependencies: agri-bootstrap-core, serde
// ============================================================================

//! ## Overview
//! In JSON output mode the CLI suppresses progress lines and emits one
//! summary document on stdout carrying every identifier the run produced:
//! role and policy references, bucket name and region, and the schedule
//! target. Sections absent from the invocation are omitted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use agri_bootstrap_core::BucketReport;
use agri_bootstrap_core::RoleReport;
use agri_bootstrap_core::ScheduleReport;
use serde::Serialize;

// ============================================================================
// SECTION: Summary
// ============================================================================

/// Machine-readable outcome of a provisioning invocation.
#[derive(Debug, Default, Serialize)]
pub struct ProvisionSummary {
    /// Role provisioning outcome, when the invocation covered the role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<RoleReport>,
    /// Bucket provisioning outcome, when the invocation covered the bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket: Option<BucketReport>,
    /// Schedule provisioning outcome, when the invocation covered the schedule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<ScheduleReport>,
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use agri_bootstrap_core::AccountId;
    use agri_bootstrap_core::PolicyName;
    use agri_bootstrap_core::RoleName;
    use agri_bootstrap_core::RoleReport;
    use agri_bootstrap_core::StepOutcome;

    use super::ProvisionSummary;

    type TestResult = Result<(), String>;

    #[test]
    fn summary_serializes_role_identifiers() -> TestResult {
        let summary = ProvisionSummary {
            role: Some(RoleReport {
                account: AccountId::new("123456789012"),
                role_name: RoleName::new("lambda-agriculture-role"),
                role_arn: "arn:aws:iam::123456789012:role/lambda-agriculture-role".to_string(),
                policy_name: PolicyName::new("UAE-Agriculture-S3-Policy"),
                policy_arn: "arn:aws:iam::123456789012:policy/UAE-Agriculture-S3-Policy"
                    .to_string(),
                role_outcome: StepOutcome::Created,
                policy_outcome: StepOutcome::AlreadyPresent,
                propagation_wait_secs: 10,
            }),
            ..ProvisionSummary::default()
        };
        let json = serde_json::to_string(&summary).map_err(|err| err.to_string())?;
        if !json.contains("arn:aws:iam::123456789012:role/lambda-agriculture-role") {
            return Err("summary must carry the role reference".to_string());
        }
        if !json.contains("\"role_outcome\":\"created\"") {
            return Err("summary must carry tagged outcomes".to_string());
        }
        if json.contains("\"bucket\"") {
            return Err("absent sections must be omitted".to_string());
        }
        Ok(())
    }
}
