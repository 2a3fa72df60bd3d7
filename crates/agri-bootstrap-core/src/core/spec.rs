// agri-bootstrap-core/src/core/spec.rs
// ============================================================================
// Module: Resource Specifications
// Description: Inputs consumed by the provisioner runtimes.
// Purpose: Describe the role, bucket, and schedule a deployment target needs.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A resource specification names everything a provisioning procedure needs
//! up front: resource names, document paths, region, folder layout, and
//! schedule frequency. Specifications are plain data; validation happens at
//! the configuration boundary.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::BucketName;
use crate::core::identifiers::FunctionName;
use crate::core::identifiers::PolicyName;
use crate::core::identifiers::RegionCode;
use crate::core::identifiers::RoleName;
use crate::core::identifiers::RuleName;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Region requiring no location constraint on bucket creation.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Folder prefixes seeded into the pipeline bucket.
///
/// Each entry maps to one data category the downstream pipeline reads or
/// writes: per-scene statistics, the vegetation time series, climate data,
/// analytics outputs, rendered dashboards, and batch-processing staging.
pub const DEFAULT_FOLDER_PREFIXES: [&str; 6] = [
    "results/",
    "time_series/",
    "climate_data/",
    "analytics/",
    "dashboards/",
    "batch_processing/",
];

// ============================================================================
// SECTION: Role Specification
// ============================================================================

/// Specification for the execution role and its layered permissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSpec {
    /// Execution role name.
    pub name: RoleName,
    /// Name for the customer-managed bucket policy.
    pub custom_policy_name: PolicyName,
    /// Path to the trust-policy document.
    pub trust_policy_path: PathBuf,
    /// Path to the custom permission-policy document.
    pub custom_policy_path: PathBuf,
}

// ============================================================================
// SECTION: Bucket Specification
// ============================================================================

/// Specification for the storage bucket and its folder layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketSpec {
    /// Globally-unique bucket name.
    pub name: BucketName,
    /// Region the bucket is created in.
    pub region: RegionCode,
    /// Folder prefixes seeded with zero-length marker objects.
    pub folder_prefixes: Vec<String>,
}

impl BucketSpec {
    /// Creates a bucket specification with the default folder layout.
    #[must_use]
    pub fn with_default_prefixes(name: BucketName, region: RegionCode) -> Self {
        Self {
            name,
            region,
            folder_prefixes: DEFAULT_FOLDER_PREFIXES.iter().map(ToString::to_string).collect(),
        }
    }
}

// ============================================================================
// SECTION: Schedule Specification
// ============================================================================

/// Monitoring cadence for the scheduler rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleFrequency {
    /// Run once per day.
    Daily,
    /// Run once per week.
    Weekly,
    /// Run once per month.
    Monthly,
}

impl ScheduleFrequency {
    /// Returns the provider schedule expression for this cadence.
    #[must_use]
    pub const fn rate_expression(self) -> &'static str {
        match self {
            Self::Daily => "rate(1 day)",
            Self::Weekly => "rate(7 days)",
            Self::Monthly => "rate(30 days)",
        }
    }

    /// Returns the lowercase cadence label used in reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

/// Specification for the automated monitoring schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSpec {
    /// Scheduler rule name.
    pub rule_name: RuleName,
    /// Monitoring cadence.
    pub frequency: ScheduleFrequency,
    /// Compute function the rule targets.
    pub function_name: FunctionName,
    /// Region used to compose the target function reference.
    pub region: RegionCode,
}

// ============================================================================
// SECTION: Tests
// ============================================================================
