// agri-bootstrap-core/src/runtime/mod.rs
// ============================================================================
// Module: Provisioner Runtimes
// Description: Step events, reports, and the three provisioning procedures.
// Purpose: Group the runtime surface shared by the provisioners.
// Dependencies: crate::core, serde
// ============================================================================

//! ## Overview
//! Each provisioner is a linear probe → create → attach/seed → report
//! sequence. Steps are independently re-runnable: probes detect prior
//! completion, creation conflicts raced in after a probe are absorbed, and
//! re-running a procedure converges instead of duplicating resources. No
//! compensating rollback exists; re-running is the recovery path.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod bucket;
pub mod role;
pub mod schedule;

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::AccountId;
use crate::core::identifiers::BucketName;
use crate::core::identifiers::PolicyName;
use crate::core::identifiers::RegionCode;
use crate::core::identifiers::RoleName;
use crate::core::identifiers::RuleName;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use bucket::BucketProvisionError;
pub use bucket::BucketProvisioner;
pub use bucket::BucketReport;
pub use role::PROPAGATION_WAIT_SECS;
pub use role::RoleProvisionError;
pub use role::RoleProvisioner;
pub use role::RoleReport;
pub use schedule::ScheduleProvisionError;
pub use schedule::ScheduleProvisioner;
pub use schedule::ScheduleReport;

// ============================================================================
// SECTION: Step Outcomes
// ============================================================================

/// Outcome of a converging provisioning step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepOutcome {
    /// The resource was created by this run.
    Created,
    /// The resource already existed; it was left untouched.
    AlreadyPresent,
}

/// A completed provisioning step, reported through a progress sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepEvent {
    /// The account identity was resolved.
    AccountResolved {
        /// Resolved account identifier.
        account: AccountId,
    },
    /// The execution role was created.
    RoleCreated {
        /// Role name.
        name: RoleName,
    },
    /// The execution role already existed and was left untouched.
    RoleAlreadyPresent {
        /// Role name.
        name: RoleName,
    },
    /// The managed baseline policy was attached to the role.
    ManagedPolicyAttached {
        /// Managed policy reference.
        policy_arn: String,
    },
    /// The custom policy was created.
    PolicyCreated {
        /// Policy name.
        name: PolicyName,
    },
    /// The custom policy already existed and was left untouched.
    PolicyAlreadyPresent {
        /// Policy name.
        name: PolicyName,
    },
    /// The custom policy was attached to the role.
    CustomPolicyAttached {
        /// Composed policy reference.
        policy_arn: String,
    },
    /// The storage bucket was created.
    BucketCreated {
        /// Bucket name.
        name: BucketName,
        /// Bucket region.
        region: RegionCode,
    },
    /// The storage bucket already existed.
    BucketAlreadyPresent {
        /// Bucket name.
        name: BucketName,
    },
    /// A folder prefix was seeded with a zero-length marker.
    PrefixSeeded {
        /// Seeded prefix key.
        key: String,
    },
    /// The scheduler rule was upserted.
    RuleUpserted {
        /// Rule name.
        name: RuleName,
        /// Schedule expression applied to the rule.
        expression: String,
    },
    /// The scheduler rule target was upserted.
    TargetUpserted {
        /// Composed target function reference.
        target_arn: String,
    },
}
