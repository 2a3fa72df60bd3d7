// agri-bootstrap-core/src/core/mod.rs
// ============================================================================
// Module: Agri Bootstrap Core Types
// Description: Identifiers, ARN composition, documents, and resource specs.
// Purpose: Group the value types shared by all provisioning procedures.
// Dependencies: crate submodules
// ============================================================================

//! ## Overview
//! Core value types for provisioning: opaque identifiers, pure ARN
//! composition, fail-closed policy-document loading, and the resource
//! specifications consumed by the provisioner runtimes.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod arn;
pub mod documents;
pub mod identifiers;
pub mod spec;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use arn::MANAGED_BASELINE_POLICY_ARN;
pub use arn::function_arn;
pub use arn::policy_arn;
pub use arn::role_arn;
pub use documents::DocumentError;
pub use documents::PolicyDocument;
pub use identifiers::AccountId;
pub use identifiers::BucketName;
pub use identifiers::FunctionName;
pub use identifiers::PolicyName;
pub use identifiers::RegionCode;
pub use identifiers::RoleName;
pub use identifiers::RuleName;
pub use spec::BucketSpec;
pub use spec::DEFAULT_FOLDER_PREFIXES;
pub use spec::DEFAULT_REGION;
pub use spec::RoleSpec;
pub use spec::ScheduleFrequency;
pub use spec::ScheduleSpec;
