// agri-bootstrap-core/src/lib.rs
// ============================================================================
// Module: Agri Bootstrap Core Library
// Description: Public API surface for the Agri Bootstrap core.
// Purpose: Expose provisioning types, interfaces, and runtime procedures.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Agri Bootstrap core provides idempotent cloud-resource provisioning for the
//! agriculture-monitoring pipeline: an execution role with layered trust and
//! permissions, a storage bucket with a fixed folder layout, and a monitoring
//! schedule. It is backend-agnostic and integrates through explicit interfaces
//! rather than embedding a provider SDK.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use interfaces::BucketClient;
pub use interfaces::BucketStoreError;
pub use interfaces::IdentityClient;
pub use interfaces::IdentityError;
pub use interfaces::NullProgressSink;
pub use interfaces::ProgressSink;
pub use interfaces::RoleClient;
pub use interfaces::RoleStoreError;
pub use interfaces::ScheduleClient;
pub use interfaces::ScheduleStoreError;
pub use runtime::BucketProvisionError;
pub use runtime::PROPAGATION_WAIT_SECS;
pub use runtime::BucketProvisioner;
pub use runtime::BucketReport;
pub use runtime::RoleProvisionError;
pub use runtime::RoleProvisioner;
pub use runtime::RoleReport;
pub use runtime::ScheduleProvisionError;
pub use runtime::ScheduleProvisioner;
pub use runtime::ScheduleReport;
pub use runtime::StepEvent;
pub use runtime::StepOutcome;
