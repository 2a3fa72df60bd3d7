// agri-bootstrap-core/src/interfaces/mod.rs
// ============================================================================
// Module: Agri Bootstrap Interfaces
// Description: Backend-agnostic interfaces for identity, roles, buckets, and schedules.
// Purpose: Define the contract surfaces used by the provisioner runtimes.
// Dependencies: crate::core, async-trait, thiserror
// ============================================================================

//! ## Overview
//! Interfaces define how the provisioners reach the cloud control plane
//! without embedding provider-specific details. Every creation error is
//! classified into a tagged kind so the runtimes can absorb "already exists"
//! conflicts explicitly instead of suppressing arbitrary failures.

// ============================================================================
// SECTION: Imports
// ============================================================================

use async_trait::async_trait;
use thiserror::Error;

use crate::core::documents::PolicyDocument;
use crate::core::identifiers::AccountId;
use crate::core::identifiers::BucketName;
use crate::core::identifiers::PolicyName;
use crate::core::identifiers::RegionCode;
use crate::core::identifiers::RoleName;
use crate::core::identifiers::RuleName;
use crate::runtime::StepEvent;

// ============================================================================
// SECTION: Identity Client
// ============================================================================

/// Identity resolution errors.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// No usable credentials were available.
    #[error("credentials unavailable: {0}")]
    Credentials(String),
    /// The control plane rejected or failed the identity lookup.
    #[error("identity lookup failed: {0}")]
    Api(String),
}

/// Resolves the account identity behind the active credentials.
#[async_trait]
pub trait IdentityClient: Send + Sync {
    /// Returns the account identifier for the active credentials.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError`] when no identity can be resolved. Resolution
    /// failure is always fatal to the calling procedure; no retry is made.
    async fn resolve_account(&self) -> Result<AccountId, IdentityError>;
}

// ============================================================================
// SECTION: Role Client
// ============================================================================

/// Role and policy store errors, tagged by kind.
#[derive(Debug, Error)]
pub enum RoleStoreError {
    /// The named resource already exists (safe to absorb).
    #[error("resource already exists: {0}")]
    Conflict(String),
    /// The named resource does not exist.
    #[error("resource not found: {0}")]
    NotFound(String),
    /// The caller lacks permission for the operation.
    #[error("access denied: {0}")]
    Denied(String),
    /// The control plane reported any other error.
    #[error("role store error: {0}")]
    Api(String),
}

/// Role and policy store for the identity control plane.
#[async_trait]
pub trait RoleClient: Send + Sync {
    /// Returns whether a role with `name` exists.
    ///
    /// # Errors
    ///
    /// Returns [`RoleStoreError`] when the probe itself fails.
    async fn role_exists(&self, name: &RoleName) -> Result<bool, RoleStoreError>;

    /// Creates a role with `name` trusting the principal in `trust_document`.
    ///
    /// # Errors
    ///
    /// Returns [`RoleStoreError::Conflict`] when the role already exists and
    /// other variants for all remaining failures.
    async fn create_role(
        &self,
        name: &RoleName,
        trust_document: &PolicyDocument,
    ) -> Result<(), RoleStoreError>;

    /// Attaches the policy at `policy_arn` to the role named `name`.
    ///
    /// The underlying provider treats re-attachment as a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`RoleStoreError`] when attachment fails.
    async fn attach_policy(
        &self,
        name: &RoleName,
        policy_arn: &str,
    ) -> Result<(), RoleStoreError>;

    /// Returns whether a customer-managed policy exists at `policy_arn`.
    ///
    /// # Errors
    ///
    /// Returns [`RoleStoreError`] when the probe itself fails.
    async fn policy_exists(&self, policy_arn: &str) -> Result<bool, RoleStoreError>;

    /// Creates a customer-managed policy from `document`.
    ///
    /// # Errors
    ///
    /// Returns [`RoleStoreError::Conflict`] when the policy already exists and
    /// other variants for all remaining failures.
    async fn create_policy(
        &self,
        name: &PolicyName,
        document: &PolicyDocument,
    ) -> Result<(), RoleStoreError>;
}

// ============================================================================
// SECTION: Bucket Client
// ============================================================================

/// Bucket store errors, tagged by kind.
#[derive(Debug, Error)]
pub enum BucketStoreError {
    /// The bucket already exists in this account (safe to absorb).
    #[error("bucket already owned by this account: {0}")]
    Conflict(String),
    /// The bucket name is taken by another account; convergence is impossible.
    #[error("bucket name taken by another account: {0}")]
    NameTaken(String),
    /// The caller lacks permission for the operation.
    #[error("access denied: {0}")]
    Denied(String),
    /// The control plane reported any other error.
    #[error("bucket store error: {0}")]
    Api(String),
}

/// Bucket store for the object-storage control plane.
#[async_trait]
pub trait BucketClient: Send + Sync {
    /// Returns whether the bucket named `name` exists and is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`BucketStoreError`] when the probe itself fails.
    async fn bucket_exists(&self, name: &BucketName) -> Result<bool, BucketStoreError>;

    /// Creates the bucket named `name` in `region`.
    ///
    /// Regions other than the provider default require a location constraint;
    /// implementations must supply it.
    ///
    /// # Errors
    ///
    /// Returns [`BucketStoreError::Conflict`] when this account already owns
    /// the bucket, [`BucketStoreError::NameTaken`] when another account does,
    /// and other variants for all remaining failures.
    async fn create_bucket(
        &self,
        name: &BucketName,
        region: &RegionCode,
    ) -> Result<(), BucketStoreError>;

    /// Writes a zero-length marker object at `key` inside `bucket`.
    ///
    /// Re-writing an existing marker is a harmless overwrite.
    ///
    /// # Errors
    ///
    /// Returns [`BucketStoreError`] when the write fails.
    async fn put_marker(&self, bucket: &BucketName, key: &str) -> Result<(), BucketStoreError>;
}

// ============================================================================
// SECTION: Schedule Client
// ============================================================================

/// Schedule store errors, tagged by kind.
#[derive(Debug, Error)]
pub enum ScheduleStoreError {
    /// The caller lacks permission for the operation.
    #[error("access denied: {0}")]
    Denied(String),
    /// The control plane reported any other error.
    #[error("schedule store error: {0}")]
    Api(String),
}

/// Schedule store for the event-scheduler control plane.
///
/// Both operations are provider-side upserts, so the schedule provisioner
/// needs no existence probes.
#[async_trait]
pub trait ScheduleClient: Send + Sync {
    /// Upserts the rule named `name` with `schedule_expression`.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleStoreError`] when the upsert fails.
    async fn put_rule(
        &self,
        name: &RuleName,
        schedule_expression: &str,
        description: &str,
    ) -> Result<(), ScheduleStoreError>;

    /// Upserts the rule target with a JSON input payload.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleStoreError`] when the upsert fails.
    async fn put_target(
        &self,
        rule: &RuleName,
        target_arn: &str,
        input: &str,
    ) -> Result<(), ScheduleStoreError>;
}

// ============================================================================
// SECTION: Progress Sink
// ============================================================================

/// Receiver for per-step provisioning progress.
pub trait ProgressSink {
    /// Records a completed provisioning step.
    fn record(&mut self, event: &StepEvent);
}

/// Progress sink that discards all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullProgressSink;

impl ProgressSink for NullProgressSink {
    fn record(&mut self, _event: &StepEvent) {}
}
