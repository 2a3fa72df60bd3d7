// agri-bootstrap-core/src/runtime/role.rs
// ============================================================================
// Module: Role Provisioner
// Description: Idempotent provisioning of the pipeline execution role.
// Purpose: Ensure the role exists with trust, baseline, and bucket policies.
// Dependencies: crate::{core, interfaces}, serde, thiserror
// ============================================================================

//! ## Overview
//! The role provisioner validates both policy documents before the first
//! network call, resolves the account identity, then converges the role and
//! its custom policy with probe-first reconciliation. "Already exists"
//! conflicts raced in after a probe are absorbed; every other error aborts
//! the procedure. An existing role's trust document is never re-synchronized.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::arn::MANAGED_BASELINE_POLICY_ARN;
use crate::core::arn::policy_arn;
use crate::core::arn::role_arn;
use crate::core::documents::DocumentError;
use crate::core::documents::PolicyDocument;
use crate::core::identifiers::AccountId;
use crate::core::identifiers::PolicyName;
use crate::core::identifiers::RoleName;
use crate::core::spec::RoleSpec;
use crate::interfaces::IdentityClient;
use crate::interfaces::IdentityError;
use crate::interfaces::ProgressSink;
use crate::interfaces::RoleClient;
use crate::interfaces::RoleStoreError;
use crate::runtime::StepEvent;
use crate::runtime::StepOutcome;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Seconds an operator should allow for permission propagation.
///
/// Attachment is eventually consistent across the provider backend; the role
/// is not reliably assumable the instant provisioning reports success.
pub const PROPAGATION_WAIT_SECS: u64 = 10;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Role provisioning errors.
#[derive(Debug, Error)]
pub enum RoleProvisionError {
    /// A required policy document failed preconditions.
    #[error("{0}")]
    Document(DocumentError),
    /// The account identity could not be resolved.
    #[error("{0}")]
    Identity(IdentityError),
    /// The role or policy store reported a non-recoverable error.
    #[error("{0}")]
    Store(RoleStoreError),
}

// ============================================================================
// SECTION: Report
// ============================================================================

/// Outcome of a completed role provisioning run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleReport {
    /// Resolved account identifier.
    pub account: AccountId,
    /// Execution role name.
    pub role_name: RoleName,
    /// Fully-qualified role reference.
    pub role_arn: String,
    /// Custom policy name.
    pub policy_name: PolicyName,
    /// Fully-qualified custom policy reference.
    pub policy_arn: String,
    /// Whether this run created the role.
    pub role_outcome: StepOutcome,
    /// Whether this run created the custom policy.
    pub policy_outcome: StepOutcome,
    /// Seconds to allow for permission propagation before first use.
    pub propagation_wait_secs: u64,
}

// ============================================================================
// SECTION: Provisioner
// ============================================================================

/// Provisions the execution role, its trust, and its layered permissions.
pub struct RoleProvisioner<'a> {
    /// Identity resolution client.
    identity: &'a dyn IdentityClient,
    /// Role and policy store client.
    roles: &'a dyn RoleClient,
}

impl<'a> RoleProvisioner<'a> {
    /// Creates a role provisioner over the given clients.
    #[must_use]
    pub const fn new(identity: &'a dyn IdentityClient, roles: &'a dyn RoleClient) -> Self {
        Self {
            identity,
            roles,
        }
    }

    /// Runs the role provisioning procedure.
    ///
    /// # Errors
    ///
    /// Returns [`RoleProvisionError`] on document preconditions, identity
    /// resolution failure, or any non-conflict store error. Conflicts on
    /// role or policy creation are absorbed as [`StepOutcome::AlreadyPresent`].
    pub async fn run(
        &self,
        spec: &RoleSpec,
        sink: &mut dyn ProgressSink,
    ) -> Result<RoleReport, RoleProvisionError> {
        // Preconditions come first so a missing document aborts with zero
        // control-plane calls.
        let trust_document =
            PolicyDocument::load(&spec.trust_policy_path).map_err(RoleProvisionError::Document)?;
        let custom_document =
            PolicyDocument::load(&spec.custom_policy_path).map_err(RoleProvisionError::Document)?;

        let account =
            self.identity.resolve_account().await.map_err(RoleProvisionError::Identity)?;
        sink.record(&StepEvent::AccountResolved {
            account: account.clone(),
        });

        let role_outcome = self.converge_role(spec, &trust_document, sink).await?;

        self.roles
            .attach_policy(&spec.name, MANAGED_BASELINE_POLICY_ARN)
            .await
            .map_err(RoleProvisionError::Store)?;
        sink.record(&StepEvent::ManagedPolicyAttached {
            policy_arn: MANAGED_BASELINE_POLICY_ARN.to_string(),
        });

        let custom_arn = policy_arn(&account, &spec.custom_policy_name);
        let policy_outcome = self.converge_policy(spec, &custom_document, &custom_arn, sink).await?;

        self.roles
            .attach_policy(&spec.name, &custom_arn)
            .await
            .map_err(RoleProvisionError::Store)?;
        sink.record(&StepEvent::CustomPolicyAttached {
            policy_arn: custom_arn.clone(),
        });

        let role_reference = role_arn(&account, &spec.name);
        Ok(RoleReport {
            account,
            role_name: spec.name.clone(),
            role_arn: role_reference,
            policy_name: spec.custom_policy_name.clone(),
            policy_arn: custom_arn,
            role_outcome,
            policy_outcome,
            propagation_wait_secs: PROPAGATION_WAIT_SECS,
        })
    }

    /// Converges the execution role: probe, then create, absorbing conflicts.
    async fn converge_role(
        &self,
        spec: &RoleSpec,
        trust_document: &PolicyDocument,
        sink: &mut dyn ProgressSink,
    ) -> Result<StepOutcome, RoleProvisionError> {
        if self.roles.role_exists(&spec.name).await.map_err(RoleProvisionError::Store)? {
            sink.record(&StepEvent::RoleAlreadyPresent {
                name: spec.name.clone(),
            });
            return Ok(StepOutcome::AlreadyPresent);
        }
        match self.roles.create_role(&spec.name, trust_document).await {
            Ok(()) => {
                sink.record(&StepEvent::RoleCreated {
                    name: spec.name.clone(),
                });
                Ok(StepOutcome::Created)
            }
            Err(RoleStoreError::Conflict(_)) => {
                sink.record(&StepEvent::RoleAlreadyPresent {
                    name: spec.name.clone(),
                });
                Ok(StepOutcome::AlreadyPresent)
            }
            Err(err) => Err(RoleProvisionError::Store(err)),
        }
    }

    /// Converges the custom policy: probe by ARN, then create, absorbing conflicts.
    async fn converge_policy(
        &self,
        spec: &RoleSpec,
        document: &PolicyDocument,
        custom_arn: &str,
        sink: &mut dyn ProgressSink,
    ) -> Result<StepOutcome, RoleProvisionError> {
        if self.roles.policy_exists(custom_arn).await.map_err(RoleProvisionError::Store)? {
            sink.record(&StepEvent::PolicyAlreadyPresent {
                name: spec.custom_policy_name.clone(),
            });
            return Ok(StepOutcome::AlreadyPresent);
        }
        match self.roles.create_policy(&spec.custom_policy_name, document).await {
            Ok(()) => {
                sink.record(&StepEvent::PolicyCreated {
                    name: spec.custom_policy_name.clone(),
                });
                Ok(StepOutcome::Created)
            }
            Err(RoleStoreError::Conflict(_)) => {
                sink.record(&StepEvent::PolicyAlreadyPresent {
                    name: spec.custom_policy_name.clone(),
                });
                Ok(StepOutcome::AlreadyPresent)
            }
            Err(err) => Err(RoleProvisionError::Store(err)),
        }
    }
}
