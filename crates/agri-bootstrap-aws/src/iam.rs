// agri-bootstrap-aws/src/iam.rs
// ============================================================================
// Module: IAM Role Client
// Description: Role and policy store backed by the IAM control plane.
// Purpose: Probe, create, and attach roles and policies with tagged errors.
// Dependencies: agri-bootstrap-core, aws-sdk-iam
// ============================================================================

//! ## Overview
//! The IAM client classifies every SDK failure by its provider error code so
//! the role provisioner can absorb genuine "already exists" conflicts and
//! propagate everything else. Probes translate `NoSuchEntity` into a plain
//! negative answer rather than an error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use agri_bootstrap_core::PolicyDocument;
use agri_bootstrap_core::PolicyName;
use agri_bootstrap_core::RoleClient;
use agri_bootstrap_core::RoleName;
use agri_bootstrap_core::RoleStoreError;
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_iam::Client;
use aws_sdk_iam::error::ProvideErrorMetadata;

// ============================================================================
// SECTION: Client
// ============================================================================

/// IAM-backed role and policy store.
pub struct IamRoleClient {
    /// IAM client handle.
    client: Client,
}

impl IamRoleClient {
    /// Creates a role client from the shared SDK configuration.
    #[must_use]
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl RoleClient for IamRoleClient {
    async fn role_exists(&self, name: &RoleName) -> Result<bool, RoleStoreError> {
        match self.client.get_role().role_name(name.as_str()).send().await {
            Ok(_) => Ok(true),
            Err(err) => match classify(err.code(), format!("GetRole failed: {err}")) {
                RoleStoreError::NotFound(_) => Ok(false),
                other => Err(other),
            },
        }
    }

    async fn create_role(
        &self,
        name: &RoleName,
        trust_document: &PolicyDocument,
    ) -> Result<(), RoleStoreError> {
        self.client
            .create_role()
            .role_name(name.as_str())
            .assume_role_policy_document(trust_document.as_json())
            .send()
            .await
            .map_err(|err| classify(err.code(), format!("CreateRole failed: {err}")))?;
        Ok(())
    }

    async fn attach_policy(
        &self,
        name: &RoleName,
        policy_arn: &str,
    ) -> Result<(), RoleStoreError> {
        self.client
            .attach_role_policy()
            .role_name(name.as_str())
            .policy_arn(policy_arn)
            .send()
            .await
            .map_err(|err| classify(err.code(), format!("AttachRolePolicy failed: {err}")))?;
        Ok(())
    }

    async fn policy_exists(&self, policy_arn: &str) -> Result<bool, RoleStoreError> {
        match self.client.get_policy().policy_arn(policy_arn).send().await {
            Ok(_) => Ok(true),
            Err(err) => match classify(err.code(), format!("GetPolicy failed: {err}")) {
                RoleStoreError::NotFound(_) => Ok(false),
                other => Err(other),
            },
        }
    }

    async fn create_policy(
        &self,
        name: &PolicyName,
        document: &PolicyDocument,
    ) -> Result<(), RoleStoreError> {
        self.client
            .create_policy()
            .policy_name(name.as_str())
            .policy_document(document.as_json())
            .send()
            .await
            .map_err(|err| classify(err.code(), format!("CreatePolicy failed: {err}")))?;
        Ok(())
    }
}

// ============================================================================
// SECTION: Classification
// ============================================================================

/// Classifies an IAM error code into a tagged store error.
fn classify(code: Option<&str>, message: String) -> RoleStoreError {
    match code {
        Some("EntityAlreadyExists") => RoleStoreError::Conflict(message),
        Some("NoSuchEntity") => RoleStoreError::NotFound(message),
        Some("AccessDenied" | "AccessDeniedException") => RoleStoreError::Denied(message),
        _ => RoleStoreError::Api(message),
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use agri_bootstrap_core::RoleStoreError;

    use super::classify;

    #[test]
    fn conflict_code_maps_to_conflict() {
        let error = classify(Some("EntityAlreadyExists"), "exists".to_string());
        assert!(matches!(error, RoleStoreError::Conflict(_)));
    }

    #[test]
    fn missing_entity_code_maps_to_not_found() {
        let error = classify(Some("NoSuchEntity"), "missing".to_string());
        assert!(matches!(error, RoleStoreError::NotFound(_)));
    }

    #[test]
    fn denied_codes_map_to_denied() {
        let error = classify(Some("AccessDenied"), "denied".to_string());
        assert!(matches!(error, RoleStoreError::Denied(_)));
        let error = classify(Some("AccessDeniedException"), "denied".to_string());
        assert!(matches!(error, RoleStoreError::Denied(_)));
    }

    #[test]
    fn unknown_codes_map_to_api() {
        let error = classify(Some("Throttling"), "slow down".to_string());
        assert!(matches!(error, RoleStoreError::Api(_)));
        let error = classify(None, "opaque".to_string());
        assert!(matches!(error, RoleStoreError::Api(_)));
    }
}
