// agri-bootstrap-aws/src/identity.rs
// ============================================================================
// Module: STS Identity Client
// Description: Account identity resolution via STS GetCallerIdentity.
// Purpose: Resolve the account identifier behind the active credentials.
// Dependencies: agri-bootstrap-core, aws-sdk-sts
// ============================================================================

//! ## Overview
//! The identity client wraps a single STS call. Provisioning composes every
//! fully-qualified reference from the resolved account, so resolution failure
//! aborts a procedure before any mutating call.

// ============================================================================
// SECTION: Imports
// ============================================================================

use agri_bootstrap_core::AccountId;
use agri_bootstrap_core::IdentityClient;
use agri_bootstrap_core::IdentityError;
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_sts::Client;

// ============================================================================
// SECTION: Client
// ============================================================================

/// STS-backed identity client.
pub struct StsIdentityClient {
    /// STS client handle.
    client: Client,
}

impl StsIdentityClient {
    /// Creates an identity client from the shared SDK configuration.
    #[must_use]
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl IdentityClient for StsIdentityClient {
    async fn resolve_account(&self) -> Result<AccountId, IdentityError> {
        let output = self
            .client
            .get_caller_identity()
            .send()
            .await
            .map_err(|err| IdentityError::Api(format!("GetCallerIdentity failed: {err}")))?;
        let account = output
            .account()
            .ok_or_else(|| {
                IdentityError::Credentials("GetCallerIdentity returned no account".to_string())
            })?;
        Ok(AccountId::new(account))
    }
}
