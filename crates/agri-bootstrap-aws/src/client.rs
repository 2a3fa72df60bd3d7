// agri-bootstrap-aws/src/client.rs
// ============================================================================
// Module: SDK Configuration Loader
// Description: Shared AWS SDK configuration for all provisioning clients.
// Purpose: Resolve region, endpoint, and credentials once per invocation.
// Dependencies: aws-config
// ============================================================================

//! ## Overview
//! SDK configuration is loaded once from the environment and the bootstrap
//! settings, then shared by every client. A custom endpoint supports
//! S3-compatible stores in system tests; production runs leave it unset.

// ============================================================================
// SECTION: Imports
// ============================================================================

use aws_config::BehaviorVersion;
use aws_config::Region;
use aws_config::SdkConfig;

// ============================================================================
// SECTION: Settings
// ============================================================================

/// Connection settings shared by the provisioning clients.
#[derive(Debug, Clone)]
pub struct AwsSettings {
    /// Provider region.
    pub region: String,
    /// Custom endpoint URL (for S3-compatible stores).
    pub endpoint: Option<String>,
    /// Force path-style addressing (for S3-compatible stores).
    pub force_path_style: bool,
}

impl AwsSettings {
    /// Creates settings for a plain regional deployment.
    #[must_use]
    pub fn for_region(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            endpoint: None,
            force_path_style: false,
        }
    }
}

// ============================================================================
// SECTION: Loader
// ============================================================================

/// Loads the shared SDK configuration from the environment and `settings`.
pub async fn load_sdk_config(settings: &AwsSettings) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(settings.region.clone()));
    if let Some(endpoint) = &settings.endpoint {
        loader = loader.endpoint_url(endpoint);
    }
    loader.load().await
}
