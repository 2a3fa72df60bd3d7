// agri-bootstrap-aws/src/schedule.rs
// ============================================================================
// Module: EventBridge Schedule Client
// Description: Schedule store backed by the EventBridge control plane.
// Purpose: Upsert the monitoring rule and its compute-function target.
// Dependencies: agri-bootstrap-core, aws-sdk-eventbridge
// ============================================================================

//! ## Overview
//! `PutRule` and `PutTargets` are provider-side upserts, which is what makes
//! the schedule provisioner converge without probes. The target carries a
//! fixed identifier so re-runs replace the entry instead of accumulating.

// ============================================================================
// SECTION: Imports
// ============================================================================

use agri_bootstrap_core::RuleName;
use agri_bootstrap_core::ScheduleClient;
use agri_bootstrap_core::ScheduleStoreError;
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_eventbridge::Client;
use aws_sdk_eventbridge::error::ProvideErrorMetadata;
use aws_sdk_eventbridge::types::RuleState;
use aws_sdk_eventbridge::types::Target;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Fixed identifier for the single rule target.
const TARGET_ID: &str = "1";

// ============================================================================
// SECTION: Client
// ============================================================================

/// EventBridge-backed schedule store.
pub struct EventBridgeScheduleClient {
    /// EventBridge client handle.
    client: Client,
}

impl EventBridgeScheduleClient {
    /// Creates a schedule client from the shared SDK configuration.
    #[must_use]
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl ScheduleClient for EventBridgeScheduleClient {
    async fn put_rule(
        &self,
        name: &RuleName,
        schedule_expression: &str,
        description: &str,
    ) -> Result<(), ScheduleStoreError> {
        self.client
            .put_rule()
            .name(name.as_str())
            .schedule_expression(schedule_expression)
            .description(description)
            .state(RuleState::Enabled)
            .send()
            .await
            .map_err(|err| classify(err.code(), format!("PutRule failed: {err}")))?;
        Ok(())
    }

    async fn put_target(
        &self,
        rule: &RuleName,
        target_arn: &str,
        input: &str,
    ) -> Result<(), ScheduleStoreError> {
        let target = Target::builder()
            .id(TARGET_ID)
            .arn(target_arn)
            .input(input)
            .build()
            .map_err(|err| ScheduleStoreError::Api(format!("invalid rule target: {err}")))?;
        self.client
            .put_targets()
            .rule(rule.as_str())
            .targets(target)
            .send()
            .await
            .map_err(|err| classify(err.code(), format!("PutTargets failed: {err}")))?;
        Ok(())
    }
}

// ============================================================================
// SECTION: Classification
// ============================================================================

/// Classifies an EventBridge error code into a tagged store error.
fn classify(code: Option<&str>, message: String) -> ScheduleStoreError {
    match code {
        Some("AccessDeniedException" | "AccessDenied") => ScheduleStoreError::Denied(message),
        _ => ScheduleStoreError::Api(message),
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
