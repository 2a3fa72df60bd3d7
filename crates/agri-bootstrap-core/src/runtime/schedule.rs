// agri-bootstrap-core/src/runtime/schedule.rs
// ============================================================================
// Module: Schedule Provisioner
// Description: Idempotent provisioning of the automated monitoring schedule.
// Purpose: Ensure a scheduler rule targets the pipeline compute function.
// Dependencies: crate::{core, interfaces}, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The schedule provisioner resolves the account identity, upserts the
//! scheduler rule at the configured cadence, and wires the pipeline function
//! as its target with a JSON trigger payload. Both control-plane operations
//! are provider-side upserts, so re-runs converge without probes.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::core::arn::function_arn;
use crate::core::identifiers::RuleName;
use crate::core::spec::ScheduleFrequency;
use crate::core::spec::ScheduleSpec;
use crate::interfaces::IdentityClient;
use crate::interfaces::IdentityError;
use crate::interfaces::ProgressSink;
use crate::interfaces::ScheduleClient;
use crate::interfaces::ScheduleStoreError;
use crate::runtime::StepEvent;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Schedule provisioning errors.
#[derive(Debug, Error)]
pub enum ScheduleProvisionError {
    /// The account identity could not be resolved.
    #[error("{0}")]
    Identity(IdentityError),
    /// The schedule store reported a non-recoverable error.
    #[error("{0}")]
    Store(ScheduleStoreError),
}

// ============================================================================
// SECTION: Report
// ============================================================================

/// Outcome of a completed schedule provisioning run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleReport {
    /// Scheduler rule name.
    pub rule_name: RuleName,
    /// Monitoring cadence.
    pub frequency: ScheduleFrequency,
    /// Schedule expression applied to the rule.
    pub schedule_expression: String,
    /// Composed target function reference.
    pub target_arn: String,
}

// ============================================================================
// SECTION: Provisioner
// ============================================================================

/// Provisions the automated monitoring schedule.
pub struct ScheduleProvisioner<'a> {
    /// Identity resolution client.
    identity: &'a dyn IdentityClient,
    /// Schedule store client.
    schedules: &'a dyn ScheduleClient,
}

impl<'a> ScheduleProvisioner<'a> {
    /// Creates a schedule provisioner over the given clients.
    #[must_use]
    pub const fn new(identity: &'a dyn IdentityClient, schedules: &'a dyn ScheduleClient) -> Self {
        Self {
            identity,
            schedules,
        }
    }

    /// Runs the schedule provisioning procedure.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleProvisionError`] on identity resolution failure or
    /// when either upsert fails.
    pub async fn run(
        &self,
        spec: &ScheduleSpec,
        sink: &mut dyn ProgressSink,
    ) -> Result<ScheduleReport, ScheduleProvisionError> {
        let account =
            self.identity.resolve_account().await.map_err(ScheduleProvisionError::Identity)?;
        sink.record(&StepEvent::AccountResolved {
            account: account.clone(),
        });

        let expression = spec.frequency.rate_expression();
        let description =
            format!("Automated agriculture monitoring - {}", spec.frequency.as_str());
        self.schedules
            .put_rule(&spec.rule_name, expression, &description)
            .await
            .map_err(ScheduleProvisionError::Store)?;
        sink.record(&StepEvent::RuleUpserted {
            name: spec.rule_name.clone(),
            expression: expression.to_string(),
        });

        let target_arn = function_arn(&spec.region, &account, &spec.function_name);
        let input = trigger_input(spec.frequency);
        self.schedules
            .put_target(&spec.rule_name, &target_arn, &input)
            .await
            .map_err(ScheduleProvisionError::Store)?;
        sink.record(&StepEvent::TargetUpserted {
            target_arn: target_arn.clone(),
        });

        Ok(ScheduleReport {
            rule_name: spec.rule_name.clone(),
            frequency: spec.frequency,
            schedule_expression: expression.to_string(),
            target_arn,
        })
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Builds the JSON trigger payload delivered to the target function.
fn trigger_input(frequency: ScheduleFrequency) -> String {
    json!({
        "trigger_type": "scheduled",
        "monitoring_frequency": frequency.as_str(),
    })
    .to_string()
}

// ============================================================================
// SECTION: Tests
// ============================================================================
