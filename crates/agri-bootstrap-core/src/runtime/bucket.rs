// agri-bootstrap-core/src/runtime/bucket.rs
// ============================================================================
// Module: Bucket Provisioner
// Description: Idempotent provisioning of the pipeline storage bucket.
// Purpose: Ensure the bucket exists and carries the fixed folder layout.
// Dependencies: crate::{core, interfaces}, serde, thiserror
// ============================================================================

//! ## Overview
//! The bucket provisioner probes for the bucket by name, creates it in the
//! configured region when absent, then unconditionally seeds the folder
//! prefixes with zero-length markers. Seeding is a harmless overwrite on
//! re-runs. A bucket name held by another account is a hard failure since
//! bucket names are global and convergence is impossible.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::identifiers::BucketName;
use crate::core::identifiers::RegionCode;
use crate::core::spec::BucketSpec;
use crate::interfaces::BucketClient;
use crate::interfaces::BucketStoreError;
use crate::interfaces::ProgressSink;
use crate::runtime::StepEvent;
use crate::runtime::StepOutcome;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Bucket provisioning errors.
#[derive(Debug, Error)]
pub enum BucketProvisionError {
    /// The bucket store reported a non-recoverable error.
    #[error("{0}")]
    Store(BucketStoreError),
}

// ============================================================================
// SECTION: Report
// ============================================================================

/// Outcome of a completed bucket provisioning run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketReport {
    /// Bucket name.
    pub name: BucketName,
    /// Bucket region.
    pub region: RegionCode,
    /// Whether this run created the bucket.
    pub outcome: StepOutcome,
    /// Folder prefixes seeded during this run, in seeding order.
    pub seeded_prefixes: Vec<String>,
}

// ============================================================================
// SECTION: Provisioner
// ============================================================================

/// Provisions the storage bucket and its folder layout.
pub struct BucketProvisioner<'a> {
    /// Bucket store client.
    buckets: &'a dyn BucketClient,
}

impl<'a> BucketProvisioner<'a> {
    /// Creates a bucket provisioner over the given client.
    #[must_use]
    pub const fn new(buckets: &'a dyn BucketClient) -> Self {
        Self {
            buckets,
        }
    }

    /// Runs the bucket provisioning procedure.
    ///
    /// # Errors
    ///
    /// Returns [`BucketProvisionError`] when the existence probe, creation,
    /// or any marker write fails. A creation conflict against a bucket this
    /// account already owns is absorbed as [`StepOutcome::AlreadyPresent`].
    pub async fn run(
        &self,
        spec: &BucketSpec,
        sink: &mut dyn ProgressSink,
    ) -> Result<BucketReport, BucketProvisionError> {
        let outcome = self.converge_bucket(spec, sink).await?;

        let mut seeded_prefixes = Vec::with_capacity(spec.folder_prefixes.len());
        for key in &spec.folder_prefixes {
            self.buckets
                .put_marker(&spec.name, key)
                .await
                .map_err(BucketProvisionError::Store)?;
            sink.record(&StepEvent::PrefixSeeded {
                key: key.clone(),
            });
            seeded_prefixes.push(key.clone());
        }

        Ok(BucketReport {
            name: spec.name.clone(),
            region: spec.region.clone(),
            outcome,
            seeded_prefixes,
        })
    }

    /// Converges the bucket: probe, then create, absorbing owned-conflicts.
    async fn converge_bucket(
        &self,
        spec: &BucketSpec,
        sink: &mut dyn ProgressSink,
    ) -> Result<StepOutcome, BucketProvisionError> {
        if self.buckets.bucket_exists(&spec.name).await.map_err(BucketProvisionError::Store)? {
            sink.record(&StepEvent::BucketAlreadyPresent {
                name: spec.name.clone(),
            });
            return Ok(StepOutcome::AlreadyPresent);
        }
        match self.buckets.create_bucket(&spec.name, &spec.region).await {
            Ok(()) => {
                sink.record(&StepEvent::BucketCreated {
                    name: spec.name.clone(),
                    region: spec.region.clone(),
                });
                Ok(StepOutcome::Created)
            }
            Err(BucketStoreError::Conflict(_)) => {
                sink.record(&StepEvent::BucketAlreadyPresent {
                    name: spec.name.clone(),
                });
                Ok(StepOutcome::AlreadyPresent)
            }
            Err(err) => Err(BucketProvisionError::Store(err)),
        }
    }
}
