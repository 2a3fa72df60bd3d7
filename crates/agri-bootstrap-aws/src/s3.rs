// agri-bootstrap-aws/src/s3.rs
// ============================================================================
// Module: S3 Bucket Client
// Description: Bucket store backed by the S3 control plane.
// Purpose: Probe, create, and seed the pipeline bucket with tagged errors.
// Dependencies: agri-bootstrap-core, aws-sdk-s3
// ============================================================================

//! ## Overview
//! The bucket client probes with `HeadBucket`, creates with a location
//! constraint for every region except the provider default, and seeds folder
//! prefixes as zero-length objects. Creation failures distinguish a bucket
//! this account already owns (absorbable) from a name held by another account
//! (fatal, since bucket names are global).

// ============================================================================
// SECTION: Imports
// ============================================================================

use agri_bootstrap_core::BucketClient;
use agri_bootstrap_core::BucketName;
use agri_bootstrap_core::BucketStoreError;
use agri_bootstrap_core::DEFAULT_REGION;
use agri_bootstrap_core::RegionCode;
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::Client;
use aws_sdk_s3::error::ProvideErrorMetadata;
use aws_sdk_s3::operation::create_bucket::CreateBucketError;
use aws_sdk_s3::operation::head_bucket::HeadBucketError;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::BucketLocationConstraint;
use aws_sdk_s3::types::CreateBucketConfiguration;

// ============================================================================
// SECTION: Client
// ============================================================================

/// S3-backed bucket store.
pub struct S3BucketClient {
    /// S3 client handle.
    client: Client,
}

impl S3BucketClient {
    /// Creates a bucket client from the shared SDK configuration.
    ///
    /// `force_path_style` supports S3-compatible stores in system tests.
    #[must_use]
    pub fn new(config: &SdkConfig, force_path_style: bool) -> Self {
        let mut builder = aws_sdk_s3::config::Builder::from(config);
        if force_path_style {
            builder = builder.force_path_style(true);
        }
        Self {
            client: Client::from_conf(builder.build()),
        }
    }
}

#[async_trait]
impl BucketClient for S3BucketClient {
    async fn bucket_exists(&self, name: &BucketName) -> Result<bool, BucketStoreError> {
        match self.client.head_bucket().bucket(name.as_str()).send().await {
            Ok(_) => Ok(true),
            Err(err) => {
                if err.as_service_error().is_some_and(HeadBucketError::is_not_found) {
                    Ok(false)
                } else {
                    Err(classify(err.code(), format!("HeadBucket failed: {err}")))
                }
            }
        }
    }

    async fn create_bucket(
        &self,
        name: &BucketName,
        region: &RegionCode,
    ) -> Result<(), BucketStoreError> {
        let mut request = self.client.create_bucket().bucket(name.as_str());
        // The provider default region rejects an explicit location constraint.
        if region.as_str() != DEFAULT_REGION {
            let constraint = CreateBucketConfiguration::builder()
                .location_constraint(BucketLocationConstraint::from(region.as_str()))
                .build();
            request = request.create_bucket_configuration(constraint);
        }
        match request.send().await {
            Ok(_) => Ok(()),
            Err(err) => {
                let service = err.as_service_error();
                if service.is_some_and(CreateBucketError::is_bucket_already_owned_by_you) {
                    return Err(BucketStoreError::Conflict(format!(
                        "bucket {name} already owned by this account"
                    )));
                }
                if service.is_some_and(CreateBucketError::is_bucket_already_exists) {
                    return Err(BucketStoreError::NameTaken(format!(
                        "bucket {name} is owned by another account"
                    )));
                }
                Err(classify(err.code(), format!("CreateBucket failed: {err}")))
            }
        }
    }

    async fn put_marker(&self, bucket: &BucketName, key: &str) -> Result<(), BucketStoreError> {
        self.client
            .put_object()
            .bucket(bucket.as_str())
            .key(key)
            .body(ByteStream::from_static(&[]))
            .send()
            .await
            .map_err(|err| classify(err.code(), format!("PutObject {key} failed: {err}")))?;
        Ok(())
    }
}

// ============================================================================
// SECTION: Classification
// ============================================================================

/// Classifies an S3 error code into a tagged store error.
fn classify(code: Option<&str>, message: String) -> BucketStoreError {
    match code {
        Some("BucketAlreadyOwnedByYou") => BucketStoreError::Conflict(message),
        Some("BucketAlreadyExists") => BucketStoreError::NameTaken(message),
        Some("AccessDenied") => BucketStoreError::Denied(message),
        _ => BucketStoreError::Api(message),
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use agri_bootstrap_core::BucketStoreError;

    use super::classify;

    #[test]
    fn owned_conflict_maps_to_conflict() {
        let error = classify(Some("BucketAlreadyOwnedByYou"), "owned".to_string());
        assert!(matches!(error, BucketStoreError::Conflict(_)));
    }

    #[test]
    fn foreign_owner_maps_to_name_taken() {
        let error = classify(Some("BucketAlreadyExists"), "taken".to_string());
        assert!(matches!(error, BucketStoreError::NameTaken(_)));
    }

    #[test]
    fn denied_and_unknown_codes_map_to_denied_and_api() {
        let error = classify(Some("AccessDenied"), "denied".to_string());
        assert!(matches!(error, BucketStoreError::Denied(_)));
        let error = classify(None, "opaque".to_string());
        assert!(matches!(error, BucketStoreError::Api(_)));
    }
}
