// agri-bootstrap-aws/src/lib.rs
// ============================================================================
// Module: Agri Bootstrap AWS Library
// Description: AWS SDK implementations of the provisioning interfaces.
// Purpose: Bind the provider control plane behind the core trait seams.
// Dependencies: crate::{client, identity, iam, s3, schedule}
// ============================================================================

//! ## Overview
//! This crate implements the core provisioning interfaces against the AWS
//! control plane: STS for identity, IAM for roles and policies, S3 for the
//! bucket, and EventBridge for the monitoring schedule. Every SDK failure is
//! classified into the tagged error kinds the provisioner runtimes act on.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod client;
pub mod identity;
pub mod iam;
pub mod s3;
pub mod schedule;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use client::AwsSettings;
pub use client::load_sdk_config;
pub use identity::StsIdentityClient;
pub use iam::IamRoleClient;
pub use s3::S3BucketClient;
pub use schedule::EventBridgeScheduleClient;
