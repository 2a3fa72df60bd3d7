// system-tests/tests/helpers/infra.rs
// ============================================================================
// Module: System Test Infrastructure
// Description: S3 fixtures for object-store system tests.
// Purpose: Provide isolated object storage for bucket provisioning checks.
// Dependencies: testcontainers, aws-sdk-s3
// ============================================================================

//! ## Overview
//! Starts a disposable MinIO container and exposes an SDK configuration
//! pointing at it. Tests skip gracefully when docker is unavailable.

use aws_config::BehaviorVersion;
use aws_config::Region;
use aws_config::SdkConfig;
use testcontainers::ContainerAsync;
use testcontainers::GenericImage;
use testcontainers::ImageExt;
use testcontainers::core::IntoContainerPort;
use testcontainers::runners::AsyncRunner;

/// Disposable S3-compatible storage fixture.
pub struct S3Fixture {
    /// Endpoint URL of the running container.
    pub endpoint: String,
    /// Region advertised by the fixture.
    pub region: String,
    /// Access key for the fixture.
    pub access_key: String,
    /// Secret key for the fixture.
    pub secret_key: String,
    /// Container handle kept alive for the fixture's lifetime.
    _container: ContainerAsync<GenericImage>,
}

impl S3Fixture {
    /// Starts a MinIO container and waits for it to accept requests.
    pub async fn start() -> Result<Self, String> {
        ensure_docker_available()?;
        let access_key = "minioadmin".to_string();
        let secret_key = "minioadmin".to_string();
        let region = "us-east-1".to_string();
        let args = vec![
            "server".to_string(),
            "/data".to_string(),
            "--console-address".to_string(),
            ":9001".to_string(),
        ];
        let container = GenericImage::new("minio/minio", "latest")
            .with_exposed_port(9000.tcp())
            .with_entrypoint("/usr/bin/minio")
            .with_env_var("MINIO_ROOT_USER", access_key.clone())
            .with_env_var("MINIO_ROOT_PASSWORD", secret_key.clone())
            .with_env_var("MINIO_REGION", region.clone())
            .with_cmd(args)
            .start()
            .await
            .map_err(|err| format!("failed to start minio container: {err}"))?;
        let port = container
            .get_host_port_ipv4(9000.tcp())
            .await
            .map_err(|err| format!("failed to resolve minio port: {err}"))?;
        let endpoint = format!("http://127.0.0.1:{port}");
        let fixture = Self {
            endpoint,
            region,
            access_key,
            secret_key,
            _container: container,
        };
        fixture.wait_until_ready().await?;
        Ok(fixture)
    }

    /// Builds an SDK configuration pointing at the fixture.
    pub async fn sdk_config(&self) -> SdkConfig {
        aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(self.region.clone()))
            .endpoint_url(self.endpoint.clone())
            .credentials_provider(aws_sdk_s3::config::Credentials::new(
                self.access_key.clone(),
                self.secret_key.clone(),
                None,
                None,
                "system-tests",
            ))
            .load()
            .await
    }

    /// Polls the fixture until the object store answers.
    async fn wait_until_ready(&self) -> Result<(), String> {
        let config = self.sdk_config().await;
        let builder = aws_sdk_s3::config::Builder::from(&config).force_path_style(true);
        let client = aws_sdk_s3::Client::from_conf(builder.build());
        for _ in 0 .. 30 {
            if client.list_buckets().send().await.is_ok() {
                return Ok(());
            }
            tokio::time::sleep(std::time::Duration::from_millis(500)).await;
        }
        Err("minio did not become ready".to_string())
    }
}

/// Returns an error when no usable docker daemon is present.
fn ensure_docker_available() -> Result<(), String> {
    let output = std::process::Command::new("docker")
        .arg("info")
        .output()
        .map_err(|err| format!("docker info failed: {err}"))?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("docker info failed: {stderr}"));
    }
    Ok(())
}
