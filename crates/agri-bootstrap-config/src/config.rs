// agri-bootstrap-config/src/config.rs
// ============================================================================
// Module: Agri Bootstrap Configuration
// Description: Configuration loading and validation for Agri Bootstrap.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: agri-bootstrap-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Every fixed name the provisioning procedures use (role, policy, bucket,
//! rule, function, region, document paths, folder layout) lives here so a
//! deployment target is fully described by one file. Validation enforces the
//! provider naming rules up front; a name the control plane would reject
//! never reaches a network call.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use agri_bootstrap_core::BucketName;
use agri_bootstrap_core::BucketSpec;
use agri_bootstrap_core::DEFAULT_FOLDER_PREFIXES;
use agri_bootstrap_core::DEFAULT_REGION;
use agri_bootstrap_core::FunctionName;
use agri_bootstrap_core::PolicyName;
use agri_bootstrap_core::RegionCode;
use agri_bootstrap_core::RoleName;
use agri_bootstrap_core::RoleSpec;
use agri_bootstrap_core::RuleName;
use agri_bootstrap_core::ScheduleFrequency;
use agri_bootstrap_core::ScheduleSpec;
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "agri-bootstrap.toml";
/// Environment variable used to override the config path.
pub(crate) const CONFIG_ENV_VAR: &str = "AGRI_BOOTSTRAP_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum role name length accepted by the identity control plane.
pub(crate) const MAX_ROLE_NAME_LENGTH: usize = 64;
/// Maximum policy name length accepted by the identity control plane.
pub(crate) const MAX_POLICY_NAME_LENGTH: usize = 128;
/// Minimum bucket name length.
pub(crate) const MIN_BUCKET_NAME_LENGTH: usize = 3;
/// Maximum bucket name length.
pub(crate) const MAX_BUCKET_NAME_LENGTH: usize = 63;
/// Maximum scheduler rule name length.
pub(crate) const MAX_RULE_NAME_LENGTH: usize = 64;
/// Maximum compute function name length.
pub(crate) const MAX_FUNCTION_NAME_LENGTH: usize = 64;
/// Maximum number of configured folder prefixes.
pub(crate) const MAX_FOLDER_PREFIXES: usize = 64;
/// Maximum length of a single folder prefix key.
pub(crate) const MAX_PREFIX_LENGTH: usize = 512;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Agri Bootstrap configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BootstrapConfig {
    /// Provider region for the bucket, schedule target, and SDK clients.
    #[serde(default = "default_region")]
    pub region: String,
    /// Execution role configuration.
    #[serde(default)]
    pub role: RoleConfig,
    /// Storage bucket configuration.
    #[serde(default)]
    pub bucket: BucketConfig,
    /// Monitoring schedule configuration.
    #[serde(default)]
    pub schedule: ScheduleConfig,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            role: RoleConfig::default(),
            bucket: BucketConfig::default(),
            schedule: ScheduleConfig::default(),
        }
    }
}

/// Execution role configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RoleConfig {
    /// Execution role name.
    #[serde(default = "default_role_name")]
    pub name: String,
    /// Name for the customer-managed bucket policy.
    #[serde(default = "default_policy_name")]
    pub custom_policy_name: String,
    /// Path to the trust-policy document.
    #[serde(default = "default_trust_policy_path")]
    pub trust_policy_path: PathBuf,
    /// Path to the custom permission-policy document.
    #[serde(default = "default_custom_policy_path")]
    pub custom_policy_path: PathBuf,
}

impl Default for RoleConfig {
    fn default() -> Self {
        Self {
            name: default_role_name(),
            custom_policy_name: default_policy_name(),
            trust_policy_path: default_trust_policy_path(),
            custom_policy_path: default_custom_policy_path(),
        }
    }
}

/// Storage bucket configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BucketConfig {
    /// Globally-unique bucket name.
    #[serde(default = "default_bucket_name")]
    pub name: String,
    /// Folder prefixes seeded with zero-length marker objects.
    #[serde(default = "default_folder_prefixes")]
    pub folder_prefixes: Vec<String>,
}

impl Default for BucketConfig {
    fn default() -> Self {
        Self {
            name: default_bucket_name(),
            folder_prefixes: default_folder_prefixes(),
        }
    }
}

/// Monitoring schedule configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// Scheduler rule name.
    #[serde(default = "default_rule_name")]
    pub rule_name: String,
    /// Monitoring cadence.
    #[serde(default = "default_frequency")]
    pub frequency: ScheduleFrequency,
    /// Compute function the rule targets.
    #[serde(default = "default_function_name")]
    pub function_name: String,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            rule_name: default_rule_name(),
            frequency: default_frequency(),
            function_name: default_function_name(),
        }
    }
}

impl BootstrapConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// A missing file is only tolerated when no explicit path or environment
    /// override was given; in that case the built-in defaults apply.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let explicit = path.is_some() || env::var(CONFIG_ENV_VAR).is_ok();
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        if !resolved.exists() {
            if explicit {
                return Err(ConfigError::Io(format!(
                    "config file not found at {}",
                    resolved.display()
                )));
            }
            let config = Self::default();
            config.validate()?;
            return Ok(config);
        }
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_region(&self.region)?;
        self.role.validate()?;
        self.bucket.validate()?;
        self.schedule.validate()?;
        Ok(())
    }

    /// Returns the execution role specification.
    #[must_use]
    pub fn role_spec(&self) -> RoleSpec {
        RoleSpec {
            name: RoleName::new(self.role.name.clone()),
            custom_policy_name: PolicyName::new(self.role.custom_policy_name.clone()),
            trust_policy_path: self.role.trust_policy_path.clone(),
            custom_policy_path: self.role.custom_policy_path.clone(),
        }
    }

    /// Returns the storage bucket specification.
    #[must_use]
    pub fn bucket_spec(&self) -> BucketSpec {
        BucketSpec {
            name: BucketName::new(self.bucket.name.clone()),
            region: RegionCode::new(self.region.clone()),
            folder_prefixes: self.bucket.folder_prefixes.clone(),
        }
    }

    /// Returns the monitoring schedule specification.
    #[must_use]
    pub fn schedule_spec(&self) -> ScheduleSpec {
        ScheduleSpec {
            rule_name: RuleName::new(self.schedule.rule_name.clone()),
            frequency: self.schedule.frequency,
            function_name: FunctionName::new(self.schedule.function_name.clone()),
            region: RegionCode::new(self.region.clone()),
        }
    }
}

impl RoleConfig {
    /// Validates role configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        validate_iam_name("role.name", &self.name, MAX_ROLE_NAME_LENGTH)?;
        validate_iam_name(
            "role.custom_policy_name",
            &self.custom_policy_name,
            MAX_POLICY_NAME_LENGTH,
        )?;
        validate_document_path("role.trust_policy_path", &self.trust_policy_path)?;
        validate_document_path("role.custom_policy_path", &self.custom_policy_path)?;
        Ok(())
    }
}

impl BucketConfig {
    /// Validates bucket configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        validate_bucket_name(&self.name)?;
        if self.folder_prefixes.is_empty() {
            return Err(ConfigError::Invalid(
                "bucket.folder_prefixes must not be empty".to_string(),
            ));
        }
        if self.folder_prefixes.len() > MAX_FOLDER_PREFIXES {
            return Err(ConfigError::Invalid(
                "bucket.folder_prefixes exceeds entry limit".to_string(),
            ));
        }
        for prefix in &self.folder_prefixes {
            validate_folder_prefix(prefix)?;
        }
        Ok(())
    }
}

impl ScheduleConfig {
    /// Validates schedule configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        validate_rule_name(&self.rule_name)?;
        validate_function_name(&self.function_name)?;
        Ok(())
    }
}

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default provider region.
fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

/// Default execution role name.
fn default_role_name() -> String {
    "lambda-agriculture-role".to_string()
}

/// Default custom policy name.
fn default_policy_name() -> String {
    "UAE-Agriculture-S3-Policy".to_string()
}

/// Default trust-policy document path.
fn default_trust_policy_path() -> PathBuf {
    PathBuf::from("infrastructure/trust-policy.json")
}

/// Default custom-policy document path.
fn default_custom_policy_path() -> PathBuf {
    PathBuf::from("infrastructure/s3-policy.json")
}

/// Default bucket name.
fn default_bucket_name() -> String {
    "uae-agri-monitoring".to_string()
}

/// Default folder-prefix layout.
fn default_folder_prefixes() -> Vec<String> {
    DEFAULT_FOLDER_PREFIXES.iter().map(ToString::to_string).collect()
}

/// Default scheduler rule name.
fn default_rule_name() -> String {
    "uae-agriculture-monitoring".to_string()
}

/// Default monitoring cadence.
const fn default_frequency() -> ScheduleFrequency {
    ScheduleFrequency::Weekly
}

/// Default compute function name.
fn default_function_name() -> String {
    "uae-satellite-processor".to_string()
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from CLI or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against security limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a policy document path against length constraints.
fn validate_document_path(field: &str, value: &Path) -> Result<(), ConfigError> {
    let text = value.to_string_lossy();
    if text.trim().is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    for component in value.components() {
        let component_value = component.as_os_str().to_string_lossy();
        if component_value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid(format!("{field} path component too long")));
        }
    }
    Ok(())
}

/// Validates a region code such as `us-east-1`.
fn validate_region(value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Invalid("region must be non-empty".to_string()));
    }
    let valid = value
        .chars()
        .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-');
    if !valid {
        return Err(ConfigError::Invalid(format!("region {value} has invalid characters")));
    }
    Ok(())
}

/// Validates a role or policy name against identity naming rules.
fn validate_iam_name(field: &str, value: &str, max_length: usize) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if value.len() > max_length {
        return Err(ConfigError::Invalid(format!("{field} exceeds {max_length} characters")));
    }
    let valid = value
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '+' | '=' | ',' | '.' | '@' | '_' | '-'));
    if !valid {
        return Err(ConfigError::Invalid(format!("{field} has invalid characters")));
    }
    Ok(())
}

/// Validates a bucket name against global bucket naming rules.
fn validate_bucket_name(value: &str) -> Result<(), ConfigError> {
    if value.len() < MIN_BUCKET_NAME_LENGTH || value.len() > MAX_BUCKET_NAME_LENGTH {
        return Err(ConfigError::Invalid(format!(
            "bucket.name must be {MIN_BUCKET_NAME_LENGTH}-{MAX_BUCKET_NAME_LENGTH} characters"
        )));
    }
    let valid = value
        .chars()
        .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' || ch == '.');
    if !valid {
        return Err(ConfigError::Invalid("bucket.name has invalid characters".to_string()));
    }
    let starts_ok = value.chars().next().is_some_and(|ch| ch.is_ascii_alphanumeric());
    let ends_ok = value.chars().next_back().is_some_and(|ch| ch.is_ascii_alphanumeric());
    if !starts_ok || !ends_ok {
        return Err(ConfigError::Invalid(
            "bucket.name must start and end with a letter or digit".to_string(),
        ));
    }
    Ok(())
}

/// Validates a folder prefix key.
fn validate_folder_prefix(value: &str) -> Result<(), ConfigError> {
    if value.len() > MAX_PREFIX_LENGTH {
        return Err(ConfigError::Invalid(format!("folder prefix {value} exceeds max length")));
    }
    if !value.ends_with('/') {
        return Err(ConfigError::Invalid(format!("folder prefix {value} must end with '/'")));
    }
    if value.starts_with('/') || value.contains('\\') {
        return Err(ConfigError::Invalid(format!("folder prefix {value} is not a relative key")));
    }
    for segment in value.trim_end_matches('/').split('/') {
        if segment.is_empty() || segment == "." || segment == ".." {
            return Err(ConfigError::Invalid(format!(
                "folder prefix {value} has an invalid segment"
            )));
        }
    }
    Ok(())
}

/// Validates a scheduler rule name.
fn validate_rule_name(value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Invalid("schedule.rule_name must be non-empty".to_string()));
    }
    if value.len() > MAX_RULE_NAME_LENGTH {
        return Err(ConfigError::Invalid(format!(
            "schedule.rule_name exceeds {MAX_RULE_NAME_LENGTH} characters"
        )));
    }
    let valid = value
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '.' | '_' | '-'));
    if !valid {
        return Err(ConfigError::Invalid(
            "schedule.rule_name has invalid characters".to_string(),
        ));
    }
    Ok(())
}

/// Validates a compute function name.
fn validate_function_name(value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Invalid(
            "schedule.function_name must be non-empty".to_string(),
        ));
    }
    if value.len() > MAX_FUNCTION_NAME_LENGTH {
        return Err(ConfigError::Invalid(format!(
            "schedule.function_name exceeds {MAX_FUNCTION_NAME_LENGTH} characters"
        )));
    }
    let valid = value
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');
    if !valid {
        return Err(ConfigError::Invalid(
            "schedule.function_name has invalid characters".to_string(),
        ));
    }
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================
