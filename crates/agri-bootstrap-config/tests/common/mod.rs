// agri-bootstrap-config/tests/common/mod.rs
// ============================================================================
// Module: Config Test Helpers
// Description: Shared fixtures for configuration test suites.
// ============================================================================

use std::io::Write;
use std::path::PathBuf;

use agri_bootstrap_config::BootstrapConfig;

/// Returns a fully-defaulted configuration.
#[allow(
    dead_code,
    reason = "shared test helper compiled into every test binary; not all binaries use it"
)]
pub fn minimal_config() -> BootstrapConfig {
    BootstrapConfig::default()
}

/// Writes `content` as a TOML config file inside a fresh temp dir.
#[allow(
    dead_code,
    reason = "shared test helper compiled into every test binary; not all binaries use it"
)]
pub fn write_config(content: &str) -> Result<(tempfile::TempDir, PathBuf), String> {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("agri-bootstrap.toml");
    let mut file = std::fs::File::create(&path).map_err(|err| err.to_string())?;
    file.write_all(content.as_bytes()).map_err(|err| err.to_string())?;
    Ok((dir, path))
}
