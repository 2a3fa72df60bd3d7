// agri-bootstrap-cli/src/i18n.rs
// ============================================================================
// Module: CLI Internationalization Helpers
// Description: Provides message catalog and translation utilities for the CLI.
// Purpose: Centralize user-facing strings for future localization support.
// Dependencies: Standard library collections and formatting utilities.
// ============================================================================

//! ## Overview
//! The Agri Bootstrap CLI stores user-facing strings in a small translation
//! catalog to enforce consistent messaging and to prepare for future locales.
//! All runtime output should be routed through the [`t!`](crate::t) macro.
//!
//! ## Invariants
//! - The catalog is initialized once and read-only thereafter.
//! - Missing keys fall back to the key itself to avoid panics.
//! - Placeholder substitutions preserve deterministic order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// SECTION: Types
// ============================================================================

/// A formatted message argument captured by the [`macro@crate::t`] macro.
#[derive(Clone)]
pub struct MessageArg {
    /// The placeholder name used in message templates (e.g., `"role"`).
    pub key: &'static str,
    /// The formatted string value to substitute for this placeholder.
    pub value: String,
}

impl MessageArg {
    /// Constructs a new [`MessageArg`] from a key and displayable value.
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Static catalog entries loaded into the localized message bundle.
const CATALOG_ITEMS: &[(&str, &str)] = &[
    ("main.version", "agri-bootstrap {version}"),
    ("output.stream.stdout", "stdout"),
    ("output.stream.stderr", "stderr"),
    ("output.stream.unknown", "output"),
    ("output.write_failed", "Failed to write to {stream}: {error}"),
    ("config.load_failed", "Failed to load config: {error}"),
    ("config.validate.ok", "Config valid."),
    ("summary.serialize_failed", "Failed to serialize summary: {error}"),
    ("role.start", "🔐 Provisioning execution role {role}..."),
    ("role.identity", "🆔 Account identity: {account}"),
    ("role.created", "✅ Created role {role}"),
    (
        "role.exists",
        "⚠️  Role {role} already exists; existing trust document left untouched",
    ),
    ("role.managed_attached", "🔗 Attached managed policy {arn}"),
    ("role.policy_created", "✅ Created policy {policy}"),
    (
        "role.policy_exists",
        "⚠️  Policy {policy} already exists; existing document left untouched",
    ),
    ("role.policy_attached", "🔗 Attached custom policy {arn}"),
    ("role.done", "✅ Role ready: {arn}"),
    (
        "role.propagation",
        "⏳ Allow {seconds}s for permission propagation before first use",
    ),
    ("role.failed", "Role provisioning failed: {error}"),
    ("bucket.start", "🪣 Provisioning bucket {bucket} in {region}..."),
    ("bucket.created", "✅ Created bucket {bucket} in {region}"),
    ("bucket.exists", "✅ Bucket {bucket} already exists"),
    ("bucket.prefix", "📁 Seeded {key}"),
    ("bucket.done", "✅ Bucket {bucket} ready in {region}"),
    ("bucket.failed", "Bucket provisioning failed: {error}"),
    ("schedule.start", "⏰ Provisioning {frequency} monitoring schedule..."),
    ("schedule.rule", "📅 Rule {rule} set to {expression}"),
    ("schedule.target", "🎯 Target wired: {arn}"),
    ("schedule.done", "✅ Schedule {rule} ready"),
    ("schedule.failed", "Schedule provisioning failed: {error}"),
    ("up.start", "🚀 Provisioning agriculture monitoring groundwork..."),
    ("up.done", "✅ All resources provisioned"),
];

// ============================================================================
// SECTION: Translation
// ============================================================================

/// Translates `key` using the English fallback catalog while substituting `args`.
#[must_use]
pub fn translate(key: &str, args: Vec<MessageArg>) -> String {
    let template = catalog().get(key).copied().unwrap_or(key);
    if args.is_empty() {
        return template.to_string();
    }

    let mut result = template.to_string();
    for arg in args {
        let placeholder = format!("{{{}}}", arg.key);
        result = result.replace(&placeholder, &arg.value);
    }
    result
}

/// Returns the static English catalog used by the CLI.
fn catalog() -> &'static HashMap<&'static str, &'static str> {
    static CATALOG: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

    CATALOG.get_or_init(|| CATALOG_ITEMS.iter().copied().collect())
}

// ============================================================================
// SECTION: Macro
// ============================================================================

/// Formats a localized message from a key and named arguments.
///
/// # Arguments
///
/// - `$key` must match a catalog entry.
/// - Named arguments are substituted into `{placeholder}` positions.
///
/// # Returns
///
/// A localized [`String`] with placeholders substituted.
#[macro_export]
macro_rules! t {
    ($key:literal $(, $name:ident = $value:expr )* $(,)?) => {{
        let args = ::std::vec![
            $(
                $crate::i18n::MessageArg::new(stringify!($name), $value.to_string()),
            )*
        ];
        $crate::i18n::translate($key, args)
    }};
}

// ============================================================================
// SECTION: Tests
// ============================================================================
