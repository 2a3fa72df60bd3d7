// agri-bootstrap-core/src/core/identifiers.rs
// ============================================================================
// Module: Agri Bootstrap Identifiers
// Description: Canonical opaque identifiers for provisioned cloud resources.
// Purpose: Provide strongly typed, serializable names with stable string forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! This module defines the canonical string-based identifiers used throughout
//! Agri Bootstrap. Identifiers are opaque and serialize as strings. Naming
//! rules are enforced at the configuration boundary rather than within these
//! simple wrappers.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Macro
// ============================================================================

/// Declares an opaque string identifier with the shared accessor surface.
macro_rules! string_identifier {
    ($(#[$docs:meta])* $name:ident) => {
        $(#[$docs])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier from any string-like value.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::new(value)
            }
        }
    };
}

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

string_identifier! {
    /// Cloud account identifier resolved from the active credentials.
    AccountId
}

string_identifier! {
    /// Execution role name, unique per account.
    RoleName
}

string_identifier! {
    /// Permission policy name, unique per account.
    PolicyName
}

string_identifier! {
    /// Storage bucket name, globally unique.
    BucketName
}

string_identifier! {
    /// Scheduler rule name, unique per account and region.
    RuleName
}

string_identifier! {
    /// Compute function name targeted by the monitoring schedule.
    FunctionName
}

string_identifier! {
    /// Provider region code (e.g. `us-east-1`).
    RegionCode
}
