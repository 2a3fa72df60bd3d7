// agri-bootstrap-core/src/core/documents.rs
// ============================================================================
// Module: Policy Documents
// Description: Fail-closed loading of trust and permission policy documents.
// Purpose: Validate document preconditions before any control-plane call.
// Dependencies: serde_json, thiserror
// ============================================================================

//! ## Overview
//! Trust and permission documents are read from configured paths with strict
//! limits. A missing, oversized, or non-JSON document aborts provisioning
//! before the first network call, with a message naming the offending path.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum accepted policy document size in bytes.
pub(crate) const MAX_DOCUMENT_BYTES: usize = 128 * 1024;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Policy document precondition errors.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The document does not exist at the configured path.
    #[error("policy document not found at {0}")]
    Missing(PathBuf),
    /// The document could not be read.
    #[error("failed to read policy document at {path}: {reason}")]
    Io {
        /// Configured document path.
        path: PathBuf,
        /// Underlying I/O error text.
        reason: String,
    },
    /// The document exceeds the accepted size limit.
    #[error("policy document at {path} is {size} bytes (limit {limit})")]
    TooLarge {
        /// Configured document path.
        path: PathBuf,
        /// Observed size in bytes.
        size: usize,
        /// Accepted size limit in bytes.
        limit: usize,
    },
    /// The document is not valid JSON.
    #[error("policy document at {path} is not valid JSON: {reason}")]
    Parse {
        /// Configured document path.
        path: PathBuf,
        /// Underlying parse error text.
        reason: String,
    },
}

// ============================================================================
// SECTION: Document Type
// ============================================================================

/// A validated policy document ready for submission to the control plane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyDocument {
    /// Path the document was loaded from.
    path: PathBuf,
    /// Raw JSON text as submitted to the provider.
    json: String,
}

impl PolicyDocument {
    /// Loads and validates a policy document from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError`] when the document is missing, unreadable,
    /// oversized, or not valid JSON.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        if !path.exists() {
            return Err(DocumentError::Missing(path.to_path_buf()));
        }
        let bytes = fs::read(path).map_err(|err| DocumentError::Io {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
        if bytes.len() > MAX_DOCUMENT_BYTES {
            return Err(DocumentError::TooLarge {
                path: path.to_path_buf(),
                size: bytes.len(),
                limit: MAX_DOCUMENT_BYTES,
            });
        }
        let json = String::from_utf8(bytes).map_err(|err| DocumentError::Parse {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
        serde_json::from_str::<serde_json::Value>(&json).map_err(|err| DocumentError::Parse {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            json,
        })
    }

    /// Returns the path the document was loaded from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the raw JSON text.
    #[must_use]
    pub fn as_json(&self) -> &str {
        &self.json
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
