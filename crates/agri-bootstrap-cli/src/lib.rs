// agri-bootstrap-cli/src/lib.rs
// ============================================================================
// Module: Agri Bootstrap CLI Library
// Description: Shared helpers for the Agri Bootstrap command-line interface.
// Purpose: Provide reusable components (i18n, summaries) for the CLI binary.
// Dependencies: Standard library, serde.
// ============================================================================

//! ## Overview
//! This library module houses shared CLI utilities: the message catalog that
//! carries every user-facing string, and the serializable provisioning
//! summary emitted in JSON output mode. The binary entry point
//! (`src/main.rs`) imports these helpers to keep all user-facing output
//! consistent.

// ============================================================================
// SECTION: Modules
// ============================================================================

/// Message catalog and translation helpers.
pub mod i18n;

/// Serializable provisioning summaries.
pub mod summary;
