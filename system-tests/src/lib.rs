// system-tests/src/lib.rs
// ============================================================================
// Module: Agri Bootstrap System Tests Library
// Description: Placeholder library target for the system-tests package.
// Purpose: Anchor the docker-gated integration tests in `tests/`.
// Dependencies: std
// ============================================================================

//! ## Overview
//! This crate hosts the docker-gated system tests in `system-tests/tests`.
//! The tests run against a disposable MinIO container and are enabled with
//! the `system-tests` feature; the library target itself is intentionally
//! empty.
