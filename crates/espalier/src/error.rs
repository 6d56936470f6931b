//! Error types for Espalier operations.
//!
//! This module provides the main error type [`EspalierError`]. Errors are
//! deliberately rare: forest construction and connector layout never fail
//! (malformed manager references surface as structural warnings, missing
//! measurements degrade to skipped connectors), so the only fallible surface
//! is the employee directory, which enforces structural integrity of the
//! flat record list.

use thiserror::Error;

use espalier_core::identifier::Id;

/// The main error type for Espalier operations.
#[derive(Debug, Error)]
pub enum EspalierError {
    #[error("employee id must not be empty")]
    EmptyEmployeeId,

    #[error("duplicate employee id `{0}`")]
    DuplicateEmployee(Id),

    #[error("unknown employee id `{0}`")]
    UnknownEmployee(Id),
}
