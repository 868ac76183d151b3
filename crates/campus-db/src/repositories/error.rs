//! Error handling utilities for repositories

use campus_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
///
/// Driver details stay in the error string for logging; callers never
/// branch on them.
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::StoreUnavailable(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::StoreUnavailable(e.to_string())
}

/// Check for foreign key violation and return appropriate error or fallback
pub fn map_fk_violation<F>(e: SqlxError, on_fk: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return on_fk();
        }
    }
    DomainError::StoreUnavailable(e.to_string())
}
