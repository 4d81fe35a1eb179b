//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`EquipTrackError`] via `#[from]`.

use crate::id::EquipmentTypeId;
use crate::time::Date;

/// Top-level error returned by every service operation.
#[derive(Debug, thiserror::Error)]
pub enum EquipTrackError {
    /// The caller supplied input that breaks a domain rule.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The targeted record does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// A storage adapter failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations. Recoverable: the caller may retry with
/// corrected input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name is required.")]
    EmptyName,

    #[error("Equipment type is required.")]
    MissingEquipmentType,

    #[error("Invalid equipment type: {0}.")]
    UnknownEquipmentType(EquipmentTypeId),

    #[error(
        "Equipment cannot be marked as Active: Last Cleaned Date is required when setting status to Active."
    )]
    MissingCleaningDate,

    #[error(
        "Equipment cannot be marked as Active because the Last Cleaned Date ({last_cleaned}) is older than {window_days} days. Please log a maintenance event to update the equipment status."
    )]
    StaleCleaningDate { last_cleaned: Date, window_days: u32 },

    #[error("Performed by is required.")]
    EmptyPerformedBy,

    #[error("Page size must be greater than zero.")]
    InvalidPageSize,

    #[error("Invalid page number: {0:?}.")]
    InvalidPageNumber(String),

    #[error("Invalid identifier: {0:?}.")]
    InvalidId(String),

    #[error("Invalid date: {0:?}, expected YYYY-MM-DD.")]
    InvalidDate(String),

    #[error("Invalid status: {0:?}.")]
    InvalidStatus(String),

    #[error("Invalid sort field: {0:?}.")]
    InvalidSortField(String),

    #[error("Invalid sort direction: {0:?}.")]
    InvalidSortDirection(String),

    #[error("Invalid request body: {0}")]
    MalformedBody(String),
}

/// A lookup targeted a record that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found with id: {id}")]
pub struct NotFoundError {
    /// Kind of record that was looked up (`"Equipment"`, …).
    pub entity: &'static str,
    /// Identifier that was looked up, rendered as text.
    pub id: String,
}
