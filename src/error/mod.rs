//! Error types for the roomledger core.
//!
//! The taxonomy separates malformed input ([`ValidationError`]), invariant
//! conflicts ([`ConflictError`]), missing records ([`NotFoundError`]), and
//! charge materialization failures ([`GenerationError`]). All errors use
//! `thiserror` and are scoped to the single requested operation; none is fatal
//! to the process, and none is retried automatically by the core.

pub mod conflict;
pub mod generation;
pub mod not_found;
pub mod validation;

use thiserror::Error;

pub use conflict::ConflictError;
pub use generation::GenerationError;
pub use not_found::NotFoundError;
pub use validation::ValidationError;

/// Main error type for the roomledger core.
///
/// Aggregates the domain error types and database errors into a single
/// unified error, with `#[from]` conversions so the `?` operator works
/// throughout the service layer.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed input (inverted date ranges, non-positive amounts, negative rent).
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// An operation that would break a ledger invariant.
    #[error(transparent)]
    Conflict(#[from] ConflictError),
    /// A referenced room, student, allocation, or charge does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
    /// Charge materialization failed; never silently dropped.
    #[error(transparent)]
    Generation(#[from] GenerationError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
