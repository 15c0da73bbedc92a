use chrono::NaiveDate;
use thiserror::Error;

/// An operation that would break a ledger invariant if it went through.
///
/// Conflicts are returned synchronously to the caller and never retried
/// automatically.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConflictError {
    /// The requested interval would push the room past its derived capacity.
    #[error("room at full capacity")]
    RoomAtFullCapacity,
    /// The student already holds an allocation with no end date.
    #[error("student already has an active allocation")]
    ActiveAllocationExists,
    /// Closing an already-closed allocation with a different end date.
    /// Re-closing with the same date is an idempotent no-op instead.
    #[error("allocation {id} is already closed with end date {existing}")]
    AllocationAlreadyClosed { id: i32, existing: NaiveDate },
    /// Rooms flagged inactive refuse new open allocations.
    #[error("room {id} is not active")]
    RoomInactive { id: i32 },
}
