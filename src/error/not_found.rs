use thiserror::Error;

/// A record referenced by id does not exist.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundError {
    #[error("room {0} not found")]
    Room(i32),
    #[error("student {0} not found")]
    Student(i32),
    #[error("allocation {0} not found")]
    Allocation(i32),
    #[error("charge {0} not found")]
    Charge(i32),
}
