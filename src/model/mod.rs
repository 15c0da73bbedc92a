//! Shared data transfer types computed on read.
//!
//! Everything here is a projection over ledger state; none of it is persisted
//! or cached authoritatively.

pub mod summary;

pub use summary::{AccountSummary, FleetSummary, RoomOccupancy};

/// Filter for allocation listings. Empty filter returns everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllocationFilter {
    pub room_id: Option<i32>,
    pub student_id: Option<i32>,
}

impl AllocationFilter {
    pub fn by_room(room_id: i32) -> Self {
        Self {
            room_id: Some(room_id),
            ..Default::default()
        }
    }

    pub fn by_student(student_id: i32) -> Self {
        Self {
            student_id: Some(student_id),
            ..Default::default()
        }
    }
}
