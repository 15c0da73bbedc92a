use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-student fee account projection.
///
/// Computed from the charge and payment ledgers on every read; there is no
/// stored fee account row to drift out of sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSummary {
    /// Sum of all payments ever recorded for the student
    pub total_paid: Decimal,
    /// Sum of the amounts of the student's unpaid charges
    pub total_due: Decimal,
    /// Unpaid charges whose due date has passed
    pub overdue_count: u64,
    /// Timestamp of the most recent payment, if any
    pub last_payment: Option<NaiveDateTime>,
}

/// Hostel-wide billing aggregate for reporting collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetSummary {
    pub total_revenue: Decimal,
    pub total_pending: Decimal,
    pub overdue_charges: u64,
    /// Number of student accounts on the books
    pub accounts: u64,
}

/// Room with its derived capacity and occupancy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomOccupancy {
    pub room: entity::room::Model,
    pub capacity: u64,
    pub current_occupancy: u64,
}
