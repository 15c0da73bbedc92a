use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Malformed input rejected before any state is touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// An end date earlier than the matching start date.
    #[error("end date {end} precedes start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
    /// Payments must move money toward a charge.
    #[error("payment amount must be positive, got {0}")]
    NonPositivePayment(Decimal),
    /// Zero rent is allowed, negative rent is not.
    #[error("monthly rent must not be negative, got {0}")]
    NegativeRent(Decimal),
}
