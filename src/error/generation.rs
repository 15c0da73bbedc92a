use rust_decimal::Decimal;
use thiserror::Error;

/// Charge materialization failed in a way the caller must decide on.
///
/// Generation errors are remediated by an explicit reconciliation pass
/// ([`crate::service::billing::BillingService::reconcile_missing_charges`]),
/// never masked.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// A charge already exists for the allocation but with a different
    /// amount, so the idempotent no-op path does not apply.
    #[error(
        "allocation {allocation_id} already has charge {charge_id} with amount {existing}, expected {expected}"
    )]
    AmountMismatch {
        allocation_id: i32,
        charge_id: i32,
        existing: Decimal,
        expected: Decimal,
    },
}
