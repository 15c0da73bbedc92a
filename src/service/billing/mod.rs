//! Charge generation (billing) service.
//!
//! Exactly one rent charge is materialized per allocation under the default
//! policy. Generation is an explicit, inspectable step: the allocation
//! service calls [`BillingService::generate_in`] inside its own transaction,
//! and [`BillingService::reconcile_missing_charges`] re-runs generation for
//! any allocation that somehow lacks a charge.

#[cfg(test)]
mod tests;

use sea_orm::{ConnectionTrait, DatabaseConnection};
use tracing::{info, warn};

use crate::{
    data::{allocation::AllocationRepository, charge::ChargeRepository, room::RoomRepository},
    error::{Error, GenerationError, NotFoundError},
    util::txn::begin_serializable,
};

/// Outcome of a charge backfill pass.
///
/// Per-allocation failures do not abort the pass; they are collected here for
/// the caller to inspect.
#[derive(Debug, Default)]
pub struct ReconciliationReport {
    pub created: Vec<entity::charge::Model>,
    pub failed: Vec<(i32, Error)>,
}

pub struct BillingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BillingService<'a> {
    /// Creates a new instance of [`BillingService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Materializes the rent charge for an allocation on the given
    /// connection, which is expected to be the transaction the allocation was
    /// written in.
    ///
    /// Idempotent: a charge already generated for this allocation with the
    /// same amount is returned as-is. A charge with a different amount is a
    /// [`GenerationError::AmountMismatch`], never a silent skip, so the
    /// caller can decide remediation.
    ///
    /// # Returns
    /// - `Ok(Model)` - The allocation's charge, existing or newly created
    /// - `Err(Error::NotFound)` - The allocation's room no longer exists
    /// - `Err(Error::Generation)` - Existing charge disagrees on the amount
    /// - `Err(Error::DbErr)` - Database failure
    pub(crate) async fn generate_in<C: ConnectionTrait>(
        conn: &C,
        allocation: &entity::allocation::Model,
    ) -> Result<entity::charge::Model, Error> {
        let room = RoomRepository::new(conn)
            .get(allocation.room_id)
            .await?
            .ok_or(NotFoundError::Room(allocation.room_id))?;

        let charge_repo = ChargeRepository::new(conn);

        if let Some(existing) = charge_repo.get_by_allocation(allocation.id).await? {
            if existing.amount == room.monthly_rent {
                return Ok(existing);
            }

            return Err(GenerationError::AmountMismatch {
                allocation_id: allocation.id,
                charge_id: existing.id,
                existing: existing.amount,
                expected: room.monthly_rent,
            }
            .into());
        }

        let charge = charge_repo
            .create(
                allocation.student_id,
                Some(allocation.id),
                &format!("Monthly rent for room {}", room.room_number),
                room.monthly_rent,
                allocation.start_date,
            )
            .await?;

        info!(
            charge_id = charge.id,
            allocation_id = allocation.id,
            amount = %charge.amount,
            "charge generated"
        );

        Ok(charge)
    }

    /// Generates the charge for an existing allocation.
    ///
    /// Normally charge generation happens inside allocation creation; this
    /// entry point exists for reprocessing and backfill.
    pub async fn generate_for_allocation(
        &self,
        allocation_id: i32,
    ) -> Result<entity::charge::Model, Error> {
        let txn = begin_serializable(self.db).await?;

        let allocation = AllocationRepository::new(&txn)
            .get(allocation_id)
            .await?
            .ok_or(NotFoundError::Allocation(allocation_id))?;

        let charge = Self::generate_in(&txn, &allocation).await?;

        txn.commit().await?;

        Ok(charge)
    }

    /// Re-runs charge generation for every allocation lacking a charge.
    ///
    /// This is the explicit remediation path for generation failures; it is
    /// never triggered automatically. Failures on individual allocations are
    /// collected in the report rather than aborting the pass.
    pub async fn reconcile_missing_charges(&self) -> Result<ReconciliationReport, Error> {
        let pairs = AllocationRepository::new(self.db).list_with_charge().await?;

        let mut report = ReconciliationReport::default();
        for (allocation, charge) in pairs {
            if charge.is_some() {
                continue;
            }

            match self.generate_for_allocation(allocation.id).await {
                Ok(charge) => report.created.push(charge),
                Err(err) => {
                    warn!(
                        allocation_id = allocation.id,
                        error = %err,
                        "charge backfill failed for allocation"
                    );
                    report.failed.push((allocation.id, err));
                }
            }
        }

        Ok(report)
    }
}
