//! Payment ledger service.
//!
//! Payments are append-only; this service is the only writer of a charge's
//! `status` and `paid_at`. Reconciliation compares the cumulative sum of all
//! payments against the charge amount, so partial payments accumulate and the
//! pending -> paid transition fires exactly once.

#[cfg(test)]
mod tests;

use chrono::Utc;
use entity::charge::ChargeStatus;
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::{
    data::{charge::ChargeRepository, payment::PaymentRepository},
    error::{Error, NotFoundError, ValidationError},
    util::txn::begin_serializable,
};

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentService<'a> {
    /// Creates a new instance of [`PaymentService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a payment against a charge and reconciles the charge status.
    ///
    /// The payment insert, the cumulative sum, and the conditional paid
    /// transition run in one serializable transaction, so two concurrent
    /// payments cannot both read a stale total or double-mark the charge.
    /// Overpayment is accepted and neither refunded nor tracked as credit.
    ///
    /// # Returns
    /// - `Ok((payment, charge))` - The recorded payment and the charge as of
    ///   this reconciliation (paid once cumulative payments cover the amount)
    /// - `Err(Error::Validation)` - Non-positive amount
    /// - `Err(Error::NotFound)` - Unknown charge
    /// - `Err(Error::DbErr)` - Database failure (nothing is persisted)
    pub async fn record_payment(
        &self,
        charge_id: i32,
        amount: Decimal,
        method: &str,
        transaction_id: Option<String>,
    ) -> Result<(entity::payment::Model, entity::charge::Model), Error> {
        if amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositivePayment(amount).into());
        }

        let txn = begin_serializable(self.db).await?;

        let charge_repo = ChargeRepository::new(&txn);
        let charge = charge_repo
            .get(charge_id)
            .await?
            .ok_or(NotFoundError::Charge(charge_id))?;

        let payment_repo = PaymentRepository::new(&txn);
        let payment = payment_repo
            .create(charge_id, charge.student_id, amount, method, transaction_id)
            .await?;

        let total = payment_repo.sum_for_charge(charge_id).await?;

        // Monotonic: a paid charge never reverts, and paid_at is set once
        let charge = if charge.status == ChargeStatus::Pending && total >= charge.amount {
            let paid = charge_repo
                .mark_paid(charge, Utc::now().naive_utc())
                .await?;

            info!(
                charge_id,
                total = %total,
                amount = %paid.amount,
                "charge fully paid"
            );

            paid
        } else {
            charge
        };

        txn.commit().await?;

        info!(
            payment_id = payment.id,
            charge_id,
            amount = %amount,
            "payment recorded"
        );

        Ok((payment, charge))
    }

    /// Lists the student's charges, newest first
    pub async fn list_charges(
        &self,
        student_id: i32,
    ) -> Result<Vec<entity::charge::Model>, Error> {
        Ok(ChargeRepository::new(self.db)
            .list_for_student(student_id)
            .await?)
    }

    /// Lists the student's payments, newest first
    pub async fn list_payments_for_student(
        &self,
        student_id: i32,
    ) -> Result<Vec<entity::payment::Model>, Error> {
        Ok(PaymentRepository::new(self.db)
            .list_for_student(student_id)
            .await?)
    }

    /// Lists the payments applied to a charge, newest first
    pub async fn list_payments_for_charge(
        &self,
        charge_id: i32,
    ) -> Result<Vec<entity::payment::Model>, Error> {
        Ok(PaymentRepository::new(self.db)
            .list_for_charge(charge_id)
            .await?)
    }
}
