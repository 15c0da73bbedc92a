//! Fee status resolution and account reporting.
//!
//! The stored `fee_status` on the profile is the staff-controlled baseline;
//! [`FeeService::resolve_status`] layers a live, date-based overdue override
//! on top of it at read time. The resolver never writes; clearing an overdue
//! projection happens by staff updating the stored baseline once payment is
//! confirmed out-of-band.

#[cfg(test)]
mod tests;

use chrono::{NaiveDate, Utc};
use entity::charge::ChargeStatus;
use entity::student_profile::{FeeStatus, Role};
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::{
    data::{
        allocation::AllocationRepository, charge::ChargeRepository, payment::PaymentRepository,
        student::StudentRepository,
    },
    error::{Error, NotFoundError},
    model::{AccountSummary, FleetSummary},
    util::time::rent_due_date,
};

pub struct FeeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeeService<'a> {
    /// Creates a new instance of [`FeeService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// The student's displayed fee status as of today
    pub async fn resolve_status(&self, student_id: i32) -> Result<FeeStatus, Error> {
        self.resolve_status_on(student_id, Utc::now().date_naive())
            .await
    }

    /// The student's displayed fee status as of `today`.
    ///
    /// With an active allocation whose rent due date has passed and a stored
    /// baseline other than `paid`, the projection is `overdue`; in every
    /// other case it is the stored baseline unchanged. Pure read-time
    /// projection: nothing is persisted.
    pub async fn resolve_status_on(
        &self,
        student_id: i32,
        today: NaiveDate,
    ) -> Result<FeeStatus, Error> {
        let student = StudentRepository::new(self.db)
            .get(student_id)
            .await?
            .ok_or(NotFoundError::Student(student_id))?;

        let active = AllocationRepository::new(self.db)
            .active_for_student(student_id)
            .await?;

        if let Some(allocation) = active {
            if student.fee_status != FeeStatus::Paid && today > rent_due_date(allocation.start_date)
            {
                return Ok(FeeStatus::Overdue);
            }
        }

        Ok(student.fee_status)
    }

    /// Staff-driven update of the stored fee status baseline.
    ///
    /// This is how an overdue projection is cleared after payment is
    /// confirmed; the resolver's computed value is never written back.
    pub async fn set_fee_status(
        &self,
        student_id: i32,
        fee_status: FeeStatus,
    ) -> Result<entity::student_profile::Model, Error> {
        let student_repo = StudentRepository::new(self.db);
        let student = student_repo
            .get(student_id)
            .await?
            .ok_or(NotFoundError::Student(student_id))?;

        let student = student_repo.update_fee_status(student, fee_status).await?;

        info!(student_id, ?fee_status, "fee status baseline updated");

        Ok(student)
    }

    /// The student's fee account, computed from the ledgers as of today
    pub async fn account_summary(&self, student_id: i32) -> Result<AccountSummary, Error> {
        self.account_summary_on(student_id, Utc::now().date_naive())
            .await
    }

    /// The student's fee account as of `today`. Derived on every read; never
    /// cached authoritatively.
    pub async fn account_summary_on(
        &self,
        student_id: i32,
        today: NaiveDate,
    ) -> Result<AccountSummary, Error> {
        StudentRepository::new(self.db)
            .get(student_id)
            .await?
            .ok_or(NotFoundError::Student(student_id))?;

        let charges = ChargeRepository::new(self.db)
            .list_for_student(student_id)
            .await?;
        let payments = PaymentRepository::new(self.db)
            .list_for_student(student_id)
            .await?;

        let total_paid = payments.iter().map(|p| p.amount).sum();
        let total_due = charges
            .iter()
            .filter(|c| c.status == ChargeStatus::Pending)
            .map(|c| c.amount)
            .sum();
        let overdue_count = charges
            .iter()
            .filter(|c| c.status == ChargeStatus::Pending && c.due_date < today)
            .count() as u64;
        let last_payment = payments.iter().map(|p| p.created_at).max();

        Ok(AccountSummary {
            total_paid,
            total_due,
            overdue_count,
            last_payment,
        })
    }

    /// Hostel-wide billing aggregate as of today
    pub async fn fleet_summary(&self) -> Result<FleetSummary, Error> {
        self.fleet_summary_on(Utc::now().date_naive()).await
    }

    pub async fn fleet_summary_on(&self, today: NaiveDate) -> Result<FleetSummary, Error> {
        let charges = ChargeRepository::new(self.db).list_all().await?;
        let payments = PaymentRepository::new(self.db).list_all().await?;
        let accounts = StudentRepository::new(self.db)
            .count_by_role(Role::Student)
            .await?;

        let total_revenue: Decimal = payments.iter().map(|p| p.amount).sum();
        let total_pending: Decimal = charges
            .iter()
            .filter(|c| c.status == ChargeStatus::Pending)
            .map(|c| c.amount)
            .sum();
        let overdue_charges = charges
            .iter()
            .filter(|c| c.status == ChargeStatus::Pending && c.due_date < today)
            .count() as u64;

        Ok(FleetSummary {
            total_revenue,
            total_pending,
            overdue_charges,
            accounts,
        })
    }
}
