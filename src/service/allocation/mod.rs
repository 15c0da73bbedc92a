//! Allocation service.
//!
//! Owns the allocation lifecycle and the two ledger invariants: per-room
//! capacity over date intervals, and at most one open allocation per student.
//! Both checks and the subsequent insert run inside one serializable
//! transaction so concurrent callers cannot jointly overbook a room or
//! double-allocate a student.

#[cfg(test)]
mod tests;

use chrono::NaiveDate;
use entity::student_profile::{FeeStatus, Role};
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::{
    data::{
        allocation::AllocationRepository, room::RoomRepository, student::StudentRepository,
    },
    error::{ConflictError, Error, NotFoundError, ValidationError},
    model::AllocationFilter,
    service::billing::BillingService,
    util::txn::begin_serializable,
};

pub struct AllocationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AllocationService<'a> {
    /// Creates a new instance of [`AllocationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Allocates a student to a room and materializes the rent charge for it.
    ///
    /// A missing `end_date` makes the allocation active (open end). Requests
    /// that carry an `end_date` record history: they must still fit the
    /// room's capacity over their interval, but they never conflict with the
    /// student's open allocation.
    ///
    /// Charge generation runs inside the same transaction; if it fails, the
    /// whole operation rolls back and the error is surfaced, so no allocation
    /// can exist without its charge through this path.
    ///
    /// # Returns
    /// - `Ok((allocation, charge))` - Both rows as persisted
    /// - `Err(Error::Validation)` - `end_date` precedes `start_date`
    /// - `Err(Error::NotFound)` - Unknown room or student
    /// - `Err(Error::Conflict)` - Room at capacity for the interval, room
    ///   inactive, or the student already holds an open allocation
    /// - `Err(Error::Generation)` / `Err(Error::DbErr)` - Charge
    ///   materialization or database failure (nothing is persisted)
    pub async fn create_allocation(
        &self,
        student_id: i32,
        room_id: i32,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> Result<(entity::allocation::Model, entity::charge::Model), Error> {
        if let Some(end_date) = end_date {
            if end_date < start_date {
                return Err(ValidationError::EndBeforeStart {
                    start: start_date,
                    end: end_date,
                }
                .into());
            }
        }

        let txn = begin_serializable(self.db).await?;

        let room = RoomRepository::new(&txn)
            .get(room_id)
            .await?
            .ok_or(NotFoundError::Room(room_id))?;

        if end_date.is_none() && !room.is_active {
            return Err(ConflictError::RoomInactive { id: room_id }.into());
        }

        let student = StudentRepository::new(&txn)
            .get(student_id)
            .await?
            .ok_or(NotFoundError::Student(student_id))?;

        let allocation_repo = AllocationRepository::new(&txn);

        let overlapping = allocation_repo
            .count_overlapping(room_id, start_date, end_date)
            .await?;
        if overlapping >= room.category.capacity() {
            return Err(ConflictError::RoomAtFullCapacity.into());
        }

        // Closed (historical) records never trip the uniqueness check
        if end_date.is_none()
            && allocation_repo
                .active_for_student(student_id)
                .await?
                .is_some()
        {
            return Err(ConflictError::ActiveAllocationExists.into());
        }

        let allocation = allocation_repo
            .create(student_id, room_id, start_date, end_date)
            .await?;

        let charge = BillingService::generate_in(&txn, &allocation).await?;

        // A student marked paid starts owing rent again the moment a new
        // active allocation exists. Staff profiles keep their baseline.
        if end_date.is_none()
            && student.role == Role::Student
            && student.fee_status == FeeStatus::Paid
        {
            StudentRepository::new(&txn)
                .update_fee_status(student, FeeStatus::Pending)
                .await?;
        }

        txn.commit().await?;

        info!(
            allocation_id = allocation.id,
            student_id, room_id, "allocation created"
        );

        Ok((allocation, charge))
    }

    /// Closes an open allocation.
    ///
    /// The open -> closed transition is one-way: re-closing with the same
    /// date is an idempotent no-op, re-closing with a different date is a
    /// [`ConflictError::AllocationAlreadyClosed`].
    pub async fn end_allocation(
        &self,
        allocation_id: i32,
        end_date: NaiveDate,
    ) -> Result<entity::allocation::Model, Error> {
        let txn = begin_serializable(self.db).await?;

        let allocation_repo = AllocationRepository::new(&txn);
        let allocation = allocation_repo
            .get(allocation_id)
            .await?
            .ok_or(NotFoundError::Allocation(allocation_id))?;

        if let Some(existing) = allocation.end_date {
            if existing == end_date {
                return Ok(allocation);
            }

            return Err(ConflictError::AllocationAlreadyClosed {
                id: allocation_id,
                existing,
            }
            .into());
        }

        if end_date < allocation.start_date {
            return Err(ValidationError::EndBeforeStart {
                start: allocation.start_date,
                end: end_date,
            }
            .into());
        }

        let allocation = allocation_repo.close(allocation, end_date).await?;

        txn.commit().await?;

        info!(allocation_id, %end_date, "allocation ended");

        Ok(allocation)
    }

    /// The student's currently active allocation, if any
    pub async fn active_allocation_for(
        &self,
        student_id: i32,
    ) -> Result<Option<entity::allocation::Model>, Error> {
        Ok(AllocationRepository::new(self.db)
            .active_for_student(student_id)
            .await?)
    }

    /// Lists allocations filtered by room and/or student, newest first
    pub async fn list_allocations(
        &self,
        filter: AllocationFilter,
    ) -> Result<Vec<entity::allocation::Model>, Error> {
        Ok(AllocationRepository::new(self.db).list(filter).await?)
    }
}
