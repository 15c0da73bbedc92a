use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::AllocationFilter;

pub struct AllocationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AllocationRepository<'a, C> {
    /// Creates a new instance of [`AllocationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an allocation row.
    ///
    /// Capacity and uniqueness checks live in the allocation service, which
    /// calls this inside the same transaction as those checks.
    pub async fn create(
        &self,
        student_id: i32,
        room_id: i32,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> Result<entity::allocation::Model, DbErr> {
        let allocation = entity::allocation::ActiveModel {
            student_id: ActiveValue::Set(student_id),
            room_id: ActiveValue::Set(room_id),
            start_date: ActiveValue::Set(start_date),
            end_date: ActiveValue::Set(end_date),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        allocation.insert(self.db).await
    }

    pub async fn get(
        &self,
        allocation_id: i32,
    ) -> Result<Option<entity::allocation::Model>, DbErr> {
        entity::prelude::Allocation::find_by_id(allocation_id)
            .one(self.db)
            .await
    }

    /// The student's allocation with no end date, if any
    pub async fn active_for_student(
        &self,
        student_id: i32,
    ) -> Result<Option<entity::allocation::Model>, DbErr> {
        entity::prelude::Allocation::find()
            .filter(entity::allocation::Column::StudentId.eq(student_id))
            .filter(entity::allocation::Column::EndDate.is_null())
            .one(self.db)
            .await
    }

    /// Counts allocations in the room whose interval overlaps the requested
    /// one, boundaries inclusive: an allocation ending the day another starts
    /// counts as overlapping. A missing end date on either side is treated as
    /// an open end beyond every comparison date.
    pub async fn count_overlapping(
        &self,
        room_id: i32,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> Result<u64, DbErr> {
        let mut query = entity::prelude::Allocation::find()
            .filter(entity::allocation::Column::RoomId.eq(room_id))
            // existing.end >= requested.start, with NULL as open end
            .filter(
                Condition::any()
                    .add(entity::allocation::Column::EndDate.is_null())
                    .add(entity::allocation::Column::EndDate.gte(start_date)),
            );

        // existing.start <= requested.end; trivially true for an open request
        if let Some(end_date) = end_date {
            query = query.filter(entity::allocation::Column::StartDate.lte(end_date));
        }

        query.count(self.db).await
    }

    /// Number of currently active allocations in the room
    pub async fn count_active_for_room(&self, room_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Allocation::find()
            .filter(entity::allocation::Column::RoomId.eq(room_id))
            .filter(entity::allocation::Column::EndDate.is_null())
            .count(self.db)
            .await
    }

    /// Sets the end date on an open allocation. The one-way transition rules
    /// are enforced by the allocation service before calling this.
    pub async fn close(
        &self,
        allocation: entity::allocation::Model,
        end_date: NaiveDate,
    ) -> Result<entity::allocation::Model, DbErr> {
        let mut allocation_am = allocation.into_active_model();
        allocation_am.end_date = ActiveValue::Set(Some(end_date));

        allocation_am.update(self.db).await
    }

    /// Lists allocations matching the filter, newest start date first
    pub async fn list(
        &self,
        filter: AllocationFilter,
    ) -> Result<Vec<entity::allocation::Model>, DbErr> {
        let mut query = entity::prelude::Allocation::find();

        if let Some(room_id) = filter.room_id {
            query = query.filter(entity::allocation::Column::RoomId.eq(room_id));
        }
        if let Some(student_id) = filter.student_id {
            query = query.filter(entity::allocation::Column::StudentId.eq(student_id));
        }

        query
            .order_by_desc(entity::allocation::Column::StartDate)
            .all(self.db)
            .await
    }

    /// All allocations paired with their charge, if one exists. Used by the
    /// billing reconciliation pass to find allocations lacking a charge.
    pub async fn list_with_charge(
        &self,
    ) -> Result<
        Vec<(
            entity::allocation::Model,
            Option<entity::charge::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::Allocation::find()
            .find_also_related(entity::charge::Entity)
            .all(self.db)
            .await
    }
}
