use chrono::{NaiveDate, NaiveDateTime, Utc};
use entity::charge::ChargeStatus;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct ChargeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ChargeRepository<'a, C> {
    /// Creates a new instance of [`ChargeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a pending charge.
    ///
    /// The amount is immutable after this point; only [`Self::mark_paid`]
    /// writes to the row again.
    pub async fn create(
        &self,
        student_id: i32,
        allocation_id: Option<i32>,
        description: &str,
        amount: Decimal,
        due_date: NaiveDate,
    ) -> Result<entity::charge::Model, DbErr> {
        let charge = entity::charge::ActiveModel {
            student_id: ActiveValue::Set(student_id),
            allocation_id: ActiveValue::Set(allocation_id),
            description: ActiveValue::Set(description.to_string()),
            amount: ActiveValue::Set(amount),
            due_date: ActiveValue::Set(due_date),
            status: ActiveValue::Set(ChargeStatus::Pending),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            paid_at: ActiveValue::Set(None),
            ..Default::default()
        };

        charge.insert(self.db).await
    }

    pub async fn get(&self, charge_id: i32) -> Result<Option<entity::charge::Model>, DbErr> {
        entity::prelude::Charge::find_by_id(charge_id)
            .one(self.db)
            .await
    }

    /// The charge generated for an allocation, if one exists. The default
    /// policy creates at most one charge per allocation.
    pub async fn get_by_allocation(
        &self,
        allocation_id: i32,
    ) -> Result<Option<entity::charge::Model>, DbErr> {
        entity::prelude::Charge::find()
            .filter(entity::charge::Column::AllocationId.eq(allocation_id))
            .one(self.db)
            .await
    }

    /// Lists the student's charges, newest first
    pub async fn list_for_student(
        &self,
        student_id: i32,
    ) -> Result<Vec<entity::charge::Model>, DbErr> {
        entity::prelude::Charge::find()
            .filter(entity::charge::Column::StudentId.eq(student_id))
            .order_by_desc(entity::charge::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn list_all(&self) -> Result<Vec<entity::charge::Model>, DbErr> {
        entity::prelude::Charge::find()
            .order_by_desc(entity::charge::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Transitions a charge to paid and stamps `paid_at`.
    ///
    /// Callers must have verified the charge is still pending inside the same
    /// transaction; the transition is one-way.
    pub async fn mark_paid(
        &self,
        charge: entity::charge::Model,
        paid_at: NaiveDateTime,
    ) -> Result<entity::charge::Model, DbErr> {
        let mut charge_am = charge.into_active_model();
        charge_am.status = ActiveValue::Set(ChargeStatus::Paid);
        charge_am.paid_at = ActiveValue::Set(Some(paid_at));

        charge_am.update(self.db).await
    }
}
