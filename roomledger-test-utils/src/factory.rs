//! Fixture factories for seeding the in-memory test database.

use chrono::{NaiveDate, Utc};
use entity::charge::ChargeStatus;
use entity::room::RoomCategory;
use entity::student_profile::{FeeStatus, Role};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

pub struct Fixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> Fixtures<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an active room in block "A", first floor
    pub async fn insert_room(
        &self,
        room_number: &str,
        category: RoomCategory,
        monthly_rent: Decimal,
    ) -> Result<entity::room::Model, TestError> {
        let room = entity::room::ActiveModel {
            room_number: ActiveValue::Set(room_number.to_string()),
            category: ActiveValue::Set(category),
            block: ActiveValue::Set("A".to_string()),
            floor: ActiveValue::Set(1),
            monthly_rent: ActiveValue::Set(monthly_rent),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(room.insert(self.db).await?)
    }

    /// Inserts a student profile with fee status `pending`
    pub async fn insert_student(
        &self,
        email: &str,
    ) -> Result<entity::student_profile::Model, TestError> {
        self.insert_student_with_status(email, FeeStatus::Pending)
            .await
    }

    pub async fn insert_student_with_status(
        &self,
        email: &str,
        fee_status: FeeStatus,
    ) -> Result<entity::student_profile::Model, TestError> {
        let student = entity::student_profile::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            role: ActiveValue::Set(Role::Student),
            fee_status: ActiveValue::Set(fee_status),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(student.insert(self.db).await?)
    }

    /// Inserts an allocation row directly, bypassing the service-level
    /// capacity and uniqueness checks
    pub async fn insert_allocation(
        &self,
        student_id: i32,
        room_id: i32,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> Result<entity::allocation::Model, TestError> {
        let allocation = entity::allocation::ActiveModel {
            student_id: ActiveValue::Set(student_id),
            room_id: ActiveValue::Set(room_id),
            start_date: ActiveValue::Set(start_date),
            end_date: ActiveValue::Set(end_date),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(allocation.insert(self.db).await?)
    }

    /// Inserts a pending charge
    pub async fn insert_charge(
        &self,
        student_id: i32,
        allocation_id: Option<i32>,
        amount: Decimal,
        due_date: NaiveDate,
    ) -> Result<entity::charge::Model, TestError> {
        let charge = entity::charge::ActiveModel {
            student_id: ActiveValue::Set(student_id),
            allocation_id: ActiveValue::Set(allocation_id),
            description: ActiveValue::Set("Monthly rent".to_string()),
            amount: ActiveValue::Set(amount),
            due_date: ActiveValue::Set(due_date),
            status: ActiveValue::Set(ChargeStatus::Pending),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            paid_at: ActiveValue::Set(None),
            ..Default::default()
        };

        Ok(charge.insert(self.db).await?)
    }

    pub async fn insert_payment(
        &self,
        charge_id: i32,
        student_id: i32,
        amount: Decimal,
    ) -> Result<entity::payment::Model, TestError> {
        let payment = entity::payment::ActiveModel {
            charge_id: ActiveValue::Set(charge_id),
            student_id: ActiveValue::Set(student_id),
            amount: ActiveValue::Set(amount),
            method: ActiveValue::Set("cash".to_string()),
            transaction_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(payment.insert(self.db).await?)
    }
}
