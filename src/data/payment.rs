use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct PaymentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PaymentRepository<'a, C> {
    /// Creates a new instance of [`PaymentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends a payment. Payments are never updated or deleted.
    pub async fn create(
        &self,
        charge_id: i32,
        student_id: i32,
        amount: Decimal,
        method: &str,
        transaction_id: Option<String>,
    ) -> Result<entity::payment::Model, DbErr> {
        let payment = entity::payment::ActiveModel {
            charge_id: ActiveValue::Set(charge_id),
            student_id: ActiveValue::Set(student_id),
            amount: ActiveValue::Set(amount),
            method: ActiveValue::Set(method.to_string()),
            transaction_id: ActiveValue::Set(transaction_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        payment.insert(self.db).await
    }

    /// Sum of every payment ever recorded against the charge.
    ///
    /// Runs inside the payment reconciliation transaction so concurrent
    /// payments cannot both observe a stale total.
    pub async fn sum_for_charge(&self, charge_id: i32) -> Result<Decimal, DbErr> {
        let payments = entity::prelude::Payment::find()
            .filter(entity::payment::Column::ChargeId.eq(charge_id))
            .all(self.db)
            .await?;

        Ok(payments.iter().map(|p| p.amount).sum())
    }

    pub async fn list_for_charge(
        &self,
        charge_id: i32,
    ) -> Result<Vec<entity::payment::Model>, DbErr> {
        entity::prelude::Payment::find()
            .filter(entity::payment::Column::ChargeId.eq(charge_id))
            .order_by_desc(entity::payment::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn list_for_student(
        &self,
        student_id: i32,
    ) -> Result<Vec<entity::payment::Model>, DbErr> {
        entity::prelude::Payment::find()
            .filter(entity::payment::Column::StudentId.eq(student_id))
            .order_by_desc(entity::payment::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn list_all(&self) -> Result<Vec<entity::payment::Model>, DbErr> {
        entity::prelude::Payment::find().all(self.db).await
    }
}
