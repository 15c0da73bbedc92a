use chrono::Utc;
use entity::student_profile::{FeeStatus, Role};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter,
};

pub struct StudentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    /// Creates a new instance of [`StudentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new student profile with fee status `pending`
    pub async fn create(
        &self,
        email: &str,
        role: Role,
    ) -> Result<entity::student_profile::Model, DbErr> {
        let student = entity::student_profile::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            role: ActiveValue::Set(role),
            fee_status: ActiveValue::Set(FeeStatus::Pending),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        student.insert(self.db).await
    }

    pub async fn get(
        &self,
        student_id: i32,
    ) -> Result<Option<entity::student_profile::Model>, DbErr> {
        entity::prelude::StudentProfile::find_by_id(student_id)
            .one(self.db)
            .await
    }

    /// Overwrites the stored fee status baseline.
    ///
    /// This is the staff-facing write path; the fee resolver's computed value
    /// is never persisted through here or anywhere else.
    pub async fn update_fee_status(
        &self,
        student: entity::student_profile::Model,
        fee_status: FeeStatus,
    ) -> Result<entity::student_profile::Model, DbErr> {
        let mut student_am = student.into_active_model();
        student_am.fee_status = ActiveValue::Set(fee_status);
        student_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        student_am.update(self.db).await
    }

    /// Number of profiles holding the given role
    pub async fn count_by_role(&self, role: Role) -> Result<u64, DbErr> {
        entity::prelude::StudentProfile::find()
            .filter(entity::student_profile::Column::Role.eq(role))
            .count(self.db)
            .await
    }
}
