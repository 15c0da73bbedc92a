use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260810_000002_student_profile::StudentProfile;
use crate::m20260810_000004_charge::Charge;

static FK_PAYMENT_CHARGE_ID: &str = "fk_payment_charge_id";
static FK_PAYMENT_STUDENT_ID: &str = "fk_payment_student_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Payment::Table)
                    .if_not_exists()
                    .col(pk_auto(Payment::Id))
                    .col(integer(Payment::ChargeId))
                    .col(integer(Payment::StudentId))
                    .col(decimal_len(Payment::Amount, 10, 2))
                    .col(string(Payment::Method))
                    .col(string_null(Payment::TransactionId))
                    .col(timestamp(Payment::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PAYMENT_CHARGE_ID)
                    .from_tbl(Payment::Table)
                    .from_col(Payment::ChargeId)
                    .to_tbl(Charge::Table)
                    .to_col(Charge::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PAYMENT_STUDENT_ID)
                    .from_tbl(Payment::Table)
                    .from_col(Payment::StudentId)
                    .to_tbl(StudentProfile::Table)
                    .to_col(StudentProfile::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PAYMENT_STUDENT_ID)
                    .table(Payment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PAYMENT_CHARGE_ID)
                    .table(Payment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Payment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Payment {
    Table,
    Id,
    ChargeId,
    StudentId,
    Amount,
    Method,
    TransactionId,
    CreatedAt,
}
