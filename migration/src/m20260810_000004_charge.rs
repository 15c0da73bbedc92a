use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260810_000002_student_profile::StudentProfile;
use crate::m20260810_000003_allocation::Allocation;

static FK_CHARGE_STUDENT_ID: &str = "fk_charge_student_id";
static FK_CHARGE_ALLOCATION_ID: &str = "fk_charge_allocation_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Charge::Table)
                    .if_not_exists()
                    .col(pk_auto(Charge::Id))
                    .col(integer(Charge::StudentId))
                    .col(integer_null(Charge::AllocationId))
                    .col(string(Charge::Description))
                    .col(decimal_len(Charge::Amount, 10, 2))
                    .col(date(Charge::DueDate))
                    .col(string_len(Charge::Status, 10))
                    .col(timestamp(Charge::CreatedAt))
                    .col(timestamp_null(Charge::PaidAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CHARGE_STUDENT_ID)
                    .from_tbl(Charge::Table)
                    .from_col(Charge::StudentId)
                    .to_tbl(StudentProfile::Table)
                    .to_col(StudentProfile::Id)
                    .to_owned(),
            )
            .await?;

        // Charges outlive their allocation; deleting the allocation only
        // clears the reference.
        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CHARGE_ALLOCATION_ID)
                    .from_tbl(Charge::Table)
                    .from_col(Charge::AllocationId)
                    .to_tbl(Allocation::Table)
                    .to_col(Allocation::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CHARGE_ALLOCATION_ID)
                    .table(Charge::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CHARGE_STUDENT_ID)
                    .table(Charge::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Charge::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Charge {
    Table,
    Id,
    StudentId,
    AllocationId,
    Description,
    Amount,
    DueDate,
    Status,
    CreatedAt,
    PaidAt,
}
