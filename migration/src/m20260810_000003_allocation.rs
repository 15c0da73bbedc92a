use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260810_000001_room::Room;
use crate::m20260810_000002_student_profile::StudentProfile;

static FK_ALLOCATION_STUDENT_ID: &str = "fk_allocation_student_id";
static FK_ALLOCATION_ROOM_ID: &str = "fk_allocation_room_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Allocation::Table)
                    .if_not_exists()
                    .col(pk_auto(Allocation::Id))
                    .col(integer(Allocation::StudentId))
                    .col(integer(Allocation::RoomId))
                    .col(date(Allocation::StartDate))
                    .col(date_null(Allocation::EndDate))
                    .col(timestamp(Allocation::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ALLOCATION_STUDENT_ID)
                    .from_tbl(Allocation::Table)
                    .from_col(Allocation::StudentId)
                    .to_tbl(StudentProfile::Table)
                    .to_col(StudentProfile::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ALLOCATION_ROOM_ID)
                    .from_tbl(Allocation::Table)
                    .from_col(Allocation::RoomId)
                    .to_tbl(Room::Table)
                    .to_col(Room::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ALLOCATION_ROOM_ID)
                    .table(Allocation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ALLOCATION_STUDENT_ID)
                    .table(Allocation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Allocation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Allocation {
    Table,
    Id,
    StudentId,
    RoomId,
    StartDate,
    EndDate,
    CreatedAt,
}
