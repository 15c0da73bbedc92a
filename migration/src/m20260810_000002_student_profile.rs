use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StudentProfile::Table)
                    .if_not_exists()
                    .col(pk_auto(StudentProfile::Id))
                    .col(string_uniq(StudentProfile::Email))
                    .col(string_len(StudentProfile::Role, 10))
                    .col(string_len(StudentProfile::FeeStatus, 10))
                    .col(timestamp(StudentProfile::CreatedAt))
                    .col(timestamp(StudentProfile::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudentProfile::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum StudentProfile {
    Table,
    Id,
    Email,
    Role,
    FeeStatus,
    CreatedAt,
    UpdatedAt,
}
