//! Create `users` table.
//!
//! Full-profile user records; rows are never physically removed, `is_deleted` marks them gone.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_len(Users::Email, 100).not_null())
                    .col(string_len(Users::FirstName, 50).not_null())
                    .col(string_len(Users::LastName, 50).not_null())
                    .col(date(Users::BirthDate).not_null())
                    .col(ColumnDef::new(Users::Address).string_len(100).null())
                    .col(ColumnDef::new(Users::PhoneNumber).string_len(20).null())
                    .col(boolean(Users::IsDeleted).not_null().default(false))
                    .col(timestamp_with_time_zone(Users::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Users::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Users::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Users { Table, Id, Email, FirstName, LastName, BirthDate, Address, PhoneNumber, IsDeleted, CreatedAt, UpdatedAt }
