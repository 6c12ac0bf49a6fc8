use sea_orm_migration::prelude::*;

// Email is unique among live rows only, so a soft-deleted row frees its address.
// Both Postgres and SQLite accept this partial-index form.
const LIVE_EMAIL_INDEXES: [(&str, &str); 2] = [
    ("uq_users_email_live", "users"),
    ("uq_customers_email_live", "customers"),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        for (name, table) in LIVE_EMAIL_INDEXES {
            db.execute_unprepared(&format!(
                "CREATE UNIQUE INDEX IF NOT EXISTS {name} ON {table} (email) WHERE is_deleted = false"
            ))
            .await?;
        }

        // Users: birth date range search
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_birth_date")
                    .table(Users::Table)
                    .col(Users::BirthDate)
                    .to_owned(),
            )
            .await?;

        // Soft-delete flag is part of every read
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_is_deleted")
                    .table(Users::Table)
                    .col(Users::IsDeleted)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_customers_is_deleted")
                    .table(Customers::Table)
                    .col(Customers::IsDeleted)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        for (name, _) in LIVE_EMAIL_INDEXES {
            db.execute_unprepared(&format!("DROP INDEX IF EXISTS {name}")).await?;
        }
        manager
            .drop_index(Index::drop().name("idx_users_birth_date").table(Users::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_users_is_deleted").table(Users::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_customers_is_deleted").table(Customers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users { Table, BirthDate, IsDeleted }

#[derive(DeriveIden)]
enum Customers { Table, IsDeleted }
