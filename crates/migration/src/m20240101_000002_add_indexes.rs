use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Listing is ordered by insertion time
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_employee_created_at")
                    .table(Employee::Table)
                    .col(Employee::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_employee_created_at").table(Employee::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Employee { Table, CreatedAt }
