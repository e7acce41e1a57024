//! Create `employee` table.
//!
//! Salary is a fixed-point NUMERIC(14, 2) so amounts survive round trips exactly.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(uuid(Employee::Id).primary_key())
                    .col(string(Employee::Name).not_null())
                    .col(string(Employee::Email).not_null())
                    .col(string_len(Employee::Phone, 64).not_null())
                    .col(decimal_len(Employee::Salary, 14, 2).not_null())
                    .col(timestamp_with_time_zone(Employee::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Employee::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Employee { Table, Id, Name, Email, Phone, Salary, CreatedAt }
