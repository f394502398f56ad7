use sea_orm_migration::{prelude::*, schema::*};

use super::m20240101_000001_create_instructor_table::Instructor;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Department::Table)
                    .if_not_exists()
                    .col(pk_auto(Department::Id))
                    .col(string_len(Department::NameAr, 500))
                    .col(string_len_uniq(Department::NameEn, 500))
                    .col(integer(Department::ManagerId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_department_manager_id")
                            .from(Department::Table, Department::ManagerId)
                            .to(Instructor::Table, Instructor::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Department::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Department {
    Table,
    Id,
    NameAr,
    NameEn,
    ManagerId,
}
