use sea_orm_migration::{prelude::*, schema::*};

use super::m20240101_000002_create_department_table::Department;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite resolves foreign key targets lazily, so the department reference
        // can be declared before the department table exists.
        manager
            .create_table(
                Table::create()
                    .table(Instructor::Table)
                    .if_not_exists()
                    .col(pk_auto(Instructor::Id))
                    .col(string(Instructor::NameAr))
                    .col(string(Instructor::NameEn))
                    .col(string_null(Instructor::Address))
                    .col(string_null(Instructor::Position))
                    .col(double_null(Instructor::Salary))
                    .col(integer_null(Instructor::DepartmentId))
                    .col(integer_null(Instructor::SupervisorId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_instructor_department_id")
                            .from(Instructor::Table, Instructor::DepartmentId)
                            .to(Department::Table, Department::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_instructor_supervisor_id")
                            .from(Instructor::Table, Instructor::SupervisorId)
                            .to(Instructor::Table, Instructor::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Instructor::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Instructor {
    Table,
    Id,
    NameAr,
    NameEn,
    Address,
    Position,
    Salary,
    DepartmentId,
    SupervisorId,
}
