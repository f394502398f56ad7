use sea_orm_migration::{prelude::*, schema::*};

use super::m20240101_000002_create_department_table::Department;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(pk_auto(Student::Id))
                    .col(string_len(Student::NameAr, 200))
                    .col(string_len_uniq(Student::NameEn, 200))
                    .col(string_len(Student::Address, 500))
                    .col(string_len_null(Student::Phone, 500))
                    .col(integer_null(Student::DepartmentId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_department_id")
                            .from(Student::Table, Student::DepartmentId)
                            .to(Department::Table, Department::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Student {
    Table,
    Id,
    NameAr,
    NameEn,
    Address,
    Phone,
    DepartmentId,
}
