use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240101_000002_create_department_table::Department,
    m20240101_000003_create_subject_table::Subject,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DepartmentSubject::Table)
                    .if_not_exists()
                    .col(integer(DepartmentSubject::DepartmentId))
                    .col(integer(DepartmentSubject::SubjectId))
                    .primary_key(
                        Index::create()
                            .col(DepartmentSubject::DepartmentId)
                            .col(DepartmentSubject::SubjectId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_department_subject_department_id")
                            .from(DepartmentSubject::Table, DepartmentSubject::DepartmentId)
                            .to(Department::Table, Department::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_department_subject_subject_id")
                            .from(DepartmentSubject::Table, DepartmentSubject::SubjectId)
                            .to(Subject::Table, Subject::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DepartmentSubject::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DepartmentSubject {
    Table,
    DepartmentId,
    SubjectId,
}
