use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240101_000003_create_subject_table::Subject,
    m20240101_000004_create_student_table::Student,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StudentSubject::Table)
                    .if_not_exists()
                    .col(integer(StudentSubject::StudentId))
                    .col(integer(StudentSubject::SubjectId))
                    .col(integer_null(StudentSubject::Grade))
                    .primary_key(
                        Index::create()
                            .col(StudentSubject::StudentId)
                            .col(StudentSubject::SubjectId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_subject_student_id")
                            .from(StudentSubject::Table, StudentSubject::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_subject_subject_id")
                            .from(StudentSubject::Table, StudentSubject::SubjectId)
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
            .drop_table(Table::drop().table(StudentSubject::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StudentSubject {
    Table,
    StudentId,
    SubjectId,
    Grade,
}
