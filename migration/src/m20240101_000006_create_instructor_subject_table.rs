use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240101_000001_create_instructor_table::Instructor,
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
                    .table(InstructorSubject::Table)
                    .if_not_exists()
                    .col(integer(InstructorSubject::InstructorId))
                    .col(integer(InstructorSubject::SubjectId))
                    .primary_key(
                        Index::create()
                            .col(InstructorSubject::InstructorId)
                            .col(InstructorSubject::SubjectId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_instructor_subject_instructor_id")
                            .from(InstructorSubject::Table, InstructorSubject::InstructorId)
                            .to(Instructor::Table, Instructor::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_instructor_subject_subject_id")
                            .from(InstructorSubject::Table, InstructorSubject::SubjectId)
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
            .drop_table(Table::drop().table(InstructorSubject::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum InstructorSubject {
    Table,
    InstructorId,
    SubjectId,
}
