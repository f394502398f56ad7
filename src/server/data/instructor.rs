use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::{
    instructor::{CreateInstructorParams, Instructor},
    subject::Subject,
};

pub struct InstructorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InstructorRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Instructor>, DbErr> {
        let rows = entity::prelude::Instructor::find()
            .find_also_related(entity::prelude::Department)
            .order_by_asc(entity::instructor::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(instructor, department)| Instructor::from_entity(instructor, department))
            .collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Instructor>, DbErr> {
        let row = entity::prelude::Instructor::find_by_id(id)
            .find_also_related(entity::prelude::Department)
            .one(self.db)
            .await?;

        Ok(row.map(|(instructor, department)| Instructor::from_entity(instructor, department)))
    }

    pub async fn create(&self, params: CreateInstructorParams) -> Result<Instructor, DbErr> {
        let instructor = entity::instructor::ActiveModel {
            name_ar: ActiveValue::Set(params.name_ar),
            name_en: ActiveValue::Set(params.name_en),
            address: ActiveValue::Set(params.address),
            position: ActiveValue::Set(params.position),
            salary: ActiveValue::Set(params.salary),
            department_id: ActiveValue::Set(params.department_id),
            supervisor_id: ActiveValue::Set(params.supervisor_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.get_by_id(instructor.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Instructor with id {} not found after creation",
                instructor.id
            )))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Instructor::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Links a subject to an instructor and returns the subject.
    pub async fn assign_subject(&self, instructor_id: i32, subject_id: i32) -> Result<Subject, DbErr> {
        entity::instructor_subject::ActiveModel {
            instructor_id: ActiveValue::Set(instructor_id),
            subject_id: ActiveValue::Set(subject_id),
        }
        .insert(self.db)
        .await?;

        entity::prelude::Subject::find_by_id(subject_id)
            .one(self.db)
            .await?
            .map(Subject::from_entity)
            .ok_or(DbErr::RecordNotFound(format!(
                "Subject with id {} not found after assignment",
                subject_id
            )))
    }

    pub async fn teaches(&self, instructor_id: i32, subject_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::InstructorSubject::find_by_id((instructor_id, subject_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
