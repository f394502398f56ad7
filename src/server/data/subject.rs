use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::subject::{CreateSubjectParams, Subject};

pub struct SubjectRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubjectRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Subject>, DbErr> {
        let subjects = entity::prelude::Subject::find()
            .order_by_asc(entity::subject::Column::Id)
            .all(self.db)
            .await?;

        Ok(subjects.into_iter().map(Subject::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Subject>, DbErr> {
        let subject = entity::prelude::Subject::find_by_id(id).one(self.db).await?;

        Ok(subject.map(Subject::from_entity))
    }

    pub async fn create(&self, params: CreateSubjectParams) -> Result<Subject, DbErr> {
        let subject = entity::subject::ActiveModel {
            name_ar: ActiveValue::Set(params.name_ar),
            name_en: ActiveValue::Set(params.name_en),
            period: ActiveValue::Set(params.period),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Subject::from_entity(subject))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Subject::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn name_en_exists(&self, name_en: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Subject::find()
            .filter(entity::subject::Column::NameEn.eq(name_en))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
