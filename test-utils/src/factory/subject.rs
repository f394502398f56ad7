//! Subject factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for subject rows.
pub struct SubjectFactory<'a> {
    db: &'a DatabaseConnection,
    name_ar: String,
    name_en: String,
    period: Option<i32>,
}

impl<'a> SubjectFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name_ar: format!("مادة {}", id),
            name_en: format!("Subject {}", id),
            period: None,
        }
    }

    pub fn name_en(mut self, name: impl Into<String>) -> Self {
        self.name_en = name.into();
        self
    }

    pub fn period(mut self, period: i32) -> Self {
        self.period = Some(period);
        self
    }

    pub async fn build(self) -> Result<entity::subject::Model, DbErr> {
        entity::subject::ActiveModel {
            name_ar: ActiveValue::Set(self.name_ar),
            name_en: ActiveValue::Set(self.name_en),
            period: ActiveValue::Set(self.period),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a subject with default values.
pub async fn create_subject(db: &DatabaseConnection) -> Result<entity::subject::Model, DbErr> {
    SubjectFactory::new(db).build().await
}
