//! Instructor factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for instructor rows.
///
/// Defaults: `name_en = "Instructor {n}"`, `name_ar = "مدرس {n}"`, no department,
/// no supervisor, no salary.
pub struct InstructorFactory<'a> {
    db: &'a DatabaseConnection,
    name_ar: String,
    name_en: String,
    position: Option<String>,
    salary: Option<f64>,
    department_id: Option<i32>,
    supervisor_id: Option<i32>,
}

impl<'a> InstructorFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name_ar: format!("مدرس {}", id),
            name_en: format!("Instructor {}", id),
            position: None,
            salary: None,
            department_id: None,
            supervisor_id: None,
        }
    }

    pub fn name_en(mut self, name: impl Into<String>) -> Self {
        self.name_en = name.into();
        self
    }

    pub fn name_ar(mut self, name: impl Into<String>) -> Self {
        self.name_ar = name.into();
        self
    }

    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn salary(mut self, salary: f64) -> Self {
        self.salary = Some(salary);
        self
    }

    pub fn department_id(mut self, department_id: Option<i32>) -> Self {
        self.department_id = department_id;
        self
    }

    pub fn supervisor_id(mut self, supervisor_id: Option<i32>) -> Self {
        self.supervisor_id = supervisor_id;
        self
    }

    /// Inserts the instructor.
    pub async fn build(self) -> Result<entity::instructor::Model, DbErr> {
        entity::instructor::ActiveModel {
            name_ar: ActiveValue::Set(self.name_ar),
            name_en: ActiveValue::Set(self.name_en),
            address: ActiveValue::Set(None),
            position: ActiveValue::Set(self.position),
            salary: ActiveValue::Set(self.salary),
            department_id: ActiveValue::Set(self.department_id),
            supervisor_id: ActiveValue::Set(self.supervisor_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an instructor with default values.
pub async fn create_instructor(db: &DatabaseConnection) -> Result<entity::instructor::Model, DbErr> {
    InstructorFactory::new(db).build().await
}
