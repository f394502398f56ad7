//! Student factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for student rows.
///
/// Defaults: unique English and Arabic names, `address = "Cairo"`, no phone,
/// no department.
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    name_ar: String,
    name_en: String,
    address: String,
    phone: Option<String>,
    department_id: Option<i32>,
}

impl<'a> StudentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name_ar: format!("طالب {}", id),
            name_en: format!("Student {}", id),
            address: "Cairo".to_string(),
            phone: None,
            department_id: None,
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

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn department_id(mut self, department_id: Option<i32>) -> Self {
        self.department_id = department_id;
        self
    }

    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            name_ar: ActiveValue::Set(self.name_ar),
            name_en: ActiveValue::Set(self.name_en),
            address: ActiveValue::Set(self.address),
            phone: ActiveValue::Set(self.phone),
            department_id: ActiveValue::Set(self.department_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values.
pub async fn create_student(db: &DatabaseConnection) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db).build().await
}

/// Creates `count` students in the given department.
pub async fn create_students_in_department(
    db: &DatabaseConnection,
    department_id: i32,
    count: usize,
) -> Result<Vec<entity::student::Model>, DbErr> {
    let mut students = Vec::with_capacity(count);
    for _ in 0..count {
        students.push(
            StudentFactory::new(db)
                .department_id(Some(department_id))
                .build()
                .await?,
        );
    }
    Ok(students)
}
