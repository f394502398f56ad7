//! Department factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for department rows.
///
/// When no manager is set, `build()` first inserts a default instructor to
/// satisfy the non-nullable manager reference.
pub struct DepartmentFactory<'a> {
    db: &'a DatabaseConnection,
    name_ar: String,
    name_en: String,
    manager_id: Option<i32>,
}

impl<'a> DepartmentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name_ar: format!("قسم {}", id),
            name_en: format!("Department {}", id),
            manager_id: None,
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

    pub fn manager_id(mut self, manager_id: i32) -> Self {
        self.manager_id = Some(manager_id);
        self
    }

    /// Inserts the department, creating a manager if none was given.
    pub async fn build(self) -> Result<entity::department::Model, DbErr> {
        let manager_id = match self.manager_id {
            Some(id) => id,
            None => crate::factory::instructor::create_instructor(self.db).await?.id,
        };

        entity::department::ActiveModel {
            name_ar: ActiveValue::Set(self.name_ar),
            name_en: ActiveValue::Set(self.name_en),
            manager_id: ActiveValue::Set(manager_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a department, and its manager, with default values.
pub async fn create_department(db: &DatabaseConnection) -> Result<entity::department::Model, DbErr> {
    DepartmentFactory::new(db).build().await
}
