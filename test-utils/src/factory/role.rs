//! Role factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a role with the given name.
pub async fn create_role_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::role::Model, DbErr> {
    entity::role::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Inserts a role named `Role {n}`.
pub async fn create_role(db: &DatabaseConnection) -> Result<entity::role::Model, DbErr> {
    create_role_named(db, format!("Role {}", next_id())).await
}
