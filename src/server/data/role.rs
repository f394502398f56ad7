//! Role data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::role::Role;

/// Repository providing database operations for roles.
pub struct RoleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Role>, DbErr> {
        let roles = entity::prelude::Role::find()
            .order_by_asc(entity::role::Column::Id)
            .all(self.db)
            .await?;

        Ok(roles.into_iter().map(Role::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Role>, DbErr> {
        let role = entity::prelude::Role::find_by_id(id).one(self.db).await?;

        Ok(role.map(Role::from_entity))
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Role>, DbErr> {
        let role = entity::prelude::Role::find()
            .filter(entity::role::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(role.map(Role::from_entity))
    }

    pub async fn create(&self, name: String) -> Result<Role, DbErr> {
        let role = entity::role::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Role::from_entity(role))
    }

    /// Renames a role.
    ///
    /// # Returns
    /// - `Ok(Role)` - Renamed role
    /// - `Err(DbErr::RecordNotUpdated)` - No role with that id
    pub async fn update(&self, id: i32, name: String) -> Result<Role, DbErr> {
        let role = entity::role::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(name),
        }
        .update(self.db)
        .await?;

        Ok(Role::from_entity(role))
    }

    /// Deletes a role. Fails with a foreign-key error while users still hold it.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Role::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether a role other than `exclude_id` is named `name`.
    pub async fn name_exists(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Role::find().filter(entity::role::Column::Name.eq(name));
        if let Some(id) = exclude_id {
            query = query.filter(entity::role::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Returns whether any user holds the role.
    pub async fn is_assigned(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::UserRole::find()
            .filter(entity::user_role::Column::RoleId.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Returns the role named `name`, creating it when missing.
    pub async fn get_or_create(&self, name: &str) -> Result<Role, DbErr> {
        if let Some(role) = self.find_by_name(name).await? {
            return Ok(role);
        }

        self.create(name.to_string()).await
    }
}
