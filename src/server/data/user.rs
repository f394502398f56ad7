//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for application users and their role
//! memberships. Password hashes are only ever written and read here; the identity
//! layer decides what goes into them.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::{
    user::{CreateUserParams, UpdateUserParams, User},
    PageRequest, Paginated,
};

/// Repository providing database operations for user management.
///
/// Lookups used for authentication return the raw entity so the caller can
/// verify the stored password hash; everything else returns the `User` domain
/// model with its role names.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a user with an already hashed password together with its role
    /// memberships.
    ///
    /// # Arguments
    /// - `params` - Profile fields of the new user
    /// - `password_hash` - PHC string produced by the password hasher
    /// - `role_ids` - Roles granted to the new user
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted row
    /// - `Err(DbErr)` - Database error, including unique violations on user name or
    ///   email; the transaction was rolled back and no row was written
    pub async fn create(
        &self,
        params: CreateUserParams,
        password_hash: String,
        role_ids: &[i32],
    ) -> Result<entity::user::Model, DbErr> {
        let txn = self.db.begin().await?;

        match Self::insert_with_roles(&txn, params, password_hash, role_ids).await {
            Ok(user) => {
                txn.commit().await?;
                Ok(user)
            }
            Err(err) => {
                txn.rollback().await?;
                Err(err)
            }
        }
    }

    async fn insert_with_roles(
        txn: &DatabaseTransaction,
        params: CreateUserParams,
        password_hash: String,
        role_ids: &[i32],
    ) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            full_name: ActiveValue::Set(params.full_name),
            user_name: ActiveValue::Set(params.user_name),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(password_hash),
            address: ActiveValue::Set(params.address),
            country: ActiveValue::Set(params.country),
            phone_number: ActiveValue::Set(params.phone_number),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(txn)
        .await?;

        for role_id in role_ids {
            entity::user_role::ActiveModel {
                user_id: ActiveValue::Set(user.id),
                role_id: ActiveValue::Set(*role_id),
            }
            .insert(txn)
            .await?;
        }

        Ok(user)
    }

    /// Updates the profile fields of a user. The password hash is left untouched.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated row
    /// - `Err(DbErr::RecordNotUpdated)` - No user with that id
    pub async fn update(&self, params: UpdateUserParams) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Unchanged(params.id),
            full_name: ActiveValue::Set(params.full_name),
            user_name: ActiveValue::Set(params.user_name),
            email: ActiveValue::Set(params.email),
            address: ActiveValue::Set(params.address),
            country: ActiveValue::Set(params.country),
            phone_number: ActiveValue::Set(params.phone_number),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    /// Replaces the stored password hash of a user.
    pub async fn set_password_hash(&self, id: i32, password_hash: String) -> Result<(), DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Unchanged(id),
            password_hash: ActiveValue::Set(password_hash),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Deletes a user. Role memberships cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_user_name(
        &self,
        user_name: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::UserName.eq(user_name))
            .one(self.db)
            .await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Gets a user with its role names.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let Some(user) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        let roles = self.role_names(user.id).await?;

        Ok(Some(User::from_entity(user, roles)))
    }

    /// Gets all users with pagination, ordered by id.
    ///
    /// # Arguments
    /// - `page` - 1-based page number and page size
    ///
    /// # Returns
    /// - `Ok(Paginated<User>)` - Users of the page with their roles and the total user count
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated(&self, page: PageRequest) -> Result<Paginated<User>, DbErr> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .paginate(self.db, page.page_size);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page.index()).await?;

        let mut items = Vec::with_capacity(rows.len());
        for user in rows {
            let roles = self.role_names(user.id).await?;
            items.push(User::from_entity(user, roles));
        }

        Ok(Paginated {
            items,
            total,
            request: page,
        })
    }

    /// Names of the roles held by a user, ordered by role id.
    pub async fn role_names(&self, user_id: i32) -> Result<Vec<String>, DbErr> {
        let rows = entity::prelude::UserRole::find()
            .filter(entity::user_role::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Role)
            .order_by_asc(entity::user_role::Column::RoleId)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, role)| role.map(|r| r.name))
            .collect())
    }

    /// Checks whether a user other than `exclude_id` has `user_name`.
    pub async fn user_name_exists(
        &self,
        user_name: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::User::find()
            .filter(entity::user::Column::UserName.eq(user_name));
        if let Some(id) = exclude_id {
            query = query.filter(entity::user::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Checks whether a user other than `exclude_id` has `email`.
    pub async fn email_exists(&self, email: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::User::find().filter(entity::user::Column::Email.eq(email));
        if let Some(id) = exclude_id {
            query = query.filter(entity::user::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }
}
