use sea_orm::DatabaseConnection;

use crate::server::{
    data::{role::RoleRepository, user::UserRepository},
    model::user::{CreateUserParams, UpdateUserParams, User},
};

use super::{
    password::{hash_password, verify_password, PasswordPolicy},
    IdentityError,
};

/// Characters allowed in a user name besides ASCII letters and digits.
const USER_NAME_SYMBOLS: &str = "-._@+";

/// User account operations enforcing uniqueness and the password policy.
pub struct UserManager<'a> {
    users: UserRepository<'a>,
    roles: RoleRepository<'a>,
    policy: PasswordPolicy,
}

impl<'a> UserManager<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            users: UserRepository::new(db),
            roles: RoleRepository::new(db),
            policy: PasswordPolicy::default(),
        }
    }

    /// Creates a user with a hashed password holding `role_names`.
    ///
    /// The user row and its role memberships are written in one transaction.
    ///
    /// # Arguments
    /// - `params` - Profile fields of the new user
    /// - `password` - Plain text password, checked against the password policy
    /// - `role_names` - Existing roles granted to the new user
    ///
    /// # Returns
    /// - `Ok(Model)` - Inserted user row
    /// - `Err(IdentityError)` - Name or email taken, invalid name, weak password,
    ///   unknown role or database error; nothing was stored
    pub async fn create(
        &self,
        params: CreateUserParams,
        password: &str,
        role_names: &[&str],
    ) -> Result<entity::user::Model, IdentityError> {
        self.check_profile(&params.user_name, &params.email, None)
            .await?;
        self.policy
            .check(password)
            .map_err(IdentityError::WeakPassword)?;

        let mut role_ids = Vec::with_capacity(role_names.len());
        for name in role_names {
            let role = self
                .roles
                .find_by_name(name)
                .await?
                .ok_or_else(|| IdentityError::RoleNotFound(name.to_string()))?;
            role_ids.push(role.id);
        }

        let password_hash = hash_password(password)?;

        Ok(self.users.create(params, password_hash, &role_ids).await?)
    }

    /// Updates the profile of an existing user.
    pub async fn update(&self, params: UpdateUserParams) -> Result<User, IdentityError> {
        if self.users.find_by_id(params.id).await?.is_none() {
            return Err(IdentityError::UserNotFound(params.id));
        }
        self.check_profile(&params.user_name, &params.email, Some(params.id))
            .await?;

        let model = self.users.update(params).await?;
        let roles = self.users.role_names(model.id).await?;

        Ok(User::from_entity(model, roles))
    }

    /// Deletes a user and its role memberships.
    pub async fn delete(&self, id: i32) -> Result<(), IdentityError> {
        if self.users.delete(id).await? {
            Ok(())
        } else {
            Err(IdentityError::UserNotFound(id))
        }
    }

    /// Replaces a user's password after verifying the current one.
    ///
    /// # Returns
    /// - `Ok(())` - Password changed
    /// - `Err(IdentityError::UserNotFound)` - No user with that id
    /// - `Err(IdentityError::PasswordMismatch)` - Current password is wrong
    /// - `Err(IdentityError::WeakPassword)` - New password breaks the policy
    pub async fn change_password(
        &self,
        id: i32,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), IdentityError> {
        let user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or(IdentityError::UserNotFound(id))?;

        if !verify_password(current_password, &user.password_hash)? {
            return Err(IdentityError::PasswordMismatch);
        }
        self.policy
            .check(new_password)
            .map_err(IdentityError::WeakPassword)?;

        let password_hash = hash_password(new_password)?;
        self.users.set_password_hash(id, password_hash).await?;

        Ok(())
    }

    /// Verifies a password against the user's stored hash.
    pub fn check_password(
        &self,
        user: &entity::user::Model,
        password: &str,
    ) -> Result<bool, IdentityError> {
        verify_password(password, &user.password_hash)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, IdentityError> {
        Ok(self.users.find_by_id(id).await?)
    }

    pub async fn find_by_user_name(
        &self,
        user_name: &str,
    ) -> Result<Option<entity::user::Model>, IdentityError> {
        Ok(self.users.find_by_user_name(user_name).await?)
    }

    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::user::Model>, IdentityError> {
        Ok(self.users.find_by_email(email).await?)
    }

    pub async fn roles(&self, user_id: i32) -> Result<Vec<String>, IdentityError> {
        Ok(self.users.role_names(user_id).await?)
    }

    async fn check_profile(
        &self,
        user_name: &str,
        email: &str,
        exclude_id: Option<i32>,
    ) -> Result<(), IdentityError> {
        if !is_valid_user_name(user_name) {
            return Err(IdentityError::InvalidUserName(user_name.to_string()));
        }
        if self.users.user_name_exists(user_name, exclude_id).await? {
            return Err(IdentityError::DuplicateUserName(user_name.to_string()));
        }
        if self.users.email_exists(email, exclude_id).await? {
            return Err(IdentityError::DuplicateEmail(email.to_string()));
        }

        Ok(())
    }
}

fn is_valid_user_name(user_name: &str) -> bool {
    !user_name.is_empty()
        && user_name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || USER_NAME_SYMBOLS.contains(c))
}
