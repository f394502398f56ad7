//! Authentication provider: user accounts, password policy and access tokens.
//!
//! [`UserManager`] is the only place that creates users, hashes passwords and
//! grants roles. Every failure is an [`IdentityError`] whose message is the
//! description returned to the client. [`JwtService`] issues and verifies the
//! bearer tokens handed out at registration and sign-in.

mod jwt;
mod manager;
mod password;

pub use jwt::JwtService;
pub use manager::UserManager;
pub use password::PasswordRule;

use std::borrow::Cow;

use sea_orm::DbErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("User name '{0}' is already taken.")]
    DuplicateUserName(String),

    #[error("Email '{0}' is already taken.")]
    DuplicateEmail(String),

    #[error("User name '{0}' is invalid, can only contain letters, digits or -._@+")]
    InvalidUserName(String),

    /// The password broke one or more policy rules. Displays the first one.
    #[error("{}", first_rule(.0))]
    WeakPassword(Vec<PasswordRule>),

    #[error("Incorrect password.")]
    PasswordMismatch,

    #[error("User {0} not found.")]
    UserNotFound(i32),

    #[error("Role '{0}' does not exist.")]
    RoleNotFound(String),

    #[error(transparent)]
    Database(#[from] DbErr),

    #[error("Password hash operation failed: {0}")]
    Hash(String),
}

impl IdentityError {
    /// Whether the message is safe to show to the caller.
    ///
    /// Database and hashing failures are infrastructure errors and must be
    /// replaced by a generic message.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, Self::Database(_) | Self::Hash(_))
    }
}

fn first_rule(rules: &[PasswordRule]) -> Cow<'static, str> {
    rules
        .first()
        .map(PasswordRule::description)
        .unwrap_or(Cow::Borrowed("Password does not meet the requirements."))
}
