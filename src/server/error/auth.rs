use thiserror::Error;

use crate::server::response::ResponseStatus;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header was sent.
    #[error("Request has no bearer token")]
    MissingToken,

    /// The bearer token failed signature, expiry, issuer or audience checks.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// The token subject is not a number.
    #[error("Token subject '{0}' is not a user id")]
    InvalidSubject(String),

    /// The token refers to a user that no longer exists.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(i32),

    /// The user lacks a role the endpoint requires.
    #[error("User {user_id} denied access: missing role {role}")]
    AccessDenied { user_id: i32, role: String },
}

impl AuthError {
    /// 403 when the caller is known but lacks a role, 401 otherwise.
    pub fn status(&self) -> ResponseStatus {
        match self {
            Self::AccessDenied { .. } => ResponseStatus::Forbidden,
            _ => ResponseStatus::Unauthorized,
        }
    }
}
