//! Error types and their conversion into response envelopes.
//!
//! Handlers turn every expected business condition into an envelope themselves;
//! `AppError` covers what is left: authentication failures, infrastructure
//! errors and programming errors such as a missing handler registration.
//! Infrastructure details are logged and never returned to the client.

pub mod auth;
pub mod config;

use axum::response::IntoResponse;
use thiserror::Error;

use crate::server::{
    error::{auth::AuthError, config::ConfigError},
    identity::IdentityError,
    localization::{Locale, Localizer, MessageKey},
    mediator::DispatchError,
    response::{Response, ResponseHandler, ResponseStatus},
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup. Renders as 500.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization failure. Renders as 401 or 403.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database error that no handler anticipated.
    ///
    /// Renders as a generic 400 so a racing constraint violation surfaces as a
    /// business failure rather than a server fault.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Mediator misconfiguration. Renders as 500.
    #[error(transparent)]
    DispatchErr(#[from] DispatchError),

    /// Identity provider failure that no handler anticipated.
    ///
    /// Renders as 400, except for password hashing failures which are 500.
    #[error(transparent)]
    IdentityErr(#[from] IdentityError),

    /// Token signing failure. Renders as 500.
    #[error(transparent)]
    TokenErr(#[from] jsonwebtoken::errors::Error),

    /// Socket or file error, only raised during startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

impl AppError {
    /// Converts the error into a failed envelope localized for the request.
    pub fn into_envelope<T>(self, responses: &ResponseHandler) -> Response<T> {
        match self {
            Self::AuthErr(err) => {
                tracing::debug!("{}", err);
                match err.status() {
                    ResponseStatus::Forbidden => responses.forbidden(),
                    _ => responses.unauthorized(),
                }
            }
            Self::DbErr(err) => {
                tracing::error!("Database error: {}", err);
                responses.bad_request(MessageKey::BadRequest)
            }
            Self::IdentityErr(IdentityError::Hash(detail)) => {
                tracing::error!("Password hash failure: {}", detail);
                responses.internal_error()
            }
            Self::IdentityErr(err) => {
                tracing::warn!("Identity error: {}", err);
                responses.bad_request(MessageKey::BadRequest)
            }
            err => {
                tracing::error!("{}", err);
                responses.internal_error()
            }
        }
    }
}

/// Renders with the default culture; handlers and controllers that know the
/// request culture use [`AppError::into_envelope`] instead.
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let responses = ResponseHandler::new(Localizer::new(Locale::default()));
        self.into_envelope::<()>(&responses).into_response()
    }
}
