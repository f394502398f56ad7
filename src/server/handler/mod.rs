//! Request handlers, one per command or query.
//!
//! Handlers run the business checks that need the database (existence,
//! uniqueness, referential conflicts), call the repositories and build the
//! response envelope. Every expected outcome, including not-found and duplicates,
//! is returned as an envelope; only infrastructure failures leave as `AppError`.
//!
//! Syntactic validation happens before dispatch in the controllers, so handlers
//! assume their request passed [`Validate`](crate::server::validation::Validate).

pub mod authentication;
pub mod department;
pub mod instructor;
pub mod role;
pub mod student;
pub mod subject;
pub mod user;

#[cfg(test)]
mod test;

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    identity::JwtService,
    localization::MessageKey,
    mediator::{DispatchError, MediatorBuilder},
    response::{Response, ResponseHandler},
};

/// Registers the handler of every command and query.
///
/// # Returns
/// - `Ok(MediatorBuilder)` - Builder with all handlers registered
/// - `Err(DispatchError::DuplicateHandler)` - A request type was registered twice
pub fn register_all(
    builder: MediatorBuilder,
    db: &DatabaseConnection,
    jwt: &JwtService,
) -> Result<MediatorBuilder, DispatchError> {
    let builder = student::register(builder, db)?;
    let builder = department::register(builder, db)?;
    let builder = instructor::register(builder, db)?;
    let builder = subject::register(builder, db)?;
    let builder = role::register(builder, db)?;
    let builder = user::register(builder, db, jwt)?;
    authentication::register(builder, db, jwt)
}

/// Turns a failed write into a bad request.
///
/// A unique-constraint violation means a concurrent request won the race past
/// the handler's own uniqueness check and is reported as `IsExist`; anything
/// else is logged and reported with `key`.
pub(crate) fn write_failed<T>(
    responses: &ResponseHandler,
    operation: &str,
    err: DbErr,
    key: MessageKey,
) -> Response<T> {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::warn!("{} hit a unique constraint: {}", operation, detail);
            responses.bad_request(MessageKey::IsExist)
        }
        _ => {
            tracing::error!("{} failed: {}", operation, err);
            responses.bad_request(key)
        }
    }
}
