//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into every request through
//! Axum's state extraction. All fields are cheap to clone: the database
//! connection is a pool, the mediator keeps its handler table behind an `Arc`,
//! and the JWT service only holds keys and a few strings.

use sea_orm::DatabaseConnection;

use crate::server::{identity::JwtService, mediator::Mediator};

#[derive(Clone)]
pub struct AppState {
    /// Connection pool used by the auth guard to resolve the calling user.
    pub db: DatabaseConnection,

    /// Dispatches every command and query to its handler.
    pub mediator: Mediator,

    /// Verifies bearer tokens on protected routes.
    pub jwt: JwtService,
}

impl AppState {
    /// Creates the application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `mediator` - Mediator with every handler registered
    /// - `jwt` - Token service sharing the signing settings of the handlers
    pub fn new(db: DatabaseConnection, mediator: Mediator, jwt: JwtService) -> Self {
        Self { db, mediator, jwt }
    }
}
