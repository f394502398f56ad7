//! Server-side API backend and business logic.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP routes, DTO to command conversion and validation
//! - **Mediator** (`mediator/`) - Dispatches each command or query to its single handler
//! - **Handler Layer** (`handler/`) - Business checks and persistence calls, one handler per request
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, commands, queries and their validation rules
//! - **Identity** (`identity/`) - User accounts, password hashing and access tokens
//! - **Error Layer** (`error/`) - Application error types and envelope mapping
//! - **Middleware** (`middleware/`) - Authentication guards and request culture
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, mediator, token service)
//! - **Startup** (`startup`) - Database connection, migrations, seeding and mediator wiring
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Localization** (`localization/`) - Culture selection and message lookup
//! - **Response** (`response`) - The envelope every endpoint answers with
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Middleware** extractors resolve the culture and reject unauthorized callers
//! 3. **Controller** builds the command or query and validates it
//! 4. **Mediator** hands it to the registered handler
//! 5. **Handler** checks business rules and calls the repositories
//! 6. **Handler** returns an envelope, rendered with its status code as JSON

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod handler;
pub mod identity;
pub mod localization;
pub mod mediator;
pub mod middleware;
pub mod model;
pub mod response;
pub mod router;
pub mod startup;
pub mod state;
pub mod util;
pub mod validation;
