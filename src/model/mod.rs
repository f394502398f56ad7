//! Wire DTOs shared by the HTTP layer and the OpenAPI document.
//!
//! Every DTO is camelCase on the wire.

pub mod api;
pub mod auth;
pub mod department;
pub mod instructor;
pub mod role;
pub mod student;
pub mod subject;
pub mod user;
