//! Database repository layer for all domain entities.
//!
//! Each repository wraps a borrowed `DatabaseConnection` and handles the CRUD,
//! pagination and existence queries for one entity. Entity rows are converted to
//! domain models at this boundary, so nothing above the data layer sees SeaORM
//! models. Multi-statement writes open their own transaction.

pub mod department;
pub mod instructor;
pub mod role;
pub mod student;
pub mod subject;
pub mod user;

#[cfg(test)]
mod test;
