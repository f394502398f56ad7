//! In-memory entity models for unit tests that never touch the database.

pub mod department;
pub mod student;
