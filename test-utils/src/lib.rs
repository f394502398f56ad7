//! School Test Utils
//!
//! Shared testing utilities for the school backend. Tests get an in-memory SQLite
//! database with exactly the tables they need, plus factories that insert rows
//! with unique default values.
//!
//! # Overview
//!
//! - **TestBuilder**: fluent builder for configuring the schema of a test database
//! - **TestContext**: the built environment holding the database connection
//! - **TestError**: errors raised while setting up the environment
//! - **factory**: inserting builders for every school entity
//! - **fixture**: in-memory entity models that never touch the database
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn lists_students() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_school_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let student = factory::student::create_student(db).await?;
//!     // ...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
