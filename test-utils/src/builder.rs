use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for test contexts with a chosen set of tables.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Instructor, Department};
///
/// let test = TestBuilder::new()
///     .with_table(Instructor)
///     .with_table(Department)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements, executed in insertion order by `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds the table of a SeaORM entity using SQLite syntax.
    ///
    /// Foreign keys are checked when rows are written, not when the table is
    /// created, so the instructor/department cycle can be added in either order.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every academic table: instructors, departments, subjects, students
    /// and the three join tables.
    pub fn with_school_tables(self) -> Self {
        self.with_table(Instructor)
            .with_table(Department)
            .with_table(Subject)
            .with_table(Student)
            .with_table(DepartmentSubject)
            .with_table(InstructorSubject)
            .with_table(StudentSubject)
    }

    /// Adds the user, role and user-role tables.
    pub fn with_identity_tables(self) -> Self {
        self.with_table(Role).with_table(User).with_table(UserRole)
    }

    /// Opens the in-memory database and creates the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with every table created
    /// - `Err(TestError::Database)` - Connection or table creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
