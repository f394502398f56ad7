pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_instructor_table;
mod m20240101_000002_create_department_table;
mod m20240101_000003_create_subject_table;
mod m20240101_000004_create_student_table;
mod m20240101_000005_create_department_subject_table;
mod m20240101_000006_create_instructor_subject_table;
mod m20240101_000007_create_student_subject_table;
mod m20240102_000008_create_role_table;
mod m20240102_000009_create_user_table;
mod m20240102_000010_create_user_role_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_instructor_table::Migration),
            Box::new(m20240101_000002_create_department_table::Migration),
            Box::new(m20240101_000003_create_subject_table::Migration),
            Box::new(m20240101_000004_create_student_table::Migration),
            Box::new(m20240101_000005_create_department_subject_table::Migration),
            Box::new(m20240101_000006_create_instructor_subject_table::Migration),
            Box::new(m20240101_000007_create_student_subject_table::Migration),
            Box::new(m20240102_000008_create_role_table::Migration),
            Box::new(m20240102_000009_create_user_table::Migration),
            Box::new(m20240102_000010_create_user_role_table::Migration),
        ]
    }
}
