//! SeaORM entity definitions for the school database.

pub mod prelude;

pub mod department;
pub mod department_subject;
pub mod instructor;
pub mod instructor_subject;
pub mod role;
pub mod student;
pub mod student_subject;
pub mod subject;
pub mod user;
pub mod user_role;
