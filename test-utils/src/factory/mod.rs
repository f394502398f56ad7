//! Factory methods for inserting test data.
//!
//! Every entity has a `XFactory` builder for customized rows and a `create_*`
//! shorthand that inserts a row with unique defaults. Factories that need a
//! parent row (a department needs its manager) create one when none is given.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let department = factory::department::create_department(db).await?;
//! let student = factory::student::StudentFactory::new(db)
//!     .name_en("Ali")
//!     .department_id(Some(department.id))
//!     .build()
//!     .await?;
//! ```

pub mod department;
pub mod helpers;
pub mod instructor;
pub mod role;
pub mod student;
pub mod subject;
pub mod user;

pub use department::create_department;
pub use instructor::create_instructor;
pub use role::create_role;
pub use student::create_student;
pub use subject::create_subject;
pub use user::create_user;
