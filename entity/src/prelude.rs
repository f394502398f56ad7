pub use super::department::Entity as Department;
pub use super::department_subject::Entity as DepartmentSubject;
pub use super::instructor::Entity as Instructor;
pub use super::instructor_subject::Entity as InstructorSubject;
pub use super::role::Entity as Role;
pub use super::student::Entity as Student;
pub use super::student_subject::Entity as StudentSubject;
pub use super::subject::Entity as Subject;
pub use super::user::Entity as User;
pub use super::user_role::Entity as UserRole;
