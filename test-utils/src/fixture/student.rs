//! Student fixtures.

use entity::student;

pub const DEFAULT_NAME_EN: &str = "Ali";
pub const DEFAULT_NAME_AR: &str = "علي";
pub const DEFAULT_ADDRESS: &str = "Cairo";

/// Builds a student model with id `1`, default names and address, no phone and
/// no department.
pub fn entity() -> student::Model {
    student::Model {
        id: 1,
        name_ar: DEFAULT_NAME_AR.to_string(),
        name_en: DEFAULT_NAME_EN.to_string(),
        address: DEFAULT_ADDRESS.to_string(),
        phone: None,
        department_id: None,
    }
}

/// Builds the default student model attached to `department_id`.
pub fn entity_in_department(department_id: i32) -> student::Model {
    student::Model {
        department_id: Some(department_id),
        ..entity()
    }
}
