//! Department fixtures.

use entity::department;

pub const DEFAULT_NAME_EN: &str = "Computer Science";
pub const DEFAULT_NAME_AR: &str = "علوم الحاسب";

/// Builds a department model with id `1` managed by instructor `1`.
pub fn entity() -> department::Model {
    department::Model {
        id: 1,
        name_ar: DEFAULT_NAME_AR.to_string(),
        name_en: DEFAULT_NAME_EN.to_string(),
        manager_id: 1,
    }
}
