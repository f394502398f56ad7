//! Shared helpers for the factories.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Returns the next value of a process-wide counter used to keep default
/// names unique across factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Links a subject to a department.
pub async fn assign_subject_to_department(
    db: &DatabaseConnection,
    department_id: i32,
    subject_id: i32,
) -> Result<entity::department_subject::Model, DbErr> {
    entity::department_subject::ActiveModel {
        department_id: ActiveValue::Set(department_id),
        subject_id: ActiveValue::Set(subject_id),
    }
    .insert(db)
    .await
}

/// Links a subject to an instructor.
pub async fn assign_subject_to_instructor(
    db: &DatabaseConnection,
    instructor_id: i32,
    subject_id: i32,
) -> Result<entity::instructor_subject::Model, DbErr> {
    entity::instructor_subject::ActiveModel {
        instructor_id: ActiveValue::Set(instructor_id),
        subject_id: ActiveValue::Set(subject_id),
    }
    .insert(db)
    .await
}

/// Enrolls a student in a subject with an optional grade.
pub async fn enroll_student(
    db: &DatabaseConnection,
    student_id: i32,
    subject_id: i32,
    grade: Option<i32>,
) -> Result<entity::student_subject::Model, DbErr> {
    entity::student_subject::ActiveModel {
        student_id: ActiveValue::Set(student_id),
        subject_id: ActiveValue::Set(subject_id),
        grade: ActiveValue::Set(grade),
    }
    .insert(db)
    .await
}

/// Grants a role to a user.
pub async fn grant_role(
    db: &DatabaseConnection,
    user_id: i32,
    role_id: i32,
) -> Result<entity::user_role::Model, DbErr> {
    entity::user_role::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        role_id: ActiveValue::Set(role_id),
    }
    .insert(db)
    .await
}

/// Creates a department together with its managing instructor.
///
/// # Returns
/// - `Ok((manager, department))` - Both inserted rows
/// - `Err(DbErr)` - Insert failed
pub async fn create_department_with_manager(
    db: &DatabaseConnection,
) -> Result<(entity::instructor::Model, entity::department::Model), DbErr> {
    let manager = crate::factory::instructor::create_instructor(db).await?;
    let department = crate::factory::department::DepartmentFactory::new(db)
        .manager_id(manager.id)
        .build()
        .await?;

    Ok((manager, department))
}
