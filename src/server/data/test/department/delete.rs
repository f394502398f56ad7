use super::*;

/// Tests deleting a department that still has students.
///
/// Verifies that the students survive with their department reference cleared.
///
/// Expected: Ok(true) and every former member has a null department
#[tokio::test]
async fn nulls_student_department() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let department = factory::create_department(db).await?;
    let students =
        factory::student::create_students_in_department(db, department.id, 3).await?;

    let repo = DepartmentRepository::new(db);

    assert!(repo.delete(department.id).await?);
    assert!(!repo.exists(department.id).await?);
    for student in students {
        let row = entity::prelude::Student::find_by_id(student.id)
            .one(db)
            .await?
            .unwrap();
        assert_eq!(row.department_id, None);
    }

    Ok(())
}

/// Tests deleting a department that has subjects assigned.
///
/// Expected: Err, and both the department and its students are untouched
#[tokio::test]
async fn fails_when_subjects_assigned() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let department = factory::create_department(db).await?;
    let subject = factory::create_subject(db).await?;
    factory::helpers::assign_subject_to_department(db, department.id, subject.id).await?;
    let students =
        factory::student::create_students_in_department(db, department.id, 2).await?;

    let repo = DepartmentRepository::new(db);
    let result = repo.delete(department.id).await;

    assert!(result.is_err());
    assert!(repo.exists(department.id).await?);
    let row = entity::prelude::Student::find_by_id(students[0].id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(row.department_id, Some(department.id));

    Ok(())
}

/// Tests deleting a department that instructors belong to.
///
/// Expected: Err from the restrict rule
#[tokio::test]
async fn fails_when_instructors_assigned() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let department = factory::create_department(db).await?;
    factory::instructor::InstructorFactory::new(db)
        .department_id(Some(department.id))
        .build()
        .await?;

    let repo = DepartmentRepository::new(db);

    assert!(repo.delete(department.id).await.is_err());

    Ok(())
}

/// Tests deleting an unknown department.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_department() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DepartmentRepository::new(db);

    assert!(!repo.delete(5).await?);

    Ok(())
}
