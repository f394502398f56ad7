use super::*;

/// Tests the department detail view.
///
/// Verifies that subjects, instructors and the requested page of students are
/// loaded together with the total student count.
///
/// Expected: Ok(Some) with 2 students on page 2 of size 3 out of 5
#[tokio::test]
async fn loads_members_and_student_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let department = factory::create_department(db).await?;
    let subject = factory::create_subject(db).await?;
    factory::helpers::assign_subject_to_department(db, department.id, subject.id).await?;
    factory::instructor::InstructorFactory::new(db)
        .department_id(Some(department.id))
        .build()
        .await?;
    factory::student::create_students_in_department(db, department.id, 5).await?;
    factory::create_student(db).await?;

    let repo = DepartmentRepository::new(db);
    let detail = repo
        .get_detail(department.id, PageRequest::new(Some(2), Some(3)))
        .await?
        .unwrap();

    assert_eq!(detail.department.id, department.id);
    assert!(detail.department.manager.is_some());
    assert_eq!(detail.subjects.len(), 1);
    assert_eq!(detail.subjects[0].id, subject.id);
    assert_eq!(detail.instructors.len(), 1);
    assert_eq!(detail.students.items.len(), 2);
    assert_eq!(detail.students.total, 5);

    Ok(())
}

/// Tests the detail view for an unknown id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DepartmentRepository::new(db);

    assert!(repo.get_detail(3, PageRequest::default()).await?.is_none());

    Ok(())
}
