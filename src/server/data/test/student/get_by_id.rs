use super::*;

/// Tests fetching an existing student.
///
/// Expected: Ok(Some) with the department's names
#[tokio::test]
async fn returns_student_with_department() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let department = factory::create_department(db).await?;
    let created = factory::student::StudentFactory::new(db)
        .department_id(Some(department.id))
        .build()
        .await?;

    let repo = StudentRepository::new(db);
    let student = repo.get_by_id(created.id).await?.unwrap();

    let info = student.department.unwrap();
    assert_eq!(info.name_en, department.name_en);
    assert_eq!(info.name_ar, department.name_ar);

    Ok(())
}

/// Tests fetching an unknown id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);

    assert!(repo.get_by_id(42).await?.is_none());

    Ok(())
}
