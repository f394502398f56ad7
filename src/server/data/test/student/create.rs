use super::*;

fn params(name_en: &str, department_id: Option<i32>) -> CreateStudentParams {
    CreateStudentParams {
        name_ar: "علي".to_string(),
        name_en: name_en.to_string(),
        address: "Cairo".to_string(),
        phone: Some("0100".to_string()),
        department_id,
    }
}

/// Tests creating a student attached to an existing department.
///
/// Expected: Ok with the student and its department loaded
#[tokio::test]
async fn creates_student_with_department() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let department = factory::create_department(db).await?;

    let repo = StudentRepository::new(db);
    let student = repo.create(params("Ali", Some(department.id))).await?;

    assert_eq!(student.name_en, "Ali");
    assert_eq!(student.phone.as_deref(), Some("0100"));
    assert_eq!(student.department.map(|d| d.id), Some(department.id));

    Ok(())
}

/// Tests creating a student without a department.
///
/// Expected: Ok with `department` set to None
#[tokio::test]
async fn creates_student_without_department() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let student = repo.create(params("Ali", None)).await?;

    assert!(student.department.is_none());

    Ok(())
}

/// Tests that the unique English name is enforced by the store.
///
/// Expected: Err on the second insert with the same name
#[tokio::test]
async fn rejects_duplicate_name_en() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    repo.create(params("Ali", None)).await?;
    let result = repo.create(params("Ali", None)).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests that a reference to a missing department is rejected by the store.
///
/// Expected: Err from the foreign-key check
#[tokio::test]
async fn rejects_missing_department() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let result = repo.create(params("Ali", Some(999))).await;

    assert!(result.is_err());

    Ok(())
}
