use super::*;

/// Tests deleting a student that has enrollments.
///
/// Expected: Ok(true), and the student and its enrollments are gone
#[tokio::test]
async fn deletes_student_and_enrollments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let student = factory::create_student(db).await?;
    let subject = factory::create_subject(db).await?;
    factory::helpers::enroll_student(db, student.id, subject.id, Some(90)).await?;

    let repo = StudentRepository::new(db);

    assert!(repo.delete(student.id).await?);
    assert!(!repo.exists(student.id).await?);
    assert!(!repo.is_enrolled(student.id, subject.id).await?);

    Ok(())
}

/// Tests deleting the same student twice.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn second_delete_reports_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let student = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);

    assert!(repo.delete(student.id).await?);
    assert!(!repo.delete(student.id).await?);

    Ok(())
}
