use super::*;

/// Tests enrolling a student with a grade.
///
/// Expected: Ok with the stored grade and the pair reported as enrolled
#[tokio::test]
async fn enrolls_student_in_subject() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let student = factory::create_student(db).await?;
    let subject = factory::create_subject(db).await?;

    let repo = StudentRepository::new(db);
    let enrollment = repo.enroll(student.id, subject.id, Some(75)).await?;

    assert_eq!(enrollment.grade, Some(75));
    assert!(repo.is_enrolled(student.id, subject.id).await?);

    Ok(())
}

/// Tests that each student/subject pair can only be stored once.
///
/// Expected: Err on the second enrollment
#[tokio::test]
async fn rejects_duplicate_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let student = factory::create_student(db).await?;
    let subject = factory::create_subject(db).await?;

    let repo = StudentRepository::new(db);
    repo.enroll(student.id, subject.id, None).await?;
    let result = repo.enroll(student.id, subject.id, Some(50)).await;

    assert!(result.is_err());

    Ok(())
}
