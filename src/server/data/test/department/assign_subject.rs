use super::*;

/// Tests linking a subject to a department.
///
/// Expected: Ok with the subject, and the pair reported as linked
#[tokio::test]
async fn links_subject() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let department = factory::create_department(db).await?;
    let subject = factory::create_subject(db).await?;

    let repo = DepartmentRepository::new(db);
    let assigned = repo.assign_subject(department.id, subject.id).await?;

    assert_eq!(assigned.id, subject.id);
    assert!(repo.has_subject(department.id, subject.id).await?);

    Ok(())
}

/// Tests the composite key of department subjects.
///
/// Expected: Err when the same pair is linked twice
#[tokio::test]
async fn rejects_duplicate_link() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let department = factory::create_department(db).await?;
    let subject = factory::create_subject(db).await?;

    let repo = DepartmentRepository::new(db);
    repo.assign_subject(department.id, subject.id).await?;

    assert!(repo.assign_subject(department.id, subject.id).await.is_err());

    Ok(())
}
