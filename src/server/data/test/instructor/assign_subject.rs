use super::*;

/// Tests linking a subject to an instructor.
///
/// Expected: Ok with the subject, and the pair reported as taught afterwards
#[tokio::test]
async fn links_subject() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let instructor = factory::create_instructor(db).await?;
    let subject = factory::create_subject(db).await?;

    let repo = InstructorRepository::new(db);
    assert!(!repo.teaches(instructor.id, subject.id).await?);

    let assigned = repo.assign_subject(instructor.id, subject.id).await?;

    assert_eq!(assigned.id, subject.id);
    assert!(repo.teaches(instructor.id, subject.id).await?);

    Ok(())
}

/// Tests linking the same pair twice.
///
/// Expected: Err from the composite key
#[tokio::test]
async fn rejects_duplicate_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let instructor = factory::create_instructor(db).await?;
    let subject = factory::create_subject(db).await?;

    let repo = InstructorRepository::new(db);
    repo.assign_subject(instructor.id, subject.id).await?;
    let second = repo.assign_subject(instructor.id, subject.id).await;

    assert!(second.is_err());

    Ok(())
}
