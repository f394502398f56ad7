use super::*;

/// Tests the uniqueness predicate with and without an excluded id.
///
/// Expected: the name is taken for others but free for its own row
#[tokio::test]
async fn ignores_excluded_student() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let student = factory::student::StudentFactory::new(db)
        .name_en("Ali")
        .build()
        .await?;

    let repo = StudentRepository::new(db);

    assert!(repo.name_en_exists("Ali", None).await?);
    assert!(!repo.name_en_exists("Ali", Some(student.id)).await?);
    assert!(!repo.name_en_exists("Omar", None).await?);

    Ok(())
}
