use super::*;

/// Tests creating a subject and finding it again.
///
/// Expected: Ok, found by id and by English name
#[tokio::test]
async fn creates_subject() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SubjectRepository::new(db);
    let subject = repo
        .create(CreateSubjectParams {
            name_ar: "كيمياء".to_string(),
            name_en: "Chemistry".to_string(),
            period: Some(2),
        })
        .await?;

    assert_eq!(subject.period, Some(2));
    assert_eq!(repo.get_by_id(subject.id).await?, Some(subject.clone()));
    assert!(repo.exists(subject.id).await?);
    assert!(repo.name_en_exists("Chemistry").await?);
    assert!(!repo.name_en_exists("Biology").await?);

    Ok(())
}

/// Tests listing subjects.
///
/// Expected: ordered by id, unknown ids not found
#[tokio::test]
async fn lists_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let first = factory::create_subject(db).await?;
    let second = factory::create_subject(db).await?;

    let repo = SubjectRepository::new(db);
    let ids: Vec<i32> = repo.get_all().await?.into_iter().map(|s| s.id).collect();

    assert_eq!(ids, vec![first.id, second.id]);
    assert_eq!(repo.get_by_id(404).await?, None);
    assert!(!repo.exists(404).await?);

    Ok(())
}
