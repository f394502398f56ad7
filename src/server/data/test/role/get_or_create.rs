use super::*;

/// Tests that seeding a role twice keeps a single row.
///
/// Expected: both calls return the same id
#[tokio::test]
async fn returns_existing_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoleRepository::new(db);
    let first = repo.get_or_create("Admin").await?;
    let second = repo.get_or_create("Admin").await?;

    assert_eq!(first.id, second.id);
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}
