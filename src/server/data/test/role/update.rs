use super::*;

/// Tests renaming a role.
///
/// Expected: Ok with the new name
#[tokio::test]
async fn renames_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let role = factory::role::create_role_named(db, "Teacher").await?;

    let repo = RoleRepository::new(db);
    let updated = repo.update(role.id, "Lecturer".to_string()).await?;

    assert_eq!(updated.name, "Lecturer");
    assert_eq!(repo.get_by_id(role.id).await?.unwrap().name, "Lecturer");

    Ok(())
}

/// Tests renaming a role that does not exist.
///
/// Expected: Err, and no role is created
#[tokio::test]
async fn fails_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoleRepository::new(db);
    let result = repo.update(2, "Admin".to_string()).await;

    assert!(result.is_err());
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
