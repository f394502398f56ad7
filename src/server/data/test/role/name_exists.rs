use super::*;

/// Tests the role name uniqueness predicate.
///
/// Expected: the name counts as taken only for other roles
#[tokio::test]
async fn excludes_own_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let role = factory::role::create_role_named(db, "Admin").await?;

    let repo = RoleRepository::new(db);

    assert!(repo.name_exists("Admin", None).await?);
    assert!(!repo.name_exists("Admin", Some(role.id)).await?);
    assert!(!repo.name_exists("User", None).await?);

    Ok(())
}
