use super::*;

/// Tests deleting an unused role.
///
/// Expected: Ok(true) then Ok(false) on the second attempt
#[tokio::test]
async fn deletes_unused_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let role = factory::create_role(db).await?;

    let repo = RoleRepository::new(db);

    assert!(!repo.is_assigned(role.id).await?);
    assert!(repo.delete(role.id).await?);
    assert!(!repo.delete(role.id).await?);

    Ok(())
}

/// Tests deleting a role that a user holds.
///
/// Expected: the role is reported as assigned and the delete fails
#[tokio::test]
async fn fails_for_assigned_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let role = factory::create_role(db).await?;
    let user = factory::create_user(db).await?;
    factory::helpers::grant_role(db, user.id, role.id).await?;

    let repo = RoleRepository::new(db);

    assert!(repo.is_assigned(role.id).await?);
    assert!(repo.delete(role.id).await.is_err());

    Ok(())
}
