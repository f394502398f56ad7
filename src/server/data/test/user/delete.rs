use super::*;

/// Tests deleting a user that holds a role.
///
/// Expected: Ok(true), and the membership is removed with the user
#[tokio::test]
async fn deletes_user_and_memberships() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let role = factory::create_role(db).await?;
    let user = factory::create_user(db).await?;
    factory::helpers::grant_role(db, user.id, role.id).await?;

    let repo = UserRepository::new(db);

    assert!(repo.delete(user.id).await?);
    assert!(repo.get_by_id(user.id).await?.is_none());
    assert!(repo.role_names(user.id).await?.is_empty());
    assert!(!repo.delete(user.id).await?);

    Ok(())
}
