use super::*;

/// Tests inserting a user.
///
/// Expected: Ok with the stored hash and lookups by name and email succeed
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(params("ali", "ali@school.test"), "hash".to_string(), &[])
        .await?;

    assert_eq!(user.password_hash, "hash");
    assert_eq!(repo.find_by_user_name("ali").await?.map(|u| u.id), Some(user.id));
    assert_eq!(
        repo.find_by_email("ali@school.test").await?.map(|u| u.id),
        Some(user.id)
    );

    Ok(())
}

/// Tests the unique email column.
///
/// Expected: Err for a second user with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(params("ali", "ali@school.test"), "hash".to_string(), &[])
        .await?;
    let result = repo
        .create(params("omar", "ali@school.test"), "hash".to_string(), &[])
        .await;

    assert!(result.is_err());
    assert!(repo.email_exists("ali@school.test", None).await?);
    assert!(!repo.user_name_exists("omar", None).await?);

    Ok(())
}

/// Tests inserting a user together with its roles.
///
/// Expected: role names in role id order
#[tokio::test]
async fn creates_user_with_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::role::create_role_named(db, "Admin").await?;
    let user_role = factory::role::create_role_named(db, "User").await?;

    let repo = UserRepository::new(db);
    let user = repo
        .create(
            params("ali", "ali@school.test"),
            "hash".to_string(),
            &[user_role.id, admin.id],
        )
        .await?;

    assert_eq!(
        repo.role_names(user.id).await?,
        vec!["Admin".to_string(), "User".to_string()]
    );

    Ok(())
}

/// Tests a role grant that fails after the user row was inserted.
///
/// Expected: Err, and the user row is rolled back
#[tokio::test]
async fn failed_role_grant_rolls_back_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let role = factory::role::create_role_named(db, "User").await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(
            params("ali", "ali@school.test"),
            "hash".to_string(),
            &[role.id, role.id],
        )
        .await;

    assert!(result.is_err());
    assert!(repo.find_by_user_name("ali").await?.is_none());

    Ok(())
}
