use super::*;

/// Tests a request without an `Authorization` header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt("guard-secret");

    let result = AuthGuard::new(db, &jwt).require(&HeaderMap::new(), &[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a token signed with a different secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_foreign_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let token = jwt("other-secret").issue_token(&user, Vec::new())?.access_token;
    let jwt = jwt("guard-secret");

    let result = AuthGuard::new(db, &jwt)
        .require(&headers_with(&format!("Bearer {}", token)), &[])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a valid token whose user has since been deleted.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_deleted_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let jwt = jwt("guard-secret");
    let token = jwt.issue_token(&user, Vec::new())?.access_token;
    crate::server::data::user::UserRepository::new(db)
        .delete(user.id)
        .await?;

    let result = AuthGuard::new(db, &jwt)
        .require(&headers_with(&format!("Bearer {}", token)), &[])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(_)))
    ));

    Ok(())
}

/// Tests the admin permission for a user without and then with the role.
///
/// Roles come from the database, so granting the role works with the old token.
///
/// Expected: Err(AuthError::AccessDenied), then Ok with the role listed
#[tokio::test]
async fn admin_permission_follows_database_roles() -> Result<(), AppError> {
    let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let admin = factory::role::create_role_named(db, ADMIN_ROLE).await?;
    let jwt = jwt("guard-secret");
    let headers = headers_with(&format!(
        "Bearer {}",
        jwt.issue_token(&user, Vec::new())?.access_token
    ));
    let guard = AuthGuard::new(db, &jwt);

    let denied = guard.require(&headers, &[Permission::Admin]).await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied { .. }))
    ));

    factory::helpers::grant_role(db, user.id, admin.id).await?;
    let allowed = guard.require(&headers, &[Permission::Admin]).await?;

    assert_eq!(allowed.id, user.id);
    assert!(allowed.has_role(ADMIN_ROLE));

    Ok(())
}
