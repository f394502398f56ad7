use super::*;

/// Tests paginating users with their roles.
///
/// Expected: the second page of size 2 holds the last user, total 3
#[tokio::test]
async fn returns_page_with_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let role = factory::role::create_role_named(db, "User").await?;
    let mut last = None;
    for _ in 0..3 {
        let user = factory::create_user(db).await?;
        factory::helpers::grant_role(db, user.id, role.id).await?;
        last = Some(user);
    }

    let repo = UserRepository::new(db);
    let page = repo.get_paginated(PageRequest::new(Some(2), Some(2))).await?;

    assert_eq!(page.total, 3);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, last.unwrap().id);
    assert_eq!(page.items[0].roles, vec!["User".to_string()]);

    Ok(())
}
