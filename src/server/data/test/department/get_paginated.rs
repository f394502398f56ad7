use super::*;

/// Tests paginating departments.
///
/// Expected: 2 departments on the first page of size 2 and a total of 3
#[tokio::test]
async fn returns_requested_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    for _ in 0..3 {
        factory::create_department(db).await?;
    }

    let repo = DepartmentRepository::new(db);
    let page = repo.get_paginated(PageRequest::new(Some(1), Some(2))).await?;

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total, 3);
    assert!(page.items.iter().all(|d| d.manager.is_some()));
    assert!(page.items[0].id < page.items[1].id);

    Ok(())
}
