use super::*;
use crate::model::student::StudentOrdering;

/// Tests paging through 25 students with a page size of 10.
///
/// Expected: 10 items on the first page, 5 on the third, total 25 on both
#[tokio::test]
async fn pages_through_students() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    for _ in 0..25 {
        factory::create_student(db).await?;
    }

    let repo = StudentRepository::new(db);
    let filter = StudentFilter::default();

    let first = repo
        .get_paginated(PageRequest::new(Some(1), Some(10)), &filter)
        .await?;
    assert_eq!(first.items.len(), 10);
    assert_eq!(first.total, 25);
    assert_eq!(first.total_pages(), 3);

    let third = repo
        .get_paginated(PageRequest::new(Some(3), Some(10)), &filter)
        .await?;
    assert_eq!(third.items.len(), 5);
    assert_eq!(third.total, 25);

    Ok(())
}

/// Tests a page past the end.
///
/// Expected: Ok with no items and the real total
#[tokio::test]
async fn returns_empty_page_past_the_end() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let page = repo
        .get_paginated(PageRequest::new(Some(5), Some(10)), &StudentFilter::default())
        .await?;

    assert!(page.items.is_empty());
    assert_eq!(page.total, 1);

    Ok(())
}

/// Tests that the search term filters rows and the total.
///
/// Expected: only the matching student is counted and returned
#[tokio::test]
async fn filters_by_search_term() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::student::StudentFactory::new(db)
        .name_en("Mona Saleh")
        .address("Giza")
        .build()
        .await?;
    factory::student::StudentFactory::new(db)
        .name_en("Omar Adel")
        .address("Alexandria")
        .build()
        .await?;

    let repo = StudentRepository::new(db);
    let filter = StudentFilter {
        search: Some("Giza".to_string()),
        order_by: StudentOrdering::Id,
    };
    let page = repo.get_paginated(PageRequest::default(), &filter).await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name_en, "Mona Saleh");

    Ok(())
}

/// Tests ordering by department name.
///
/// Expected: students of department "Art" come before those of "Zoology"
#[tokio::test]
async fn orders_by_department_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let zoology = factory::department::DepartmentFactory::new(db)
        .name_en("Zoology")
        .build()
        .await?;
    let art = factory::department::DepartmentFactory::new(db)
        .name_en("Art")
        .build()
        .await?;
    factory::student::create_students_in_department(db, zoology.id, 1).await?;
    factory::student::create_students_in_department(db, art.id, 1).await?;

    let repo = StudentRepository::new(db);
    let filter = StudentFilter {
        search: None,
        order_by: StudentOrdering::DepartmentName,
    };
    let page = repo.get_paginated(PageRequest::default(), &filter).await?;

    let names: Vec<_> = page
        .items
        .iter()
        .filter_map(|s| s.department.as_ref().map(|d| d.name_en.clone()))
        .collect();
    assert_eq!(names, vec!["Art".to_string(), "Zoology".to_string()]);

    Ok(())
}
