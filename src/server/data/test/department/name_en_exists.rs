use super::*;

/// Tests the English name check with and without an excluded row.
///
/// Expected: the department's own name only counts when it is not excluded
#[tokio::test]
async fn excludes_the_edited_department() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let department = factory::department::DepartmentFactory::new(db)
        .name_en("Physics")
        .build()
        .await?;
    let other = factory::create_department(db).await?;

    let repo = DepartmentRepository::new(db);

    assert!(repo.name_en_exists("Physics", None).await?);
    assert!(!repo.name_en_exists("Physics", Some(department.id)).await?);
    assert!(repo.name_en_exists("Physics", Some(other.id)).await?);
    assert!(!repo.name_en_exists("Chemistry", None).await?);

    Ok(())
}
