use super::*;

/// Tests renaming a department and replacing its manager.
///
/// Expected: Ok with the new names and the new manager loaded
#[tokio::test]
async fn updates_names_and_manager() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let department = factory::create_department(db).await?;
    let manager = factory::create_instructor(db).await?;

    let repo = DepartmentRepository::new(db);
    let updated = repo
        .update(UpdateDepartmentParams {
            id: department.id,
            name_ar: "هندسة".to_string(),
            name_en: "Engineering".to_string(),
            manager_id: manager.id,
        })
        .await?;

    assert_eq!(updated.id, department.id);
    assert_eq!(updated.name_en, "Engineering");
    assert_eq!(updated.manager_id, manager.id);
    assert_eq!(updated.manager.map(|m| m.name_en), Some(manager.name_en));

    Ok(())
}

/// Tests updating an id that does not exist.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let manager = factory::create_instructor(db).await?;

    let result = DepartmentRepository::new(db)
        .update(UpdateDepartmentParams {
            id: 404,
            name_ar: "هندسة".to_string(),
            name_en: "Engineering".to_string(),
            manager_id: manager.id,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests pointing a department at a manager that does not exist.
///
/// Expected: Err from the foreign key, the row keeps its manager
#[tokio::test]
async fn rejects_missing_manager() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let department = factory::create_department(db).await?;

    let result = DepartmentRepository::new(db)
        .update(UpdateDepartmentParams {
            id: department.id,
            name_ar: department.name_ar.clone(),
            name_en: department.name_en.clone(),
            manager_id: 404,
        })
        .await;
    let row = entity::prelude::Department::find_by_id(department.id)
        .one(db)
        .await?
        .unwrap();

    assert!(result.is_err());
    assert_eq!(row.manager_id, department.manager_id);

    Ok(())
}
