use super::*;

/// Tests creating a department managed by an existing instructor.
///
/// Expected: Ok with the manager's names loaded
#[tokio::test]
async fn creates_department_with_manager() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let manager = factory::create_instructor(db).await?;

    let repo = DepartmentRepository::new(db);
    let department = repo
        .create(CreateDepartmentParams {
            name_ar: "علوم".to_string(),
            name_en: "Science".to_string(),
            manager_id: manager.id,
        })
        .await?;

    assert_eq!(department.manager_id, manager.id);
    assert_eq!(department.manager.map(|m| m.name_en), Some(manager.name_en));

    Ok(())
}

/// Tests the required manager reference.
///
/// Expected: Err when the manager does not exist
#[tokio::test]
async fn rejects_missing_manager() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DepartmentRepository::new(db);
    let result = repo
        .create(CreateDepartmentParams {
            name_ar: "علوم".to_string(),
            name_en: "Science".to_string(),
            manager_id: 404,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
