use super::*;

fn params(department_id: Option<i32>, supervisor_id: Option<i32>) -> CreateInstructorParams {
    CreateInstructorParams {
        name_ar: "سارة".to_string(),
        name_en: "Sara".to_string(),
        address: Some("Alexandria".to_string()),
        position: Some("Lecturer".to_string()),
        salary: Some(4200.0),
        department_id,
        supervisor_id,
    }
}

/// Tests creating an instructor in a department under a supervisor.
///
/// Expected: Ok with the department loaded, and found again by id
#[tokio::test]
async fn creates_instructor_with_department() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let department = factory::create_department(db).await?;
    let supervisor = factory::create_instructor(db).await?;

    let repo = InstructorRepository::new(db);
    let instructor = repo
        .create(params(Some(department.id), Some(supervisor.id)))
        .await?;

    assert_eq!(instructor.name_en, "Sara");
    assert_eq!(instructor.supervisor_id, Some(supervisor.id));
    assert_eq!(
        instructor.department.as_ref().map(|d| d.id),
        Some(department.id)
    );
    assert_eq!(repo.get_by_id(instructor.id).await?, Some(instructor.clone()));
    assert!(repo.exists(instructor.id).await?);

    Ok(())
}

/// Tests the optional department and supervisor references.
///
/// Expected: Ok without either, Err for a supervisor that does not exist
#[tokio::test]
async fn supervisor_must_exist_when_given() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InstructorRepository::new(db);
    let standalone = repo.create(params(None, None)).await?;
    let orphan = repo.create(params(None, Some(404))).await;

    assert!(standalone.department.is_none());
    assert!(orphan.is_err());
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}
