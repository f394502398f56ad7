use super::*;

/// Tests overwriting a student's fields.
///
/// Expected: Ok with the new values and the department cleared
#[tokio::test]
async fn updates_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let department = factory::create_department(db).await?;
    let student = factory::student::StudentFactory::new(db)
        .department_id(Some(department.id))
        .build()
        .await?;

    let repo = StudentRepository::new(db);
    let updated = repo
        .update(UpdateStudentParams {
            id: student.id,
            name_ar: "منى".to_string(),
            name_en: "Mona".to_string(),
            address: "Giza".to_string(),
            phone: None,
            department_id: None,
        })
        .await?;

    assert_eq!(updated.name_en, "Mona");
    assert_eq!(updated.address, "Giza");
    assert!(updated.department.is_none());

    Ok(())
}

/// Tests updating an id that does not exist.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let result = repo
        .update(UpdateStudentParams {
            id: 7,
            name_ar: "منى".to_string(),
            name_en: "Mona".to_string(),
            address: "Giza".to_string(),
            phone: None,
            department_id: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
