use super::*;

use crate::server::model::subject::{AddSubjectCommand, GetSubjectByIdQuery, GetSubjectListQuery};

fn add(name_en: &str) -> AddSubjectCommand {
    AddSubjectCommand {
        name_ar: "فيزياء".to_string(),
        name_en: name_en.to_string(),
        period: Some(3),
    }
}

/// Tests adding a subject and reading it back in Arabic.
///
/// Expected: Created, and the Arabic name when the culture is Arabic
#[tokio::test]
async fn added_subject_is_found_by_culture() -> Result<(), AppError> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mediator = mediator(db);

    let created = mediator.send(add("Physics"), &ctx()).await?;
    let id = created.data().unwrap().id;
    let found = mediator
        .send(GetSubjectByIdQuery { id }, &RequestContext::new(Locale::ArEg))
        .await?;
    let list = mediator.send(GetSubjectListQuery, &ctx()).await?;

    assert_eq!(created.status(), ResponseStatus::Created);
    assert_eq!(found.data().map(|s| s.name.as_str()), Some("فيزياء"));
    assert_eq!(found.data().and_then(|s| s.period), Some(3));
    assert_eq!(list.data().map(Vec::len), Some(1));

    Ok(())
}

/// Tests adding a subject whose English name is already used.
///
/// Expected: BadRequest with the already-exists message, one subject stored
#[tokio::test]
async fn add_rejects_duplicate_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mediator = mediator(db);

    mediator.send(add("Physics"), &ctx()).await?;
    let second = mediator.send(add("  Physics "), &ctx()).await?;
    let list = mediator.send(GetSubjectListQuery, &ctx()).await?;

    assert_eq!(second.status(), ResponseStatus::BadRequest);
    assert_eq!(second.message(), "Already exists");
    assert_eq!(list.data().map(Vec::len), Some(1));

    Ok(())
}

/// Tests looking up an unknown subject.
///
/// Expected: NotFound with the subject-not-found message
#[tokio::test]
async fn missing_subject_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mediator = mediator(db);

    let response = mediator.send(GetSubjectByIdQuery { id: 3 }, &ctx()).await?;

    assert_eq!(response.status(), ResponseStatus::NotFound);
    assert_eq!(response.message(), "Subject not found");

    Ok(())
}
