use serde_json::json;

use super::*;

fn registration() -> Value {
    json!({
        "fullName": "Sara Nabil",
        "userName": "sara",
        "email": "sara@school.test",
        "password": "Secret1!",
        "confirmPassword": "Secret1!"
    })
}

/// Tests registering a user and signing in with the same credentials.
///
/// Expected: 201 with a token on register, 200 with a usable token on sign-in
#[tokio::test]
async fn register_then_sign_in() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let app = app(db).await?;

    let (registered, body) = call(
        app.clone(),
        Call::new(Method::POST, "/api/user").json(registration()),
    )
    .await;
    assert_eq!(registered, StatusCode::CREATED);
    assert_eq!(body["data"]["userName"], "sara");

    let (signed_in, body) = call(
        app.clone(),
        Call::new(Method::POST, "/api/authentication/sign-in")
            .json(json!({ "userName": "sara", "password": "Secret1!" })),
    )
    .await;
    assert_eq!(signed_in, StatusCode::OK);

    let token = body["data"]["accessToken"].as_str().unwrap().to_string();
    let (listed, body) = call(app, Call::new(Method::GET, "/api/user").token(&token)).await;

    assert_eq!(listed, StatusCode::OK);
    assert_eq!(body["data"]["items"][0]["roles"], json!([USER_ROLE]));

    Ok(())
}

/// Tests signing in with a wrong password.
///
/// Expected: 400 with the invalid credentials message
#[tokio::test]
async fn sign_in_with_wrong_password_fails() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let app = app(db).await?;

    call(
        app.clone(),
        Call::new(Method::POST, "/api/user").json(registration()),
    )
    .await;
    let (status, body) = call(
        app,
        Call::new(Method::POST, "/api/authentication/sign-in")
            .json(json!({ "userName": "sara", "password": "Wrong1!" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid user name or password");

    Ok(())
}

/// Tests registering with mismatched password confirmation.
///
/// Expected: 400 and no user stored
#[tokio::test]
async fn register_with_mismatched_confirmation_fails() -> Result<(), AppError> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let app = app(db).await?;

    let mut body = registration();
    body["confirmPassword"] = json!("Other1!");

    let (status, _) = call(app, Call::new(Method::POST, "/api/user").json(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(crate::server::identity::UserManager::new(db)
        .find_by_user_name("sara")
        .await?
        .is_none());

    Ok(())
}
