use axum::{
    body::Body,
    http::{
        header::{ACCEPT_LANGUAGE, AUTHORIZATION, CONTENT_TYPE},
        Method, Request, StatusCode,
    },
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::server::{
    config::JwtSettings,
    data::role::RoleRepository,
    error::AppError,
    identity::JwtService,
    model::role::{ADMIN_ROLE, USER_ROLE},
    router::router,
    startup::{build_mediator, seed_roles},
    state::AppState,
};

mod authentication;

fn jwt() -> JwtService {
    JwtService::new(&JwtSettings {
        secret: "controller-test-secret".to_string(),
        issuer: "school-api".to_string(),
        audience: "school-api-clients".to_string(),
        access_token_minutes: 5,
    })
}

/// Builds the full router over `db` with the `Admin` and `User` roles seeded.
async fn app(db: &DatabaseConnection) -> Result<Router, AppError> {
    seed_roles(db).await?;
    let jwt = jwt();
    let mediator = build_mediator(db, &jwt)?;

    Ok(router().with_state(AppState::new(db.clone(), mediator, jwt)))
}

/// Creates a user holding `roles` and returns a bearer token for it.
async fn token_with_roles(db: &DatabaseConnection, roles: &[&str]) -> Result<String, AppError> {
    let user = factory::create_user(db).await?;
    let role_repo = RoleRepository::new(db);
    for name in roles {
        let role = role_repo.get_or_create(name).await?;
        factory::helpers::grant_role(db, user.id, role.id).await?;
    }
    let roles = roles.iter().map(|name| name.to_string()).collect();

    Ok(jwt().issue_token(&user, roles)?.access_token)
}

async fn admin_token(db: &DatabaseConnection) -> Result<String, AppError> {
    token_with_roles(db, &[ADMIN_ROLE, USER_ROLE]).await
}

async fn user_token(db: &DatabaseConnection) -> Result<String, AppError> {
    token_with_roles(db, &[USER_ROLE]).await
}

/// Minimal request description for [`call`].
struct Call<'a> {
    method: Method,
    uri: &'a str,
    token: Option<&'a str>,
    language: Option<&'a str>,
    json: Option<Value>,
    form: Option<&'a str>,
}

impl<'a> Call<'a> {
    fn new(method: Method, uri: &'a str) -> Self {
        Self {
            method,
            uri,
            token: None,
            language: None,
            json: None,
            form: None,
        }
    }

    fn token(mut self, token: &'a str) -> Self {
        self.token = Some(token);
        self
    }

    fn language(mut self, language: &'a str) -> Self {
        self.language = Some(language);
        self
    }

    fn json(mut self, body: Value) -> Self {
        self.json = Some(body);
        self
    }

    fn form(mut self, body: &'a str) -> Self {
        self.form = Some(body);
        self
    }
}

/// Sends `call` through `app` and returns the status and parsed JSON body.
async fn call(app: Router, call: Call<'_>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(call.method).uri(call.uri);
    if let Some(token) = call.token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {}", token));
    }
    if let Some(language) = call.language {
        builder = builder.header(ACCEPT_LANGUAGE, language);
    }

    let request = if let Some(json) = call.json {
        builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap()
    } else if let Some(form) = call.form {
        builder
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap()
    } else {
        builder.body(Body::empty()).unwrap()
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}

async fn setup() -> TestContext {
    TestBuilder::new()
        .with_school_tables()
        .with_identity_tables()
        .build()
        .await
        .unwrap()
}
