use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    config::JwtSettings,
    error::{auth::AuthError, AppError},
    identity::JwtService,
    middleware::auth::{bearer_token, AuthGuard, Permission},
    model::role::ADMIN_ROLE,
};

mod require;

fn jwt(secret: &str) -> JwtService {
    JwtService::new(&JwtSettings {
        secret: secret.to_string(),
        issuer: "school-api".to_string(),
        audience: "school-api-clients".to_string(),
        access_token_minutes: 5,
    })
}

fn headers_with(authorization: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(authorization).unwrap());
    headers
}

#[test]
fn parses_bearer_header() {
    assert_eq!(bearer_token(&headers_with("Bearer abc.def")), Some("abc.def"));
    assert_eq!(bearer_token(&headers_with("bearer abc")), Some("abc"));
    assert_eq!(bearer_token(&headers_with("Basic abc")), None);
    assert_eq!(bearer_token(&headers_with("Bearer ")), None);
    assert_eq!(bearer_token(&HeaderMap::new()), None);
}
