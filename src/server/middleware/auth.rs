use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    response::{IntoResponse, Response},
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    identity::JwtService,
    middleware::locale::request_context,
    model::role::ADMIN_ROLE,
    state::AppState,
};

pub enum Permission {
    Admin,
}

/// The authenticated caller, with roles read from the database.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i32,
    pub user_name: String,
    pub roles: Vec<String>,
}

impl CurrentUser {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtService,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtService) -> Self {
        Self { db, jwt }
    }

    /// Resolves the bearer token in `headers` and checks `permissions`.
    ///
    /// The token only identifies the user; roles are re-read so a revoked role
    /// takes effect before the token expires.
    ///
    /// # Returns
    /// - `Ok(CurrentUser)` - Caller is authenticated and holds every permission
    /// - `Err(AppError::AuthErr)` - Missing or invalid token, unknown user or missing role
    /// - `Err(AppError::DbErr)` - Database error while loading the user
    pub async fn require(
        &self,
        headers: &HeaderMap,
        permissions: &[Permission],
    ) -> Result<CurrentUser, AppError> {
        let token = bearer_token(headers).ok_or(AuthError::MissingToken)?;
        let claims = self.jwt.verify(token).map_err(AuthError::from)?;
        let user_id = claims
            .user_id()
            .ok_or_else(|| AuthError::InvalidSubject(claims.sub.clone()))?;

        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };
        let user = CurrentUser {
            id: user.id,
            user_name: user.user_name,
            roles: user_repo.role_names(user_id).await?,
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.has_role(ADMIN_ROLE) {
                        return Err(AuthError::AccessDenied {
                            user_id,
                            role: ADMIN_ROLE.to_string(),
                        }
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}

/// Extracts the token of an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

async fn authorize(
    parts: &Parts,
    state: &AppState,
    permissions: &[Permission],
) -> Result<CurrentUser, Response> {
    AuthGuard::new(&state.db, &state.jwt)
        .require(&parts.headers, permissions)
        .await
        .map_err(|err| {
            let responses = request_context(&parts.headers).responses();
            err.into_envelope::<()>(&responses).into_response()
        })
}

/// Any signed-in user. Rejects with a 401 envelope.
pub struct AuthUser(pub CurrentUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        authorize(parts, state, &[]).await.map(AuthUser)
    }
}

/// A signed-in user holding the `Admin` role. Rejects with a 401 or 403 envelope.
pub struct AdminUser(pub CurrentUser);

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        authorize(parts, state, &[Permission::Admin]).await.map(AdminUser)
    }
}
