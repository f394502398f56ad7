use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::{
    model::auth::JwtAuthResultDto,
    server::{
        error::AppError,
        identity::{JwtService, UserManager},
        localization::MessageKey,
        mediator::{DispatchError, Handler, MediatorBuilder, RequestContext},
        model::auth::SignInCommand,
        response::Response,
    },
};

#[derive(Clone)]
pub struct AuthenticationHandler {
    db: DatabaseConnection,
    jwt: JwtService,
}

impl AuthenticationHandler {
    pub fn new(db: DatabaseConnection, jwt: JwtService) -> Self {
        Self { db, jwt }
    }
}

pub fn register(
    builder: MediatorBuilder,
    db: &DatabaseConnection,
    jwt: &JwtService,
) -> Result<MediatorBuilder, DispatchError> {
    builder.register::<SignInCommand, _>(AuthenticationHandler::new(db.clone(), jwt.clone()))
}

#[async_trait]
impl Handler<SignInCommand> for AuthenticationHandler {
    /// Unknown user names and wrong passwords get the same answer.
    async fn handle(
        &self,
        request: SignInCommand,
        ctx: &RequestContext,
    ) -> Result<Response<JwtAuthResultDto>, AppError> {
        let responses = ctx.responses();
        let manager = UserManager::new(&self.db);

        let Some(user) = manager.find_by_user_name(request.user_name.trim()).await? else {
            tracing::debug!("Sign-in for unknown user {}", request.user_name);
            return Ok(responses.bad_request(MessageKey::InvalidCredentials));
        };
        if !manager.check_password(&user, &request.password)? {
            tracing::debug!("Sign-in with wrong password for user {}", user.id);
            return Ok(responses.bad_request(MessageKey::InvalidCredentials));
        }

        let roles = manager.roles(user.id).await?;
        let token = self.jwt.issue_token(&user, roles)?;

        Ok(responses.success(token.into_dto()))
    }
}
