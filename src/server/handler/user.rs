use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::{
    model::{api::PaginatedDto, auth::JwtAuthResultDto, user::UserDto},
    server::{
        data::user::UserRepository,
        error::AppError,
        handler::write_failed,
        identity::{IdentityError, JwtService, UserManager},
        localization::MessageKey,
        mediator::{DispatchError, Handler, MediatorBuilder, RequestContext},
        model::{
            role::USER_ROLE,
            user::{
                ChangeUserPasswordCommand, DeleteUserCommand, EditUserCommand, GetUserByIdQuery,
                GetUserListQuery, RegisterUserCommand,
            },
        },
        response::{Response, ResponseHandler},
    },
};

/// Handles application user accounts through the identity provider.
#[derive(Clone)]
pub struct UserHandler {
    db: DatabaseConnection,
    jwt: JwtService,
}

impl UserHandler {
    pub fn new(db: DatabaseConnection, jwt: JwtService) -> Self {
        Self { db, jwt }
    }
}

pub fn register(
    builder: MediatorBuilder,
    db: &DatabaseConnection,
    jwt: &JwtService,
) -> Result<MediatorBuilder, DispatchError> {
    let handler = UserHandler::new(db.clone(), jwt.clone());

    builder
        .register::<GetUserListQuery, _>(handler.clone())?
        .register::<GetUserByIdQuery, _>(handler.clone())?
        .register::<RegisterUserCommand, _>(handler.clone())?
        .register::<EditUserCommand, _>(handler.clone())?
        .register::<DeleteUserCommand, _>(handler.clone())?
        .register::<ChangeUserPasswordCommand, _>(handler)
}

/// Maps an identity failure to an envelope.
///
/// Hashing failures are not a business outcome and propagate as `AppError`.
fn identity_failure<T>(
    responses: &ResponseHandler,
    operation: &str,
    err: IdentityError,
    key: MessageKey,
) -> Result<Response<T>, AppError> {
    match err {
        IdentityError::UserNotFound(_) => Ok(responses.not_found()),
        IdentityError::DuplicateUserName(_) => Ok(responses.bad_request(MessageKey::NameIsExist)),
        IdentityError::DuplicateEmail(_) => Ok(responses.bad_request(MessageKey::EmailIsExist)),
        IdentityError::Database(db_err) => Ok(write_failed(responses, operation, db_err, key)),
        err if err.is_user_facing() => Ok(responses.bad_request_message(err.to_string())),
        err => Err(err.into()),
    }
}

#[async_trait]
impl Handler<GetUserListQuery> for UserHandler {
    async fn handle(
        &self,
        request: GetUserListQuery,
        ctx: &RequestContext,
    ) -> Result<Response<PaginatedDto<UserDto>>, AppError> {
        let page = UserRepository::new(&self.db)
            .get_paginated(request.page)
            .await?;

        Ok(ctx.responses().success(page.into_dto(|user| user.into_dto())))
    }
}

#[async_trait]
impl Handler<GetUserByIdQuery> for UserHandler {
    async fn handle(
        &self,
        request: GetUserByIdQuery,
        ctx: &RequestContext,
    ) -> Result<Response<UserDto>, AppError> {
        let responses = ctx.responses();

        match UserRepository::new(&self.db).get_by_id(request.id).await? {
            Some(user) => Ok(responses.success(user.into_dto())),
            None => Ok(responses.not_found()),
        }
    }
}

#[async_trait]
impl Handler<RegisterUserCommand> for UserHandler {
    /// Creates the account holding the `User` role and signs the caller in.
    /// A failed role grant leaves no account behind.
    async fn handle(
        &self,
        request: RegisterUserCommand,
        ctx: &RequestContext,
    ) -> Result<Response<JwtAuthResultDto>, AppError> {
        let responses = ctx.responses();
        let manager = UserManager::new(&self.db);
        let (params, password) = request.into_params();

        if manager.find_by_email(&params.email).await?.is_some() {
            return Ok(responses.bad_request(MessageKey::EmailIsExist));
        }
        if manager.find_by_user_name(&params.user_name).await?.is_some() {
            return Ok(responses.bad_request(MessageKey::NameIsExist));
        }

        let user = match manager.create(params, &password, &[USER_ROLE]).await {
            Ok(user) => user,
            Err(err) => {
                return identity_failure(&responses, "Register user", err, MessageKey::AddFailed)
            }
        };

        let roles = manager.roles(user.id).await?;
        let token = self.jwt.issue_token(&user, roles)?;

        tracing::info!("Registered user {} ({})", user.user_name, user.id);

        Ok(responses.created(token.into_dto()))
    }
}

#[async_trait]
impl Handler<EditUserCommand> for UserHandler {
    async fn handle(
        &self,
        request: EditUserCommand,
        ctx: &RequestContext,
    ) -> Result<Response<UserDto>, AppError> {
        let responses = ctx.responses();

        match UserManager::new(&self.db).update(request.into_params()).await {
            Ok(user) => Ok(responses.updated(user.into_dto())),
            Err(err) => identity_failure(&responses, "Edit user", err, MessageKey::UpdateFailed),
        }
    }
}

#[async_trait]
impl Handler<DeleteUserCommand> for UserHandler {
    async fn handle(
        &self,
        request: DeleteUserCommand,
        ctx: &RequestContext,
    ) -> Result<Response<i32>, AppError> {
        let responses = ctx.responses();

        match UserManager::new(&self.db).delete(request.id).await {
            Ok(()) => {
                tracing::info!("Deleted user {}", request.id);
                Ok(responses.deleted(request.id))
            }
            Err(err) => identity_failure(&responses, "Delete user", err, MessageKey::DeletedFailed),
        }
    }
}

#[async_trait]
impl Handler<ChangeUserPasswordCommand> for UserHandler {
    async fn handle(
        &self,
        request: ChangeUserPasswordCommand,
        ctx: &RequestContext,
    ) -> Result<Response<i32>, AppError> {
        let responses = ctx.responses();

        match UserManager::new(&self.db)
            .change_password(request.id, &request.current_password, &request.new_password)
            .await
        {
            Ok(()) => Ok(responses.success(request.id)),
            Err(err) => identity_failure(
                &responses,
                "Change password",
                err,
                MessageKey::UpdateFailed,
            ),
        }
    }
}
