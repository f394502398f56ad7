use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::{
    model::role::RoleDto,
    server::{
        data::role::RoleRepository,
        error::AppError,
        handler::write_failed,
        localization::MessageKey,
        mediator::{DispatchError, Handler, MediatorBuilder, RequestContext},
        model::role::{
            AddRoleCommand, DeleteRoleCommand, EditRoleCommand, GetRoleByIdQuery, GetRoleListQuery,
        },
        response::Response,
    },
};

/// Handles role management.
#[derive(Clone)]
pub struct RoleHandler {
    db: DatabaseConnection,
}

impl RoleHandler {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

pub fn register(builder: MediatorBuilder, db: &DatabaseConnection) -> Result<MediatorBuilder, DispatchError> {
    let handler = RoleHandler::new(db.clone());

    builder
        .register::<GetRoleListQuery, _>(handler.clone())?
        .register::<GetRoleByIdQuery, _>(handler.clone())?
        .register::<AddRoleCommand, _>(handler.clone())?
        .register::<EditRoleCommand, _>(handler.clone())?
        .register::<DeleteRoleCommand, _>(handler)
}

#[async_trait]
impl Handler<GetRoleListQuery> for RoleHandler {
    async fn handle(
        &self,
        _request: GetRoleListQuery,
        ctx: &RequestContext,
    ) -> Result<Response<Vec<RoleDto>>, AppError> {
        let roles = RoleRepository::new(&self.db).get_all().await?;

        Ok(ctx
            .responses()
            .success(roles.into_iter().map(|role| role.into_dto()).collect()))
    }
}

#[async_trait]
impl Handler<GetRoleByIdQuery> for RoleHandler {
    async fn handle(
        &self,
        request: GetRoleByIdQuery,
        ctx: &RequestContext,
    ) -> Result<Response<RoleDto>, AppError> {
        let responses = ctx.responses();

        match RoleRepository::new(&self.db).get_by_id(request.id).await? {
            Some(role) => Ok(responses.success(role.into_dto())),
            None => Ok(responses.not_found()),
        }
    }
}

#[async_trait]
impl Handler<AddRoleCommand> for RoleHandler {
    async fn handle(
        &self,
        request: AddRoleCommand,
        ctx: &RequestContext,
    ) -> Result<Response<RoleDto>, AppError> {
        let responses = ctx.responses();
        let repo = RoleRepository::new(&self.db);
        let name = request.role_name.trim().to_string();

        if repo.name_exists(&name, None).await? {
            return Ok(responses.bad_request(MessageKey::IsExist));
        }

        match repo.create(name).await {
            Ok(role) => {
                tracing::info!("Created role {} ({})", role.name, role.id);
                Ok(responses.created(role.into_dto()))
            }
            Err(err) => Ok(write_failed(&responses, "Add role", err, MessageKey::AddFailed)),
        }
    }
}

#[async_trait]
impl Handler<EditRoleCommand> for RoleHandler {
    async fn handle(
        &self,
        request: EditRoleCommand,
        ctx: &RequestContext,
    ) -> Result<Response<RoleDto>, AppError> {
        let responses = ctx.responses();
        let repo = RoleRepository::new(&self.db);
        let name = request.name.trim().to_string();

        if repo.get_by_id(request.id).await?.is_none() {
            return Ok(responses.not_found());
        }
        if repo.name_exists(&name, Some(request.id)).await? {
            return Ok(responses.bad_request(MessageKey::IsExist));
        }

        match repo.update(request.id, name).await {
            Ok(role) => Ok(responses.updated(role.into_dto())),
            Err(err) => Ok(write_failed(&responses, "Edit role", err, MessageKey::UpdateFailed)),
        }
    }
}

#[async_trait]
impl Handler<DeleteRoleCommand> for RoleHandler {
    async fn handle(
        &self,
        request: DeleteRoleCommand,
        ctx: &RequestContext,
    ) -> Result<Response<i32>, AppError> {
        let responses = ctx.responses();
        let repo = RoleRepository::new(&self.db);

        if repo.get_by_id(request.id).await?.is_none() {
            return Ok(responses.not_found());
        }
        if repo.is_assigned(request.id).await? {
            return Ok(responses.bad_request(MessageKey::RoleInUse));
        }

        match repo.delete(request.id).await {
            Ok(true) => {
                tracing::info!("Deleted role {}", request.id);
                Ok(responses.deleted(request.id))
            }
            Ok(false) => Ok(responses.not_found()),
            Err(err) => Ok(write_failed(&responses, "Delete role", err, MessageKey::DeletedFailed)),
        }
    }
}
