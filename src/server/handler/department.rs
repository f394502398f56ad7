use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::PaginatedDto,
        department::{DepartmentDetailDto, DepartmentDto},
        subject::SubjectDto,
    },
    server::{
        data::{
            department::DepartmentRepository, instructor::InstructorRepository,
            subject::SubjectRepository,
        },
        error::AppError,
        handler::write_failed,
        localization::MessageKey,
        mediator::{DispatchError, Handler, MediatorBuilder, RequestContext},
        model::department::{
            AddDepartmentCommand, AssignDepartmentSubjectCommand, DeleteDepartmentCommand,
            EditDepartmentCommand, GetDepartmentByIdQuery, GetDepartmentListQuery,
        },
        response::Response,
    },
};

/// Handles department commands and queries.
#[derive(Clone)]
pub struct DepartmentHandler {
    db: DatabaseConnection,
}

impl DepartmentHandler {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

pub fn register(builder: MediatorBuilder, db: &DatabaseConnection) -> Result<MediatorBuilder, DispatchError> {
    let handler = DepartmentHandler::new(db.clone());

    builder
        .register::<GetDepartmentListQuery, _>(handler.clone())?
        .register::<GetDepartmentByIdQuery, _>(handler.clone())?
        .register::<AddDepartmentCommand, _>(handler.clone())?
        .register::<EditDepartmentCommand, _>(handler.clone())?
        .register::<DeleteDepartmentCommand, _>(handler.clone())?
        .register::<AssignDepartmentSubjectCommand, _>(handler)
}

#[async_trait]
impl Handler<GetDepartmentListQuery> for DepartmentHandler {
    async fn handle(
        &self,
        request: GetDepartmentListQuery,
        ctx: &RequestContext,
    ) -> Result<Response<PaginatedDto<DepartmentDto>>, AppError> {
        let page = DepartmentRepository::new(&self.db)
            .get_paginated(request.page)
            .await?;

        Ok(ctx
            .responses()
            .success(page.into_dto(|department| department.into_dto(ctx.locale))))
    }
}

#[async_trait]
impl Handler<GetDepartmentByIdQuery> for DepartmentHandler {
    async fn handle(
        &self,
        request: GetDepartmentByIdQuery,
        ctx: &RequestContext,
    ) -> Result<Response<DepartmentDetailDto>, AppError> {
        let responses = ctx.responses();

        match DepartmentRepository::new(&self.db)
            .get_detail(request.id, request.student_page)
            .await?
        {
            Some(detail) => Ok(responses.success(detail.into_dto(ctx.locale))),
            None => Ok(responses.not_found()),
        }
    }
}

#[async_trait]
impl Handler<AddDepartmentCommand> for DepartmentHandler {
    async fn handle(
        &self,
        request: AddDepartmentCommand,
        ctx: &RequestContext,
    ) -> Result<Response<DepartmentDto>, AppError> {
        let responses = ctx.responses();
        let repo = DepartmentRepository::new(&self.db);
        let params = request.into_params();

        if repo.name_en_exists(&params.name_en, None).await? {
            return Ok(responses.bad_request(MessageKey::IsExist));
        }
        if !InstructorRepository::new(&self.db)
            .exists(params.manager_id)
            .await?
        {
            return Ok(responses.bad_request(MessageKey::InstructorNotFound));
        }

        match repo.create(params).await {
            Ok(department) => {
                tracing::info!("Created department {}", department.id);
                Ok(responses.created(department.into_dto(ctx.locale)))
            }
            Err(err) => Ok(write_failed(&responses, "Add department", err, MessageKey::AddFailed)),
        }
    }
}

#[async_trait]
impl Handler<EditDepartmentCommand> for DepartmentHandler {
    async fn handle(
        &self,
        request: EditDepartmentCommand,
        ctx: &RequestContext,
    ) -> Result<Response<DepartmentDto>, AppError> {
        let responses = ctx.responses();
        let repo = DepartmentRepository::new(&self.db);
        let params = request.into_params();

        if !repo.exists(params.id).await? {
            return Ok(responses.not_found());
        }
        if repo.name_en_exists(&params.name_en, Some(params.id)).await? {
            return Ok(responses.bad_request(MessageKey::IsExist));
        }
        if !InstructorRepository::new(&self.db)
            .exists(params.manager_id)
            .await?
        {
            return Ok(responses.bad_request(MessageKey::InstructorNotFound));
        }

        match repo.update(params).await {
            Ok(department) => Ok(responses.updated(department.into_dto(ctx.locale))),
            Err(err) => Ok(write_failed(&responses, "Edit department", err, MessageKey::UpdateFailed)),
        }
    }
}

#[async_trait]
impl Handler<DeleteDepartmentCommand> for DepartmentHandler {
    /// Students of the department are detached; assigned subjects or
    /// instructors make the delete fail with `DeletedFailed`.
    async fn handle(
        &self,
        request: DeleteDepartmentCommand,
        ctx: &RequestContext,
    ) -> Result<Response<i32>, AppError> {
        let responses = ctx.responses();

        match DepartmentRepository::new(&self.db).delete(request.id).await {
            Ok(true) => {
                tracing::info!("Deleted department {}", request.id);
                Ok(responses.deleted(request.id))
            }
            Ok(false) => Ok(responses.not_found()),
            Err(err) => Ok(write_failed(
                &responses,
                "Delete department",
                err,
                MessageKey::DeletedFailed,
            )),
        }
    }
}

#[async_trait]
impl Handler<AssignDepartmentSubjectCommand> for DepartmentHandler {
    async fn handle(
        &self,
        request: AssignDepartmentSubjectCommand,
        ctx: &RequestContext,
    ) -> Result<Response<SubjectDto>, AppError> {
        let responses = ctx.responses();
        let repo = DepartmentRepository::new(&self.db);

        if !repo.exists(request.department_id).await? {
            return Ok(responses.not_found());
        }
        if !SubjectRepository::new(&self.db)
            .exists(request.subject_id)
            .await?
        {
            return Ok(responses.not_found_with(MessageKey::SubjectNotFound));
        }
        if repo
            .has_subject(request.department_id, request.subject_id)
            .await?
        {
            return Ok(responses.bad_request(MessageKey::IsExist));
        }

        match repo
            .assign_subject(request.department_id, request.subject_id)
            .await
        {
            Ok(subject) => Ok(responses.created(subject.into_dto(ctx.locale))),
            Err(err) => Ok(write_failed(
                &responses,
                "Assign department subject",
                err,
                MessageKey::AddFailed,
            )),
        }
    }
}
