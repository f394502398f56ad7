use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::PaginatedDto,
        student::{StudentDto, StudentSubjectDto},
    },
    server::{
        data::{department::DepartmentRepository, student::StudentRepository, subject::SubjectRepository},
        error::AppError,
        handler::write_failed,
        localization::MessageKey,
        mediator::{DispatchError, Handler, MediatorBuilder, RequestContext},
        model::student::{
            AddStudentCommand, DeleteStudentCommand, EditStudentCommand, EnrollStudentCommand,
            GetStudentByIdQuery, GetStudentListQuery, GetStudentPaginatedListQuery,
        },
        response::Response,
    },
};

/// Handles student commands and queries.
#[derive(Clone)]
pub struct StudentHandler {
    db: DatabaseConnection,
}

impl StudentHandler {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns `department_id` only when that department exists.
    async fn existing_department(&self, department_id: Option<i32>) -> Result<Option<i32>, AppError> {
        match department_id {
            Some(id) if DepartmentRepository::new(&self.db).exists(id).await? => Ok(Some(id)),
            Some(id) => {
                tracing::debug!("Department {} does not exist, storing student without one", id);
                Ok(None)
            }
            None => Ok(None),
        }
    }
}

pub fn register(builder: MediatorBuilder, db: &DatabaseConnection) -> Result<MediatorBuilder, DispatchError> {
    let handler = StudentHandler::new(db.clone());

    builder
        .register::<GetStudentListQuery, _>(handler.clone())?
        .register::<GetStudentPaginatedListQuery, _>(handler.clone())?
        .register::<GetStudentByIdQuery, _>(handler.clone())?
        .register::<AddStudentCommand, _>(handler.clone())?
        .register::<EditStudentCommand, _>(handler.clone())?
        .register::<DeleteStudentCommand, _>(handler.clone())?
        .register::<EnrollStudentCommand, _>(handler)
}

#[async_trait]
impl Handler<GetStudentListQuery> for StudentHandler {
    async fn handle(
        &self,
        _request: GetStudentListQuery,
        ctx: &RequestContext,
    ) -> Result<Response<Vec<StudentDto>>, AppError> {
        let students = StudentRepository::new(&self.db).get_all().await?;

        Ok(ctx.responses().success(
            students
                .into_iter()
                .map(|student| student.into_dto(ctx.locale))
                .collect(),
        ))
    }
}

#[async_trait]
impl Handler<GetStudentPaginatedListQuery> for StudentHandler {
    async fn handle(
        &self,
        request: GetStudentPaginatedListQuery,
        ctx: &RequestContext,
    ) -> Result<Response<PaginatedDto<StudentDto>>, AppError> {
        let page = StudentRepository::new(&self.db)
            .get_paginated(request.page, &request.filter)
            .await?;

        Ok(ctx
            .responses()
            .success(page.into_dto(|student| student.into_dto(ctx.locale))))
    }
}

#[async_trait]
impl Handler<GetStudentByIdQuery> for StudentHandler {
    async fn handle(
        &self,
        request: GetStudentByIdQuery,
        ctx: &RequestContext,
    ) -> Result<Response<StudentDto>, AppError> {
        let responses = ctx.responses();

        match StudentRepository::new(&self.db).get_by_id(request.id).await? {
            Some(student) => Ok(responses.success(student.into_dto(ctx.locale))),
            None => Ok(responses.not_found()),
        }
    }
}

#[async_trait]
impl Handler<AddStudentCommand> for StudentHandler {
    async fn handle(
        &self,
        request: AddStudentCommand,
        ctx: &RequestContext,
    ) -> Result<Response<StudentDto>, AppError> {
        let responses = ctx.responses();
        let repo = StudentRepository::new(&self.db);
        let mut params = request.into_params();

        if repo.name_en_exists(&params.name_en, None).await? {
            return Ok(responses.bad_request(MessageKey::NameIsExist));
        }
        params.department_id = self.existing_department(params.department_id).await?;

        match repo.create(params).await {
            Ok(student) => {
                tracing::info!("Created student {}", student.id);
                Ok(responses.created(student.into_dto(ctx.locale)))
            }
            Err(err) => Ok(write_failed(&responses, "Add student", err, MessageKey::AddFailed)),
        }
    }
}

#[async_trait]
impl Handler<EditStudentCommand> for StudentHandler {
    async fn handle(
        &self,
        request: EditStudentCommand,
        ctx: &RequestContext,
    ) -> Result<Response<StudentDto>, AppError> {
        let responses = ctx.responses();
        let repo = StudentRepository::new(&self.db);
        let mut params = request.into_params();

        if !repo.exists(params.id).await? {
            return Ok(responses.not_found());
        }
        if repo.name_en_exists(&params.name_en, Some(params.id)).await? {
            return Ok(responses.bad_request(MessageKey::NameIsExist));
        }
        params.department_id = self.existing_department(params.department_id).await?;

        match repo.update(params).await {
            Ok(student) => Ok(responses.updated(student.into_dto(ctx.locale))),
            Err(err) => Ok(write_failed(&responses, "Edit student", err, MessageKey::UpdateFailed)),
        }
    }
}

#[async_trait]
impl Handler<DeleteStudentCommand> for StudentHandler {
    async fn handle(
        &self,
        request: DeleteStudentCommand,
        ctx: &RequestContext,
    ) -> Result<Response<i32>, AppError> {
        let responses = ctx.responses();

        match StudentRepository::new(&self.db).delete(request.id).await {
            Ok(true) => {
                tracing::info!("Deleted student {}", request.id);
                Ok(responses.deleted(request.id))
            }
            Ok(false) => Ok(responses.not_found()),
            Err(err) => Ok(write_failed(&responses, "Delete student", err, MessageKey::DeletedFailed)),
        }
    }
}

#[async_trait]
impl Handler<EnrollStudentCommand> for StudentHandler {
    async fn handle(
        &self,
        request: EnrollStudentCommand,
        ctx: &RequestContext,
    ) -> Result<Response<StudentSubjectDto>, AppError> {
        let responses = ctx.responses();
        let repo = StudentRepository::new(&self.db);

        if !repo.exists(request.student_id).await? {
            return Ok(responses.not_found());
        }
        if !SubjectRepository::new(&self.db).exists(request.subject_id).await? {
            return Ok(responses.not_found_with(MessageKey::SubjectNotFound));
        }
        if repo.is_enrolled(request.student_id, request.subject_id).await? {
            return Ok(responses.bad_request(MessageKey::IsExist));
        }

        match repo
            .enroll(request.student_id, request.subject_id, request.grade)
            .await
        {
            Ok(enrollment) => Ok(responses.created(enrollment.into_dto())),
            Err(err) => Ok(write_failed(&responses, "Enroll student", err, MessageKey::AddFailed)),
        }
    }
}
