use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::{
    model::{instructor::InstructorDto, subject::SubjectDto},
    server::{
        data::{
            department::DepartmentRepository, instructor::InstructorRepository,
            subject::SubjectRepository,
        },
        error::AppError,
        handler::write_failed,
        localization::MessageKey,
        mediator::{DispatchError, Handler, MediatorBuilder, RequestContext},
        model::instructor::{
            AddInstructorCommand, AssignInstructorSubjectCommand, GetInstructorByIdQuery,
            GetInstructorListQuery,
        },
        response::Response,
    },
};

#[derive(Clone)]
pub struct InstructorHandler {
    db: DatabaseConnection,
}

impl InstructorHandler {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

pub fn register(builder: MediatorBuilder, db: &DatabaseConnection) -> Result<MediatorBuilder, DispatchError> {
    let handler = InstructorHandler::new(db.clone());

    builder
        .register::<GetInstructorListQuery, _>(handler.clone())?
        .register::<GetInstructorByIdQuery, _>(handler.clone())?
        .register::<AddInstructorCommand, _>(handler.clone())?
        .register::<AssignInstructorSubjectCommand, _>(handler)
}

#[async_trait]
impl Handler<GetInstructorListQuery> for InstructorHandler {
    async fn handle(
        &self,
        _request: GetInstructorListQuery,
        ctx: &RequestContext,
    ) -> Result<Response<Vec<InstructorDto>>, AppError> {
        let instructors = InstructorRepository::new(&self.db).get_all().await?;

        Ok(ctx.responses().success(
            instructors
                .into_iter()
                .map(|instructor| instructor.into_dto(ctx.locale))
                .collect(),
        ))
    }
}

#[async_trait]
impl Handler<GetInstructorByIdQuery> for InstructorHandler {
    async fn handle(
        &self,
        request: GetInstructorByIdQuery,
        ctx: &RequestContext,
    ) -> Result<Response<InstructorDto>, AppError> {
        let responses = ctx.responses();

        match InstructorRepository::new(&self.db).get_by_id(request.id).await? {
            Some(instructor) => Ok(responses.success(instructor.into_dto(ctx.locale))),
            None => Ok(responses.not_found()),
        }
    }
}

#[async_trait]
impl Handler<AddInstructorCommand> for InstructorHandler {
    /// Unlike students, an instructor pointing at a missing department or
    /// supervisor is rejected.
    async fn handle(
        &self,
        request: AddInstructorCommand,
        ctx: &RequestContext,
    ) -> Result<Response<InstructorDto>, AppError> {
        let responses = ctx.responses();
        let repo = InstructorRepository::new(&self.db);
        let params = request.into_params();

        if let Some(department_id) = params.department_id {
            if !DepartmentRepository::new(&self.db).exists(department_id).await? {
                return Ok(responses.bad_request(MessageKey::DepartmentNotFound));
            }
        }
        if let Some(supervisor_id) = params.supervisor_id {
            if !repo.exists(supervisor_id).await? {
                return Ok(responses.bad_request(MessageKey::InstructorNotFound));
            }
        }

        match repo.create(params).await {
            Ok(instructor) => {
                tracing::info!("Created instructor {}", instructor.id);
                Ok(responses.created(instructor.into_dto(ctx.locale)))
            }
            Err(err) => Ok(write_failed(&responses, "Add instructor", err, MessageKey::AddFailed)),
        }
    }
}

#[async_trait]
impl Handler<AssignInstructorSubjectCommand> for InstructorHandler {
    async fn handle(
        &self,
        request: AssignInstructorSubjectCommand,
        ctx: &RequestContext,
    ) -> Result<Response<SubjectDto>, AppError> {
        let responses = ctx.responses();
        let repo = InstructorRepository::new(&self.db);

        if !repo.exists(request.instructor_id).await? {
            return Ok(responses.not_found_with(MessageKey::InstructorNotFound));
        }
        if !SubjectRepository::new(&self.db)
            .exists(request.subject_id)
            .await?
        {
            return Ok(responses.not_found_with(MessageKey::SubjectNotFound));
        }
        if repo
            .teaches(request.instructor_id, request.subject_id)
            .await?
        {
            return Ok(responses.bad_request(MessageKey::IsExist));
        }

        match repo
            .assign_subject(request.instructor_id, request.subject_id)
            .await
        {
            Ok(subject) => Ok(responses.created(subject.into_dto(ctx.locale))),
            Err(err) => Ok(write_failed(
                &responses,
                "Assign instructor subject",
                err,
                MessageKey::AddFailed,
            )),
        }
    }
}
