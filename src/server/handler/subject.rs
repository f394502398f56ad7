use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::{
    model::subject::SubjectDto,
    server::{
        data::subject::SubjectRepository,
        error::AppError,
        handler::write_failed,
        localization::MessageKey,
        mediator::{DispatchError, Handler, MediatorBuilder, RequestContext},
        model::subject::{AddSubjectCommand, GetSubjectByIdQuery, GetSubjectListQuery},
        response::Response,
    },
};

#[derive(Clone)]
pub struct SubjectHandler {
    db: DatabaseConnection,
}

impl SubjectHandler {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

pub fn register(builder: MediatorBuilder, db: &DatabaseConnection) -> Result<MediatorBuilder, DispatchError> {
    let handler = SubjectHandler::new(db.clone());

    builder
        .register::<GetSubjectListQuery, _>(handler.clone())?
        .register::<GetSubjectByIdQuery, _>(handler.clone())?
        .register::<AddSubjectCommand, _>(handler)
}

#[async_trait]
impl Handler<GetSubjectListQuery> for SubjectHandler {
    async fn handle(
        &self,
        _request: GetSubjectListQuery,
        ctx: &RequestContext,
    ) -> Result<Response<Vec<SubjectDto>>, AppError> {
        let subjects = SubjectRepository::new(&self.db).get_all().await?;

        Ok(ctx.responses().success(
            subjects
                .into_iter()
                .map(|subject| subject.into_dto(ctx.locale))
                .collect(),
        ))
    }
}

#[async_trait]
impl Handler<GetSubjectByIdQuery> for SubjectHandler {
    async fn handle(
        &self,
        request: GetSubjectByIdQuery,
        ctx: &RequestContext,
    ) -> Result<Response<SubjectDto>, AppError> {
        let responses = ctx.responses();

        match SubjectRepository::new(&self.db).get_by_id(request.id).await? {
            Some(subject) => Ok(responses.success(subject.into_dto(ctx.locale))),
            None => Ok(responses.not_found_with(MessageKey::SubjectNotFound)),
        }
    }
}

#[async_trait]
impl Handler<AddSubjectCommand> for SubjectHandler {
    async fn handle(
        &self,
        request: AddSubjectCommand,
        ctx: &RequestContext,
    ) -> Result<Response<SubjectDto>, AppError> {
        let responses = ctx.responses();
        let repo = SubjectRepository::new(&self.db);
        let params = request.into_params();

        if repo.name_en_exists(&params.name_en).await? {
            return Ok(responses.bad_request(MessageKey::IsExist));
        }

        match repo.create(params).await {
            Ok(subject) => Ok(responses.created(subject.into_dto(ctx.locale))),
            Err(err) => Ok(write_failed(&responses, "Add subject", err, MessageKey::AddFailed)),
        }
    }
}
