use axum::extract::State;

use crate::{
    model::{
        api::{ErrorDto, ResponseDto},
        subject::{AddSubjectDto, SubjectDto},
    },
    server::{
        controller::{send, send_validated},
        mediator::RequestContext,
        model::subject::{AddSubjectCommand, GetSubjectByIdQuery, GetSubjectListQuery},
        response::Response,
        state::AppState,
        util::{body::FormOrJson, params::PathParam},
    },
};

/// Tag for grouping subject endpoints in OpenAPI documentation
pub static SUBJECT_TAG: &str = "subject";

#[utoipa::path(
    get,
    path = "/api/subject",
    tag = SUBJECT_TAG,
    responses(
        (status = 200, description = "All subjects", body = ResponseDto<Vec<SubjectDto>>)
    ),
)]
pub async fn get_subjects(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> Response<Vec<SubjectDto>> {
    send(&state, ctx, GetSubjectListQuery).await
}

#[utoipa::path(
    get,
    path = "/api/subject/{id}",
    tag = SUBJECT_TAG,
    params(("id" = i32, Path, description = "Subject id")),
    responses(
        (status = 200, description = "The subject", body = ResponseDto<SubjectDto>),
        (status = 404, description = "Subject not found", body = ErrorDto)
    ),
)]
pub async fn get_subject(
    State(state): State<AppState>,
    ctx: RequestContext,
    PathParam(id): PathParam<i32>,
) -> Response<SubjectDto> {
    send(&state, ctx, GetSubjectByIdQuery { id }).await
}

/// Create a subject.
///
/// # Returns
/// - `201 Created` - Subject created
/// - `400 Bad Request` - Invalid input or English name taken
#[utoipa::path(
    post,
    path = "/api/subject",
    tag = SUBJECT_TAG,
    request_body = AddSubjectDto,
    responses(
        (status = 201, description = "Subject created", body = ResponseDto<SubjectDto>),
        (status = 400, description = "Invalid input or name taken", body = ErrorDto)
    ),
)]
pub async fn add_subject(
    State(state): State<AppState>,
    ctx: RequestContext,
    FormOrJson(payload): FormOrJson<AddSubjectDto>,
) -> Response<SubjectDto> {
    send_validated(&state, ctx, AddSubjectCommand::from(payload)).await
}
