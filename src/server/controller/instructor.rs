use axum::extract::State;

use crate::{
    model::{
        api::{ErrorDto, ResponseDto},
        department::AssignSubjectDto,
        instructor::{AddInstructorDto, InstructorDto},
        subject::SubjectDto,
    },
    server::{
        controller::{send, send_validated},
        mediator::RequestContext,
        model::instructor::{
            AddInstructorCommand, AssignInstructorSubjectCommand, GetInstructorByIdQuery,
            GetInstructorListQuery,
        },
        response::Response,
        state::AppState,
        util::{body::FormOrJson, params::PathParam},
    },
};

/// Tag for grouping instructor endpoints in OpenAPI documentation
pub static INSTRUCTOR_TAG: &str = "instructor";

#[utoipa::path(
    get,
    path = "/api/instructor",
    tag = INSTRUCTOR_TAG,
    responses(
        (status = 200, description = "All instructors", body = ResponseDto<Vec<InstructorDto>>)
    ),
)]
pub async fn get_instructors(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> Response<Vec<InstructorDto>> {
    send(&state, ctx, GetInstructorListQuery).await
}

#[utoipa::path(
    get,
    path = "/api/instructor/{id}",
    tag = INSTRUCTOR_TAG,
    params(("id" = i32, Path, description = "Instructor id")),
    responses(
        (status = 200, description = "The instructor", body = ResponseDto<InstructorDto>),
        (status = 404, description = "Instructor not found", body = ErrorDto)
    ),
)]
pub async fn get_instructor(
    State(state): State<AppState>,
    ctx: RequestContext,
    PathParam(id): PathParam<i32>,
) -> Response<InstructorDto> {
    send(&state, ctx, GetInstructorByIdQuery { id }).await
}

/// Create an instructor.
///
/// # Arguments
/// - `state` - Application state containing the mediator
/// - `ctx` - Request culture
/// - `payload` - Names, optional details, department and supervisor
///
/// # Returns
/// - `201 Created` - Instructor created
/// - `400 Bad Request` - Invalid input, or the given department or supervisor does not exist
#[utoipa::path(
    post,
    path = "/api/instructor",
    tag = INSTRUCTOR_TAG,
    request_body = AddInstructorDto,
    responses(
        (status = 201, description = "Instructor created", body = ResponseDto<InstructorDto>),
        (status = 400, description = "Invalid input or unknown department or supervisor", body = ErrorDto)
    ),
)]
pub async fn add_instructor(
    State(state): State<AppState>,
    ctx: RequestContext,
    FormOrJson(payload): FormOrJson<AddInstructorDto>,
) -> Response<InstructorDto> {
    send_validated(&state, ctx, AddInstructorCommand::from(payload)).await
}

/// Let an instructor teach a subject.
///
/// # Returns
/// - `201 Created` - Subject assigned
/// - `400 Bad Request` - Invalid ids or subject already assigned
/// - `404 Not Found` - Instructor or subject not found
#[utoipa::path(
    post,
    path = "/api/instructor/{id}/subjects",
    tag = INSTRUCTOR_TAG,
    params(("id" = i32, Path, description = "Instructor id")),
    request_body = AssignSubjectDto,
    responses(
        (status = 201, description = "Subject assigned", body = ResponseDto<SubjectDto>),
        (status = 400, description = "Invalid ids or already assigned", body = ErrorDto),
        (status = 404, description = "Instructor or subject not found", body = ErrorDto)
    ),
)]
pub async fn assign_subject(
    State(state): State<AppState>,
    ctx: RequestContext,
    PathParam(id): PathParam<i32>,
    FormOrJson(payload): FormOrJson<AssignSubjectDto>,
) -> Response<SubjectDto> {
    let command = AssignInstructorSubjectCommand {
        instructor_id: id,
        subject_id: payload.subject_id,
    };

    send_validated(&state, ctx, command).await
}
