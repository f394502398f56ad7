use axum::extract::State;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto, ResponseDto},
        student::{
            AddStudentDto, EditStudentDto, EnrollStudentDto, StudentDto, StudentPageQueryDto,
            StudentSubjectDto,
        },
    },
    server::{
        controller::{send, send_validated},
        mediator::RequestContext,
        model::student::{
            AddStudentCommand, DeleteStudentCommand, EditStudentCommand, EnrollStudentCommand,
            GetStudentByIdQuery, GetStudentListQuery, GetStudentPaginatedListQuery,
        },
        response::Response,
        state::AppState,
        util::{body::FormOrJson, params::{PathParam, QueryParams}},
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

/// Get every student.
///
/// # Arguments
/// - `state` - Application state containing the mediator
/// - `ctx` - Request culture, selects the localized student and department names
///
/// # Returns
/// - `200 OK` - All students
#[utoipa::path(
    get,
    path = "/api/student",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "All students", body = ResponseDto<Vec<StudentDto>>)
    ),
)]
pub async fn get_students(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> Response<Vec<StudentDto>> {
    send(&state, ctx, GetStudentListQuery).await
}

/// Get one page of students, optionally filtered and ordered.
///
/// # Arguments
/// - `params` - `pageNumber`, `pageSize`, `orderBy` and `search`
///
/// # Returns
/// - `200 OK` - Page of students
#[utoipa::path(
    get,
    path = "/api/student/paginated",
    tag = STUDENT_TAG,
    params(StudentPageQueryDto),
    responses(
        (status = 200, description = "Page of students", body = ResponseDto<PaginatedDto<StudentDto>>)
    ),
)]
pub async fn get_students_paginated(
    State(state): State<AppState>,
    ctx: RequestContext,
    QueryParams(params): QueryParams<StudentPageQueryDto>,
) -> Response<PaginatedDto<StudentDto>> {
    send(&state, ctx, GetStudentPaginatedListQuery::from(params)).await
}

/// Get a student by id.
///
/// # Returns
/// - `200 OK` - The student, department fields null when unassigned
/// - `404 Not Found` - No student with that id
#[utoipa::path(
    get,
    path = "/api/student/{id}",
    tag = STUDENT_TAG,
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "The student", body = ResponseDto<StudentDto>),
        (status = 404, description = "Student not found", body = ErrorDto)
    ),
)]
pub async fn get_student(
    State(state): State<AppState>,
    ctx: RequestContext,
    PathParam(id): PathParam<i32>,
) -> Response<StudentDto> {
    send(&state, ctx, GetStudentByIdQuery { id }).await
}

/// Create a student.
///
/// A department id that does not exist is stored as no department.
///
/// # Returns
/// - `201 Created` - Student created
/// - `400 Bad Request` - Invalid input or name taken
#[utoipa::path(
    post,
    path = "/api/student",
    tag = STUDENT_TAG,
    request_body = AddStudentDto,
    responses(
        (status = 201, description = "Student created", body = ResponseDto<StudentDto>),
        (status = 400, description = "Invalid input or name taken", body = ErrorDto)
    ),
)]
pub async fn add_student(
    State(state): State<AppState>,
    ctx: RequestContext,
    FormOrJson(payload): FormOrJson<AddStudentDto>,
) -> Response<StudentDto> {
    send_validated(&state, ctx, AddStudentCommand::from(payload)).await
}

/// Update a student.
///
/// # Returns
/// - `200 OK` - Student updated
/// - `400 Bad Request` - Invalid input or name taken by another student
/// - `404 Not Found` - No student with that id
#[utoipa::path(
    put,
    path = "/api/student",
    tag = STUDENT_TAG,
    request_body = EditStudentDto,
    responses(
        (status = 200, description = "Student updated", body = ResponseDto<StudentDto>),
        (status = 400, description = "Invalid input or name taken", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto)
    ),
)]
pub async fn edit_student(
    State(state): State<AppState>,
    ctx: RequestContext,
    FormOrJson(payload): FormOrJson<EditStudentDto>,
) -> Response<StudentDto> {
    send_validated(&state, ctx, EditStudentCommand::from(payload)).await
}

#[utoipa::path(
    delete,
    path = "/api/student/{id}",
    tag = STUDENT_TAG,
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student deleted", body = ResponseDto<i32>),
        (status = 404, description = "Student not found", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    ctx: RequestContext,
    PathParam(id): PathParam<i32>,
) -> Response<i32> {
    send(&state, ctx, DeleteStudentCommand { id }).await
}

/// Enroll a student in a subject with an optional grade.
///
/// # Returns
/// - `201 Created` - Enrollment recorded
/// - `400 Bad Request` - Invalid ids, grade outside 0 to 100, or already enrolled
/// - `404 Not Found` - Student or subject not found
#[utoipa::path(
    post,
    path = "/api/student/{id}/subjects",
    tag = STUDENT_TAG,
    params(("id" = i32, Path, description = "Student id")),
    request_body = EnrollStudentDto,
    responses(
        (status = 201, description = "Enrollment recorded", body = ResponseDto<StudentSubjectDto>),
        (status = 400, description = "Invalid input or already enrolled", body = ErrorDto),
        (status = 404, description = "Student or subject not found", body = ErrorDto)
    ),
)]
pub async fn enroll_student(
    State(state): State<AppState>,
    ctx: RequestContext,
    PathParam(id): PathParam<i32>,
    FormOrJson(payload): FormOrJson<EnrollStudentDto>,
) -> Response<StudentSubjectDto> {
    send_validated(&state, ctx, EnrollStudentCommand::from_dto(id, payload)).await
}
