use axum::extract::State;

use crate::{
    model::{
        api::{ErrorDto, PageQueryDto, PaginatedDto, ResponseDto},
        department::{
            AddDepartmentDto, AssignSubjectDto, DepartmentDetailDto, DepartmentDetailQueryDto,
            DepartmentDto, EditDepartmentDto,
        },
        subject::SubjectDto,
    },
    server::{
        controller::{send, send_validated},
        mediator::RequestContext,
        model::{
            department::{
                AddDepartmentCommand, AssignDepartmentSubjectCommand, DeleteDepartmentCommand,
                EditDepartmentCommand, GetDepartmentByIdQuery, GetDepartmentListQuery,
            },
            PageRequest,
        },
        response::Response,
        state::AppState,
        util::{body::FormOrJson, params::{PathParam, QueryParams}},
    },
};

/// Tag for grouping department endpoints in OpenAPI documentation
pub static DEPARTMENT_TAG: &str = "department";

/// Get one page of departments ordered by id.
///
/// # Arguments
/// - `state` - Application state containing the mediator
/// - `ctx` - Request culture, selects the localized department names
/// - `page` - `pageNumber` and `pageSize`, defaulting to 1 and 10
///
/// # Returns
/// - `200 OK` - Page of departments
#[utoipa::path(
    get,
    path = "/api/department",
    tag = DEPARTMENT_TAG,
    params(PageQueryDto),
    responses(
        (status = 200, description = "Page of departments", body = ResponseDto<PaginatedDto<DepartmentDto>>)
    ),
)]
pub async fn get_departments(
    State(state): State<AppState>,
    ctx: RequestContext,
    QueryParams(page): QueryParams<PageQueryDto>,
) -> Response<PaginatedDto<DepartmentDto>> {
    let query = GetDepartmentListQuery {
        page: PageRequest::new(page.page_number, page.page_size),
    };

    send(&state, ctx, query).await
}

/// Get a department with its manager, subjects, instructors and one page of students.
///
/// # Arguments
/// - `id` - Department id
/// - `paging` - `studentPageNumber` and `studentPageSize` for the student list
///
/// # Returns
/// - `200 OK` - Department detail
/// - `404 Not Found` - No department with that id
#[utoipa::path(
    get,
    path = "/api/department/{id}",
    tag = DEPARTMENT_TAG,
    params(("id" = i32, Path, description = "Department id"), DepartmentDetailQueryDto),
    responses(
        (status = 200, description = "Department detail", body = ResponseDto<DepartmentDetailDto>),
        (status = 404, description = "Department not found", body = ErrorDto)
    ),
)]
pub async fn get_department(
    State(state): State<AppState>,
    ctx: RequestContext,
    PathParam(id): PathParam<i32>,
    QueryParams(paging): QueryParams<DepartmentDetailQueryDto>,
) -> Response<DepartmentDetailDto> {
    send(&state, ctx, GetDepartmentByIdQuery::from_dto(id, paging)).await
}

/// Create a department managed by an existing instructor.
///
/// # Returns
/// - `201 Created` - Department created
/// - `400 Bad Request` - Invalid input, name taken or manager not found
#[utoipa::path(
    post,
    path = "/api/department",
    tag = DEPARTMENT_TAG,
    request_body = AddDepartmentDto,
    responses(
        (status = 201, description = "Department created", body = ResponseDto<DepartmentDto>),
        (status = 400, description = "Invalid input, name taken or manager not found", body = ErrorDto)
    ),
)]
pub async fn add_department(
    State(state): State<AppState>,
    ctx: RequestContext,
    FormOrJson(payload): FormOrJson<AddDepartmentDto>,
) -> Response<DepartmentDto> {
    send_validated(&state, ctx, AddDepartmentCommand::from(payload)).await
}

/// Update a department's names and manager.
///
/// # Returns
/// - `200 OK` - Department updated
/// - `400 Bad Request` - Invalid input, name taken or manager not found
/// - `404 Not Found` - No department with that id
#[utoipa::path(
    put,
    path = "/api/department",
    tag = DEPARTMENT_TAG,
    request_body = EditDepartmentDto,
    responses(
        (status = 200, description = "Department updated", body = ResponseDto<DepartmentDto>),
        (status = 400, description = "Invalid input, name taken or manager not found", body = ErrorDto),
        (status = 404, description = "Department not found", body = ErrorDto)
    ),
)]
pub async fn edit_department(
    State(state): State<AppState>,
    ctx: RequestContext,
    FormOrJson(payload): FormOrJson<EditDepartmentDto>,
) -> Response<DepartmentDto> {
    send_validated(&state, ctx, EditDepartmentCommand::from(payload)).await
}

/// Delete a department. Its students are detached first.
///
/// # Returns
/// - `200 OK` - Department deleted, `data` is its id
/// - `400 Bad Request` - Still referenced by instructors or subjects
/// - `404 Not Found` - No department with that id
#[utoipa::path(
    delete,
    path = "/api/department/{id}",
    tag = DEPARTMENT_TAG,
    params(("id" = i32, Path, description = "Department id")),
    responses(
        (status = 200, description = "Department deleted", body = ResponseDto<i32>),
        (status = 400, description = "Department still referenced", body = ErrorDto),
        (status = 404, description = "Department not found", body = ErrorDto)
    ),
)]
pub async fn delete_department(
    State(state): State<AppState>,
    ctx: RequestContext,
    PathParam(id): PathParam<i32>,
) -> Response<i32> {
    send(&state, ctx, DeleteDepartmentCommand { id }).await
}

/// Offer a subject in a department.
///
/// # Returns
/// - `201 Created` - Subject assigned
/// - `400 Bad Request` - Invalid ids or subject already assigned
/// - `404 Not Found` - Department or subject not found
#[utoipa::path(
    post,
    path = "/api/department/{id}/subjects",
    tag = DEPARTMENT_TAG,
    params(("id" = i32, Path, description = "Department id")),
    request_body = AssignSubjectDto,
    responses(
        (status = 201, description = "Subject assigned", body = ResponseDto<SubjectDto>),
        (status = 400, description = "Invalid ids or already assigned", body = ErrorDto),
        (status = 404, description = "Department or subject not found", body = ErrorDto)
    ),
)]
pub async fn assign_subject(
    State(state): State<AppState>,
    ctx: RequestContext,
    PathParam(id): PathParam<i32>,
    FormOrJson(payload): FormOrJson<AssignSubjectDto>,
) -> Response<SubjectDto> {
    let command = AssignDepartmentSubjectCommand {
        department_id: id,
        subject_id: payload.subject_id,
    };

    send_validated(&state, ctx, command).await
}
