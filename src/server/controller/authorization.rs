use axum::extract::State;

use crate::{
    model::{
        api::{ErrorDto, ResponseDto},
        role::{AddRoleDto, EditRoleDto, RoleDto},
    },
    server::{
        controller::{send, send_validated},
        mediator::RequestContext,
        middleware::auth::AdminUser,
        model::role::{
            AddRoleCommand, DeleteRoleCommand, EditRoleCommand, GetRoleByIdQuery, GetRoleListQuery,
        },
        response::Response,
        state::AppState,
        util::{body::FormOrJson, params::PathParam},
    },
};

/// Tag for grouping role management endpoints in OpenAPI documentation
pub static AUTHORIZATION_TAG: &str = "authorization";

/// Create a role.
///
/// # Access Control
/// - `Admin` - Only admins can manage roles
///
/// # Arguments
/// - `state` - Application state containing the mediator
/// - `ctx` - Request culture
/// - `payload` - Name of the new role
///
/// # Returns
/// - `201 Created` - Role created
/// - `400 Bad Request` - Invalid name or a role with that name exists
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
#[utoipa::path(
    post,
    path = "/api/authorization",
    tag = AUTHORIZATION_TAG,
    request_body = AddRoleDto,
    security(("Bearer" = [])),
    responses(
        (status = 201, description = "Role created", body = ResponseDto<RoleDto>),
        (status = 400, description = "Invalid name or role exists", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn add_role(
    State(state): State<AppState>,
    _admin: AdminUser,
    ctx: RequestContext,
    FormOrJson(payload): FormOrJson<AddRoleDto>,
) -> Response<RoleDto> {
    send_validated(&state, ctx, AddRoleCommand::from(payload)).await
}

/// Rename a role.
///
/// # Access Control
/// - `Admin` - Only admins can manage roles
///
/// # Returns
/// - `200 OK` - Role renamed
/// - `400 Bad Request` - Invalid input or another role has that name
/// - `404 Not Found` - No role with that id
#[utoipa::path(
    put,
    path = "/api/authorization",
    tag = AUTHORIZATION_TAG,
    request_body = EditRoleDto,
    security(("Bearer" = [])),
    responses(
        (status = 200, description = "Role renamed", body = ResponseDto<RoleDto>),
        (status = 400, description = "Invalid input or name taken", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Role not found", body = ErrorDto)
    ),
)]
pub async fn edit_role(
    State(state): State<AppState>,
    _admin: AdminUser,
    ctx: RequestContext,
    FormOrJson(payload): FormOrJson<EditRoleDto>,
) -> Response<RoleDto> {
    send_validated(&state, ctx, EditRoleCommand::from(payload)).await
}

/// Delete a role nobody holds.
///
/// # Access Control
/// - `Admin` - Only admins can manage roles
///
/// # Returns
/// - `200 OK` - Role deleted, `data` is its id
/// - `400 Bad Request` - Invalid id or the role is still assigned
/// - `404 Not Found` - No role with that id
#[utoipa::path(
    delete,
    path = "/api/authorization/{id}",
    tag = AUTHORIZATION_TAG,
    params(("id" = i32, Path, description = "Role id")),
    security(("Bearer" = [])),
    responses(
        (status = 200, description = "Role deleted", body = ResponseDto<i32>),
        (status = 400, description = "Invalid id or role in use", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Role not found", body = ErrorDto)
    ),
)]
pub async fn delete_role(
    State(state): State<AppState>,
    _admin: AdminUser,
    ctx: RequestContext,
    PathParam(id): PathParam<i32>,
) -> Response<i32> {
    send_validated(&state, ctx, DeleteRoleCommand { id }).await
}

/// List every role.
///
/// # Access Control
/// - `Admin` - Only admins can manage roles
#[utoipa::path(
    get,
    path = "/api/authorization",
    tag = AUTHORIZATION_TAG,
    security(("Bearer" = [])),
    responses(
        (status = 200, description = "All roles", body = ResponseDto<Vec<RoleDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn get_roles(
    State(state): State<AppState>,
    _admin: AdminUser,
    ctx: RequestContext,
) -> Response<Vec<RoleDto>> {
    send(&state, ctx, GetRoleListQuery).await
}

/// Get a role by id.
///
/// # Access Control
/// - `Admin` - Only admins can manage roles
#[utoipa::path(
    get,
    path = "/api/authorization/{id}",
    tag = AUTHORIZATION_TAG,
    params(("id" = i32, Path, description = "Role id")),
    security(("Bearer" = [])),
    responses(
        (status = 200, description = "The role", body = ResponseDto<RoleDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Role not found", body = ErrorDto)
    ),
)]
pub async fn get_role(
    State(state): State<AppState>,
    _admin: AdminUser,
    ctx: RequestContext,
    PathParam(id): PathParam<i32>,
) -> Response<RoleDto> {
    send(&state, ctx, GetRoleByIdQuery { id }).await
}
