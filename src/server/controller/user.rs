use axum::extract::State;

use crate::{
    model::{
        api::{ErrorDto, PageQueryDto, PaginatedDto, ResponseDto},
        auth::JwtAuthResultDto,
        user::{ChangePasswordDto, EditUserDto, RegisterUserDto, UserDto},
    },
    server::{
        controller::{send, send_validated},
        mediator::RequestContext,
        middleware::auth::AuthUser,
        model::{
            user::{
                ChangeUserPasswordCommand, DeleteUserCommand, EditUserCommand, GetUserByIdQuery,
                GetUserListQuery, RegisterUserCommand,
            },
            PageRequest,
        },
        response::Response,
        state::AppState,
        util::{body::FormOrJson, params::{PathParam, QueryParams}},
    },
};

/// Tag for grouping application user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a new application user.
///
/// The new account joins the `User` role and is signed in straight away.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the mediator
/// - `ctx` - Request culture
/// - `payload` - Profile, password and password confirmation
///
/// # Returns
/// - `201 Created` - Access token for the new user
/// - `400 Bad Request` - Invalid input, email or user name taken, or weak password
#[utoipa::path(
    post,
    path = "/api/user",
    tag = USER_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "User registered", body = ResponseDto<JwtAuthResultDto>),
        (status = 400, description = "Invalid input, duplicate or weak password", body = ErrorDto)
    ),
)]
pub async fn register_user(
    State(state): State<AppState>,
    ctx: RequestContext,
    FormOrJson(payload): FormOrJson<RegisterUserDto>,
) -> Response<JwtAuthResultDto> {
    send_validated(&state, ctx, RegisterUserCommand::from(payload)).await
}

/// Update a user's profile.
///
/// # Access Control
/// - Any signed-in user
///
/// # Returns
/// - `200 OK` - Profile updated
/// - `400 Bad Request` - Invalid input or user name or email taken
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No user with that id
#[utoipa::path(
    put,
    path = "/api/user",
    tag = USER_TAG,
    request_body = EditUserDto,
    security(("Bearer" = [])),
    responses(
        (status = 200, description = "Profile updated", body = ResponseDto<UserDto>),
        (status = 400, description = "Invalid input or duplicate", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn edit_user(
    State(state): State<AppState>,
    _user: AuthUser,
    ctx: RequestContext,
    FormOrJson(payload): FormOrJson<EditUserDto>,
) -> Response<UserDto> {
    send_validated(&state, ctx, EditUserCommand::from(payload)).await
}

/// Delete a user.
///
/// # Access Control
/// - Any signed-in user
#[utoipa::path(
    delete,
    path = "/api/user/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    security(("Bearer" = [])),
    responses(
        (status = 200, description = "User deleted", body = ResponseDto<i32>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    _user: AuthUser,
    ctx: RequestContext,
    PathParam(id): PathParam<i32>,
) -> Response<i32> {
    send(&state, ctx, DeleteUserCommand { id }).await
}

/// Change a user's password.
///
/// # Access Control
/// - Any signed-in user
///
/// # Returns
/// - `200 OK` - Password changed, `data` is the user id
/// - `400 Bad Request` - Invalid input, wrong current password or weak new password
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No user with that id
#[utoipa::path(
    put,
    path = "/api/user/change-password",
    tag = USER_TAG,
    request_body = ChangePasswordDto,
    security(("Bearer" = [])),
    responses(
        (status = 200, description = "Password changed", body = ResponseDto<i32>),
        (status = 400, description = "Invalid input or password rejected", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn change_password(
    State(state): State<AppState>,
    _user: AuthUser,
    ctx: RequestContext,
    FormOrJson(payload): FormOrJson<ChangePasswordDto>,
) -> Response<i32> {
    send_validated(&state, ctx, ChangeUserPasswordCommand::from(payload)).await
}

/// Get one page of users ordered by id.
///
/// # Access Control
/// - Any signed-in user
#[utoipa::path(
    get,
    path = "/api/user",
    tag = USER_TAG,
    params(PageQueryDto),
    security(("Bearer" = [])),
    responses(
        (status = 200, description = "Page of users", body = ResponseDto<PaginatedDto<UserDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    _user: AuthUser,
    ctx: RequestContext,
    QueryParams(page): QueryParams<PageQueryDto>,
) -> Response<PaginatedDto<UserDto>> {
    let query = GetUserListQuery {
        page: PageRequest::new(page.page_number, page.page_size),
    };

    send(&state, ctx, query).await
}

#[utoipa::path(
    get,
    path = "/api/user/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    security(("Bearer" = [])),
    responses(
        (status = 200, description = "The user", body = ResponseDto<UserDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    _user: AuthUser,
    ctx: RequestContext,
    PathParam(id): PathParam<i32>,
) -> Response<UserDto> {
    send(&state, ctx, GetUserByIdQuery { id }).await
}
