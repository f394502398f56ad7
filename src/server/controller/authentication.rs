use axum::extract::State;

use crate::{
    model::{
        api::{ErrorDto, ResponseDto},
        auth::{JwtAuthResultDto, SignInDto},
    },
    server::{
        controller::send_validated, mediator::RequestContext, model::auth::SignInCommand,
        response::Response, state::AppState, util::body::FormOrJson,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTHENTICATION_TAG: &str = "authentication";

/// Exchange a user name and password for a bearer token.
///
/// # Returns
/// - `200 OK` - Access token and its expiry
/// - `400 Bad Request` - Missing fields or wrong user name or password
#[utoipa::path(
    post,
    path = "/api/authentication/sign-in",
    tag = AUTHENTICATION_TAG,
    request_body = SignInDto,
    responses(
        (status = 200, description = "Signed in", body = ResponseDto<JwtAuthResultDto>),
        (status = 400, description = "Invalid credentials", body = ErrorDto)
    ),
)]
pub async fn sign_in(
    State(state): State<AppState>,
    ctx: RequestContext,
    FormOrJson(payload): FormOrJson<SignInDto>,
) -> Response<JwtAuthResultDto> {
    send_validated(&state, ctx, SignInCommand::from(payload)).await
}
