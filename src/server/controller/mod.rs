//! HTTP entry layer.
//!
//! Each controller turns its route, query and body input into a command or
//! query, validates it when the operation has rules, dispatches it through the
//! mediator and renders the resulting envelope. Role checks happen in the
//! extractors, before the body is read.

pub mod authentication;
pub mod authorization;
pub mod department;
pub mod instructor;
pub mod student;
pub mod subject;
pub mod user;

#[cfg(test)]
mod test;

use crate::server::{
    mediator::{Request, RequestContext},
    response::Response,
    state::AppState,
    validation::Validate,
};

/// Dispatches `request` and renders an unexpected error as a failed envelope.
pub(crate) async fn send<R, T>(state: &AppState, ctx: RequestContext, request: R) -> Response<T>
where
    R: Request<Response = Response<T>>,
    T: Send + 'static,
{
    match state.mediator.send(request, &ctx).await {
        Ok(response) => response,
        Err(err) => err.into_envelope(&ctx.responses()),
    }
}

/// Validates `request` first; an invalid request is answered with a 400
/// listing every violated rule and never reaches its handler.
pub(crate) async fn send_validated<R, T>(
    state: &AppState,
    ctx: RequestContext,
    request: R,
) -> Response<T>
where
    R: Request<Response = Response<T>> + Validate,
    T: Send + 'static,
{
    let result = request.validate(&ctx.localizer());
    if !result.is_valid() {
        tracing::debug!("Rejected invalid request: {:?}", result.errors());
        return ctx.responses().invalid(result.into_errors());
    }

    send(state, ctx, request).await
}
