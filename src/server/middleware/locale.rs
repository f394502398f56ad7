use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header::ACCEPT_LANGUAGE, request::Parts, HeaderMap},
};

use crate::server::{localization::Locale, mediator::RequestContext};

/// Builds the request context from the request headers.
///
/// A missing or unreadable `Accept-Language` header selects the default culture.
pub fn request_context(headers: &HeaderMap) -> RequestContext {
    let locale = headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .map(Locale::from_accept_language)
        .unwrap_or_default();

    RequestContext::new(locale)
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(request_context(&parts.headers))
    }
}
