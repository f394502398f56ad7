use axum::{
    extract::{FromRequestParts, Path, Query},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use crate::server::middleware::locale::request_context;

/// Path parameters that reject with a 400 envelope instead of axum's plain text.
pub struct PathParam<T>(pub T);

/// Query string that rejects with a 400 envelope instead of axum's plain text.
pub struct QueryParams<T>(pub T);

fn reject(parts: &Parts, detail: String) -> Response {
    tracing::debug!("Rejected request parameters: {}", detail);
    request_context(&parts.headers)
        .responses()
        .malformed::<()>(vec![detail])
        .into_response()
}

impl<S, T> FromRequestParts<S> for PathParam<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(PathParam(value)),
            Err(rejection) => Err(reject(parts, rejection.body_text())),
        }
    }
}

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(QueryParams(value)),
            Err(rejection) => Err(reject(parts, rejection.body_text())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::api::PageQueryDto;
    use axum::{body::to_bytes, http::{header::ACCEPT_LANGUAGE, Request, StatusCode}};
    use serde_json::Value;

    fn parts(uri: &str) -> Parts {
        let (parts, _) = Request::builder()
            .uri(uri)
            .header(ACCEPT_LANGUAGE, "fr")
            .body(())
            .unwrap()
            .into_parts();
        parts
    }

    #[tokio::test]
    async fn parses_query() {
        let mut parts = parts("/?pageNumber=2&pageSize=5");

        let QueryParams(page) = QueryParams::<PageQueryDto>::from_request_parts(&mut parts, &())
            .await
            .ok()
            .unwrap();

        assert_eq!(page.page_number, Some(2));
        assert_eq!(page.page_size, Some(5));
    }

    #[tokio::test]
    async fn bad_query_is_localized_envelope() {
        let mut parts = parts("/?pageNumber=-3");

        let rejection = QueryParams::<PageQueryDto>::from_request_parts(&mut parts, &())
            .await
            .err()
            .unwrap();

        assert_eq!(rejection.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(rejection.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["succeeded"], false);
        assert_eq!(body["message"], "Requête invalide");
        assert_eq!(body["errors"].as_array().map(Vec::len), Some(1));
    }
}
