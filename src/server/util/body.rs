use axum::{
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::server::middleware::locale::request_context;

/// Request body accepted either as `application/x-www-form-urlencoded` or as JSON.
///
/// Anything that is not declared as a form is parsed as JSON. A body that does
/// not deserialize is rejected with a 422 envelope carrying the parser message.
pub struct FormOrJson<T>(pub T);

impl<S, T> FromRequest<S> for FormOrJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let ctx = request_context(req.headers());
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));

        let body = if is_form {
            Form::<T>::from_request(req, state)
                .await
                .map(|Form(value)| value)
                .map_err(|rejection| rejection.body_text())
        } else {
            Json::<T>::from_request(req, state)
                .await
                .map(|Json(value)| value)
                .map_err(|rejection| rejection.body_text())
        };

        body.map(FormOrJson).map_err(|detail| {
            tracing::debug!("Rejected request body: {}", detail);
            ctx.responses()
                .unprocessable::<()>(vec![detail])
                .into_response()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::auth::SignInDto;
    use axum::{body::Body, http::StatusCode};

    fn request(content_type: &str, body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(CONTENT_TYPE, content_type)
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn accepts_json() {
        let req = request("application/json", r#"{"userName":"sara","password":"x"}"#);

        let FormOrJson(dto) = FormOrJson::<SignInDto>::from_request(req, &()).await.ok().unwrap();

        assert_eq!(dto.user_name, "sara");
    }

    #[tokio::test]
    async fn accepts_form() {
        let req = request(
            "application/x-www-form-urlencoded",
            "userName=sara&password=x",
        );

        let FormOrJson(dto) = FormOrJson::<SignInDto>::from_request(req, &()).await.ok().unwrap();

        assert_eq!(dto.user_name, "sara");
        assert_eq!(dto.password, "x");
    }

    #[tokio::test]
    async fn malformed_body_is_unprocessable() {
        let req = request("application/json", "{not json");

        let rejection = FormOrJson::<SignInDto>::from_request(req, &())
            .await
            .err()
            .unwrap();

        assert_eq!(rejection.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
