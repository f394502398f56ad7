//! Uniform response envelope returned by every handler.
//!
//! [`Response`] is a tagged result: only the success variant carries data, so a
//! failed envelope can never expose a payload. Messages are resolved through the
//! request's [`Localizer`] by [`ResponseHandler`].

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::{
    model::api::{ErrorDto, ResponseDto},
    server::localization::{Localizer, MessageKey},
};

/// Outcome status of an envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStatus {
    Ok,
    Created,
    BadRequest,
    NotFound,
    Unauthorized,
    Forbidden,
    UnprocessableEntity,
    InternalServerError,
}

impl ResponseStatus {
    pub fn status_code(self) -> StatusCode {
        match self {
            Self::Ok => StatusCode::OK,
            Self::Created => StatusCode::CREATED,
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::UnprocessableEntity => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Response<T> {
    Success {
        status: ResponseStatus,
        message: String,
        data: T,
    },
    Failure {
        status: ResponseStatus,
        message: String,
        errors: Vec<String>,
    },
}

impl<T> Response<T> {
    pub fn succeeded(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn status(&self) -> ResponseStatus {
        match self {
            Self::Success { status, .. } | Self::Failure { status, .. } => *status,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success { message, .. } | Self::Failure { message, .. } => message,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success { data, .. } => Some(data),
            Self::Failure { .. } => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Success { data, .. } => Some(data),
            Self::Failure { .. } => None,
        }
    }

    pub fn errors(&self) -> &[String] {
        match self {
            Self::Success { .. } => &[],
            Self::Failure { errors, .. } => errors,
        }
    }

    /// Transforms the payload of a success, passing failures through unchanged.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Response<U> {
        match self {
            Self::Success {
                status,
                message,
                data,
            } => Response::Success {
                status,
                message,
                data: f(data),
            },
            Self::Failure {
                status,
                message,
                errors,
            } => Response::Failure {
                status,
                message,
                errors,
            },
        }
    }
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::Success {
                status,
                message,
                data,
            } => {
                let code = status.status_code();
                (
                    code,
                    Json(ResponseDto {
                        status_code: code.as_u16(),
                        succeeded: true,
                        message,
                        data,
                    }),
                )
                    .into_response()
            }
            Self::Failure {
                status,
                message,
                errors,
            } => {
                let code = status.status_code();
                (
                    code,
                    Json(ErrorDto {
                        status_code: code.as_u16(),
                        succeeded: false,
                        message,
                        data: None,
                        errors,
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// Builds envelopes with messages in the request's culture.
#[derive(Debug, Clone, Copy)]
pub struct ResponseHandler {
    localizer: Localizer,
}

impl ResponseHandler {
    pub fn new(localizer: Localizer) -> Self {
        Self { localizer }
    }

    pub fn localizer(&self) -> &Localizer {
        &self.localizer
    }

    fn success_with<T>(&self, status: ResponseStatus, key: MessageKey, data: T) -> Response<T> {
        Response::Success {
            status,
            message: self.localizer.get(key),
            data,
        }
    }

    fn failure<T>(&self, status: ResponseStatus, message: String, errors: Vec<String>) -> Response<T> {
        Response::Failure {
            status,
            message,
            errors,
        }
    }

    pub fn success<T>(&self, data: T) -> Response<T> {
        self.success_with(ResponseStatus::Ok, MessageKey::Success, data)
    }

    pub fn created<T>(&self, data: T) -> Response<T> {
        self.success_with(ResponseStatus::Created, MessageKey::Created, data)
    }

    pub fn updated<T>(&self, data: T) -> Response<T> {
        self.success_with(ResponseStatus::Ok, MessageKey::Updated, data)
    }

    pub fn deleted<T>(&self, data: T) -> Response<T> {
        self.success_with(ResponseStatus::Ok, MessageKey::Deleted, data)
    }

    pub fn bad_request<T>(&self, key: MessageKey) -> Response<T> {
        self.failure(ResponseStatus::BadRequest, self.localizer.get(key), Vec::new())
    }

    /// Bad request carrying a message that was not resolved from a key, such as
    /// the description of an identity failure.
    pub fn bad_request_message<T>(&self, message: impl Into<String>) -> Response<T> {
        self.failure(ResponseStatus::BadRequest, message.into(), Vec::new())
    }

    /// Bad request listing every validation error.
    pub fn invalid<T>(&self, errors: Vec<String>) -> Response<T> {
        let message = errors
            .first()
            .cloned()
            .unwrap_or_else(|| self.localizer.get(MessageKey::BadRequest));
        self.failure(ResponseStatus::BadRequest, message, errors)
    }

    /// Bad request for a path or query string that did not parse. The
    /// message is the localized generic one and `errors` keeps the parser detail.
    pub fn malformed<T>(&self, errors: Vec<String>) -> Response<T> {
        self.failure(
            ResponseStatus::BadRequest,
            self.localizer.get(MessageKey::BadRequest),
            errors,
        )
    }

    pub fn not_found<T>(&self) -> Response<T> {
        self.not_found_with(MessageKey::NotFound)
    }

    pub fn not_found_with<T>(&self, key: MessageKey) -> Response<T> {
        self.failure(ResponseStatus::NotFound, self.localizer.get(key), Vec::new())
    }

    pub fn unauthorized<T>(&self) -> Response<T> {
        self.failure(
            ResponseStatus::Unauthorized,
            self.localizer.get(MessageKey::UnAuthorized),
            Vec::new(),
        )
    }

    pub fn forbidden<T>(&self) -> Response<T> {
        self.failure(
            ResponseStatus::Forbidden,
            self.localizer.get(MessageKey::Forbidden),
            Vec::new(),
        )
    }

    pub fn unprocessable<T>(&self, errors: Vec<String>) -> Response<T> {
        self.failure(
            ResponseStatus::UnprocessableEntity,
            self.localizer.get(MessageKey::Unprocessable),
            errors,
        )
    }

    pub fn internal_error<T>(&self) -> Response<T> {
        self.failure(
            ResponseStatus::InternalServerError,
            self.localizer.get(MessageKey::InternalError),
            Vec::new(),
        )
    }
}
