use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Successful response envelope.
///
/// `succeeded` is always `true` and `data` always present. Failures use
/// [`ErrorDto`] so a failed response can never carry a payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResponseDto<T> {
    pub status_code: u16,
    pub succeeded: bool,
    pub message: String,
    pub data: T,
}

/// Failed response envelope.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDto {
    pub status_code: u16,
    pub succeeded: bool,
    pub message: String,
    /// Always `null`.
    #[schema(value_type = Option<Object>)]
    pub data: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

/// One page of a paginated collection.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedDto<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub current_page: u64,
    pub page_size: u64,
    pub total_pages: u64,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

/// `pageNumber` / `pageSize` query parameters.
#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PageQueryDto {
    /// 1-based page number, defaults to 1.
    pub page_number: Option<u64>,
    /// Rows per page, defaults to 10 and capped at 100.
    pub page_size: Option<u64>,
}
