//! API DTOs

pub mod detail_dto;
pub mod paginated_response;

use serde::Serialize;

/// Envelope for every JSON response; `data` on success, `error_code`/`error_msg` on failure
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub is_successful: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_msg: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            is_successful: true,
            data: Some(data),
            error_code: None,
            error_msg: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn err(error_code: u16, error_msg: impl Into<String>) -> Self {
        Self {
            is_successful: false,
            data: None,
            error_code: Some(error_code),
            error_msg: Some(error_msg.into()),
        }
    }
}
