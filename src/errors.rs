use axum::{http::StatusCode, response::IntoResponse, Json};
use thiserror::Error;

use crate::api::dto::ApiResponse;
use crate::core::client::cluster_error::ClusterError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error("Body parsing error: {0}")]
    BodyParsingError(String),

    #[error("K8s API error: {0}")]
    K8sApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

impl From<ClusterError> for AppError {
    fn from(err: ClusterError) -> Self {
        let message = err.to_string();
        match err {
            ClusterError::NotFound { .. } => AppError::NotFound(message),
            ClusterError::Conflict(_) => AppError::Conflict(message),
            ClusterError::Forbidden(_) => AppError::Forbidden(message),
            ClusterError::Unauthorized(_) => AppError::Unauthorized(message),
            ClusterError::InvalidCoordinates(_) => AppError::BodyParsingError(message),
            ClusterError::Api { .. } => AppError::K8sApiError(message),
            ClusterError::Serialization(_) | ClusterError::Transport(_) => {
                AppError::InternalServerError(message)
            }
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BodyParsingError(_) => StatusCode::BAD_REQUEST,
            AppError::K8sApiError(_) => StatusCode::BAD_GATEWAY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let body = Json(ApiResponse::err(status.as_u16(), self.to_string()));

        (status, body).into_response()
    }
}
