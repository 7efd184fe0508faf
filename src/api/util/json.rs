use axum::Json;

use crate::api::dto::ApiResponse;
use crate::core::client::cluster_error::ClusterError;
use crate::errors::AppError;

pub fn to_json<T: serde::Serialize>(
    result: Result<T, ClusterError>,
) -> Result<Json<ApiResponse<T>>, AppError> {
    match result {
        Ok(value) => Ok(Json(ApiResponse::ok(value))),
        Err(err) => Err(AppError::from(err)), // keeps the cluster error's status
    }
}
