use axum::extract::{Path, Query, State};
use axum::Json;

use crate::api::dto::detail_dto::PaginationQuery;
use crate::api::dto::paginated_response::PaginatedResponse;
use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::core::client::cluster_client::ClusterClient;
use crate::core::client::coordinates::TenantScope;
use crate::domain::info::model::persistent_volume::{PersistentVolumeDetail, PersistentVolumeListItem};
use crate::errors::AppError;

pub struct InfoK8sPersistentVolumeController;

impl InfoK8sPersistentVolumeController {
    pub async fn get_k8s_persistent_volumes<C: ClusterClient + 'static>(
        State(state): State<AppState<C>>,
        Query(pagination): Query<PaginationQuery>,
    ) -> Result<Json<ApiResponse<PaginatedResponse<PersistentVolumeListItem>>>, AppError> {
        to_json(
            state
                .info_k8s_service
                .get_persistent_volume_list(TenantScope::All, pagination.limit, pagination.offset)
                .await,
        )
    }

    pub async fn get_k8s_persistent_volumes_for_tenant<C: ClusterClient + 'static>(
        Path(tenant): Path<String>,
        State(state): State<AppState<C>>,
        Query(pagination): Query<PaginationQuery>,
    ) -> Result<Json<ApiResponse<PaginatedResponse<PersistentVolumeListItem>>>, AppError> {
        let tenant = TenantScope::parse(Some(&tenant))?;
        to_json(
            state
                .info_k8s_service
                .get_persistent_volume_list(tenant, pagination.limit, pagination.offset)
                .await,
        )
    }

    pub async fn get_k8s_persistent_volume<C: ClusterClient + 'static>(
        Path(name): Path<String>,
        State(state): State<AppState<C>>,
    ) -> Result<Json<ApiResponse<PersistentVolumeDetail>>, AppError> {
        to_json(
            state
                .info_k8s_service
                .get_persistent_volume_detail(TenantScope::All, name)
                .await,
        )
    }

    pub async fn get_k8s_persistent_volume_for_tenant<C: ClusterClient + 'static>(
        Path((tenant, name)): Path<(String, String)>,
        State(state): State<AppState<C>>,
    ) -> Result<Json<ApiResponse<PersistentVolumeDetail>>, AppError> {
        let tenant = TenantScope::parse(Some(&tenant))?;
        to_json(
            state
                .info_k8s_service
                .get_persistent_volume_detail(tenant, name)
                .await,
        )
    }
}
