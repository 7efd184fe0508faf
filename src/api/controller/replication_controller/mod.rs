use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::{json, Value};

use crate::api::dto::detail_dto::PaginationQuery;
use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::core::client::cluster_client::ClusterClient;
use crate::core::client::coordinates::TenantScope;
use crate::domain::info::dto::info_k8s_replication_controller_spec_request::InfoK8sReplicationControllerSpecRequest;
use crate::domain::info::model::replication_controller::{
    ReplicationControllerDetail, ReplicationControllerList,
};
use crate::errors::AppError;

pub struct InfoK8sReplicationControllerController;

impl InfoK8sReplicationControllerController {
    pub async fn get_k8s_replication_controllers<C: ClusterClient + 'static>(
        Path(namespace): Path<String>,
        State(state): State<AppState<C>>,
        Query(pagination): Query<PaginationQuery>,
    ) -> Result<Json<ApiResponse<ReplicationControllerList>>, AppError> {
        Self::list(state, TenantScope::All, namespace, pagination).await
    }

    pub async fn get_k8s_replication_controllers_for_tenant<C: ClusterClient + 'static>(
        Path((tenant, namespace)): Path<(String, String)>,
        State(state): State<AppState<C>>,
        Query(pagination): Query<PaginationQuery>,
    ) -> Result<Json<ApiResponse<ReplicationControllerList>>, AppError> {
        let tenant = TenantScope::parse(Some(&tenant))?;
        Self::list(state, tenant, namespace, pagination).await
    }

    pub async fn get_k8s_replication_controller<C: ClusterClient + 'static>(
        Path((namespace, name)): Path<(String, String)>,
        State(state): State<AppState<C>>,
    ) -> Result<Json<ApiResponse<ReplicationControllerDetail>>, AppError> {
        to_json(
            state
                .info_k8s_service
                .get_replication_controller_detail(TenantScope::All, namespace, name)
                .await,
        )
    }

    pub async fn get_k8s_replication_controller_for_tenant<C: ClusterClient + 'static>(
        Path((tenant, namespace, name)): Path<(String, String, String)>,
        State(state): State<AppState<C>>,
    ) -> Result<Json<ApiResponse<ReplicationControllerDetail>>, AppError> {
        let tenant = TenantScope::parse(Some(&tenant))?;
        to_json(
            state
                .info_k8s_service
                .get_replication_controller_detail(tenant, namespace, name)
                .await,
        )
    }

    pub async fn update_k8s_replication_controller_pods<C: ClusterClient + 'static>(
        Path((namespace, name)): Path<(String, String)>,
        State(state): State<AppState<C>>,
        Json(spec): Json<InfoK8sReplicationControllerSpecRequest>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        Self::update(state, TenantScope::All, namespace, name, spec).await
    }

    pub async fn update_k8s_replication_controller_pods_for_tenant<C: ClusterClient + 'static>(
        Path((tenant, namespace, name)): Path<(String, String, String)>,
        State(state): State<AppState<C>>,
        Json(spec): Json<InfoK8sReplicationControllerSpecRequest>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        let tenant = TenantScope::parse(Some(&tenant))?;
        Self::update(state, tenant, namespace, name, spec).await
    }

    async fn list<C: ClusterClient + 'static>(
        state: AppState<C>,
        tenant: TenantScope,
        namespace: String,
        pagination: PaginationQuery,
    ) -> Result<Json<ApiResponse<ReplicationControllerList>>, AppError> {
        to_json(
            state
                .info_k8s_service
                .get_replication_controller_list(tenant, namespace, pagination.limit, pagination.offset)
                .await,
        )
    }

    async fn update<C: ClusterClient + 'static>(
        state: AppState<C>,
        tenant: TenantScope,
        namespace: String,
        name: String,
        spec: InfoK8sReplicationControllerSpecRequest,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        let result = state
            .info_k8s_service
            .update_replicas_count(tenant, namespace, name, spec)
            .await
            .map(|()| {
                json!({
                    "message": "Replicas count updated successfully",
                    "replicas": spec.replicas,
                })
            });
        to_json(result)
    }
}
