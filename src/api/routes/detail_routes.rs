//! Resource detail routes (proxied directly to Kubernetes)

use axum::{
    routing::{get, put},
    Router,
};

use crate::api::controller::persistent_volume::InfoK8sPersistentVolumeController;
use crate::api::controller::replication_controller::InfoK8sReplicationControllerController;
use crate::app_state::AppState;
use crate::core::client::cluster_client::ClusterClient;

pub fn detail_routes<C: ClusterClient + 'static>() -> Router<AppState<C>> {
    Router::new()
        .route(
            "/persistentvolume",
            get(InfoK8sPersistentVolumeController::get_k8s_persistent_volumes::<C>),
        )
        .route(
            "/persistentvolume/{name}",
            get(InfoK8sPersistentVolumeController::get_k8s_persistent_volume::<C>),
        )
        .route(
            "/replicationcontroller/{namespace}",
            get(InfoK8sReplicationControllerController::get_k8s_replication_controllers::<C>),
        )
        .route(
            "/replicationcontroller/{namespace}/{name}",
            get(InfoK8sReplicationControllerController::get_k8s_replication_controller::<C>),
        )
        .route(
            "/replicationcontroller/{namespace}/{name}/update/pods",
            put(InfoK8sReplicationControllerController::update_k8s_replication_controller_pods::<C>),
        )
        // Tenant-qualified variants
        .route(
            "/tenants/{tenant}/persistentvolume",
            get(InfoK8sPersistentVolumeController::get_k8s_persistent_volumes_for_tenant::<C>),
        )
        .route(
            "/tenants/{tenant}/persistentvolume/{name}",
            get(InfoK8sPersistentVolumeController::get_k8s_persistent_volume_for_tenant::<C>),
        )
        .route(
            "/tenants/{tenant}/replicationcontroller/{namespace}",
            get(InfoK8sReplicationControllerController::get_k8s_replication_controllers_for_tenant::<C>),
        )
        .route(
            "/tenants/{tenant}/replicationcontroller/{namespace}/{name}",
            get(InfoK8sReplicationControllerController::get_k8s_replication_controller_for_tenant::<C>),
        )
        .route(
            "/tenants/{tenant}/replicationcontroller/{namespace}/{name}/update/pods",
            put(InfoK8sReplicationControllerController::update_k8s_replication_controller_pods_for_tenant::<C>),
        )
}
