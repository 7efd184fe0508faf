use std::sync::Arc;

use crate::api::dto::paginated_response::PaginatedResponse;
use crate::core::client::cluster_client::{ClusterClient, KubeClusterClient};
use crate::core::client::cluster_error::ClusterError;
use crate::core::client::coordinates::TenantScope;
use crate::domain::common::error_classifier::ErrorClassifier;
use crate::domain::info::dto::info_k8s_replication_controller_spec_request::InfoK8sReplicationControllerSpecRequest;
use crate::domain::info::model::persistent_volume::{PersistentVolumeDetail, PersistentVolumeListItem};
use crate::domain::info::model::replication_controller::{
    ReplicationControllerDetail, ReplicationControllerList,
};

/// Forwards to a domain service function, passing the listed collaborators
/// (`[client]`, `[client, classifier]`) ahead of the call's own arguments.
macro_rules! delegate_cluster_service {
    ($(fn $name:ident($($arg:ident : $typ:ty),*) -> $ret:ty => $path:path [$($ctx:ident),*];)+) => {
        $(
            pub async fn $name(&self, $($arg: $typ),*) -> Result<$ret, ClusterError> {
                $path($(self.$ctx(),)* $($arg),*).await
            }
        )+
    };
}

pub struct AppState<C = KubeClusterClient> {
    pub info_k8s_service: Arc<InfoK8sService<C>>,
}

impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            info_k8s_service: Arc::clone(&self.info_k8s_service),
        }
    }
}

pub fn build_app_state<C: ClusterClient>(
    client: C,
    classifier: impl ErrorClassifier + 'static,
) -> AppState<C> {
    AppState {
        info_k8s_service: Arc::new(InfoK8sService::new(client, classifier)),
    }
}

pub struct InfoK8sService<C> {
    client: C,
    classifier: Box<dyn ErrorClassifier>,
}

impl<C: ClusterClient> InfoK8sService<C> {
    pub fn new(client: C, classifier: impl ErrorClassifier + 'static) -> Self {
        Self {
            client,
            classifier: Box::new(classifier),
        }
    }

    fn client(&self) -> &C {
        &self.client
    }

    fn classifier(&self) -> &dyn ErrorClassifier {
        self.classifier.as_ref()
    }

    delegate_cluster_service! {
        fn get_persistent_volume_detail(tenant: TenantScope, name: String) -> PersistentVolumeDetail => crate::domain::info::service::info_k8s_persistent_volume_service::get_persistent_volume_detail_with_tenant [client, classifier];
        fn get_persistent_volume_list(tenant: TenantScope, limit: Option<usize>, offset: Option<usize>) -> PaginatedResponse<PersistentVolumeListItem> => crate::domain::info::service::info_k8s_persistent_volume_service::get_persistent_volume_list [client];
        fn get_replication_controller_detail(tenant: TenantScope, namespace: String, name: String) -> ReplicationControllerDetail => crate::domain::info::service::info_k8s_replication_controller_service::get_replication_controller_detail_with_tenant [client, classifier];
        fn get_replication_controller_list(tenant: TenantScope, namespace: String, limit: Option<usize>, offset: Option<usize>) -> ReplicationControllerList => crate::domain::info::service::info_k8s_replication_controller_service::get_replication_controller_list [client, classifier];
        fn update_replicas_count(tenant: TenantScope, namespace: String, name: String, spec: InfoK8sReplicationControllerSpecRequest) -> () => crate::domain::info::service::info_k8s_replication_controller_service::update_replicas_count_with_tenant [client];
    }
}
