use std::collections::HashMap;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::api::dto::paginated_response::PaginatedResponse;
use crate::core::client::cluster_client::ClusterClient;
use crate::core::client::cluster_error::ClusterError;
use crate::core::client::coordinates::{ResourceCoordinates, ResourceScope, TenantScope};
use crate::core::client::kube_resources::{Pod, ReplicationController};
use crate::core::client::mappers::{
    map_replication_controller_to_detail, map_replication_controller_to_list_item,
    replication_controller_replicas,
};
use crate::core::client::pods::{
    fetch_pods_by_namespace, filter_pods_by_controller_ref, label_selector_from_set,
};
use crate::core::client::replication_controllers::fetch_replication_controllers_by_namespace;
use crate::domain::common::error_classifier::ErrorClassifier;
use crate::domain::info::dto::info_k8s_replication_controller_spec_request::InfoK8sReplicationControllerSpecRequest;
use crate::domain::info::model::pod_info::{get_pod_info, PodInfo};
use crate::domain::info::model::replication_controller::{
    ReplicationControllerDetail, ReplicationControllerList,
};
use crate::domain::info::service::detail_service::{get_detail, DetailKind};

/// Namespaced; the detail view aggregates the status of the controller's pods.
pub struct ReplicationControllerKind;

#[async_trait]
impl DetailKind for ReplicationControllerKind {
    type Raw = ReplicationController;
    type Auxiliary = PodInfo;
    type Detail = ReplicationControllerDetail;

    const SCOPE: ResourceScope = ResourceScope::Namespaced;

    async fn fetch_auxiliary<C: ClusterClient>(
        client: &C,
        raw: &ReplicationController,
        coords: &ResourceCoordinates,
    ) -> Result<PodInfo, ClusterError> {
        let namespace = coords.namespace.as_deref().unwrap_or_default();
        get_replication_controller_pod_info(client, raw, &coords.tenant, namespace).await
    }

    fn project(
        raw: ReplicationController,
        auxiliary: Option<PodInfo>,
        non_critical_errors: Vec<ClusterError>,
    ) -> ReplicationControllerDetail {
        map_replication_controller_to_detail(&raw, auxiliary, non_critical_errors)
    }
}

/// Pods selected by the controller's selector and controlled by it
fn owned_pods(rc: &ReplicationController, pods: Vec<Pod>) -> Vec<Pod> {
    // Objects that were never persisted have no UID; fall back to the selector alone
    match rc.metadata.uid.as_deref() {
        Some(uid) => filter_pods_by_controller_ref(pods, uid),
        None => pods,
    }
}

async fn get_replication_controller_pod_info<C: ClusterClient>(
    client: &C,
    rc: &ReplicationController,
    tenant: &TenantScope,
    namespace: &str,
) -> Result<PodInfo, ClusterError> {
    let selector = rc
        .spec
        .as_ref()
        .and_then(|s| s.selector.as_ref())
        .and_then(label_selector_from_set);

    let pods = fetch_pods_by_namespace(client, tenant, namespace, selector.as_deref()).await?;
    let pods = owned_pods(rc, pods);

    let (current, desired) = replication_controller_replicas(rc);
    Ok(get_pod_info(current, desired, &pods))
}

/// Returns the detail view of a replication controller in the given namespace
pub async fn get_replication_controller_detail<C: ClusterClient>(
    client: &C,
    classifier: &dyn ErrorClassifier,
    namespace: String,
    name: String,
) -> Result<ReplicationControllerDetail, ClusterError> {
    get_replication_controller_detail_with_tenant(client, classifier, TenantScope::All, namespace, name)
        .await
}

/// Returns the detail view of a replication controller in the given tenant and namespace
pub async fn get_replication_controller_detail_with_tenant<C: ClusterClient>(
    client: &C,
    classifier: &dyn ErrorClassifier,
    tenant: TenantScope,
    namespace: String,
    name: String,
) -> Result<ReplicationControllerDetail, ClusterError> {
    let coords = ResourceCoordinates::namespaced(namespace, name).with_tenant(tenant);
    get_detail::<ReplicationControllerKind, C>(client, classifier, &coords).await
}

/// Sets the desired replica count of a replication controller
pub async fn update_replicas_count<C: ClusterClient>(
    client: &C,
    namespace: String,
    name: String,
    spec: InfoK8sReplicationControllerSpecRequest,
) -> Result<(), ClusterError> {
    update_replicas_count_with_tenant(client, TenantScope::All, namespace, name, spec).await
}

/// Sets the desired replica count of a replication controller owned by the given tenant.
///
/// Read-modify-write: the object read here is written back whole, carrying the
/// resourceVersion it was read at. A concurrent change makes the write fail with
/// [`ClusterError::Conflict`]; nothing is retried.
pub async fn update_replicas_count_with_tenant<C: ClusterClient>(
    client: &C,
    tenant: TenantScope,
    namespace: String,
    name: String,
    spec: InfoK8sReplicationControllerSpecRequest,
) -> Result<(), ClusterError> {
    let coords = ResourceCoordinates::namespaced(namespace, name).with_tenant(tenant);
    coords.validate_for(ResourceScope::Namespaced)?;
    let namespace = coords.namespace.as_deref().unwrap_or_default();

    info!(
        "Updating replicas count to {} for {} replication controller from {} namespace ({})",
        spec.replicas, coords.name, namespace, coords.tenant
    );

    let mut rc: ReplicationController = client.get(&coords).await?;
    rc.spec.get_or_insert_with(Default::default).replicas = Some(spec.replicas);
    client.replace(&coords, &rc).await?;

    info!(
        "Successfully updated replicas count to {} for {} replication controller from {} namespace ({})",
        spec.replicas, coords.name, namespace, coords.tenant
    );
    Ok(())
}

/// Returns one page of replication controllers in a namespace with their pod status.
/// A non-critical pod listing error leaves pod counts at the controllers' replica counts.
pub async fn get_replication_controller_list<C: ClusterClient>(
    client: &C,
    classifier: &dyn ErrorClassifier,
    tenant: TenantScope,
    namespace: String,
    limit: Option<usize>,
    offset: Option<usize>,
) -> Result<ReplicationControllerList, ClusterError> {
    tenant.validate()?;
    if namespace.is_empty() {
        return Err(ClusterError::InvalidCoordinates(
            "namespace is required to list replication controllers".to_string(),
        ));
    }

    let (rcs, pods) = futures::join!(
        fetch_replication_controllers_by_namespace(client, &tenant, &namespace),
        fetch_pods_by_namespace(client, &tenant, &namespace, None),
    );
    let mut rcs = rcs?;
    rcs.sort_by(|a, b| a.metadata.name.cmp(&b.metadata.name));

    let (pods, errors) = match pods {
        Ok(pods) => (Some(pods), Vec::new()),
        Err(err) => (None, classifier.handle_error(err)?),
    };

    let page = PaginatedResponse::paginate(rcs, limit, offset);
    let page = match pods {
        Some(pods) => {
            let pods_by_owner = group_pods_by_controller(pods);
            page.map(|rc| {
                let owned = rc
                    .metadata
                    .uid
                    .as_deref()
                    .and_then(|uid| pods_by_owner.get(uid))
                    .map(Vec::as_slice)
                    .unwrap_or_default();
                let (current, desired) = replication_controller_replicas(&rc);
                let pod_info = get_pod_info(current, desired, owned);
                map_replication_controller_to_list_item(&rc, Some(pod_info))
            })
        }
        None => page.map(|rc| map_replication_controller_to_list_item(&rc, None)),
    };

    debug!(
        "Listed {} of {} replication controller(s) in namespace '{}'",
        page.items.len(),
        page.total,
        namespace
    );
    Ok(ReplicationControllerList { page, errors })
}

fn group_pods_by_controller(pods: Vec<Pod>) -> HashMap<String, Vec<Pod>> {
    let mut grouped: HashMap<String, Vec<Pod>> = HashMap::new();
    for pod in pods {
        let controller_uid = pod
            .metadata
            .owner_references
            .as_ref()
            .and_then(|refs| refs.iter().find(|r| r.controller == Some(true)))
            .map(|r| r.uid.clone());
        if let Some(uid) = controller_uid {
            grouped.entry(uid).or_default().push(pod);
        }
    }
    grouped
}
