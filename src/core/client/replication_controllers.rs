use tracing::debug;

use crate::core::client::cluster_client::ClusterClient;
use crate::core::client::cluster_error::ClusterError;
use crate::core::client::coordinates::TenantScope;
use crate::core::client::kube_resources::ReplicationController;

/// Fetch replication controllers in a namespace
pub async fn fetch_replication_controllers_by_namespace<C: ClusterClient>(
    client: &C,
    tenant: &TenantScope,
    namespace: &str,
) -> Result<Vec<ReplicationController>, ClusterError> {
    let rcs: Vec<ReplicationController> = client.list(tenant, Some(namespace), None).await?;

    debug!(
        "Discovered {} replication controller(s) in namespace '{}'",
        rcs.len(),
        namespace
    );
    Ok(rcs)
}
