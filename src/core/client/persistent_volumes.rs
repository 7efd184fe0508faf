use tracing::debug;

use crate::core::client::cluster_client::ClusterClient;
use crate::core::client::cluster_error::ClusterError;
use crate::core::client::coordinates::TenantScope;
use crate::core::client::kube_resources::PersistentVolume;

/// Fetch all persistent volumes visible to the tenant scope
pub async fn fetch_persistent_volumes<C: ClusterClient>(
    client: &C,
    tenant: &TenantScope,
) -> Result<Vec<PersistentVolume>, ClusterError> {
    let pvs: Vec<PersistentVolume> = client.list(tenant, None, None).await?;

    debug!("Discovered {} persistent volume(s) for {}", pvs.len(), tenant);
    Ok(pvs)
}
