use std::collections::BTreeMap;

use tracing::debug;

use crate::core::client::cluster_client::ClusterClient;
use crate::core::client::cluster_error::ClusterError;
use crate::core::client::coordinates::TenantScope;
use crate::core::client::kube_resources::Pod;

/// Builds an equality label selector (`a=b,c=d`) from a label set
pub fn label_selector_from_set(labels: &BTreeMap<String, String>) -> Option<String> {
    if labels.is_empty() {
        return None;
    }

    let selector = labels
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(",");
    Some(selector)
}

/// Fetch pods in a namespace, optionally filtered by label selector
pub async fn fetch_pods_by_namespace<C: ClusterClient>(
    client: &C,
    tenant: &TenantScope,
    namespace: &str,
    label_selector: Option<&str>,
) -> Result<Vec<Pod>, ClusterError> {
    let pods: Vec<Pod> = client.list(tenant, Some(namespace), label_selector).await?;

    debug!(
        "Discovered {} pod(s) in namespace '{}' (selector: {})",
        pods.len(),
        namespace,
        label_selector.unwrap_or("<none>")
    );
    Ok(pods)
}

/// Keep only pods whose controller owner reference points at `owner_uid`
pub fn filter_pods_by_controller_ref(pods: Vec<Pod>, owner_uid: &str) -> Vec<Pod> {
    pods.into_iter()
        .filter(|pod| {
            pod.metadata
                .owner_references
                .as_ref()
                .map(|refs| {
                    refs.iter()
                        .any(|r| r.controller == Some(true) && r.uid == owner_uid)
                })
                .unwrap_or(false)
        })
        .collect()
}
