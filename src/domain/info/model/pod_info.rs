use serde::Serialize;

use crate::core::client::kube_resources::Pod;

/// Aggregated pod status of a controller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PodInfo {
    /// Replicas reported by the controller's status.
    pub current: i32,
    /// Replicas requested by the controller's spec.
    pub desired: Option<i32>,
    pub running: i32,
    pub pending: i32,
    pub failed: i32,
    pub succeeded: i32,
}

impl PodInfo {
    /// Counts only; used when the pods themselves could not be listed.
    pub fn from_replicas(current: i32, desired: Option<i32>) -> Self {
        Self {
            current,
            desired,
            ..Self::default()
        }
    }
}

pub fn get_pod_info(current: i32, desired: Option<i32>, pods: &[Pod]) -> PodInfo {
    let mut result = PodInfo::from_replicas(current, desired);

    for pod in pods {
        match pod.status.as_ref().and_then(|s| s.phase.as_deref()) {
            Some("Running") => result.running += 1,
            Some("Pending") => result.pending += 1,
            Some("Failed") => result.failed += 1,
            Some("Succeeded") => result.succeeded += 1,
            _ => {}
        }
    }

    result
}
