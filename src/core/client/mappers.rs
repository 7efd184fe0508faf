/// Maps k8s-openapi types → dashboard view models
/// Every mapper here is pure: no I/O, and total over any well-formed object
use serde_json::Value;

use crate::core::client::cluster_error::ClusterError;
use crate::core::client::kube_resources::{PersistentVolume, PodSpec, ReplicationController};
use crate::domain::info::model::object_meta::{ObjectMetaView, ResourceKind, TypeMetaView};
use crate::domain::info::model::persistent_volume::{PersistentVolumeDetail, PersistentVolumeListItem};
use crate::domain::info::model::pod_info::PodInfo;
use crate::domain::info::model::replication_controller::{
    ReplicationControllerDetail, ReplicationControllerListItem,
};

/// PersistentVolumeSpec keys that describe the volume itself rather than its backing source
const PV_NON_SOURCE_FIELDS: &[&str] = &[
    "accessModes",
    "capacity",
    "claimRef",
    "mountOptions",
    "nodeAffinity",
    "persistentVolumeReclaimPolicy",
    "storageClassName",
    "volumeAttributesClassName",
    "volumeMode",
];

/// Converts a k8s-openapi PersistentVolume into its list item
pub fn map_persistent_volume_to_list_item(pv: &PersistentVolume) -> PersistentVolumeListItem {
    let spec = pv.spec.as_ref();
    let status = pv.status.as_ref();

    // Claim reference rendered as namespace/name
    let claim = spec
        .and_then(|s| s.claim_ref.as_ref())
        .map(|r| {
            format!(
                "{}/{}",
                r.namespace.as_deref().unwrap_or_default(),
                r.name.as_deref().unwrap_or_default()
            )
        })
        .unwrap_or_default();

    PersistentVolumeListItem {
        object_meta: ObjectMetaView::new(&pv.metadata),
        type_meta: TypeMetaView::new(ResourceKind::PersistentVolume),
        capacity: spec.and_then(|s| s.capacity.clone()).unwrap_or_default(),
        access_modes: spec.and_then(|s| s.access_modes.clone()).unwrap_or_default(),
        reclaim_policy: spec
            .and_then(|s| s.persistent_volume_reclaim_policy.clone())
            .unwrap_or_default(),
        storage_class: spec
            .and_then(|s| s.storage_class_name.clone())
            .unwrap_or_default(),
        mount_options: spec.and_then(|s| s.mount_options.clone()).unwrap_or_default(),
        status: status.and_then(|s| s.phase.clone()).unwrap_or_default(),
        claim,
        reason: status.and_then(|s| s.reason.clone()).unwrap_or_default(),
    }
}

/// Converts a k8s-openapi PersistentVolume into its detail view
pub fn map_persistent_volume_to_detail(pv: &PersistentVolume) -> PersistentVolumeDetail {
    PersistentVolumeDetail {
        persistent_volume: map_persistent_volume_to_list_item(pv),
        message: pv
            .status
            .as_ref()
            .and_then(|s| s.message.clone())
            .unwrap_or_default(),
        persistent_volume_source: persistent_volume_source(pv),
    }
}

fn persistent_volume_source(pv: &PersistentVolume) -> Value {
    let Some(spec) = pv.spec.as_ref() else {
        return Value::Object(Default::default());
    };

    match serde_json::to_value(spec) {
        Ok(Value::Object(mut fields)) => {
            for key in PV_NON_SOURCE_FIELDS {
                fields.remove(*key);
            }
            Value::Object(fields)
        }
        _ => Value::Object(Default::default()),
    }
}

/// Images of the regular and init containers of a pod template
pub fn container_images(spec: Option<&PodSpec>) -> (Vec<String>, Vec<String>) {
    let Some(spec) = spec else {
        return (Vec::new(), Vec::new());
    };

    let images = spec
        .containers
        .iter()
        .filter_map(|c| c.image.clone())
        .collect();
    let init_images = spec
        .init_containers
        .as_ref()
        .map(|cs| cs.iter().filter_map(|c| c.image.clone()).collect())
        .unwrap_or_default();

    (images, init_images)
}

/// Replica counts straight from the controller, without looking at pods
pub fn replication_controller_replicas(rc: &ReplicationController) -> (i32, Option<i32>) {
    let current = rc.status.as_ref().map(|s| s.replicas).unwrap_or_default();
    let desired = rc.spec.as_ref().and_then(|s| s.replicas);
    (current, desired)
}

/// Converts a k8s-openapi ReplicationController into its list item.
/// Without pod info the pod counts fall back to the controller's own replica counts.
pub fn map_replication_controller_to_list_item(
    rc: &ReplicationController,
    pod_info: Option<PodInfo>,
) -> ReplicationControllerListItem {
    let template_spec = rc
        .spec
        .as_ref()
        .and_then(|s| s.template.as_ref())
        .and_then(|t| t.spec.as_ref());
    let (container_images, init_container_images) = container_images(template_spec);

    let pods = pod_info.unwrap_or_else(|| {
        let (current, desired) = replication_controller_replicas(rc);
        PodInfo::from_replicas(current, desired)
    });

    ReplicationControllerListItem {
        object_meta: ObjectMetaView::new(&rc.metadata),
        type_meta: TypeMetaView::new(ResourceKind::ReplicationController),
        pods,
        container_images,
        init_container_images,
    }
}

/// Converts a k8s-openapi ReplicationController into its detail view
pub fn map_replication_controller_to_detail(
    rc: &ReplicationController,
    pod_info: Option<PodInfo>,
    non_critical_errors: Vec<ClusterError>,
) -> ReplicationControllerDetail {
    ReplicationControllerDetail {
        replication_controller: map_replication_controller_to_list_item(rc, pod_info),
        label_selector: rc
            .spec
            .as_ref()
            .and_then(|s| s.selector.clone())
            .unwrap_or_default(),
        errors: non_critical_errors,
    }
}
