/// Re-export the Kubernetes resource types the dashboard reads and writes
/// This module provides a centralized place for all K8s resource types

pub use k8s_openapi::api::core::v1::{
    PersistentVolume,
    PersistentVolumeSpec,
    PersistentVolumeStatus,
    Pod,
    PodSpec,
    ReplicationController,
    ReplicationControllerSpec,
    ReplicationControllerStatus,
};

pub use k8s_openapi::apimachinery::pkg::apis::meta::v1::{
    ObjectMeta,
    OwnerReference,
    Time,
};
