use std::collections::BTreeMap;

use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use serde::Serialize;

use crate::domain::info::model::object_meta::{ObjectMetaView, TypeMetaView};

/// List view of a persistent volume.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistentVolumeListItem {
    pub object_meta: ObjectMetaView,
    pub type_meta: TypeMetaView,
    pub capacity: BTreeMap<String, Quantity>,
    pub access_modes: Vec<String>,
    pub reclaim_policy: String,
    pub storage_class: String,
    pub mount_options: Vec<String>,
    pub status: String,
    /// `namespace/name` of the bound claim, empty when unbound.
    pub claim: String,
    pub reason: String,
}

/// Detail view of a persistent volume.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistentVolumeDetail {
    #[serde(flatten)]
    pub persistent_volume: PersistentVolumeListItem,
    pub message: String,
    /// The volume-source half of the spec (nfs, hostPath, csi, ...).
    pub persistent_volume_source: serde_json::Value,
}

impl AsRef<PersistentVolumeListItem> for PersistentVolumeDetail {
    fn as_ref(&self) -> &PersistentVolumeListItem {
        &self.persistent_volume
    }
}

impl From<PersistentVolumeDetail> for PersistentVolumeListItem {
    fn from(detail: PersistentVolumeDetail) -> Self {
        detail.persistent_volume
    }
}
