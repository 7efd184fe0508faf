use std::collections::BTreeMap;

use serde::Serialize;

use crate::api::dto::paginated_response::PaginatedResponse;
use crate::core::client::cluster_error::ClusterError;
use crate::domain::info::model::object_meta::{ObjectMetaView, TypeMetaView};
use crate::domain::info::model::pod_info::PodInfo;

/// List view of a replication controller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplicationControllerListItem {
    pub object_meta: ObjectMetaView,
    pub type_meta: TypeMetaView,
    pub pods: PodInfo,
    pub container_images: Vec<String>,
    pub init_container_images: Vec<String>,
}

/// Detail view of a replication controller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplicationControllerDetail {
    #[serde(flatten)]
    pub replication_controller: ReplicationControllerListItem,
    pub label_selector: BTreeMap<String, String>,
    /// Non-critical errors that occurred while assembling the detail.
    pub errors: Vec<ClusterError>,
}

impl AsRef<ReplicationControllerListItem> for ReplicationControllerDetail {
    fn as_ref(&self) -> &ReplicationControllerListItem {
        &self.replication_controller
    }
}

impl From<ReplicationControllerDetail> for ReplicationControllerListItem {
    fn from(detail: ReplicationControllerDetail) -> Self {
        detail.replication_controller
    }
}

/// A page of replication controllers plus non-critical errors from pod aggregation.
#[derive(Debug, Serialize)]
pub struct ReplicationControllerList {
    #[serde(flatten)]
    pub page: PaginatedResponse<ReplicationControllerListItem>,
    pub errors: Vec<ClusterError>,
}
