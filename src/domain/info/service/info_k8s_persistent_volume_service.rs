use async_trait::async_trait;

use crate::api::dto::paginated_response::PaginatedResponse;
use crate::core::client::cluster_client::ClusterClient;
use crate::core::client::cluster_error::ClusterError;
use crate::core::client::coordinates::{ResourceCoordinates, ResourceScope, TenantScope};
use crate::core::client::kube_resources::PersistentVolume;
use crate::core::client::mappers::{map_persistent_volume_to_detail, map_persistent_volume_to_list_item};
use crate::core::client::persistent_volumes::fetch_persistent_volumes;
use crate::domain::common::error_classifier::ErrorClassifier;
use crate::domain::info::model::persistent_volume::{PersistentVolumeDetail, PersistentVolumeListItem};
use crate::domain::info::service::detail_service::{get_detail, DetailKind};

/// Cluster-scoped; needs nothing beyond the volume itself.
pub struct PersistentVolumeKind;

#[async_trait]
impl DetailKind for PersistentVolumeKind {
    type Raw = PersistentVolume;
    type Auxiliary = ();
    type Detail = PersistentVolumeDetail;

    const SCOPE: ResourceScope = ResourceScope::Cluster;

    async fn fetch_auxiliary<C: ClusterClient>(
        _client: &C,
        _raw: &PersistentVolume,
        _coords: &ResourceCoordinates,
    ) -> Result<(), ClusterError> {
        Ok(())
    }

    fn project(
        raw: PersistentVolume,
        _auxiliary: Option<()>,
        _non_critical_errors: Vec<ClusterError>,
    ) -> PersistentVolumeDetail {
        map_persistent_volume_to_detail(&raw)
    }
}

/// Returns the detail view of a persistent volume across all tenants
pub async fn get_persistent_volume_detail<C: ClusterClient>(
    client: &C,
    classifier: &dyn ErrorClassifier,
    name: String,
) -> Result<PersistentVolumeDetail, ClusterError> {
    get_persistent_volume_detail_with_tenant(client, classifier, TenantScope::All, name).await
}

/// Returns the detail view of a persistent volume owned by the given tenant
pub async fn get_persistent_volume_detail_with_tenant<C: ClusterClient>(
    client: &C,
    classifier: &dyn ErrorClassifier,
    tenant: TenantScope,
    name: String,
) -> Result<PersistentVolumeDetail, ClusterError> {
    let coords = ResourceCoordinates::cluster(name).with_tenant(tenant);
    get_detail::<PersistentVolumeKind, C>(client, classifier, &coords).await
}

pub async fn get_persistent_volume_list<C: ClusterClient>(
    client: &C,
    tenant: TenantScope,
    limit: Option<usize>,
    offset: Option<usize>,
) -> Result<PaginatedResponse<PersistentVolumeListItem>, ClusterError> {
    tenant.validate()?;
    let mut pvs = fetch_persistent_volumes(client, &tenant).await?;
    pvs.sort_by(|a, b| a.metadata.name.cmp(&b.metadata.name));

    Ok(PaginatedResponse::paginate(pvs, limit, offset)
        .map(|pv| map_persistent_volume_to_list_item(&pv)))
}
