//! Fetch → auxiliary → classify → project, written once for every resource kind.

use async_trait::async_trait;
use kube::Resource;
use tracing::debug;

use crate::core::client::cluster_client::{ClusterClient, ClusterResource};
use crate::core::client::cluster_error::ClusterError;
use crate::core::client::coordinates::{ResourceCoordinates, ResourceScope};
use crate::domain::common::error_classifier::ErrorClassifier;

/// A resource kind the dashboard can render a detail view for.
#[async_trait]
pub trait DetailKind: Send + Sync + 'static {
    type Raw: ClusterResource;
    type Auxiliary: Send;
    type Detail: Send;

    const SCOPE: ResourceScope;

    /// Extra data the detail view needs beyond the object itself.
    async fn fetch_auxiliary<C: ClusterClient>(
        client: &C,
        raw: &Self::Raw,
        coords: &ResourceCoordinates,
    ) -> Result<Self::Auxiliary, ClusterError>;

    /// Pure projection. `auxiliary` is `None` when its fetch failed non-critically.
    fn project(
        raw: Self::Raw,
        auxiliary: Option<Self::Auxiliary>,
        non_critical_errors: Vec<ClusterError>,
    ) -> Self::Detail;
}

pub async fn get_detail<K, C>(
    client: &C,
    classifier: &dyn ErrorClassifier,
    coords: &ResourceCoordinates,
) -> Result<K::Detail, ClusterError>
where
    K: DetailKind,
    C: ClusterClient,
{
    coords.validate_for(K::SCOPE)?;
    let coords = coords.scoped(K::SCOPE);

    debug!(
        kind = %<K::Raw as Resource>::kind(&()),
        name = %coords.name,
        namespace = coords.namespace.as_deref().unwrap_or(""),
        tenant = %coords.tenant,
        "Getting resource details"
    );

    let raw: K::Raw = client.get(&coords).await?;

    let (auxiliary, non_critical_errors) = match K::fetch_auxiliary(client, &raw, &coords).await {
        Ok(auxiliary) => (Some(auxiliary), Vec::new()),
        Err(err) => (None, classifier.handle_error(err)?),
    };

    Ok(K::project(raw, auxiliary, non_critical_errors))
}
