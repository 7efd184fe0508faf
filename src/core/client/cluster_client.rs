use std::fmt::Debug;

use async_trait::async_trait;
use kube::api::{GetParams, ListParams, PostParams};
use kube::core::{ObjectList, Request};
use kube::{Client, Resource};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::core::client::cluster_error::ClusterError;
use crate::core::client::coordinates::{ResourceCoordinates, TenantScope};

/// Any k8s-openapi object the dashboard can read or write.
pub trait ClusterResource:
    Resource<DynamicType = ()> + Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
}

impl<K> ClusterResource for K where
    K: Resource<DynamicType = ()> + Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
}

/// Narrow view of the cluster control plane used by the detail and update operations.
#[async_trait]
pub trait ClusterClient: Send + Sync {
    async fn get<K: ClusterResource>(&self, coords: &ResourceCoordinates) -> Result<K, ClusterError>;

    async fn list<K: ClusterResource>(
        &self,
        tenant: &TenantScope,
        namespace: Option<&str>,
        label_selector: Option<&str>,
    ) -> Result<Vec<K>, ClusterError>;

    /// Writes the whole object back at `coords`. The object's resourceVersion travels with it.
    async fn replace<K: ClusterResource>(
        &self,
        coords: &ResourceCoordinates,
        object: &K,
    ) -> Result<K, ClusterError>;
}

/// REST collection path for `K`, e.g. `/api/v1/tenants/acme/namespaces/default/replicationcontrollers`.
pub fn collection_path<K: ClusterResource>(tenant: &TenantScope, namespace: Option<&str>) -> String {
    let api_version = K::api_version(&());
    let mut path = if K::group(&()).is_empty() {
        format!("/api/{}", api_version)
    } else {
        format!("/apis/{}", api_version)
    };

    if let TenantScope::Tenant(tenant) = tenant {
        path.push_str("/tenants/");
        path.push_str(&urlencoding::encode(tenant));
    }
    if let Some(ns) = namespace {
        path.push_str("/namespaces/");
        path.push_str(&urlencoding::encode(ns));
    }

    path.push('/');
    path.push_str(&K::plural(&()));
    path
}

pub fn object_path<K: ClusterResource>(coords: &ResourceCoordinates) -> String {
    format!(
        "{}/{}",
        collection_path::<K>(&coords.tenant, coords.namespace.as_deref()),
        urlencoding::encode(&coords.name)
    )
}

/// Attaches the kind and the addressed name (or collection path, for lists) to a 404.
fn map_kube_error<K: ClusterResource>(err: kube::Error, name: &str) -> ClusterError {
    match ClusterError::from(err) {
        ClusterError::NotFound { .. } => ClusterError::not_found(K::kind(&()), name),
        other => other,
    }
}

/// kube-rs backed client.
#[derive(Clone)]
pub struct KubeClusterClient {
    client: Client,
}

impl KubeClusterClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ClusterClient for KubeClusterClient {
    async fn get<K: ClusterResource>(&self, coords: &ResourceCoordinates) -> Result<K, ClusterError> {
        let request = Request::new(collection_path::<K>(&coords.tenant, coords.namespace.as_deref()))
            .get(&coords.name, &GetParams::default())
            .map_err(|e| ClusterError::from(kube::Error::BuildRequest(e)))?;

        let object = self
            .client
            .request::<K>(request)
            .await
            .map_err(|e| map_kube_error::<K>(e, &coords.name))?;

        debug!("Fetched {}: {}", K::kind(&()), object_path::<K>(coords));
        Ok(object)
    }

    async fn list<K: ClusterResource>(
        &self,
        tenant: &TenantScope,
        namespace: Option<&str>,
        label_selector: Option<&str>,
    ) -> Result<Vec<K>, ClusterError> {
        let mut lp = ListParams::default();
        if let Some(selector) = label_selector {
            lp = lp.labels(selector);
        }

        let path = collection_path::<K>(tenant, namespace);
        let request = Request::new(&path)
            .list(&lp)
            .map_err(|e| ClusterError::from(kube::Error::BuildRequest(e)))?;

        let list = self
            .client
            .request::<ObjectList<K>>(request)
            .await
            .map_err(|e| map_kube_error::<K>(e, &path))?;

        debug!("Discovered {} {}(s) at {}", list.items.len(), K::kind(&()), path);
        Ok(list.items)
    }

    async fn replace<K: ClusterResource>(
        &self,
        coords: &ResourceCoordinates,
        object: &K,
    ) -> Result<K, ClusterError> {
        let body = serde_json::to_vec(object)?;
        let request = Request::new(collection_path::<K>(&coords.tenant, coords.namespace.as_deref()))
            .replace(&coords.name, &PostParams::default(), body)
            .map_err(|e| ClusterError::from(kube::Error::BuildRequest(e)))?;

        let updated = self
            .client
            .request::<K>(request)
            .await
            .map_err(|e| map_kube_error::<K>(e, &coords.name))?;

        debug!("Replaced {}: {}", K::kind(&()), object_path::<K>(coords));
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::client::kube_resources::{PersistentVolume, Pod, ReplicationController};

    #[test]
    fn cluster_scoped_path_has_no_namespace() {
        assert_eq!(
            collection_path::<PersistentVolume>(&TenantScope::All, None),
            "/api/v1/persistentvolumes"
        );
    }

    #[test]
    fn tenant_segment_precedes_namespace() {
        let tenant = TenantScope::Tenant("acme".to_string());
        assert_eq!(
            collection_path::<ReplicationController>(&tenant, Some("default")),
            "/api/v1/tenants/acme/namespaces/default/replicationcontrollers"
        );
        assert_eq!(
            collection_path::<Pod>(&TenantScope::All, Some("default")),
            "/api/v1/namespaces/default/pods"
        );
    }

    #[test]
    fn object_path_encodes_segments() {
        let coords = ResourceCoordinates::namespaced("team a", "rc-1");
        assert_eq!(
            object_path::<ReplicationController>(&coords),
            "/api/v1/namespaces/team%20a/replicationcontrollers/rc-1"
        );
    }

    mod kube_backed {
        use super::*;
        use crate::core::client::kube_resources::{ObjectMeta, ReplicationControllerSpec};
        use http::{Method, Request as HttpRequest, Response as HttpResponse};
        use kube::client::Body;
        use serde_json::{json, Value};
        use tower_test::mock::{self, Handle};

        type ApiHandle = Handle<HttpRequest<Body>, HttpResponse<Body>>;

        fn mock_client() -> (KubeClusterClient, ApiHandle) {
            let (service, handle) = mock::pair::<HttpRequest<Body>, HttpResponse<Body>>();
            (KubeClusterClient::new(Client::new(service, "default")), handle)
        }

        /// Answers the next request and hands it back for inspection
        async fn respond(handle: &mut ApiHandle, status: u16, body: Value) -> HttpRequest<Body> {
            let (request, send) = handle.next_request().await.expect("client sent no request");
            send.send_response(
                HttpResponse::builder()
                    .status(status)
                    .body(Body::from(serde_json::to_vec(&body).unwrap()))
                    .unwrap(),
            );
            request
        }

        fn status_body(code: u16, reason: &str, message: &str) -> Value {
            json!({
                "kind": "Status",
                "apiVersion": "v1",
                "metadata": {},
                "status": "Failure",
                "message": message,
                "reason": reason,
                "code": code,
            })
        }

        fn controller(name: &str, replicas: i32) -> ReplicationController {
            ReplicationController {
                metadata: ObjectMeta {
                    name: Some(name.to_string()),
                    namespace: Some("default".to_string()),
                    resource_version: Some("7".to_string()),
                    ..Default::default()
                },
                spec: Some(ReplicationControllerSpec {
                    replicas: Some(replicas),
                    ..Default::default()
                }),
                status: None,
            }
        }

        async fn body_json(request: HttpRequest<Body>) -> Value {
            let bytes = axum::body::to_bytes(axum::body::Body::new(request.into_body()), usize::MAX)
                .await
                .unwrap();
            serde_json::from_slice(&bytes).unwrap()
        }

        #[tokio::test]
        async fn get_targets_tenant_path_and_decodes_object() {
            let (client, mut handle) = mock_client();
            let coords = ResourceCoordinates::namespaced("default", "rc-1")
                .with_tenant(TenantScope::Tenant("acme".to_string()));
            let stored = serde_json::to_value(controller("rc-1", 2)).unwrap();

            let (result, request) = tokio::join!(
                client.get::<ReplicationController>(&coords),
                respond(&mut handle, 200, stored),
            );

            assert_eq!(request.method(), Method::GET);
            assert_eq!(
                request.uri().path(),
                "/api/v1/tenants/acme/namespaces/default/replicationcontrollers/rc-1"
            );
            let rc = result.unwrap();
            assert_eq!(rc.metadata.name.as_deref(), Some("rc-1"));
            assert_eq!(rc.spec.unwrap().replicas, Some(2));
        }

        #[tokio::test]
        async fn get_maps_missing_object_to_not_found() {
            let (client, mut handle) = mock_client();
            let coords = ResourceCoordinates::namespaced("default", "rc-1");

            let (result, _) = tokio::join!(
                client.get::<ReplicationController>(&coords),
                respond(
                    &mut handle,
                    404,
                    status_body(404, "NotFound", "replicationcontrollers \"rc-1\" not found"),
                ),
            );

            assert_eq!(
                result.unwrap_err(),
                ClusterError::not_found("ReplicationController", "rc-1")
            );
        }

        #[tokio::test]
        async fn replace_puts_whole_object_and_maps_conflict() {
            let (client, mut handle) = mock_client();
            let coords = ResourceCoordinates::namespaced("default", "rc-1");
            let rc = controller("rc-1", 5);

            let (result, request) = tokio::join!(
                client.replace(&coords, &rc),
                respond(
                    &mut handle,
                    409,
                    status_body(409, "Conflict", "the object has been modified"),
                ),
            );

            assert!(matches!(result, Err(ClusterError::Conflict(_))));
            assert_eq!(request.method(), Method::PUT);
            assert_eq!(
                request.uri().path(),
                "/api/v1/namespaces/default/replicationcontrollers/rc-1"
            );
            let sent = body_json(request).await;
            assert_eq!(sent["spec"]["replicas"], 5);
            assert_eq!(sent["metadata"]["resourceVersion"], "7");
        }

        #[tokio::test]
        async fn list_sends_selector_and_decodes_items() {
            let (client, mut handle) = mock_client();
            let items = json!({
                "apiVersion": "v1",
                "kind": "ReplicationControllerList",
                "metadata": { "resourceVersion": "10" },
                "items": [serde_json::to_value(controller("rc-1", 1)).unwrap()],
            });

            let (result, request) = tokio::join!(
                client.list::<ReplicationController>(&TenantScope::All, Some("default"), Some("app=web")),
                respond(&mut handle, 200, items),
            );

            assert_eq!(request.method(), Method::GET);
            assert_eq!(
                request.uri().path(),
                "/api/v1/namespaces/default/replicationcontrollers"
            );
            assert!(request
                .uri()
                .query()
                .unwrap_or_default()
                .contains("labelSelector=app%3Dweb"));
            let rcs = result.unwrap();
            assert_eq!(rcs.len(), 1);
            assert_eq!(rcs[0].metadata.name.as_deref(), Some("rc-1"));
        }

        #[tokio::test]
        async fn list_errors_keep_status_and_kind() {
            let (client, mut handle) = mock_client();
            let (forbidden, _) = tokio::join!(
                client.list::<Pod>(&TenantScope::All, Some("default"), None),
                respond(&mut handle, 403, status_body(403, "Forbidden", "pods is forbidden")),
            );
            assert!(matches!(forbidden, Err(ClusterError::Forbidden(_))));

            let gone = TenantScope::Tenant("gone".to_string());
            let (missing, _) = tokio::join!(
                client.list::<Pod>(&gone, Some("default"), None),
                respond(&mut handle, 404, status_body(404, "NotFound", "the server could not find the requested resource")),
            );
            assert_eq!(
                missing.unwrap_err(),
                ClusterError::not_found("Pod", "/api/v1/tenants/gone/namespaces/default/pods")
            );
        }
    }
}
