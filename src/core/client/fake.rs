//! In-memory cluster client for tests.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::core::client::cluster_client::{collection_path, object_path, ClusterClient, ClusterResource};
use crate::core::client::cluster_error::ClusterError;
use crate::core::client::coordinates::{ResourceCoordinates, TenantScope};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CallCounts {
    pub get: usize,
    pub list: usize,
    pub replace: usize,
}

/// Objects are stored as JSON keyed by their REST path, so tenant and namespace
/// scoping behaves like the API server's URL layout.
#[derive(Default)]
pub struct FakeClusterClient {
    objects: Mutex<BTreeMap<String, Value>>,
    get_failures: Mutex<HashMap<String, VecDeque<ClusterError>>>,
    list_failures: Mutex<HashMap<String, VecDeque<ClusterError>>>,
    replace_failures: Mutex<HashMap<String, VecDeque<ClusterError>>>,
    calls: Mutex<CallCounts>,
}

impl FakeClusterClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_object<K: ClusterResource>(self, coords: &ResourceCoordinates, object: K) -> Self {
        self.insert(coords, object);
        self
    }

    pub fn insert<K: ClusterResource>(&self, coords: &ResourceCoordinates, mut object: K) {
        let meta = object.meta_mut();
        if meta.resource_version.is_none() {
            meta.resource_version = Some("1".to_string());
        }
        let value = serde_json::to_value(&object).unwrap();
        self.objects
            .lock()
            .unwrap()
            .insert(object_path::<K>(coords), value);
    }

    /// Reads the stored object directly, bypassing call counting.
    pub fn stored<K: ClusterResource>(&self, coords: &ResourceCoordinates) -> Option<K> {
        self.objects
            .lock()
            .unwrap()
            .get(&object_path::<K>(coords))
            .map(|v| serde_json::from_value(v.clone()).unwrap())
    }

    pub fn fail_next_get<K: ClusterResource>(&self, coords: &ResourceCoordinates, err: ClusterError) {
        push_failure(&self.get_failures, object_path::<K>(coords), err);
    }

    pub fn fail_next_list<K: ClusterResource>(
        &self,
        tenant: &TenantScope,
        namespace: Option<&str>,
        err: ClusterError,
    ) {
        push_failure(&self.list_failures, collection_path::<K>(tenant, namespace), err);
    }

    pub fn fail_next_replace<K: ClusterResource>(&self, coords: &ResourceCoordinates, err: ClusterError) {
        push_failure(&self.replace_failures, object_path::<K>(coords), err);
    }

    pub fn calls(&self) -> CallCounts {
        *self.calls.lock().unwrap()
    }
}

fn push_failure(
    failures: &Mutex<HashMap<String, VecDeque<ClusterError>>>,
    key: String,
    err: ClusterError,
) {
    failures.lock().unwrap().entry(key).or_default().push_back(err);
}

fn pop_failure(
    failures: &Mutex<HashMap<String, VecDeque<ClusterError>>>,
    key: &str,
) -> Option<ClusterError> {
    failures.lock().unwrap().get_mut(key).and_then(|q| q.pop_front())
}

/// Equality-based selectors only: `a=b,c=d`.
fn matches_selector(labels: Option<&BTreeMap<String, String>>, selector: &str) -> bool {
    selector
        .split(',')
        .filter(|term| !term.is_empty())
        .all(|term| match term.split_once('=') {
            Some((key, value)) => labels.and_then(|l| l.get(key)).map(String::as_str) == Some(value),
            None => false,
        })
}

#[async_trait]
impl ClusterClient for FakeClusterClient {
    async fn get<K: ClusterResource>(&self, coords: &ResourceCoordinates) -> Result<K, ClusterError> {
        self.calls.lock().unwrap().get += 1;
        let key = object_path::<K>(coords);
        if let Some(err) = pop_failure(&self.get_failures, &key) {
            return Err(err);
        }

        let objects = self.objects.lock().unwrap();
        let value = objects
            .get(&key)
            .ok_or_else(|| ClusterError::not_found(K::kind(&()), &coords.name))?;
        Ok(serde_json::from_value(value.clone())?)
    }

    async fn list<K: ClusterResource>(
        &self,
        tenant: &TenantScope,
        namespace: Option<&str>,
        label_selector: Option<&str>,
    ) -> Result<Vec<K>, ClusterError> {
        self.calls.lock().unwrap().list += 1;
        let prefix = collection_path::<K>(tenant, namespace);
        if let Some(err) = pop_failure(&self.list_failures, &prefix) {
            return Err(err);
        }

        let prefix = format!("{}/", prefix);
        let objects = self.objects.lock().unwrap();
        let mut items = Vec::new();
        for (key, value) in objects.iter() {
            // Direct children only; a cluster-wide prefix must not pick up nested paths
            let Some(rest) = key.strip_prefix(&prefix) else {
                continue;
            };
            if rest.contains('/') {
                continue;
            }
            let object: K = serde_json::from_value(value.clone())?;
            if let Some(selector) = label_selector {
                if !matches_selector(object.meta().labels.as_ref(), selector) {
                    continue;
                }
            }
            items.push(object);
        }
        Ok(items)
    }

    async fn replace<K: ClusterResource>(
        &self,
        coords: &ResourceCoordinates,
        object: &K,
    ) -> Result<K, ClusterError> {
        self.calls.lock().unwrap().replace += 1;
        let key = object_path::<K>(coords);
        if let Some(err) = pop_failure(&self.replace_failures, &key) {
            return Err(err);
        }

        let mut objects = self.objects.lock().unwrap();
        let current = objects
            .get(&key)
            .ok_or_else(|| ClusterError::not_found(K::kind(&()), &coords.name))?;
        let current: K = serde_json::from_value(current.clone())?;

        let stored_version = current.meta().resource_version.clone();
        let incoming_version = object.meta().resource_version.clone();
        if incoming_version.is_some() && incoming_version != stored_version {
            return Err(ClusterError::Conflict(format!(
                "the object has been modified; please apply your changes to the latest version and try again ({})",
                coords.name
            )));
        }

        let next_version = stored_version
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(0)
            + 1;
        let mut updated = object.clone();
        updated.meta_mut().resource_version = Some(next_version.to_string());
        objects.insert(key, serde_json::to_value(&updated)?);
        Ok(updated)
    }
}
