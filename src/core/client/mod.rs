pub mod cluster_client;
pub mod cluster_error;
pub mod coordinates;

// Kube-rs based Kubernetes client
pub mod kube_client;
pub mod kube_resources;
pub mod persistent_volumes;
pub mod replication_controllers;
pub mod pods;
pub mod mappers;

#[cfg(test)]
pub mod fake;
