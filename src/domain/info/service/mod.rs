//! Detail, list and update logic per resource kind

pub mod detail_service;
pub mod info_k8s_persistent_volume_service;
pub mod info_k8s_replication_controller_service;
