//! Display-oriented view models. Every detail type extends its list item.

pub mod object_meta;
pub mod persistent_volume;
pub mod pod_info;
pub mod replication_controller;
