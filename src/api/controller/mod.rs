pub mod persistent_volume;
pub mod replication_controller;
