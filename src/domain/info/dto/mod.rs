pub mod info_k8s_replication_controller_spec_request;
