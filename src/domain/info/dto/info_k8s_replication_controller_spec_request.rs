use serde::{Deserialize, Serialize};

/// Fields of a replication controller a caller may change.
/// No bounds are enforced here; the API server validates the value on write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoK8sReplicationControllerSpecRequest {
    /// Replicas (pods) number in the replication controller
    pub replicas: i32,
}
