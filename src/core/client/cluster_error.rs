use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Errors surfaced by the cluster client and the detail/update operations built on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClusterError {
    #[error("{kind} \"{name}\" not found")]
    NotFound { kind: String, name: String },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("K8s API error ({code} {reason}): {message}")]
    Api {
        code: u16,
        reason: String,
        message: String,
    },

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

impl ClusterError {
    /// HTTP status reported by the API server, if the error came from one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClusterError::NotFound { .. } => Some(404),
            ClusterError::Conflict(_) => Some(409),
            ClusterError::Forbidden(_) => Some(403),
            ClusterError::Unauthorized(_) => Some(401),
            ClusterError::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn reason(&self) -> &str {
        match self {
            ClusterError::NotFound { .. } => "NotFound",
            ClusterError::Conflict(_) => "Conflict",
            ClusterError::Forbidden(_) => "Forbidden",
            ClusterError::Unauthorized(_) => "Unauthorized",
            ClusterError::Api { reason, .. } => reason,
            ClusterError::InvalidCoordinates(_) => "Invalid",
            ClusterError::Serialization(_) => "Serialization",
            ClusterError::Transport(_) => "Transport",
        }
    }

    pub fn not_found(kind: impl Into<String>, name: impl Into<String>) -> Self {
        ClusterError::NotFound {
            kind: kind.into(),
            name: name.into(),
        }
    }
}

impl From<kube::Error> for ClusterError {
    fn from(err: kube::Error) -> Self {
        match err {
            kube::Error::Api(ae) => match ae.code {
                404 => ClusterError::NotFound {
                    kind: String::new(),
                    name: ae.message.clone(),
                },
                409 => ClusterError::Conflict(ae.message.clone()),
                403 => ClusterError::Forbidden(ae.message.clone()),
                401 => ClusterError::Unauthorized(ae.message.clone()),
                code => ClusterError::Api {
                    code,
                    reason: ae.reason.to_string(),
                    message: ae.message.clone(),
                },
            },
            kube::Error::SerdeError(e) => ClusterError::Serialization(e.to_string()),
            other => ClusterError::Transport(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ClusterError {
    fn from(err: serde_json::Error) -> Self {
        ClusterError::Serialization(err.to_string())
    }
}

// Embedded in detail views as `{code, reason, message}`.
impl Serialize for ClusterError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ClusterError", 3)?;
        state.serialize_field("code", &self.status_code())?;
        state.serialize_field("reason", self.reason())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}
