//! Splits errors from auxiliary lookups into non-critical warnings and critical failures.

use crate::core::client::cluster_error::ClusterError;

/// Forbidden
pub const DEFAULT_NON_CRITICAL_CODES: &[u16] = &[403];

pub trait ErrorClassifier: Send + Sync {
    fn is_critical(&self, err: &ClusterError) -> bool;

    /// `Ok` carries the non-critical errors to surface as warnings; `Err` aborts the caller.
    fn handle_error(&self, err: ClusterError) -> Result<Vec<ClusterError>, ClusterError> {
        self.append_error(err, Vec::new())
    }

    /// Same as [`handle_error`](Self::handle_error), accumulating into an existing list.
    /// An error already present is not appended twice.
    fn append_error(
        &self,
        err: ClusterError,
        mut non_critical: Vec<ClusterError>,
    ) -> Result<Vec<ClusterError>, ClusterError> {
        if self.is_critical(&err) {
            return Err(err);
        }
        if !non_critical.contains(&err) {
            non_critical.push(err);
        }
        Ok(non_critical)
    }
}

/// Classifies by API status code. Errors without a status (transport, decoding) are critical.
#[derive(Debug, Clone)]
pub struct StatusErrorClassifier {
    non_critical_codes: Vec<u16>,
}

impl StatusErrorClassifier {
    pub fn new(non_critical_codes: Vec<u16>) -> Self {
        Self { non_critical_codes }
    }
}

impl Default for StatusErrorClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_NON_CRITICAL_CODES.to_vec())
    }
}

impl ErrorClassifier for StatusErrorClassifier {
    fn is_critical(&self, err: &ClusterError) -> bool {
        match err.status_code() {
            Some(code) => !self.non_critical_codes.contains(&code),
            None => true,
        }
    }
}
