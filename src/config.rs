use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::domain::common::error_classifier::DEFAULT_NON_CRITICAL_CODES;

pub const ENV_SERVER_ADDR: &str = "CLUSTERDASH_SERVER_ADDR";
pub const ENV_LOG_FILTER: &str = "CLUSTERDASH_LOG_FILTER";
pub const ENV_LOG_DIR: &str = "CLUSTERDASH_LOG_DIR";
pub const ENV_K8S_API_URL: &str = "CLUSTERDASH_K8S_API_URL";
pub const ENV_NON_CRITICAL_CODES: &str = "CLUSTERDASH_NON_CRITICAL_CODES";

/// Runtime settings, read once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub server_addr: String,
    pub log_filter: String,
    /// When set, logs are also written to a daily rolling file in this directory
    pub log_dir: Option<PathBuf>,
    /// Overrides the cluster URL of the inferred kubeconfig
    pub k8s_api_url: Option<String>,
    /// HTTP status codes whose auxiliary failures are reported instead of failing the request
    pub non_critical_codes: Vec<u16>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_addr: "0.0.0.0:5000".to_string(),
            log_filter: "info".to_string(),
            log_dir: None,
            k8s_api_url: None,
            non_critical_codes: DEFAULT_NON_CRITICAL_CODES.to_vec(),
        }
    }
}

impl AppConfig {
    /// Loads `.env` (if present) and then reads the process environment
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        // Blank values count as unset
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let non_critical_codes = match get(ENV_NON_CRITICAL_CODES) {
            Some(raw) => parse_status_codes(&raw)
                .with_context(|| format!("invalid {}", ENV_NON_CRITICAL_CODES))?,
            None => defaults.non_critical_codes,
        };

        Ok(Self {
            server_addr: get(ENV_SERVER_ADDR).unwrap_or(defaults.server_addr),
            log_filter: get(ENV_LOG_FILTER).unwrap_or(defaults.log_filter),
            log_dir: get(ENV_LOG_DIR).map(PathBuf::from),
            k8s_api_url: get(ENV_K8S_API_URL),
            non_critical_codes,
        })
    }
}

/// Parses a comma-separated list such as `403,404`
fn parse_status_codes(raw: &str) -> Result<Vec<u16>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            let code: u16 = s
                .parse()
                .map_err(|_| anyhow!("'{}' is not a status code", s))?;
            if !(100..=599).contains(&code) {
                return Err(anyhow!("'{}' is outside the HTTP status range", code));
            }
            Ok(code)
        })
        .collect()
}
