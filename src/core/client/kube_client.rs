use anyhow::{Context, Result};
use kube::{Client, Config};
use tracing::debug;

use crate::config::AppConfig;

/// Creates a Kubernetes client configured for in-cluster or local development
pub async fn build_kube_client(config: &AppConfig) -> Result<Client> {
    // Kubeconfig when present, otherwise the in-cluster service account
    let mut kube_config = Config::infer()
        .await
        .context("failed to infer Kubernetes client configuration")?;

    if let Some(api_url) = &config.k8s_api_url {
        debug!("Using custom API URL from CLUSTERDASH_K8S_API_URL");
        kube_config.cluster_url = api_url
            .parse::<http::Uri>()
            .with_context(|| format!("invalid Kubernetes API URL '{}'", api_url))?;
    }

    let client = Client::try_from(kube_config)?;

    debug!("Kubernetes client initialized successfully");
    Ok(client)
}
