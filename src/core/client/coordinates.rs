//! Resource coordinates: tenant / namespace / name addressing for a single object.

use validator::Validate;

use crate::core::client::cluster_error::ClusterError;

/// Tenant dimension layered on top of namespace scoping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum TenantScope {
    /// No tenant filter.
    #[default]
    All,
    Tenant(String),
}

impl TenantScope {
    /// Parses an optional tenant name. An explicitly empty tenant is rejected
    /// rather than treated as "all tenants".
    pub fn parse(tenant: Option<&str>) -> Result<Self, ClusterError> {
        let scope = match tenant {
            None => TenantScope::All,
            Some(t) => TenantScope::Tenant(t.to_string()),
        };
        scope.validate()?;
        Ok(scope)
    }

    /// A named tenant must be non-empty; `All` is the only way to drop the filter.
    pub fn validate(&self) -> Result<(), ClusterError> {
        match self {
            TenantScope::Tenant(t) if t.is_empty() => Err(ClusterError::InvalidCoordinates(
                "tenant must not be empty; omit it to address all tenants".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

impl std::fmt::Display for TenantScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TenantScope::All => write!(f, "all tenants"),
            TenantScope::Tenant(t) => write!(f, "tenant '{}'", t),
        }
    }
}

/// Whether a resource kind lives inside a namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceScope {
    Cluster,
    Namespaced,
}

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct ResourceCoordinates {
    pub tenant: TenantScope,
    pub namespace: Option<String>,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
}

impl ResourceCoordinates {
    pub fn cluster(name: impl Into<String>) -> Self {
        Self {
            tenant: TenantScope::All,
            namespace: None,
            name: name.into(),
        }
    }

    pub fn namespaced(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            tenant: TenantScope::All,
            namespace: Some(namespace.into()),
            name: name.into(),
        }
    }

    pub fn with_tenant(mut self, tenant: TenantScope) -> Self {
        self.tenant = tenant;
        self
    }

    /// Checks the coordinates address exactly one object of a kind with the given scope.
    pub fn validate_for(&self, scope: ResourceScope) -> Result<(), ClusterError> {
        self.validate()
            .map_err(|e| ClusterError::InvalidCoordinates(e.to_string()))?;
        self.tenant.validate()?;

        if scope == ResourceScope::Namespaced
            && self.namespace.as_deref().map_or(true, str::is_empty)
        {
            return Err(ClusterError::InvalidCoordinates(format!(
                "namespace is required to address '{}'",
                self.name
            )));
        }

        Ok(())
    }

    /// Drops the namespace for cluster-scoped kinds.
    pub fn scoped(&self, scope: ResourceScope) -> Self {
        match scope {
            ResourceScope::Cluster => Self {
                namespace: None,
                ..self.clone()
            },
            ResourceScope::Namespaced => self.clone(),
        }
    }
}
