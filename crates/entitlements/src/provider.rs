//! Provider contract and startup-time backend selection.

use crate::hub_provider::HubProvider;
use crate::model::OrganizationFeature;
use crate::yaml_provider::YamlProvider;
use crate::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Feature resolution contract implemented by every backend.
///
/// Implementations are safe for concurrent use and never mutate shared state
/// after construction. On failure the call returns
/// [`EntitlementError::Resolution`](crate::EntitlementError::Resolution) and
/// no records. The contract imposes no fallback; callers deciding a
/// degradation policy should treat unresolved features as hidden rather than
/// enabled.
#[async_trait]
pub trait FeatureProvider: Send + Sync + std::fmt::Debug {
    /// Resolve the features known for `org_id`.
    ///
    /// `org_id` is an opaque non-empty identifier; format validation is the
    /// backend's responsibility. An empty result is a valid success
    /// (organization has no special entitlements). Callers bound latency by
    /// dropping the future or wrapping the call in `tokio::time::timeout`.
    async fn list_features(&self, org_id: &str) -> Result<Vec<OrganizationFeature>>;
}

/// Backend selection, decided once at process startup.
///
/// ```yaml
/// backend: hub
/// grpc_endpoint: http://feature-hub:50051
/// ```
///
/// or, for self-hosted deployments:
///
/// ```yaml
/// backend: yaml
/// path: /etc/entitlements/features.yml
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "snake_case")]
pub enum ProviderConfig {
    /// Resolve via the FeatureHub gRPC service.
    Hub {
        /// FeatureHub endpoint, e.g. `http://feature-hub:50051`.
        grpc_endpoint: String,
    },
    /// Resolve from a static YAML feature document.
    Yaml {
        /// Path to the feature document.
        path: PathBuf,
    },
}

impl ProviderConfig {
    /// Build the configured provider.
    ///
    /// Fails with
    /// [`EntitlementError::Configuration`](crate::EntitlementError::Configuration)
    /// when the backend cannot be constructed; setup problems surface here,
    /// never at call time.
    pub fn build(&self) -> Result<Box<dyn FeatureProvider>> {
        match self {
            Self::Hub { grpc_endpoint } => Ok(Box::new(HubProvider::new(grpc_endpoint)?)),
            Self::Yaml { path } => Ok(Box::new(YamlProvider::new(path)?)),
        }
    }
}
