//! Organization Feature Entitlements
//!
//! Resolves, per organization, which features are enabled, hidden, or in
//! zero-state, together with the entitled quantity.
//!
//! Two interchangeable backends implement the [`FeatureProvider`] contract:
//!
//! - [`HubProvider`]: queries the FeatureHub service over gRPC
//! - [`YamlProvider`]: serves a feature set loaded once from a YAML document,
//!   for deployments with no FeatureHub (self-hosted, offline)
//!
//! The backend is picked once at process startup (see [`ProviderConfig`]);
//! callers depend only on the contract.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use entitlements::{FeatureProvider, HubProvider};
//!
//! let provider = HubProvider::new("http://feature-hub:50051")?;
//! let features = provider.list_features("org1").await?;
//! ```

pub mod hub_provider;
pub mod model;
pub mod pb;
pub mod provider;
pub mod yaml_provider;

pub use hub_provider::HubProvider;
pub use model::{FeatureState, OrganizationFeature};
pub use provider::{FeatureProvider, ProviderConfig};
pub use yaml_provider::YamlProvider;

use thiserror::Error;

/// Entitlement resolution errors
#[derive(Error, Debug)]
pub enum EntitlementError {
    /// Invalid provider setup (empty or malformed endpoint, missing or
    /// unparseable feature document). Raised at construction and fatal to
    /// provider creation; fix the deployment, do not retry.
    #[error("invalid provider configuration: {0}")]
    Configuration(String),

    /// A single resolution call failed (transport failure, non-OK status,
    /// malformed backend data). The provider stays usable; the caller may
    /// retry or degrade.
    #[error("feature resolution failed: {source}")]
    Resolution {
        /// Underlying transport or backend failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl EntitlementError {
    pub(crate) fn resolution(
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Resolution {
            source: source.into(),
        }
    }
}

/// Result type for entitlement resolution
pub type Result<T> = std::result::Result<T, EntitlementError>;
