//! Static feature provider backed by a YAML document.

use crate::model::{FeatureState, OrganizationFeature};
use crate::provider::FeatureProvider;
use crate::{EntitlementError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Raw document entry; `state` is a free-form signal and is classified, not
/// trusted as-is.
#[derive(Debug, Deserialize)]
struct FeatureEntry {
    name: String,
    state: String,
    quantity: u32,
}

/// Serves a feature set loaded once from a YAML document.
///
/// Intended for deployments with no FeatureHub (self-hosted, offline). The
/// document is read and validated at construction; a constructed provider
/// never fails at call time and returns the same set on every call.
///
/// The document is a global feature set:
///
/// ```yaml
/// - name: self_hosted_agents
///   state: enabled
///   quantity: 500
/// ```
///
/// The organization identifier is accepted for contract uniformity and
/// ignored; the schema carries no per-organization scoping.
#[derive(Debug)]
pub struct YamlProvider {
    features: Vec<OrganizationFeature>,
}

impl YamlProvider {
    /// Load the feature document at `path`.
    ///
    /// A missing, unreadable, or unparseable document fails with
    /// [`EntitlementError::Configuration`] so a broken deployment surfaces
    /// at startup instead of on first use. Entries with empty or duplicate
    /// names are rejected the same way.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            EntitlementError::Configuration(format!(
                "cannot read feature document {}: {e}",
                path.display()
            ))
        })?;
        let entries: Vec<FeatureEntry> = serde_yaml::from_str(&raw).map_err(|e| {
            EntitlementError::Configuration(format!(
                "cannot parse feature document {}: {e}",
                path.display()
            ))
        })?;

        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.name.is_empty() {
                return Err(EntitlementError::Configuration(format!(
                    "feature document {} has an entry with an empty name",
                    path.display()
                )));
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(EntitlementError::Configuration(format!(
                    "feature document {} declares {} more than once",
                    path.display(),
                    entry.name
                )));
            }
        }

        let features = entries
            .into_iter()
            .map(|entry| OrganizationFeature {
                name: entry.name,
                state: FeatureState::classify(&entry.state),
                quantity: entry.quantity,
            })
            .collect();

        Ok(Self { features })
    }
}

#[async_trait]
impl FeatureProvider for YamlProvider {
    async fn list_features(&self, org_id: &str) -> Result<Vec<OrganizationFeature>> {
        debug!(org_id, count = self.features.len(), "serving features from document");
        Ok(self.features.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_doc(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_fetches_feature_configuration_from_yaml_file() {
        let doc = write_doc("- name: self_hosted_agents\n  state: enabled\n  quantity: 500\n");
        let provider = YamlProvider::new(doc.path()).unwrap();

        let features = provider.list_features("org1").await.unwrap();
        assert_eq!(
            features,
            vec![OrganizationFeature {
                name: "self_hosted_agents".into(),
                state: FeatureState::Enabled,
                quantity: 500,
            }]
        );
    }

    #[tokio::test]
    async fn test_repeated_calls_return_the_same_set() {
        let doc = write_doc(
            "- name: self_hosted_agents\n  state: enabled\n  quantity: 500\n\
             - name: pipelines\n  state: zero_state\n  quantity: 0\n",
        );
        let provider = YamlProvider::new(doc.path()).unwrap();

        let first = provider.list_features("org1").await.unwrap();
        let second = provider.list_features("org1").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[tokio::test]
    async fn test_organization_id_is_ignored() {
        let doc = write_doc("- name: pipelines\n  state: hidden\n  quantity: 3\n");
        let provider = YamlProvider::new(doc.path()).unwrap();

        let a = provider.list_features("org1").await.unwrap();
        let b = provider.list_features("some-other-org").await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_unknown_document_state_serves_as_hidden() {
        let doc = write_doc("- name: pipelines\n  state: launching\n  quantity: 1\n");
        let provider = YamlProvider::new(doc.path()).unwrap();

        let features = provider.list_features("org1").await.unwrap();
        assert_eq!(features[0].state, FeatureState::Hidden);
    }

    #[test]
    fn test_missing_file_is_configuration_error() {
        let err = YamlProvider::new("/nonexistent/features.yml").unwrap_err();
        assert!(matches!(err, EntitlementError::Configuration(_)));
    }

    #[test]
    fn test_malformed_document_is_configuration_error() {
        let doc = write_doc("features: {not: [a, list\n");
        let err = YamlProvider::new(doc.path()).unwrap_err();
        assert!(matches!(err, EntitlementError::Configuration(_)));
    }

    #[test]
    fn test_duplicate_feature_name_is_rejected() {
        let doc = write_doc(
            "- name: pipelines\n  state: enabled\n  quantity: 1\n\
             - name: pipelines\n  state: hidden\n  quantity: 2\n",
        );
        let err = YamlProvider::new(doc.path()).unwrap_err();
        assert!(matches!(err, EntitlementError::Configuration(_)));
    }

    #[test]
    fn test_empty_feature_name_is_rejected() {
        let doc = write_doc("- name: \"\"\n  state: enabled\n  quantity: 1\n");
        let err = YamlProvider::new(doc.path()).unwrap_err();
        assert!(matches!(err, EntitlementError::Configuration(_)));
    }

    #[tokio::test]
    async fn test_empty_document_is_a_valid_empty_set() {
        let doc = write_doc("[]\n");
        let provider = YamlProvider::new(doc.path()).unwrap();

        let features = provider.list_features("org1").await.unwrap();
        assert!(features.is_empty());
    }
}
