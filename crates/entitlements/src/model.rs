//! Feature records and availability state classification.

use serde::{Deserialize, Serialize};

/// Availability state of a feature for an organization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureState {
    /// Active and usable.
    Enabled,
    /// Not visible to the organization.
    Hidden,
    /// Visible in UI/metadata but not yet provisioned.
    ZeroState,
}

impl FeatureState {
    /// Classify a raw backend availability signal.
    ///
    /// Total over arbitrary input: an unrecognized signal classifies as
    /// `Hidden`, never `Enabled`, so an unknown state cannot grant access.
    pub fn classify(signal: &str) -> Self {
        match signal.to_ascii_lowercase().as_str() {
            "enabled" => Self::Enabled,
            "hidden" => Self::Hidden,
            "zero_state" => Self::ZeroState,
            _ => Self::Hidden,
        }
    }
}

/// A feature entitlement resolved for one organization.
///
/// Built fresh on every resolution call and immutable once returned; the
/// caller owns the collection exclusively.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationFeature {
    /// Stable feature key, e.g. `self_hosted_agents`.
    pub name: String,
    /// Availability state, always one of the canonical values.
    pub state: FeatureState,
    /// Entitled amount or limit; 0 is valid and meaningful (e.g. no seats).
    pub quantity: u32,
}

impl OrganizationFeature {
    /// Whether the feature is active for the organization.
    pub fn is_enabled(&self) -> bool {
        self.state == FeatureState::Enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_canonical_signals() {
        assert_eq!(FeatureState::classify("enabled"), FeatureState::Enabled);
        assert_eq!(FeatureState::classify("hidden"), FeatureState::Hidden);
        assert_eq!(FeatureState::classify("zero_state"), FeatureState::ZeroState);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(FeatureState::classify("ENABLED"), FeatureState::Enabled);
        assert_eq!(FeatureState::classify("Zero_State"), FeatureState::ZeroState);
    }

    #[test]
    fn test_unknown_signals_classify_as_hidden() {
        for signal in ["", "on", "disabled", "ENABLE", "zero-state", "42"] {
            assert_eq!(FeatureState::classify(signal), FeatureState::Hidden);
            assert_ne!(FeatureState::classify(signal), FeatureState::Enabled);
        }
    }

    #[test]
    fn test_is_enabled() {
        let feature = OrganizationFeature {
            name: "pipelines".into(),
            state: FeatureState::Enabled,
            quantity: 10,
        };
        assert!(feature.is_enabled());

        let feature = OrganizationFeature {
            state: FeatureState::ZeroState,
            ..feature
        };
        assert!(!feature.is_enabled());
    }
}
