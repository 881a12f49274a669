//! Remote feature provider backed by the FeatureHub gRPC service.

use crate::model::{FeatureState, OrganizationFeature};
use crate::pb;
use crate::pb::feature_service_client::FeatureServiceClient;
use crate::provider::FeatureProvider;
use crate::{EntitlementError, Result};
use async_trait::async_trait;
use std::time::{Duration, Instant};
use tonic::transport::Endpoint;
use tracing::{debug, warn};

/// Resolves organization features by calling the FeatureHub service.
///
/// Holds only the validated endpoint; a fresh channel is dialed per call and
/// dropped when the call scope ends, on success and failure alike. Each call
/// pays connection setup, a simplicity-over-throughput tradeoff acceptable at
/// the low call volume this provider serves.
///
/// A failed call never retries; retry-with-backoff belongs to a layer that
/// knows call frequency and criticality.
#[derive(Debug)]
pub struct HubProvider {
    endpoint: Endpoint,
    timeout: Option<Duration>,
}

impl HubProvider {
    /// Create a provider for the given FeatureHub endpoint, e.g.
    /// `http://feature-hub:50051`.
    ///
    /// Fails with [`EntitlementError::Configuration`] on an empty or
    /// malformed endpoint so a bad deployment surfaces at startup, not on
    /// first use.
    pub fn new(grpc_endpoint: &str) -> Result<Self> {
        if grpc_endpoint.is_empty() {
            return Err(EntitlementError::Configuration(
                "FeatureHub grpc endpoint is not set".into(),
            ));
        }
        let endpoint = Endpoint::from_shared(grpc_endpoint.to_string()).map_err(|e| {
            EntitlementError::Configuration(format!(
                "invalid FeatureHub grpc endpoint {grpc_endpoint:?}: {e}"
            ))
        })?;
        Ok(Self {
            endpoint,
            timeout: None,
        })
    }

    /// Bound every call (dial and RPC together) by `limit`.
    ///
    /// Without this the provider imposes no deadline; callers may also drop
    /// the future or wrap calls in `tokio::time::timeout` upstream.
    pub fn with_timeout(mut self, limit: Duration) -> Self {
        self.timeout = Some(limit);
        self
    }

    async fn resolve(&self, org_id: &str) -> Result<Vec<OrganizationFeature>> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.call_hub(org_id))
                .await
                .map_err(|_| {
                    EntitlementError::resolution(format!(
                        "feature hub call exceeded {limit:?}"
                    ))
                })?,
            None => self.call_hub(org_id).await,
        }
    }

    async fn call_hub(&self, org_id: &str) -> Result<Vec<OrganizationFeature>> {
        let channel = self
            .endpoint
            .connect()
            .await
            .map_err(EntitlementError::resolution)?;
        let mut client = FeatureServiceClient::new(channel);

        let request = pb::ListOrganizationFeaturesRequest {
            org_id: org_id.to_string(),
        };
        let response = client
            .list_organization_features(request)
            .await
            .map_err(EntitlementError::resolution)?;

        response
            .into_inner()
            .organization_features
            .into_iter()
            .map(feature_from_wire)
            .collect()
    }
}

#[async_trait]
impl FeatureProvider for HubProvider {
    async fn list_features(&self, org_id: &str) -> Result<Vec<OrganizationFeature>> {
        debug!(org_id, "listing organization features via FeatureHub");
        let started = Instant::now();
        let result = self.resolve(org_id).await;
        metrics::histogram!("list_organization_features.duration")
            .record(started.elapsed().as_secs_f64());

        match &result {
            Ok(features) => {
                metrics::counter!("list_organization_features.success").increment(1);
                debug!(org_id, count = features.len(), "feature hub call succeeded");
            }
            Err(err) => {
                metrics::counter!("list_organization_features.failure").increment(1);
                warn!(org_id, error = %err, "feature hub call failed");
            }
        }
        result
    }
}

/// Map one wire entry into the caller-facing record.
///
/// An entry missing its `feature` or `availability` submessage is malformed
/// backend data and fails the call; no partial records leak through.
fn feature_from_wire(entry: pb::OrganizationFeature) -> Result<OrganizationFeature> {
    let feature = entry
        .feature
        .ok_or_else(|| EntitlementError::resolution("feature hub entry missing feature"))?;
    let availability = entry.availability.ok_or_else(|| {
        EntitlementError::resolution("feature hub entry missing availability")
    })?;
    if feature.r#type.is_empty() {
        return Err(EntitlementError::resolution(
            "feature hub entry has an empty feature type",
        ));
    }

    Ok(OrganizationFeature {
        name: feature.r#type,
        state: state_from_wire(availability.state),
        quantity: availability.quantity,
    })
}

/// Classify the wire availability state; unknown values stay `Hidden`.
fn state_from_wire(state: i32) -> FeatureState {
    match pb::AvailabilityState::try_from(state) {
        Ok(pb::AvailabilityState::Enabled) => FeatureState::Enabled,
        Ok(pb::AvailabilityState::Hidden) => FeatureState::Hidden,
        Ok(pb::AvailabilityState::ZeroState) => FeatureState::ZeroState,
        Err(_) => FeatureState::Hidden,
    }
}
