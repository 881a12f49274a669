//! FeatureHub wire contract.
//!
//! Hand-maintained mirror of the FeatureHub protobuf definitions (messages
//! plus the unary client for `featurehub.FeatureService`), kept in-crate so
//! the build carries no protoc step.

/// Request carrying the organization to resolve features for.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListOrganizationFeaturesRequest {
    /// Opaque organization identifier.
    #[prost(string, tag = "1")]
    pub org_id: ::prost::alloc::string::String,
}

/// Response carrying one entry per feature known for the organization.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListOrganizationFeaturesResponse {
    /// Resolved feature entries, order not significant.
    #[prost(message, repeated, tag = "1")]
    pub organization_features: ::prost::alloc::vec::Vec<OrganizationFeature>,
}

/// One feature paired with its availability for the organization.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OrganizationFeature {
    /// The feature being described.
    #[prost(message, optional, tag = "1")]
    pub feature: ::core::option::Option<Feature>,
    /// Availability of the feature for the requested organization.
    #[prost(message, optional, tag = "2")]
    pub availability: ::core::option::Option<Availability>,
}

/// A feature known to the FeatureHub.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Feature {
    /// Stable feature key, e.g. `self_hosted_agents`.
    #[prost(string, tag = "1")]
    pub r#type: ::prost::alloc::string::String,
}

/// Availability of a feature for one organization.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Availability {
    /// Raw availability state; decode through [`AvailabilityState`].
    #[prost(enumeration = "AvailabilityState", tag = "1")]
    pub state: i32,
    /// Entitled quantity or limit.
    #[prost(uint32, tag = "2")]
    pub quantity: u32,
}

/// Wire availability state.
///
/// `Hidden` is tag 0 so the proto3 default decodes to the fail-safe state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum AvailabilityState {
    /// Feature is not visible to the organization.
    Hidden = 0,
    /// Feature is visible but not provisioned.
    ZeroState = 1,
    /// Feature is active.
    Enabled = 2,
}

/// Unary client for `featurehub.FeatureService`.
pub mod feature_service_client {
    #![allow(unused_variables, dead_code, missing_docs, clippy::let_unit_value)]
    use tonic::codegen::*;

    #[derive(Debug, Clone)]
    pub struct FeatureServiceClient<T> {
        inner: tonic::client::Grpc<T>,
    }

    impl FeatureServiceClient<tonic::transport::Channel> {
        /// Attempt to create a new client by connecting to a given endpoint.
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }

    impl<T> FeatureServiceClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }

        /// List the features known for one organization.
        pub async fn list_organization_features(
            &mut self,
            request: impl tonic::IntoRequest<super::ListOrganizationFeaturesRequest>,
        ) -> std::result::Result<
            tonic::Response<super::ListOrganizationFeaturesResponse>,
            tonic::Status,
        > {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/featurehub.FeatureService/ListOrganizationFeatures",
            );
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new(
                "featurehub.FeatureService",
                "ListOrganizationFeatures",
            ));
            self.inner.unary(req, path, codec).await
        }
    }
}
