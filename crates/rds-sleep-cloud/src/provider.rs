//! Database provider trait definition

use crate::error::ProviderError;
use crate::tag::Tag;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Result type for provider calls
pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

/// Managed database provider abstraction
///
/// The AWS RDS client implements this trait; tests use an in-memory fake.
/// Mutation calls only *request* a transition and return as soon as the
/// provider accepts it.
#[async_trait]
pub trait RdsProvider: Send + Sync {
    /// Returns the provider name (e.g., "aws-rds")
    fn name(&self) -> &str;

    /// List every cluster visible to the account
    async fn list_clusters(&self) -> ProviderResult<Vec<ClusterInfo>>;

    /// List every instance, including cluster members
    async fn list_instances(&self) -> ProviderResult<Vec<InstanceInfo>>;

    async fn start_instance(&self, id: &str) -> ProviderResult<()>;

    async fn stop_instance(&self, id: &str) -> ProviderResult<()>;

    async fn start_cluster(&self, id: &str) -> ProviderResult<()>;

    async fn stop_cluster(&self, id: &str) -> ProviderResult<()>;
}

/// Cluster as reported by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterInfo {
    pub id: String,
    pub status: String,
    pub tags: Vec<Tag>,
}

/// Instance as reported by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceInfo {
    pub id: String,
    pub status: String,
    pub tags: Vec<Tag>,

    /// Identifier of the owning cluster, if the instance is a cluster member
    pub cluster_id: Option<String>,
}

impl InstanceInfo {
    /// Whether this instance belongs to a cluster
    ///
    /// An empty cluster identifier counts as no cluster.
    pub fn is_cluster_member(&self) -> bool {
        self.cluster_id.as_deref().is_some_and(|id| !id.is_empty())
    }
}
