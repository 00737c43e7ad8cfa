//! Controllable resources and inventory discovery

use crate::error::{Result, SleepError};
use crate::provider::{ClusterInfo, InstanceInfo, RdsProvider};
use crate::tag::{Tag, join_tags};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a controllable resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// Standalone DB instance
    Instance,
    /// DB cluster (members are controlled through the cluster)
    Cluster,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Instance => write!(f, "instance"),
            ResourceKind::Cluster => write!(f, "cluster"),
        }
    }
}

/// Snapshot of one controllable unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub kind: ResourceKind,
    pub status: String,
    pub tags: Vec<Tag>,
}

impl Resource {
    pub fn new(
        id: impl Into<String>,
        kind: ResourceKind,
        status: impl Into<String>,
        tags: Vec<Tag>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            status: status.into(),
            tags,
        }
    }

    /// Whether the resource carries a tag with exactly this key and value
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn tags_as_string(&self) -> String {
        join_tags(&self.tags)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.id)
    }
}

impl From<ClusterInfo> for Resource {
    fn from(info: ClusterInfo) -> Self {
        Self::new(info.id, ResourceKind::Cluster, info.status, info.tags)
    }
}

impl From<InstanceInfo> for Resource {
    fn from(info: InstanceInfo) -> Self {
        Self::new(info.id, ResourceKind::Instance, info.status, info.tags)
    }
}

/// Build the inventory of controllable resources
///
/// Clusters come first, then standalone instances, each in provider order.
/// Cluster members are skipped. Any query failure aborts the whole build.
pub async fn build_inventory(provider: &dyn RdsProvider) -> Result<Vec<Resource>> {
    let clusters = provider
        .list_clusters()
        .await
        .map_err(SleepError::ProviderQueryFailed)?;
    tracing::debug!("{} cluster(s) found", clusters.len());

    let instances = provider
        .list_instances()
        .await
        .map_err(SleepError::ProviderQueryFailed)?;
    tracing::debug!("{} instance(s) found", instances.len());

    let mut resources: Vec<Resource> = clusters.into_iter().map(Resource::from).collect();

    for instance in instances {
        if instance.is_cluster_member() {
            tracing::debug!(
                "instance/{} skipped: member of cluster {}",
                instance.id,
                instance.cluster_id.as_deref().unwrap_or_default()
            );
            continue;
        }
        resources.push(instance.into());
    }

    Ok(resources)
}
