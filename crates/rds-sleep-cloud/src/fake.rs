//! In-memory provider for unit tests

use crate::error::ProviderError;
use crate::provider::{ClusterInfo, InstanceInfo, ProviderResult, RdsProvider};
use crate::tag::Tag;
use async_trait::async_trait;
use std::sync::Mutex;

/// Mutation call recorded by [`FakeProvider`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    StartInstance(String),
    StopInstance(String),
    StartCluster(String),
    StopCluster(String),
}

#[derive(Default)]
pub struct FakeProvider {
    pub clusters: Vec<ClusterInfo>,
    pub instances: Vec<InstanceInfo>,
    pub fail_list_clusters: bool,
    pub fail_list_instances: bool,
    /// Mutation calls against this id fail
    pub fail_on: Option<String>,
    calls: Mutex<Vec<Call>>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cluster(mut self, id: &str, status: &str, tags: &[(&str, &str)]) -> Self {
        self.clusters.push(ClusterInfo {
            id: id.to_string(),
            status: status.to_string(),
            tags: tags_of(tags),
        });
        self
    }

    pub fn with_instance(
        mut self,
        id: &str,
        status: &str,
        tags: &[(&str, &str)],
        cluster_id: Option<&str>,
    ) -> Self {
        self.instances.push(InstanceInfo {
            id: id.to_string(),
            status: status.to_string(),
            tags: tags_of(tags),
            cluster_id: cluster_id.map(str::to_string),
        });
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, operation: &'static str, id: &str, call: Call) -> ProviderResult<()> {
        if self.fail_on.as_deref() == Some(id) {
            return Err(ProviderError::api(
                operation,
                Some("InvalidDBInstanceState".to_string()),
                format!("{id} rejected"),
            ));
        }
        self.calls.lock().unwrap().push(call);
        Ok(())
    }
}

pub fn tags_of(tags: &[(&str, &str)]) -> Vec<Tag> {
    tags.iter().map(|(k, v)| Tag::new(*k, *v)).collect()
}

#[async_trait]
impl RdsProvider for FakeProvider {
    fn name(&self) -> &str {
        "fake"
    }

    async fn list_clusters(&self) -> ProviderResult<Vec<ClusterInfo>> {
        if self.fail_list_clusters {
            return Err(ProviderError::api("DescribeDBClusters", None, "unreachable"));
        }
        Ok(self.clusters.clone())
    }

    async fn list_instances(&self) -> ProviderResult<Vec<InstanceInfo>> {
        if self.fail_list_instances {
            return Err(ProviderError::api("DescribeDBInstances", None, "unreachable"));
        }
        Ok(self.instances.clone())
    }

    async fn start_instance(&self, id: &str) -> ProviderResult<()> {
        self.record("StartDBInstance", id, Call::StartInstance(id.to_string()))
    }

    async fn stop_instance(&self, id: &str) -> ProviderResult<()> {
        self.record("StopDBInstance", id, Call::StopInstance(id.to_string()))
    }

    async fn start_cluster(&self, id: &str) -> ProviderResult<()> {
        self.record("StartDBCluster", id, Call::StartCluster(id.to_string()))
    }

    async fn stop_cluster(&self, id: &str) -> ProviderResult<()> {
        self.record("StopDBCluster", id, Call::StopCluster(id.to_string()))
    }
}
