//! AWS RDS provider implementation

use crate::error::provider_error;
use async_trait::async_trait;
use aws_config::timeout::TimeoutConfig;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_rds::types::{DbCluster, DbInstance};
use rds_sleep_cloud::{ClusterInfo, InstanceInfo, ProviderError, ProviderResult, RdsProvider, Tag};
use std::time::Duration;

/// Options for building the SDK client
#[derive(Debug, Clone, Default)]
pub struct AwsOptions {
    /// Region override; falls back to the SDK's region chain (AWS_REGION, profile, IMDS)
    pub region: Option<String>,

    /// Timeout applied to every RDS operation, retries included
    pub operation_timeout: Option<Duration>,
}

/// RDS provider backed by `aws-sdk-rds`
#[derive(Debug, Clone)]
pub struct AwsRdsProvider {
    client: aws_sdk_rds::Client,
}

impl AwsRdsProvider {
    pub fn new(client: aws_sdk_rds::Client) -> Self {
        Self { client }
    }

    /// Load credentials and region from the environment
    pub async fn from_env(options: &AwsOptions) -> ProviderResult<Self> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(region) = &options.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(timeout) = options.operation_timeout {
            loader = loader.timeout_config(
                TimeoutConfig::builder()
                    .operation_timeout(timeout)
                    .build(),
            );
        }

        let config = loader.load().await;
        let region = config
            .region()
            .ok_or_else(|| {
                ProviderError::Config(
                    "no AWS region configured (set AWS_REGION or pass --region)".to_string(),
                )
            })?
            .to_string();
        tracing::debug!("using AWS region {}", region);

        Ok(Self::new(aws_sdk_rds::Client::new(&config)))
    }
}

fn tags_from_sdk(tags: &[aws_sdk_rds::types::Tag]) -> Vec<Tag> {
    tags.iter()
        .filter_map(|t| {
            let key = t.key()?;
            Some(Tag::new(key, t.value().unwrap_or_default()))
        })
        .collect()
}

/// Convert an SDK cluster; clusters without an identifier are dropped
pub(crate) fn cluster_info(cluster: &DbCluster) -> Option<ClusterInfo> {
    Some(ClusterInfo {
        id: cluster.db_cluster_identifier()?.to_string(),
        status: cluster.status().unwrap_or_default().to_string(),
        tags: tags_from_sdk(cluster.tag_list()),
    })
}

/// Convert an SDK instance; instances without an identifier are dropped
pub(crate) fn instance_info(instance: &DbInstance) -> Option<InstanceInfo> {
    Some(InstanceInfo {
        id: instance.db_instance_identifier()?.to_string(),
        status: instance.db_instance_status().unwrap_or_default().to_string(),
        tags: tags_from_sdk(instance.tag_list()),
        cluster_id: instance.db_cluster_identifier().map(str::to_string),
    })
}

#[async_trait]
impl RdsProvider for AwsRdsProvider {
    fn name(&self) -> &str {
        "aws-rds"
    }

    async fn list_clusters(&self) -> ProviderResult<Vec<ClusterInfo>> {
        let mut pages = self.client.describe_db_clusters().into_paginator().send();
        let mut clusters = Vec::new();

        while let Some(page) = pages.next().await {
            let page = page.map_err(|e| provider_error("DescribeDBClusters", e))?;
            for cluster in page.db_clusters() {
                match cluster_info(cluster) {
                    Some(info) => clusters.push(info),
                    None => tracing::warn!("skipping DB cluster without identifier"),
                }
            }
        }

        Ok(clusters)
    }

    async fn list_instances(&self) -> ProviderResult<Vec<InstanceInfo>> {
        let mut pages = self.client.describe_db_instances().into_paginator().send();
        let mut instances = Vec::new();

        while let Some(page) = pages.next().await {
            let page = page.map_err(|e| provider_error("DescribeDBInstances", e))?;
            for instance in page.db_instances() {
                match instance_info(instance) {
                    Some(info) => instances.push(info),
                    None => tracing::warn!("skipping DB instance without identifier"),
                }
            }
        }

        Ok(instances)
    }

    async fn start_instance(&self, id: &str) -> ProviderResult<()> {
        self.client
            .start_db_instance()
            .db_instance_identifier(id)
            .send()
            .await
            .map_err(|e| provider_error("StartDBInstance", e))?;
        Ok(())
    }

    async fn stop_instance(&self, id: &str) -> ProviderResult<()> {
        self.client
            .stop_db_instance()
            .db_instance_identifier(id)
            .send()
            .await
            .map_err(|e| provider_error("StopDBInstance", e))?;
        Ok(())
    }

    async fn start_cluster(&self, id: &str) -> ProviderResult<()> {
        self.client
            .start_db_cluster()
            .db_cluster_identifier(id)
            .send()
            .await
            .map_err(|e| provider_error("StartDBCluster", e))?;
        Ok(())
    }

    async fn stop_cluster(&self, id: &str) -> ProviderResult<()> {
        self.client
            .stop_db_cluster()
            .db_cluster_identifier(id)
            .send()
            .await
            .map_err(|e| provider_error("StopDBCluster", e))?;
        Ok(())
    }
}
