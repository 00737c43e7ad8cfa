//! AWS RDS provider for let-rds-sleep
//!
//! Implements [`rds_sleep_cloud::RdsProvider`] on top of `aws-sdk-rds`.
//! Clusters and instances are discovered with `DescribeDBClusters` /
//! `DescribeDBInstances` (all pages), transitions are requested with the
//! matching `Start*`/`Stop*` calls.
//!
//! # Requirements
//!
//! - Credentials resolvable by the default AWS provider chain
//! - IAM permissions: `rds:DescribeDBClusters`, `rds:DescribeDBInstances`,
//!   `rds:StartDBCluster`, `rds:StopDBCluster`, `rds:StartDBInstance`,
//!   `rds:StopDBInstance`
//!
//! # Example
//!
//! ```ignore
//! use rds_sleep_cloud::{Mode, RunConfig, run};
//! use rds_sleep_cloud_aws::{AwsOptions, AwsRdsProvider};
//!
//! let provider = AwsRdsProvider::from_env(&AwsOptions::default()).await?;
//! let config = RunConfig::from_expressions("Env=dev", "", false)?;
//! let summary = run(&provider, &config, Mode::Stop).await?;
//! ```

mod error;
pub mod provider;

pub use provider::{AwsOptions, AwsRdsProvider};
