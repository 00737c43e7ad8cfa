//! let-rds-sleep core
//!
//! Discovers managed database resources, narrows them down by tags and
//! requests start/stop transitions for the survivors.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              let-rds-sleep CLI                   │
//! │         (oneshot / Lambda handler)               │
//! └─────────────────┬───────────────────────────────┘
//!                   │ RunConfig + Mode
//! ┌─────────────────▼───────────────────────────────┐
//! │                rds-sleep-cloud                   │
//! │  inventory ──▶ tag filter ──▶ transition         │
//! │  ┌──────────────────────────────────────────┐   │
//! │  │          Provider Abstraction             │   │
//! │  │  trait RdsProvider { ... }                │   │
//! │  └──────────────────────────────────────────┘   │
//! └─────────────────┬───────────────────────────────┘
//!                   │
//!           ┌───────▼───────┐
//!           │    aws-rds    │
//!           │   provider    │
//!           └───────────────┘
//! ```

pub mod action;
pub mod error;
pub mod filter;
pub mod provider;
pub mod resource;
pub mod run;
pub mod tag;

#[cfg(test)]
mod fake;

// Re-exports
pub use action::{
    Mode, STATUS_AVAILABLE, STATUS_STOPPED, TransitionOutcome, TransitionProcessor,
    select_processor,
};
pub use error::{ProviderError, Result, SleepError};
pub use filter::filter_resources;
pub use provider::{ClusterInfo, InstanceInfo, ProviderResult, RdsProvider};
pub use resource::{Resource, ResourceKind, build_inventory};
pub use run::{RunConfig, RunSummary, run};
pub use tag::{Tag, TagConstraintSet};
