//! Lifecycle transitions for controllable resources

use crate::error::{Result, SleepError};
use crate::provider::{ProviderResult, RdsProvider};
use crate::resource::{Resource, ResourceKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Provider status a stopped resource reports
pub const STATUS_STOPPED: &str = "stopped";

/// Provider status a running resource reports
pub const STATUS_AVAILABLE: &str = "available";

/// Requested lifecycle transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Start,
    Stop,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Start => "start",
            Mode::Stop => "stop",
        }
    }

    /// Processor that performs this transition
    pub fn processor(self) -> TransitionProcessor {
        match self {
            Mode::Start => TransitionProcessor::START,
            Mode::Stop => TransitionProcessor::STOP,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the canonical lowercase names only
impl FromStr for Mode {
    type Err = SleepError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "start" => Ok(Mode::Start),
            "stop" => Ok(Mode::Stop),
            other => Err(SleepError::UnknownMode(other.to_string())),
        }
    }
}

/// Select the processor for a canonical mode name
pub fn select_processor(mode: &str) -> Result<TransitionProcessor> {
    mode.parse::<Mode>().map(Mode::processor)
}

/// What a processor did with one resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum TransitionOutcome {
    /// Transition was requested from the provider
    Requested,
    /// Status not eligible for this transition, nothing was done
    Skipped { status: String },
}

/// Start or stop strategy, chosen once per run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionProcessor {
    mode: Mode,
    eligible_status: &'static str,
}

impl TransitionProcessor {
    pub const START: Self = Self {
        mode: Mode::Start,
        eligible_status: STATUS_STOPPED,
    };

    pub const STOP: Self = Self {
        mode: Mode::Stop,
        eligible_status: STATUS_AVAILABLE,
    };

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Status a resource must report for this transition to apply
    pub fn eligible_status(&self) -> &'static str {
        self.eligible_status
    }

    pub fn is_eligible(&self, resource: &Resource) -> bool {
        resource.status == self.eligible_status
    }

    /// Request the transition for one resource
    ///
    /// Resources in any other status than [`Self::eligible_status`] are left
    /// untouched. The provider call is not retried and the resulting status is
    /// not polled.
    pub async fn process(
        &self,
        provider: &dyn RdsProvider,
        resource: &Resource,
    ) -> Result<TransitionOutcome> {
        if !self.is_eligible(resource) {
            tracing::debug!(
                "{} is {}, not {}. nothing to do",
                resource,
                resource.status,
                self.eligible_status
            );
            return Ok(TransitionOutcome::Skipped {
                status: resource.status.clone(),
            });
        }

        self.dispatch(provider, resource)
            .await
            .map_err(|source| SleepError::TransitionFailed {
                resource: resource.to_string(),
                source,
            })?;

        tracing::info!("successfully requested to {} {}", self.mode, resource);
        Ok(TransitionOutcome::Requested)
    }

    async fn dispatch(&self, provider: &dyn RdsProvider, resource: &Resource) -> ProviderResult<()> {
        let id = resource.id.as_str();
        match (self.mode, resource.kind) {
            (Mode::Start, ResourceKind::Instance) => provider.start_instance(id).await,
            (Mode::Start, ResourceKind::Cluster) => provider.start_cluster(id).await,
            (Mode::Stop, ResourceKind::Instance) => provider.stop_instance(id).await,
            (Mode::Stop, ResourceKind::Cluster) => provider.stop_cluster(id).await,
        }
    }
}
