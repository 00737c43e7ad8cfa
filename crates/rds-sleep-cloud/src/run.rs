//! Discovery → filter → transition orchestration

use crate::action::{Mode, TransitionOutcome};
use crate::error::Result;
use crate::filter::filter_resources;
use crate::provider::RdsProvider;
use crate::resource::{Resource, build_inventory};
use crate::tag::TagConstraintSet;
use serde::Serialize;
use std::fmt;

/// Per-invocation configuration, immutable once built
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    target: TagConstraintSet,
    exclude: TagConstraintSet,
    dry_run: bool,
}

impl RunConfig {
    pub fn new(target: TagConstraintSet, exclude: TagConstraintSet, dry_run: bool) -> Self {
        Self {
            target,
            exclude,
            dry_run,
        }
    }

    /// Build from raw tag expressions
    pub fn from_expressions(target: &str, exclude: &str, dry_run: bool) -> Result<Self> {
        Ok(Self::new(
            TagConstraintSet::parse(target)?,
            TagConstraintSet::parse(exclude)?,
            dry_run,
        ))
    }

    pub fn target(&self) -> &TagConstraintSet {
        &self.target
    }

    pub fn exclude(&self) -> &TagConstraintSet {
        &self.exclude
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}

/// What a run did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub mode: Mode,
    pub dry_run: bool,

    /// Resources whose transition was requested
    pub requested: Vec<String>,

    /// Resources left alone because of their status
    pub skipped: Vec<String>,

    /// Eligible resources reported under dry-run
    pub planned: Vec<String>,
}

impl RunSummary {
    fn new(mode: Mode, dry_run: bool) -> Self {
        Self {
            mode,
            dry_run,
            requested: Vec::new(),
            skipped: Vec::new(),
            planned: Vec::new(),
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dry_run {
            write!(
                f,
                "{} to {} [dryrun], {} unchanged",
                self.planned.len(),
                self.mode,
                self.skipped.len()
            )
        } else {
            write!(
                f,
                "{} requested to {}, {} unchanged",
                self.requested.len(),
                self.mode,
                self.skipped.len()
            )
        }
    }
}

/// Run one invocation
///
/// Resources are processed one at a time in inventory order. The first
/// failed transition aborts the run; transitions already requested stay
/// requested.
pub async fn run(provider: &dyn RdsProvider, config: &RunConfig, mode: Mode) -> Result<RunSummary> {
    tracing::info!("running to {} targets via {}", mode, provider.name());

    let inventory = build_inventory(provider).await?;
    let targets = filter_resources(&inventory, config.target(), config.exclude());
    tracing::info!(
        "{} of {} resource(s) matched tag conditions",
        targets.len(),
        inventory.len()
    );

    let processor = mode.processor();
    let mut summary = RunSummary::new(mode, config.dry_run());

    for target in &targets {
        tracing::info!("processing {}", target);

        if config.dry_run() {
            record_plan(&mut summary, processor.is_eligible(target), target);
            continue;
        }

        match processor.process(provider, target).await? {
            TransitionOutcome::Requested => summary.requested.push(target.to_string()),
            TransitionOutcome::Skipped { .. } => summary.skipped.push(target.to_string()),
        }
        tracing::info!("process completed for {}", target);
    }

    Ok(summary)
}

fn record_plan(summary: &mut RunSummary, eligible: bool, target: &Resource) {
    if eligible {
        tracing::info!("{} will be {} [dryrun]", target, summary.mode);
        summary.planned.push(target.to_string());
    } else {
        tracing::info!(
            "{} is {}, will be left as is [dryrun]",
            target,
            target.status
        );
        summary.skipped.push(target.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SleepError;
    use crate::fake::{Call, FakeProvider};

    fn config(target: &str, exclude: &str, dry_run: bool) -> RunConfig {
        RunConfig::from_expressions(target, exclude, dry_run).unwrap()
    }

    #[test]
    fn test_run_config_rejects_bad_expression() {
        assert!(matches!(
            RunConfig::from_expressions("A=1", "oops", false),
            Err(SleepError::InvalidTagExpression { expression }) if expression == "oops"
        ));
    }

    #[tokio::test]
    async fn test_stop_scenario() {
        let provider = FakeProvider::new()
            .with_cluster("aurora", "available", &[])
            .with_instance("legacy", "stopped", &[], None);

        let summary = run(&provider, &config("", "", false), Mode::Stop)
            .await
            .unwrap();

        assert_eq!(provider.calls(), vec![Call::StopCluster("aurora".to_string())]);
        assert_eq!(summary.requested, vec!["cluster/aurora"]);
        assert_eq!(summary.skipped, vec!["instance/legacy"]);
        assert_eq!(summary.to_string(), "1 requested to stop, 1 unchanged");
    }

    #[tokio::test]
    async fn test_start_respects_tags() {
        let provider = FakeProvider::new()
            .with_cluster("dev-cluster", "stopped", &[("Env", "dev")])
            .with_cluster("prod-cluster", "stopped", &[("Env", "prod")])
            .with_instance("dev-pinned", "stopped", &[("Env", "dev"), ("KeepAwake", "true")], None)
            .with_instance("dev-db", "stopped", &[("Env", "dev")], None)
            .with_instance("dev-member", "stopped", &[("Env", "dev")], Some("dev-cluster"));

        run(&provider, &config("Env=dev", "KeepAwake=true", false), Mode::Start)
            .await
            .unwrap();

        assert_eq!(
            provider.calls(),
            vec![
                Call::StartCluster("dev-cluster".to_string()),
                Call::StartInstance("dev-db".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_dry_run_issues_no_mutation() {
        let provider = FakeProvider::new()
            .with_cluster("aurora", "available", &[])
            .with_instance("legacy", "available", &[], None)
            .with_instance("idle", "stopped", &[], None);

        let summary = run(&provider, &config("", "", true), Mode::Stop)
            .await
            .unwrap();

        assert!(provider.calls().is_empty());
        assert!(summary.dry_run);
        assert!(summary.requested.is_empty());
        assert_eq!(summary.planned, vec!["cluster/aurora", "instance/legacy"]);
        assert_eq!(summary.skipped, vec!["instance/idle"]);
    }

    #[tokio::test]
    async fn test_failure_halts_remaining_batch() {
        let mut provider = FakeProvider::new()
            .with_instance("first", "available", &[], None)
            .with_instance("broken", "available", &[], None)
            .with_instance("last", "available", &[], None);
        provider.fail_on = Some("broken".to_string());

        let err = run(&provider, &config("", "", false), Mode::Stop)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            SleepError::TransitionFailed { ref resource, .. } if resource == "instance/broken"
        ));
        assert_eq!(provider.calls(), vec![Call::StopInstance("first".to_string())]);
    }

    #[tokio::test]
    async fn test_query_failure_aborts_before_processing() {
        let mut provider = FakeProvider::new().with_cluster("aurora", "available", &[]);
        provider.fail_list_instances = true;

        let err = run(&provider, &config("", "", false), Mode::Stop)
            .await
            .unwrap_err();

        assert!(matches!(err, SleepError::ProviderQueryFailed(_)));
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_nothing_matches() {
        let provider = FakeProvider::new().with_cluster("aurora", "available", &[("Env", "prod")]);

        let summary = run(&provider, &config("Env=dev", "", false), Mode::Stop)
            .await
            .unwrap();

        assert!(summary.requested.is_empty());
        assert!(summary.skipped.is_empty());
        assert!(provider.calls().is_empty());
    }
}
