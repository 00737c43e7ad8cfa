use clap::Parser;
use rds_sleep_cloud::{Mode, RunConfig, SleepError};
use rds_sleep_cloud_aws::AwsOptions;
use std::time::Duration;
use thiserror::Error;

/// Stop RDS instances and clusters outside business hours, start them again in the morning
#[derive(Parser, Debug)]
#[command(name = "let-rds-sleep", version, long_about = None)]
pub struct Cli {
    /// START or STOP (oneshot mode only; Lambda events carry their own mode)
    #[arg(long, env = "LET_RDS_SLEEP_MODE")]
    pub mode: Option<String>,

    /// TagName=Value,... If no tags given, treat all resources as targets
    #[arg(long, env = "LET_RDS_SLEEP_TARGET", default_value = "")]
    pub target: String,

    /// TagName=Value,... Resources having any of these tags are excluded
    #[arg(long, env = "LET_RDS_SLEEP_EXCLUDE", default_value = "")]
    pub exclude: String,

    /// Show process targets only
    #[arg(
        long,
        visible_alias = "dry-run",
        env = "LET_RDS_SLEEP_DRYRUN",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub dryrun: bool,

    /// AWS region (defaults to the SDK region chain)
    #[arg(long)]
    pub region: Option<String>,

    /// Timeout for each RDS API operation
    #[arg(long, value_name = "SECS", env = "LET_RDS_SLEEP_TIMEOUT")]
    pub timeout: Option<u64>,

    /// error, warn, info, debug or trace
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: tracing::Level,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("--mode is not available when running as a Lambda function; pass the mode in the event payload")]
    ModeInLambda,

    #[error("--mode is required in oneshot mode (start or stop)")]
    ModeRequired,

    #[error(transparent)]
    Sleep(#[from] SleepError),
}

/// How this process was invoked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecMode {
    Oneshot(Mode),
    Lambda,
}

/// Fully validated invocation
#[derive(Debug)]
pub struct Invocation {
    pub exec: ExecMode,
    pub config: RunConfig,
    pub aws: AwsOptions,
}

impl Cli {
    /// Validate flags and build the run configuration
    ///
    /// Everything here happens before any AWS call.
    pub fn resolve(self, in_lambda: bool) -> Result<Invocation, ConfigError> {
        if in_lambda && self.mode.as_deref().is_some_and(|m| !m.is_empty()) {
            return Err(ConfigError::ModeInLambda);
        }

        let config = RunConfig::from_expressions(&self.target, &self.exclude, self.dryrun)?;

        let exec = if in_lambda {
            ExecMode::Lambda
        } else {
            let raw = self.mode.as_deref().ok_or(ConfigError::ModeRequired)?;
            ExecMode::Oneshot(parse_mode(raw)?)
        };

        Ok(Invocation {
            exec,
            config,
            aws: AwsOptions {
                region: self.region,
                operation_timeout: self.timeout.map(Duration::from_secs),
            },
        })
    }
}

/// Case-insensitive mode parsing for user input
pub fn parse_mode(raw: &str) -> Result<Mode, SleepError> {
    raw.to_ascii_lowercase()
        .parse()
        .map_err(|_| SleepError::UnknownMode(raw.to_string()))
}

/// Whether we are running inside AWS Lambda
pub fn is_lambda() -> bool {
    std::env::var("AWS_EXECUTION_ENV").is_ok_and(|v| v.starts_with("AWS_Lambda"))
        || std::env::var("AWS_LAMBDA_RUNTIME_API").is_ok_and(|v| !v.is_empty())
}
