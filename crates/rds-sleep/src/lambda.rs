use crate::cli::parse_mode;
use lambda_runtime::{LambdaEvent, service_fn};
use rds_sleep_cloud::{RdsProvider, RunConfig, RunSummary, SleepError, run};
use serde::Deserialize;
use std::sync::Arc;

/// Event payload, e.g. `{"mode": "stop"}` from an EventBridge schedule
#[derive(Debug, Clone, Deserialize)]
pub struct SleepEvent {
    pub mode: String,
}

/// Serve Lambda invocations until the runtime shuts us down
pub async fn serve<P>(provider: P, config: RunConfig) -> anyhow::Result<()>
where
    P: RdsProvider + 'static,
{
    tracing::info!("started as Lambda function handler");
    let state = Arc::new((provider, config));

    lambda_runtime::run(service_fn(move |event: LambdaEvent<SleepEvent>| {
        let state = Arc::clone(&state);
        async move {
            let (provider, config) = &*state;
            handle(provider, config, event.payload)
                .await
                .map_err(lambda_runtime::Error::from)
        }
    }))
    .await
    .map_err(|e| anyhow::anyhow!("lambda runtime error: {e}"))
}

async fn handle(
    provider: &dyn RdsProvider,
    config: &RunConfig,
    event: SleepEvent,
) -> Result<RunSummary, SleepError> {
    let mode = parse_mode(&event.mode)?;
    let summary = run(provider, config, mode).await?;
    tracing::info!("{}", summary);
    Ok(summary)
}
