mod cli;
mod lambda;
mod logging;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, ExecMode};
use logging::LogConfig;
use rds_sleep_cloud_aws::AwsRdsProvider;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let in_lambda = cli::is_lambda();

    // CloudWatch では ANSI カラーを無効化
    logging::init(&LogConfig::new(cli.log_level, !in_lambda));

    // タグ式・モードの検証は AWS 呼び出しより前に行う
    let invocation = cli.resolve(in_lambda)?;

    let provider = AwsRdsProvider::from_env(&invocation.aws)
        .await
        .context("failed to load AWS config")?;

    match invocation.exec {
        ExecMode::Oneshot(mode) => {
            tracing::info!("started as oneshot mode");
            let summary = rds_sleep_cloud::run(&provider, &invocation.config, mode)
                .await
                .context("failed to run")?;
            tracing::info!("{}", summary);
        }
        ExecMode::Lambda => {
            lambda::serve(provider, invocation.config).await?;
        }
    }

    tracing::info!("bye");
    Ok(())
}
