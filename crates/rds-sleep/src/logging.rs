use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Crates whose events follow the requested level; everything else logs at warn
const OWN_TARGETS: [&str; 3] = ["let_rds_sleep", "rds_sleep_cloud", "rds_sleep_cloud_aws"];

/// Logging configuration, built once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    level: Level,
    ansi: bool,
}

impl LogConfig {
    pub fn new(level: Level, ansi: bool) -> Self {
        Self { level, ansi }
    }

    /// Filter directives, e.g. `warn,let_rds_sleep=info,...`
    pub fn directives(&self) -> String {
        let level = self.level.as_str().to_ascii_lowercase();
        std::iter::once("warn".to_string())
            .chain(OWN_TARGETS.iter().map(|t| format!("{t}={level}")))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Install the global subscriber; logs go to stderr
pub fn init(config: &LogConfig) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(config.ansi)
        .with_env_filter(EnvFilter::new(config.directives()))
        .init();
}
