//! Error types for discovery, filtering and state transitions

use thiserror::Error;

/// Errors surfaced by a run
#[derive(Error, Debug)]
pub enum SleepError {
    #[error("Invalid tag expression: `{expression}` (expected Key1=Value1,Key2=Value2)")]
    InvalidTagExpression { expression: String },

    #[error("Provider query failed: {0}")]
    ProviderQueryFailed(#[source] ProviderError),

    #[error("Unknown mode: {0} (expected start or stop)")]
    UnknownMode(String),

    #[error("Transition failed for {resource}: {source}")]
    TransitionFailed {
        resource: String,
        #[source]
        source: ProviderError,
    },
}

/// Error reported by a provider implementation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("{operation} failed{}: {message}", code_suffix(.code))]
    Api {
        operation: &'static str,
        code: Option<String>,
        message: String,
    },

    #[error("Provider configuration error: {0}")]
    Config(String),
}

impl ProviderError {
    pub fn api(operation: &'static str, code: Option<String>, message: impl Into<String>) -> Self {
        Self::Api {
            operation,
            code,
            message: message.into(),
        }
    }

    /// Provider error code, if the provider reported one
    pub fn code(&self) -> Option<&str> {
        match self {
            ProviderError::Api { code, .. } => code.as_deref(),
            ProviderError::Config(_) => None,
        }
    }
}

fn code_suffix(code: &Option<String>) -> String {
    code.as_deref().map(|c| format!(" ({c})")).unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, SleepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_display_with_code() {
        let err = ProviderError::api(
            "StopDBInstance",
            Some("InvalidDBInstanceState".to_string()),
            "Instance db-1 is not in available state.",
        );
        assert_eq!(
            err.to_string(),
            "StopDBInstance failed (InvalidDBInstanceState): Instance db-1 is not in available state."
        );
        assert_eq!(err.code(), Some("InvalidDBInstanceState"));
    }

    #[test]
    fn test_provider_error_display_without_code() {
        let err = ProviderError::api("DescribeDBClusters", None, "dispatch failure");
        assert_eq!(err.to_string(), "DescribeDBClusters failed: dispatch failure");
        assert_eq!(err.code(), None);
    }

    #[test]
    fn test_transition_failed_names_resource() {
        let err = SleepError::TransitionFailed {
            resource: "cluster/orders".to_string(),
            source: ProviderError::api("StopDBCluster", None, "boom"),
        };
        assert!(err.to_string().contains("cluster/orders"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
