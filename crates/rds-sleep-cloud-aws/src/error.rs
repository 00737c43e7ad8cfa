//! AWS SDK error mapping
//!
//! Uses `ProvideErrorMetadata` to carry the AWS error code instead of
//! matching on the Debug output.

use aws_sdk_rds::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use rds_sleep_cloud::ProviderError;

/// Convert an SDK failure of `operation` into a [`ProviderError`]
pub(crate) fn provider_error<E, R>(operation: &'static str, err: SdkError<E, R>) -> ProviderError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let code = err.code().map(str::to_string);
    let message = err
        .message()
        .map(str::to_string)
        .unwrap_or_else(|| DisplayErrorContext(&err).to_string());

    tracing::debug!("{} failed: {}", operation, DisplayErrorContext(&err));
    ProviderError::api(operation, code, message)
}
