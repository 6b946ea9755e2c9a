use thiserror::Error;

use crate::platform::Platform;

/// Errors raised while choosing the destination platform for a message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    /// The webhook URL was empty.
    #[error("no webhook URL provided")]
    MissingUrl,

    /// An explicit platform override named a platform Herald does not know.
    #[error("unsupported WEBHOOK_DEFAULT_PLATFORM: {0} (supported: {supported})", supported = Platform::supported_list())]
    UnsupportedPlatform(String),

    /// No override was set and the URL matched none of the known patterns.
    #[error(
        "could not auto-detect webhook platform from URL; set WEBHOOK_DEFAULT_PLATFORM to one of: {supported}",
        supported = Platform::supported_list()
    )]
    Undetectable,
}
