use herald_core::Platform;
use herald_provider::SendError;
use thiserror::Error;

/// Errors specific to the Slack sender.
///
/// These are internal errors that get converted into [`SendError`] at the
/// public API boundary.
#[derive(Debug, Error)]
pub enum SlackError {
    /// An HTTP-level transport error occurred.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The webhook answered with a non-success status.
    #[error("slack webhook returned status {0}")]
    Status(reqwest::StatusCode),

    /// The message could not be encoded.
    #[error("failed to serialize message: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<SlackError> for SendError {
    fn from(err: SlackError) -> Self {
        match err {
            SlackError::Http(e) => SendError::Connection(e.without_url().to_string()),
            SlackError::Status(status) => SendError::Delivery {
                platform: Platform::Slack,
                code: status.as_u16(),
                status: status.to_string(),
            },
            SlackError::Serialization(e) => SendError::Serialization(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_non_retryable_delivery() {
        let err: SendError = SlackError::Status(reqwest::StatusCode::NOT_FOUND).into();
        assert!(!err.is_retryable());
        assert_eq!(err.to_string(), "slack webhook returned status 404 Not Found");
    }
}
