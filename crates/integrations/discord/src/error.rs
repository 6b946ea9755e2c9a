use herald_core::Platform;
use herald_provider::SendError;
use thiserror::Error;

/// Errors specific to the Discord sender.
///
/// These are internal errors that get converted into [`SendError`] at the
/// public API boundary.
#[derive(Debug, Error)]
pub enum DiscordError {
    /// An HTTP-level transport error occurred.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The webhook answered with a non-success status.
    #[error("discord webhook returned status {0}")]
    Status(reqwest::StatusCode),

    /// The request could not be encoded.
    #[error("failed to serialize request: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<DiscordError> for SendError {
    fn from(err: DiscordError) -> Self {
        match err {
            DiscordError::Http(e) => SendError::Connection(e.without_url().to_string()),
            DiscordError::Status(status) => SendError::Delivery {
                platform: Platform::Discord,
                code: status.as_u16(),
                status: status.to_string(),
            },
            DiscordError::Serialization(e) => SendError::Serialization(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limited_maps_to_retryable_delivery() {
        let err: SendError = DiscordError::Status(reqwest::StatusCode::TOO_MANY_REQUESTS).into();
        assert!(err.is_retryable());
        assert!(matches!(
            err,
            SendError::Delivery {
                platform: Platform::Discord,
                code: 429,
                ..
            }
        ));
    }

    #[test]
    fn error_display() {
        let err = DiscordError::Status(reqwest::StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "discord webhook returned status 400 Bad Request");
    }
}
