use herald_core::Platform;
use herald_provider::SendError;
use thiserror::Error;

/// Errors specific to the RocketChat sender.
#[derive(Debug, Error)]
pub enum RocketChatError {
    /// An HTTP-level transport error occurred.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The webhook answered with a non-success status.
    #[error("rocketchat webhook returned status {0}")]
    Status(reqwest::StatusCode),

    /// The payload could not be encoded.
    #[error("failed to serialize payload: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<RocketChatError> for SendError {
    fn from(err: RocketChatError) -> Self {
        match err {
            RocketChatError::Http(e) => SendError::Connection(e.without_url().to_string()),
            RocketChatError::Status(status) => SendError::Delivery {
                platform: Platform::RocketChat,
                code: status.as_u16(),
                status: status.to_string(),
            },
            RocketChatError::Serialization(e) => SendError::Serialization(e.to_string()),
        }
    }
}
