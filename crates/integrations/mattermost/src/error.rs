use herald_core::Platform;
use herald_provider::SendError;
use thiserror::Error;

/// Errors specific to the Mattermost sender.
///
/// These are internal errors that get converted into [`SendError`] at the
/// public API boundary.
#[derive(Debug, Error)]
pub enum MattermostError {
    /// An HTTP-level transport error occurred.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The webhook answered with a non-success status.
    #[error("mattermost webhook returned status {0}")]
    Status(reqwest::StatusCode),

    /// The payload could not be encoded.
    #[error("failed to serialize payload: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<MattermostError> for SendError {
    fn from(err: MattermostError) -> Self {
        match err {
            MattermostError::Http(e) => SendError::Connection(e.without_url().to_string()),
            MattermostError::Status(status) => SendError::Delivery {
                platform: Platform::Mattermost,
                code: status.as_u16(),
                status: status.to_string(),
            },
            MattermostError::Serialization(e) => SendError::Serialization(e.to_string()),
        }
    }
}
