use herald_core::{Platform, WebhookMessage};
use herald_provider::{SendError, Sender, require_url};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, instrument};

use crate::error::SlackError;

/// Slack sender that forwards messages to incoming webhooks as-is.
pub struct SlackSender {
    client: Client,
}

impl Default for SlackSender {
    fn default() -> Self {
        Self::new()
    }
}

impl SlackSender {
    /// Create a new Slack sender.
    ///
    /// Uses a default `reqwest::Client` with reasonable timeouts.
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");
        Self { client }
    }

    /// Create a new Slack sender with a custom HTTP client.
    ///
    /// Useful for testing or for sharing a connection pool across senders.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Sender for SlackSender {
    fn platform(&self) -> Platform {
        Platform::Slack
    }

    #[instrument(
        skip(self, webhook_url, message),
        fields(platform = "slack", attachments = message.attachments.len())
    )]
    async fn send(&self, webhook_url: &str, message: &WebhookMessage) -> Result<(), SendError> {
        require_url(webhook_url)?;

        let body = serde_json::to_vec(message).map_err(SlackError::Serialization)?;

        debug!("posting message to Slack webhook");

        let response = herald_provider::inject_trace_context(
            self.client
                .post(webhook_url)
                .header(CONTENT_TYPE, "application/json")
                .body(body),
        )
        .send()
        .await
        .map_err(SlackError::Http)?;

        let status = response.status();
        drop(response);

        if !status.is_success() {
            return Err(SlackError::Status(status).into());
        }

        debug!(%status, "Slack webhook accepted message");

        Ok(())
    }
}
