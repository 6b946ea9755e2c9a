use herald_core::{Platform, WebhookMessage};
use herald_provider::{SendError, Sender, require_url};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, instrument};

use crate::config::RocketChatConfig;
use crate::error::RocketChatError;
use crate::types::RocketChatPayload;

/// RocketChat sender that posts messages via integration webhooks.
pub struct RocketChatSender {
    config: RocketChatConfig,
    client: Client,
}

impl RocketChatSender {
    /// Create a new RocketChat sender with the given configuration.
    pub fn new(config: RocketChatConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");
        Self { config, client }
    }

    /// Create a new RocketChat sender with a custom HTTP client.
    pub fn with_client(config: RocketChatConfig, client: Client) -> Self {
        Self { config, client }
    }

    /// Build the webhook body for `message`, applying configured overrides.
    pub fn build_payload(&self, message: &WebhookMessage) -> RocketChatPayload {
        RocketChatPayload {
            alias: self.config.alias.clone(),
            avatar: self.config.avatar.clone(),
            ..RocketChatPayload::from_message(message)
        }
    }
}

impl Sender for RocketChatSender {
    fn platform(&self) -> Platform {
        Platform::RocketChat
    }

    #[instrument(
        skip(self, webhook_url, message),
        fields(platform = "rocketchat", attachments = message.attachments.len())
    )]
    async fn send(&self, webhook_url: &str, message: &WebhookMessage) -> Result<(), SendError> {
        require_url(webhook_url)?;

        let body = serde_json::to_vec(&self.build_payload(message))
            .map_err(RocketChatError::Serialization)?;

        debug!("posting message to RocketChat webhook");

        let response = herald_provider::inject_trace_context(
            self.client
                .post(webhook_url)
                .header(CONTENT_TYPE, "application/json")
                .body(body),
        )
        .send()
        .await
        .map_err(RocketChatError::Http)?;

        let status = response.status();
        drop(response);

        if !status.is_success() {
            return Err(RocketChatError::Status(status).into());
        }

        debug!(%status, "RocketChat webhook accepted message");

        Ok(())
    }
}
