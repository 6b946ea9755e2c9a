use std::borrow::Cow;

use herald_core::{Platform, WebhookMessage};
use herald_provider::{SendError, Sender, require_url};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, instrument};

use crate::config::DiscordConfig;
use crate::error::DiscordError;
use crate::types::DiscordWebhookRequest;

/// Discord sender that posts embeds via Discord webhooks.
///
/// Implements the [`Sender`] trait so the router can dispatch to it.
pub struct DiscordSender {
    config: DiscordConfig,
    client: Client,
}

impl DiscordSender {
    /// Create a new Discord sender with the given configuration.
    pub fn new(config: DiscordConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");
        Self { config, client }
    }

    /// Create a new Discord sender with a custom HTTP client.
    pub fn with_client(config: DiscordConfig, client: Client) -> Self {
        Self { config, client }
    }

    /// Build the effective webhook URL, appending `?wait=true` if configured.
    fn effective_url<'a>(&self, webhook_url: &'a str) -> Cow<'a, str> {
        if !self.config.wait {
            return Cow::Borrowed(webhook_url);
        }
        if webhook_url.contains('?') {
            Cow::Owned(format!("{webhook_url}&wait=true"))
        } else {
            Cow::Owned(format!("{webhook_url}?wait=true"))
        }
    }

    /// Build the webhook body for `message`, applying configured defaults.
    pub fn build_payload(&self, message: &WebhookMessage) -> DiscordWebhookRequest {
        DiscordWebhookRequest {
            username: self.config.default_username.clone(),
            avatar_url: self.config.default_avatar_url.clone(),
            ..DiscordWebhookRequest::from_message(message)
        }
    }
}

impl Sender for DiscordSender {
    fn platform(&self) -> Platform {
        Platform::Discord
    }

    #[instrument(
        skip(self, webhook_url, message),
        fields(platform = "discord", attachments = message.attachments.len())
    )]
    async fn send(&self, webhook_url: &str, message: &WebhookMessage) -> Result<(), SendError> {
        require_url(webhook_url)?;

        let body = serde_json::to_vec(&self.build_payload(message))
            .map_err(DiscordError::Serialization)?;
        let url = self.effective_url(webhook_url);

        debug!("posting message to Discord webhook");

        let response = herald_provider::inject_trace_context(
            self.client
                .post(url.as_ref())
                .header(CONTENT_TYPE, "application/json")
                .body(body),
        )
        .send()
        .await
        .map_err(DiscordError::Http)?;

        let status = response.status();
        drop(response);

        if !status.is_success() {
            return Err(DiscordError::Status(status).into());
        }

        debug!(%status, "Discord webhook accepted message");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use herald_core::{Attachment, Block, Platform, WebhookMessage};
    use herald_provider::testing::MockWebhookServer;
    use herald_provider::{SendError, Sender};

    use super::*;
    use crate::config::DiscordConfig;

    fn alert() -> WebhookMessage {
        WebhookMessage::new().with_attachment(
            Attachment::new("Alert")
                .with_color("#00FF00")
                .with_block(Block::text("host down"))
                .with_block(Block::fields(["*Host*\nweb-1"])),
        )
    }

    #[test]
    fn sender_platform() {
        let sender = DiscordSender::new(DiscordConfig::new());
        assert_eq!(sender.platform(), Platform::Discord);
    }

    #[tokio::test]
    async fn send_success_no_content_response() {
        let server = MockWebhookServer::start().await;
        let url = server.url("/api/webhooks/123/abc");
        let sender = DiscordSender::new(DiscordConfig::new().with_default_username("Herald"));

        let server_handle = tokio::spawn(server.respond_once(204, ""));

        sender.send(&url, &alert()).await.expect("send should succeed");
        let request = server_handle.await.unwrap();

        assert_eq!(request.path, "/api/webhooks/123/abc");
        assert_eq!(request.header("content-type"), Some("application/json"));
        let json = request.json();
        assert_eq!(json["username"], "Herald");
        assert_eq!(json["embeds"][0]["title"], "Alert");
        assert_eq!(json["embeds"][0]["color"], 65_280);
        assert_eq!(json["embeds"][0]["description"], "host down");
        assert_eq!(json["embeds"][0]["fields"][0]["name"], "Host");
        assert_eq!(json["embeds"][0]["fields"][0]["value"], "web-1");
    }

    #[tokio::test]
    async fn send_with_wait_appends_query() {
        let server = MockWebhookServer::start().await;
        let url = server.url("/api/webhooks/123/abc");
        let sender = DiscordSender::new(DiscordConfig::new().with_wait(true));

        let server_handle =
            tokio::spawn(server.respond_once(200, r#"{"id":"12345","channel_id":"67890"}"#));

        sender.send(&url, &alert()).await.expect("send should succeed");
        let request = server_handle.await.unwrap();
        assert_eq!(request.path, "/api/webhooks/123/abc?wait=true");
    }

    #[tokio::test]
    async fn rate_limited_is_delivery_error() {
        let server = MockWebhookServer::start().await;
        let url = server.url("/api/webhooks/123/abc");
        let sender = DiscordSender::new(DiscordConfig::new());

        let server_handle =
            tokio::spawn(server.respond_once(429, r#"{"message":"rate limited"}"#));

        let err = sender.send(&url, &alert()).await.unwrap_err();
        server_handle.await.unwrap();

        assert!(matches!(
            err,
            SendError::Delivery {
                platform: Platform::Discord,
                code: 429,
                ..
            }
        ));
        assert!(err.is_retryable());
    }

    #[test]
    fn effective_url_without_wait() {
        let sender = DiscordSender::new(DiscordConfig::new());
        assert_eq!(
            sender.effective_url("https://discord.com/api/webhooks/123/abc"),
            "https://discord.com/api/webhooks/123/abc"
        );
    }

    #[test]
    fn effective_url_with_wait() {
        let sender = DiscordSender::new(DiscordConfig::new().with_wait(true));
        assert_eq!(
            sender.effective_url("https://discord.com/api/webhooks/123/abc"),
            "https://discord.com/api/webhooks/123/abc?wait=true"
        );
        assert_eq!(
            sender.effective_url("https://discord.com/api/webhooks/123/abc?thread_id=9"),
            "https://discord.com/api/webhooks/123/abc?thread_id=9&wait=true"
        );
    }
}
