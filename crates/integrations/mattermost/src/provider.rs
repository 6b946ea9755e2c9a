use herald_core::{Platform, WebhookMessage};
use herald_provider::{SendError, Sender, require_url};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, instrument};

use crate::config::MattermostConfig;
use crate::error::MattermostError;
use crate::types::MattermostPayload;

/// Mattermost sender that posts messages via incoming webhooks.
///
/// Implements the [`Sender`] trait so the router can dispatch to it.
pub struct MattermostSender {
    config: MattermostConfig,
    client: Client,
}

impl MattermostSender {
    /// Create a new Mattermost sender with the given configuration.
    pub fn new(config: MattermostConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");
        Self { config, client }
    }

    /// Create a new Mattermost sender with a custom HTTP client.
    pub fn with_client(config: MattermostConfig, client: Client) -> Self {
        Self { config, client }
    }

    /// Build the webhook body for `message`, applying configured overrides.
    pub fn build_payload(&self, message: &WebhookMessage) -> MattermostPayload {
        MattermostPayload {
            username: self.config.username.clone(),
            icon_url: self.config.icon_url.clone(),
            ..MattermostPayload::from_message(message)
        }
    }
}

impl Sender for MattermostSender {
    fn platform(&self) -> Platform {
        Platform::Mattermost
    }

    #[instrument(
        skip(self, webhook_url, message),
        fields(platform = "mattermost", attachments = message.attachments.len())
    )]
    async fn send(&self, webhook_url: &str, message: &WebhookMessage) -> Result<(), SendError> {
        require_url(webhook_url)?;

        let body = serde_json::to_vec(&self.build_payload(message))
            .map_err(MattermostError::Serialization)?;

        debug!("posting message to Mattermost webhook");

        let response = herald_provider::inject_trace_context(
            self.client
                .post(webhook_url)
                .header(CONTENT_TYPE, "application/json")
                .body(body),
        )
        .send()
        .await
        .map_err(MattermostError::Http)?;

        let status = response.status();
        drop(response);

        if !status.is_success() {
            return Err(MattermostError::Status(status).into());
        }

        debug!(%status, "Mattermost webhook accepted message");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use herald_core::{Attachment, Block, Platform, WebhookMessage};
    use herald_provider::testing::{MockWebhookServer, unreachable_url};
    use herald_provider::{SendError, Sender};

    use super::*;
    use crate::config::MattermostConfig;

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
        let sender = MattermostSender::new(MattermostConfig::new());
        assert_eq!(sender.platform(), Platform::Mattermost);
    }

    #[tokio::test]
    async fn send_posts_json_payload() {
        let server = MockWebhookServer::start().await;
        let url = server.url("/hooks/abc123");
        let sender = MattermostSender::new(MattermostConfig::new().with_username("Herald"));

        let server_handle = tokio::spawn(server.respond_once(200, "ok"));

        sender.send(&url, &alert()).await.expect("send should succeed");
        let request = server_handle.await.unwrap();

        assert_eq!(request.method, "POST");
        assert_eq!(request.path, "/hooks/abc123");
        assert_eq!(request.header("content-type"), Some("application/json"));

        let body = request.body_text();
        assert!(body.contains(r#""title":"Alert""#));
        assert!(body.contains(r##""color":"#00FF00""##));
        assert!(body.contains(r#""text":"host down""#));
        assert!(body.contains(r#""fallback":"Alert""#));
        assert!(body.contains(r#""value":"web-1""#));

        let json = request.json();
        assert_eq!(json["username"], "Herald");
        assert_eq!(json["attachments"][0]["fields"][0]["title"], "Host");
        assert_eq!(json["attachments"][0]["fields"][0]["short"], true);
    }

    #[tokio::test]
    async fn server_error_is_delivery_error() {
        let server = MockWebhookServer::start().await;
        let url = server.url("/hooks/abc123");
        let sender = MattermostSender::new(MattermostConfig::new());

        let server_handle = tokio::spawn(server.respond_once(500, "boom"));

        let err = sender.send(&url, &alert()).await.unwrap_err();
        server_handle.await.unwrap();

        assert!(matches!(
            err,
            SendError::Delivery {
                platform: Platform::Mattermost,
                code: 500,
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "mattermost webhook returned status 500 Internal Server Error"
        );
    }

    #[tokio::test]
    async fn connection_failure_is_connection_error() {
        let sender = MattermostSender::new(MattermostConfig::new());
        let err = sender
            .send(&unreachable_url().await, &alert())
            .await
            .unwrap_err();
        assert!(matches!(err, SendError::Connection(_)));
    }

    #[tokio::test]
    async fn empty_url_fails_without_request() {
        let sender = MattermostSender::new(MattermostConfig::new());
        let err = sender.send("", &alert()).await.unwrap_err();
        assert!(matches!(err, SendError::Configuration(_)));
    }
}
