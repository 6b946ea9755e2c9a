use herald_core::{Attachment, Block, WebhookMessage, join_lines, parse_field};
use serde::Serialize;

/// Request body for a Mattermost incoming webhook.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MattermostPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<MattermostAttachment>,
}

/// A Slack-compatible message attachment.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MattermostAttachment {
    /// Plain-text summary shown in notifications. Mattermost requires it.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub fallback: String,

    /// Hex color of the attachment's side bar.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub color: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<MattermostField>,
}

/// A title/value row rendered inside an attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MattermostField {
    pub title: String,
    pub value: String,
    /// Render side by side with neighbouring short fields.
    pub short: bool,
}

impl MattermostPayload {
    /// Project a canonical message into a Mattermost payload.
    pub fn from_message(message: &WebhookMessage) -> Self {
        Self {
            channel: message.channel().map(str::to_owned),
            username: None,
            icon_url: None,
            attachments: message
                .attachments
                .iter()
                .map(MattermostAttachment::from_attachment)
                .collect(),
        }
    }
}

impl MattermostAttachment {
    fn from_attachment(attachment: &Attachment) -> Self {
        let mut text_parts = Vec::new();
        let mut fields = Vec::new();

        for block in &attachment.blocks {
            match block {
                Block::Text(text) => text_parts.push(text.as_str()),
                Block::Fields(entries) => {
                    fields.extend(entries.iter().filter(|f| !f.is_empty()).map(|f| {
                        let (title, value) = parse_field(f);
                        MattermostField {
                            title,
                            value,
                            short: true,
                        }
                    }));
                }
                Block::Divider => {}
            }
        }

        let text = join_lines(text_parts);
        let fallback = if attachment.title.is_empty() {
            text.clone().unwrap_or_default()
        } else {
            attachment.title.clone()
        };

        Self {
            fallback,
            color: attachment.color.clone(),
            title: attachment.title.clone(),
            text,
            fields,
        }
    }
}
