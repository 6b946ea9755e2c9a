use herald_core::{Attachment, Block, WebhookMessage, join_lines};
use serde::Serialize;

/// Request body for a RocketChat integration webhook.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RocketChatPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<RocketChatAttachment>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RocketChatAttachment {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub color: String,
}

impl RocketChatPayload {
    /// Project a canonical message into a RocketChat payload.
    pub fn from_message(message: &WebhookMessage) -> Self {
        Self {
            channel: message.channel().map(str::to_owned),
            alias: None,
            avatar: None,
            attachments: message
                .attachments
                .iter()
                .map(RocketChatAttachment::from_attachment)
                .collect(),
        }
    }
}

impl RocketChatAttachment {
    fn from_attachment(attachment: &Attachment) -> Self {
        let parts = attachment.blocks.iter().flat_map(|block| match block {
            Block::Text(text) => std::slice::from_ref(text),
            Block::Fields(entries) => entries.as_slice(),
            Block::Divider => &[][..],
        });

        Self {
            title: attachment.title.clone(),
            text: join_lines(parts.map(String::as_str)),
            color: attachment.color.clone(),
        }
    }
}
