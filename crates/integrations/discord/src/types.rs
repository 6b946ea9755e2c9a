use herald_core::{Attachment, Block, WebhookMessage, join_lines, parse_field, parse_hex_color};
use serde::Serialize;

/// Discord rejects embed fields with an empty name or value.
const BLANK_FIELD: &str = "\u{200b}";

/// Request body for a Discord webhook execution.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DiscordWebhookRequest {
    /// Override the webhook's default username.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Override the webhook's default avatar URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// Rich embed objects, one per attachment.
    pub embeds: Vec<DiscordEmbed>,
}

/// A Discord embed object for rich message formatting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiscordEmbed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Embed color as a decimal integer (e.g., `16711680` for red).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<DiscordEmbedField>,
}

/// A field within a Discord embed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscordEmbedField {
    pub name: String,
    pub value: String,
    /// Whether this field should be displayed inline.
    pub inline: bool,
}

impl DiscordWebhookRequest {
    /// Project a canonical message into a Discord webhook request.
    ///
    /// Discord webhooks are bound to one channel, so the message channel is
    /// not carried over.
    pub fn from_message(message: &WebhookMessage) -> Self {
        Self {
            username: None,
            avatar_url: None,
            embeds: message
                .attachments
                .iter()
                .map(DiscordEmbed::from_attachment)
                .collect(),
        }
    }
}

impl DiscordEmbed {
    fn from_attachment(attachment: &Attachment) -> Self {
        let mut description = Vec::new();
        let mut fields = Vec::new();

        for block in &attachment.blocks {
            match block {
                Block::Text(text) => description.push(text.as_str()),
                Block::Fields(entries) => {
                    fields.extend(entries.iter().filter(|f| !f.is_empty()).map(|f| {
                        let (name, value) = parse_field(f);
                        DiscordEmbedField {
                            name: or_blank(name),
                            value: or_blank(value),
                            inline: true,
                        }
                    }));
                }
                // No embed equivalent.
                Block::Divider => {}
            }
        }

        Self {
            title: Some(attachment.title.clone()).filter(|t| !t.is_empty()),
            description: join_lines(description),
            color: parse_hex_color(&attachment.color),
            fields,
        }
    }
}

fn or_blank(text: String) -> String {
    if text.is_empty() {
        BLANK_FIELD.to_owned()
    } else {
        text
    }
}
