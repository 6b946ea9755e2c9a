use herald_core::{Block, WebhookMessage, parse_field};
use serde::Serialize;

/// Adaptive Card JSON schema URL.
pub const ADAPTIVE_CARD_SCHEMA: &str = "http://adaptivecards.io/schemas/adaptive-card.json";

/// Adaptive Card schema version emitted by Herald.
pub const ADAPTIVE_CARD_VERSION: &str = "1.3";

/// Attachment content type for Adaptive Cards.
pub const ADAPTIVE_CARD_CONTENT_TYPE: &str = "application/vnd.microsoft.card.adaptive";

/// Request body for a Teams webhook: a `message` carrying one card.
#[derive(Debug, Clone, Serialize)]
pub struct TeamsPayload {
    /// Always `"message"`.
    #[serde(rename = "type")]
    pub kind: String,

    pub attachments: Vec<TeamsAttachment>,
}

/// Envelope around the Adaptive Card.
#[derive(Debug, Clone, Serialize)]
pub struct TeamsAttachment {
    #[serde(rename = "contentType")]
    pub content_type: String,

    /// Always serialized, as `null` when absent.
    #[serde(rename = "contentUrl")]
    pub content_url: Option<String>,

    pub content: AdaptiveCard,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdaptiveCard {
    /// Always `"AdaptiveCard"`.
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(rename = "$schema")]
    pub schema: String,

    pub version: String,

    pub body: Vec<CardElement>,
}

/// A card body element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum CardElement {
    TextBlock(TextBlock),
    FactSet { facts: Vec<Fact> },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TextBlock {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub wrap: bool,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub separator: bool,
}

/// One label/value row of a `FactSet`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fact {
    pub title: String,
    pub value: String,
}

impl TextBlock {
    /// A bold, medium-sized heading in the given Teams color.
    pub fn heading(text: impl Into<String>, color: &str) -> Self {
        Self {
            text: text.into(),
            weight: Some("Bolder".to_owned()),
            size: Some("Medium".to_owned()),
            color: Some(color.to_owned()),
            ..Self::default()
        }
    }

    /// A wrapping body paragraph.
    pub fn wrapped(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            wrap: true,
            ..Self::default()
        }
    }

    /// An empty block drawn with a separator line above it.
    pub fn separator() -> Self {
        Self {
            separator: true,
            ..Self::default()
        }
    }
}

/// Map a hex color to the closest Adaptive Card color token.
///
/// Matching ignores ASCII case. Unknown colors map to `"Default"`.
pub fn teams_color(hex: &str) -> &'static str {
    match hex.to_ascii_lowercase().as_str() {
        "#ff0000" | "#ee0000" => "Attention",
        "#00ff00" | "#00ee00" | "#85b089" => "Good",
        "#ffff00" | "#ffa500" => "Warning",
        "#b366ff" | "#84b4dc" => "Accent",
        _ => "Default",
    }
}

impl TeamsPayload {
    /// Render a canonical message as a single Adaptive Card.
    pub fn from_message(message: &WebhookMessage) -> Self {
        let mut body = Vec::new();

        for attachment in &message.attachments {
            if !attachment.title.is_empty() {
                body.push(CardElement::TextBlock(TextBlock::heading(
                    &attachment.title,
                    teams_color(&attachment.color),
                )));
            }

            let mut facts = Vec::new();
            for block in &attachment.blocks {
                match block {
                    Block::Text(text) if !text.is_empty() => {
                        body.push(CardElement::TextBlock(TextBlock::wrapped(text)));
                    }
                    Block::Text(_) => {}
                    Block::Fields(entries) => {
                        facts.extend(entries.iter().filter(|f| !f.is_empty()).map(|f| {
                            let (title, value) = parse_field(f);
                            Fact { title, value }
                        }));
                    }
                    Block::Divider => body.push(CardElement::TextBlock(TextBlock::separator())),
                }
            }

            if !facts.is_empty() {
                body.push(CardElement::FactSet { facts });
            }
        }

        Self {
            kind: "message".to_owned(),
            attachments: vec![TeamsAttachment {
                content_type: ADAPTIVE_CARD_CONTENT_TYPE.to_owned(),
                content_url: None,
                content: AdaptiveCard {
                    kind: "AdaptiveCard".to_owned(),
                    schema: ADAPTIVE_CARD_SCHEMA.to_owned(),
                    version: ADAPTIVE_CARD_VERSION.to_owned(),
                    body,
                },
            }],
        }
    }

    /// The card's body elements.
    pub fn body(&self) -> &[CardElement] {
        self.attachments
            .first()
            .map_or(&[][..], |attachment| attachment.content.body.as_slice())
    }
}
