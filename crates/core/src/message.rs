//! The canonical message every translator consumes.
//!
//! The serde representation is Slack's own attachment/block shape, so a
//! message read from JSON can be forwarded to Slack untouched while the
//! other translators work from the typed [`Block`] variants.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A notification to deliver: an optional channel plus ordered attachments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookMessage {
    /// Destination channel override, where the platform supports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,

    /// Attachments in display order.
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

impl WebhookMessage {
    /// Create an empty message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the destination channel.
    #[must_use]
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    /// Append an attachment.
    #[must_use]
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// The channel, treating an empty string the same as no channel.
    pub fn channel(&self) -> Option<&str> {
        self.channel.as_deref().filter(|c| !c.is_empty())
    }
}

/// One titled, colored group of blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,

    /// Hex color such as `#00FF00`, or empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub color: String,

    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "deserialize_blocks"
    )]
    pub blocks: Vec<Block>,
}

impl Attachment {
    /// Create an attachment with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Append a block.
    #[must_use]
    pub fn with_block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }
}

/// A unit of attachment content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A single markdown text.
    Text(String),
    /// Field texts, each conventionally `*Label*\nValue`.
    Fields(Vec<String>),
    /// A visual separator.
    Divider,
}

impl Block {
    /// Create a text block.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Create a field block.
    pub fn fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Fields(fields.into_iter().map(Into::into).collect())
    }
}

/// Slack's wire shape for a block.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SlackBlock {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<SlackText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fields: Option<Vec<SlackText>>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SlackText {
    #[serde(rename = "type", default = "mrkdwn")]
    kind: String,
    #[serde(default)]
    text: String,
}

fn mrkdwn() -> String {
    "mrkdwn".to_owned()
}

impl SlackText {
    fn markdown(text: &str) -> Self {
        Self {
            kind: mrkdwn(),
            text: text.to_owned(),
        }
    }
}

impl SlackBlock {
    /// Split into typed blocks. A section carrying both text and fields
    /// yields the text block first.
    fn into_blocks(self) -> impl Iterator<Item = Block> {
        let divider = (self.kind == "divider").then_some(Block::Divider);
        let text = self.text.map(|t| Block::Text(t.text));
        let fields = self
            .fields
            .map(|fields| Block::Fields(fields.into_iter().map(|f| f.text).collect()));
        text.into_iter().chain(fields).chain(divider)
    }
}

impl From<&Block> for SlackBlock {
    fn from(block: &Block) -> Self {
        match block {
            Block::Text(text) => Self {
                kind: "section".to_owned(),
                text: Some(SlackText::markdown(text)),
                fields: None,
            },
            Block::Fields(fields) => Self {
                kind: "section".to_owned(),
                text: None,
                fields: Some(fields.iter().map(|f| SlackText::markdown(f)).collect()),
            },
            Block::Divider => Self {
                kind: "divider".to_owned(),
                ..Self::default()
            },
        }
    }
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SlackBlock::from(self).serialize(serializer)
    }
}

fn deserialize_blocks<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Block>, D::Error> {
    let raw = Option::<Vec<SlackBlock>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw.into_iter().flat_map(SlackBlock::into_blocks).collect())
}
